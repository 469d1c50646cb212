//! Animation - The cosmetic moving parts of the page
//!
//! Waveform bars wobble on a sine wave plus noise. Accuracy bars fill from
//! zero with a stagger. Both are pure functions of time and noise samples.

use std::time::Duration;

use crate::service::playback::Timeline;

/// Waveform redraw period
pub const WAVEFORM_TICK: Duration = Duration::from_millis(200);

/// Bars never drop below this height (percent)
pub const MIN_BAR_HEIGHT: f64 = 8.0;

/// Height of waveform bar `index` at `time_secs`, in percent
///
/// `noise` is a sample in `[0, 1)` and adds up to 15 points.
pub fn bar_height(index: usize, time_secs: f64, noise: f64) -> f64 {
    let frequency = 0.5 + (index % 3) as f64 * 0.3;
    let amplitude = 30.0 + (time_secs * frequency + index as f64 * 0.5).sin() * 25.0;
    (amplitude + noise * 15.0).max(MIN_BAR_HEIGHT)
}

/// A row of waveform bars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Waveform {
    bars: usize,
}

impl Waveform {
    pub fn new(bars: usize) -> Self {
        Self { bars }
    }

    pub fn bars(&self) -> usize {
        self.bars
    }

    /// Heights for every bar; missing noise samples count as zero
    pub fn frame(&self, time_secs: f64, noise: &[f64]) -> Vec<f64> {
        (0..self.bars)
            .map(|i| bar_height(i, time_secs, noise.get(i).copied().unwrap_or(0.0)))
            .collect()
    }
}

/// Bars in the accuracy comparison chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccuracyBar {
    ButterLabs,
    Competitor,
}

impl AccuracyBar {
    pub fn label(&self) -> &'static str {
        match self {
            AccuracyBar::ButterLabs => "Butter Labs",
            AccuracyBar::Competitor => "Industry average",
        }
    }

    /// Final fill width in percent
    pub fn target_width(&self) -> u8 {
        match self {
            AccuracyBar::ButterLabs => 98,
            AccuracyBar::Competitor => 76,
        }
    }
}

/// Bars shown on the home section
pub const HOME_ACCURACY_BARS: [AccuracyBar; 2] = [AccuracyBar::ButterLabs, AccuracyBar::Competitor];

/// Set bar `index` to `width` percent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarFill {
    pub index: usize,
    pub width: u8,
}

/// Reset every bar, pause 200 ms, then fill them 500 ms apart
pub fn accuracy_timeline(bars: &[AccuracyBar]) -> Timeline<BarFill> {
    let mut timeline = Timeline::new();

    for index in 0..bars.len() {
        timeline.push(Duration::ZERO, BarFill { index, width: 0 });
    }

    for (index, bar) in bars.iter().enumerate() {
        let delay = if index == 0 {
            Duration::from_millis(200)
        } else {
            Duration::from_millis(500)
        };
        timeline.push(
            delay,
            BarFill {
                index,
                width: bar.target_width(),
            },
        );
    }

    timeline
}
