//! Terminal renderers for the animated parts of the page

use std::io;
use std::time::Duration;

use butter_domain::{AccuracyBar, BarFill, DemoFrame, Speaker};
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};

const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// One waveform frame as a row of block characters
pub fn waveform_row(heights: &[f64]) -> String {
    heights
        .iter()
        .map(|h| {
            let idx = ((h.clamp(0.0, 100.0) / 100.0) * (BLOCKS.len() - 1) as f64).round() as usize;
            BLOCKS[idx.min(BLOCKS.len() - 1)]
        })
        .collect()
}

/// A horizontal accuracy bar, `width` percent of `cells`
pub fn accuracy_row(bar: AccuracyBar, width: u8, cells: usize) -> String {
    let filled = (usize::from(width.min(100)) * cells + 50) / 100;
    format!(
        "{:<18}{}{} {:>3}%",
        bar.label(),
        "█".repeat(filled),
        "░".repeat(cells - filled),
        width
    )
}

/// Prints accuracy bar fills as they arrive
#[derive(Debug)]
pub struct AccuracyRenderer<'a> {
    term: Term,
    bars: &'a [AccuracyBar],
    widths: Vec<u8>,
    error: Option<io::Error>,
}

impl<'a> AccuracyRenderer<'a> {
    pub fn new(bars: &'a [AccuracyBar]) -> Self {
        Self {
            term: Term::stdout(),
            bars,
            widths: vec![0; bars.len()],
            error: None,
        }
    }

    pub fn render(&mut self, fill: BarFill) {
        if let Some(w) = self.widths.get_mut(fill.index) {
            *w = fill.width;
        }
        // Only print once a bar actually fills
        if fill.width == 0 {
            return;
        }
        if let Some(bar) = self.bars.get(fill.index) {
            let line = accuracy_row(*bar, fill.width, 30);
            if let Err(e) = self.term.write_line(&line) {
                self.error.get_or_insert(e);
            }
        }
    }

    pub fn widths(&self) -> &[u8] {
        &self.widths
    }

    pub fn finish(self) -> io::Result<()> {
        self.error.map_or(Ok(()), Err)
    }
}

/// Prints demo frames: spinner while "processing", typed conversation after
#[derive(Debug)]
pub struct DemoRenderer {
    term: Term,
    spinner: Option<ProgressBar>,
    error: Option<io::Error>,
}

impl DemoRenderer {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            spinner: None,
            error: None,
        }
    }

    pub fn render(&mut self, frame: DemoFrame) {
        if let Err(e) = self.draw(frame) {
            self.error.get_or_insert(e);
        }
    }

    fn draw(&mut self, frame: DemoFrame) -> io::Result<()> {
        match frame {
            DemoFrame::Button { label, disabled } => {
                let label = if disabled {
                    style(format!("[ {} ]", label)).dim()
                } else {
                    style(format!("[ {} ]", label)).cyan()
                };
                self.term.write_line(&label.to_string())?;
            }
            DemoFrame::Indicator { active: true } => {
                let spinner = ProgressBar::new_spinner();
                if let Ok(s) = ProgressStyle::with_template("{spinner:.yellow} {msg}") {
                    spinner.set_style(s);
                }
                spinner.set_message("Analysing accent...");
                spinner.enable_steady_tick(Duration::from_millis(100));
                self.spinner = Some(spinner);
            }
            DemoFrame::Indicator { active: false } => self.stop_spinner(),
            DemoFrame::Results {
                accent,
                confidence,
                processing_time_ms,
            } => {
                self.stop_spinner();
                self.term.write_line(&format!(
                    "{} {}   {} {:.1}%   {} {}ms",
                    style("Detected:").bold(),
                    style(accent).green(),
                    style("Confidence:").bold(),
                    confidence,
                    style("Processing:").bold(),
                    processing_time_ms
                ))?;
                self.term.write_line("")?;
            }
            DemoFrame::Typing { speaker, text } => {
                self.term.clear_line()?;
                self.term
                    .write_str(&format!("{} {}", speaker_label(speaker), text))?;
            }
            DemoFrame::Note { text, .. } => {
                self.term.write_line("")?;
                self.term.write_line(&format!("    {}", style(text).dim().italic()))?;
            }
        }
        Ok(())
    }

    fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Tear down the spinner and report the first write error, if any
    pub fn finish(mut self) -> io::Result<()> {
        self.stop_spinner();
        self.error.take().map_or(Ok(()), Err)
    }
}

impl Default for DemoRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn speaker_label(speaker: Speaker) -> console::StyledObject<&'static str> {
    match speaker {
        Speaker::User => style("Caller:").magenta().bold(),
        Speaker::Ai => style("Butter:").cyan().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waveform_row_extremes() {
        assert_eq!(waveform_row(&[0.0, 100.0]), "▁█");
        assert_eq!(waveform_row(&[150.0, -3.0]), "█▁");
    }

    #[test]
    fn test_waveform_row_length() {
        assert_eq!(waveform_row(&[30.0; 12]).chars().count(), 12);
    }

    #[test]
    fn test_accuracy_row() {
        let row = accuracy_row(AccuracyBar::ButterLabs, 98, 10);
        assert!(row.starts_with("Butter Labs"));
        assert!(row.ends_with(" 98%"));
        assert_eq!(row.matches('█').count(), 10);

        let row = accuracy_row(AccuracyBar::Competitor, 76, 10);
        assert_eq!(row.matches('█').count(), 8);
        assert_eq!(row.matches('░').count(), 2);
    }

    #[test]
    fn test_accuracy_renderer_tracks_widths() {
        let bars = [AccuracyBar::ButterLabs, AccuracyBar::Competitor];
        let mut renderer = AccuracyRenderer::new(&bars);
        renderer.render(BarFill { index: 0, width: 0 });
        renderer.render(BarFill { index: 1, width: 0 });
        assert_eq!(renderer.widths(), &[0, 0]);

        renderer.render(BarFill { index: 9, width: 50 });
        assert_eq!(renderer.widths(), &[0, 0]);
    }
}
