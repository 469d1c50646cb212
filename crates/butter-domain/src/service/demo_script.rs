//! Demo Script - Turns a demo outcome into a playback timeline
//!
//! The order mirrors what a visitor sees:
//! 1. Button switches to "Processing..." and the indicator lights up
//! 2. The fake recognition delay elapses
//! 3. Detected accent, confidence and latency appear
//! 4. The user line types out, then its note
//! 5. The AI reply types out, then its note
//! 6. Indicator off, button back to "Start Recognition"

use std::time::Duration;

use crate::model::demo::{processing_delay, DemoOutcome, DemoSample};
use crate::service::playback::Timeline;

pub const START_LABEL: &str = "Start Recognition";
pub const PROCESSING_LABEL: &str = "Processing...";

/// Who is speaking in the conversation panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Ai,
}

/// A single visible change in the demo panel
#[derive(Debug, Clone, PartialEq)]
pub enum DemoFrame {
    Button {
        label: &'static str,
        disabled: bool,
    },
    Indicator { active: bool },
    Results {
        accent: &'static str,
        confidence: f64,
        processing_time_ms: u32,
    },
    /// Text typed so far for a message
    Typing { speaker: Speaker, text: String },
    Note { speaker: Speaker, text: String },
}

/// Build the timeline for one run
///
/// `typing_interval` is the pause before each character appears.
pub fn demo_timeline(
    outcome: &DemoOutcome,
    sample: &DemoSample,
    typing_interval: Duration,
) -> Timeline<DemoFrame> {
    let mut timeline = Timeline::new()
        .then(
            Duration::ZERO,
            DemoFrame::Button {
                label: PROCESSING_LABEL,
                disabled: true,
            },
        )
        .then(Duration::ZERO, DemoFrame::Indicator { active: true })
        .then(
            processing_delay(sample),
            DemoFrame::Results {
                accent: outcome.accent.display_name(),
                confidence: outcome.confidence,
                processing_time_ms: outcome.processing_time_ms,
            },
        );

    let conversation = &outcome.conversation;
    timeline.extend(typed(Speaker::User, &conversation.user, typing_interval));
    timeline.push(
        Duration::ZERO,
        DemoFrame::Note {
            speaker: Speaker::User,
            text: conversation.user_note.clone(),
        },
    );
    timeline.extend(typed(Speaker::Ai, &conversation.ai, typing_interval));
    timeline.push(
        Duration::ZERO,
        DemoFrame::Note {
            speaker: Speaker::Ai,
            text: conversation.ai_note.clone(),
        },
    );

    timeline
        .then(Duration::ZERO, DemoFrame::Indicator { active: false })
        .then(
            Duration::ZERO,
            DemoFrame::Button {
                label: START_LABEL,
                disabled: false,
            },
        )
}

/// One frame per character, each carrying the text so far
fn typed(speaker: Speaker, text: &str, interval: Duration) -> Timeline<DemoFrame> {
    let mut timeline = Timeline::new();
    for (idx, ch) in text.char_indices() {
        let end = idx + ch.len_utf8();
        timeline.push(
            interval,
            DemoFrame::Typing {
                speaker,
                text: text[..end].to_string(),
            },
        );
    }
    timeline
}
