//! Demo - The scripted "live recognition" demo
//!
//! The demo never listens to anything. A run picks an accent, waits a
//! plausible processing delay, and shows fabricated confidence and latency
//! figures plus a canned conversation. The only real state is whether a run
//! is in progress.

use std::time::Duration;

use super::accent::{Accent, ConversationExample};

/// Random draws for one run, each in `[0, 1)`
///
/// The domain never touches an RNG; adapters supply these.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DemoSample {
    pub delay: f64,
    pub confidence: f64,
    pub latency: f64,
}

impl DemoSample {
    pub fn new(delay: f64, confidence: f64, latency: f64) -> Self {
        Self {
            delay: unit(delay),
            confidence: unit(confidence),
            latency: unit(latency),
        }
    }
}

fn unit(x: f64) -> f64 {
    if x.is_finite() {
        x.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// What a run "detected"
#[derive(Debug, Clone, PartialEq)]
pub struct DemoOutcome {
    pub accent: Accent,
    /// Percentage with one decimal, between 95 and 99
    pub confidence: f64,
    /// Milliseconds, between 80 and 120
    pub processing_time_ms: u32,
    pub conversation: ConversationExample,
}

impl DemoOutcome {
    /// Fabricate results for an accent from a sample
    pub fn fabricate(accent: Accent, sample: &DemoSample) -> Self {
        let confidence = ((95.0 + sample.confidence * 4.0) * 10.0).round() / 10.0;
        let processing_time_ms = (80.0 + sample.latency * 40.0).round() as u32;

        Self {
            accent,
            confidence,
            processing_time_ms,
            conversation: accent.conversation(),
        }
    }
}

/// How long the fake recognition "takes": 2 to 3 seconds
pub fn processing_delay(sample: &DemoSample) -> Duration {
    Duration::from_millis(2000 + (sample.delay * 1000.0).round() as u64)
}

/// Whether a run is happening
#[derive(Debug, Clone, PartialEq, Eq)]
enum DemoStatus {
    Idle,
    Processing { accent: Accent },
}

/// Demo state for one visitor
#[derive(Debug, Clone, PartialEq)]
pub struct DemoSession {
    status: DemoStatus,
    last_outcome: Option<DemoOutcome>,
    runs_completed: u32,
}

impl DemoSession {
    pub fn new() -> Self {
        Self {
            status: DemoStatus::Idle,
            last_outcome: None,
            runs_completed: 0,
        }
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.status, DemoStatus::Processing { .. })
    }

    pub fn last_outcome(&self) -> Option<&DemoOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn runs_completed(&self) -> u32 {
        self.runs_completed
    }

    // ========== State Transitions ==========

    /// Start a run for the selected accent slug
    pub fn begin(&mut self, selection: Option<&str>) -> Result<Accent, DemoError> {
        if self.is_processing() {
            return Err(DemoError::AlreadyProcessing);
        }

        let slug = selection
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(DemoError::NoAccentSelected)?;

        let accent = Accent::from_slug(slug).ok_or_else(|| DemoError::UnknownAccent {
            slug: slug.to_string(),
        })?;

        self.status = DemoStatus::Processing { accent };
        Ok(accent)
    }

    /// Record the outcome of the running demo
    pub fn finish(&mut self, outcome: DemoOutcome) -> Result<(), DemoError> {
        match &self.status {
            DemoStatus::Processing { accent } if *accent == outcome.accent => {
                self.status = DemoStatus::Idle;
                self.last_outcome = Some(outcome);
                self.runs_completed += 1;
                Ok(())
            }
            DemoStatus::Processing { .. } => Err(DemoError::AccentMismatch),
            DemoStatus::Idle => Err(DemoError::NotProcessing),
        }
    }

    /// Drop the running demo without recording anything
    pub fn abort(&mut self) {
        self.status = DemoStatus::Idle;
    }
}

impl Default for DemoSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur during demo operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoError {
    NoAccentSelected,
    UnknownAccent { slug: String },
    AlreadyProcessing,
    NotProcessing,
    AccentMismatch,
}

impl core::fmt::Display for DemoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DemoError::NoAccentSelected => write!(f, "Please select an accent first"),
            DemoError::UnknownAccent { slug } => write!(f, "Unknown accent: {}", slug),
            DemoError::AlreadyProcessing => write!(f, "A demo is already running"),
            DemoError::NotProcessing => write!(f, "No demo is running"),
            DemoError::AccentMismatch => {
                write!(f, "Outcome does not match the running demo's accent")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fabricate_bounds() {
        let low = DemoOutcome::fabricate(Accent::Devon, &DemoSample::new(0.0, 0.0, 0.0));
        assert_eq!(low.confidence, 95.0);
        assert_eq!(low.processing_time_ms, 80);

        let high = DemoOutcome::fabricate(Accent::Devon, &DemoSample::new(0.0, 0.999, 0.999));
        assert_eq!(high.confidence, 99.0);
        assert_eq!(high.processing_time_ms, 120);
    }

    #[test]
    fn test_confidence_has_one_decimal() {
        let outcome = DemoOutcome::fabricate(Accent::Scouse, &DemoSample::new(0.0, 0.3333, 0.5));
        assert_eq!(outcome.confidence, 96.3);
        assert_eq!(outcome.processing_time_ms, 100);
    }

    #[test]
    fn test_sample_is_clamped() {
        let sample = DemoSample::new(-1.0, 7.0, f64::NAN);
        assert_eq!(sample, DemoSample::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_processing_delay_range() {
        assert_eq!(processing_delay(&DemoSample::default()), Duration::from_millis(2000));
        assert_eq!(
            processing_delay(&DemoSample::new(0.5, 0.0, 0.0)),
            Duration::from_millis(2500)
        );
    }

    #[test]
    fn test_session_lifecycle() {
        let mut session = DemoSession::new();
        let accent = session.begin(Some("welsh")).unwrap();
        assert!(session.is_processing());

        let outcome = DemoOutcome::fabricate(accent, &DemoSample::default());
        session.finish(outcome).unwrap();

        assert!(!session.is_processing());
        assert_eq!(session.runs_completed(), 1);
        assert_eq!(session.last_outcome().map(|o| o.accent), Some(Accent::Welsh));
    }

    #[test]
    fn test_no_selection() {
        let mut session = DemoSession::new();
        assert_eq!(session.begin(None), Err(DemoError::NoAccentSelected));
        assert_eq!(session.begin(Some("  ")), Err(DemoError::NoAccentSelected));
        assert_eq!(
            DemoError::NoAccentSelected.to_string(),
            "Please select an accent first"
        );
    }

    #[test]
    fn test_unknown_accent() {
        let mut session = DemoSession::new();
        assert!(matches!(
            session.begin(Some("martian")),
            Err(DemoError::UnknownAccent { .. })
        ));
        assert!(!session.is_processing());
    }

    #[test]
    fn test_second_run_rejected_while_processing() {
        let mut session = DemoSession::new();
        session.begin(Some("cockney")).unwrap();
        assert_eq!(session.begin(Some("rp")), Err(DemoError::AlreadyProcessing));
    }

    #[test]
    fn test_finish_requires_running_demo() {
        let mut session = DemoSession::new();
        let outcome = DemoOutcome::fabricate(Accent::Norfolk, &DemoSample::default());
        assert_eq!(session.finish(outcome), Err(DemoError::NotProcessing));
    }

    #[test]
    fn test_abort_allows_new_run() {
        let mut session = DemoSession::new();
        session.begin(Some("cornish")).unwrap();
        session.abort();
        assert!(session.begin(Some("cornish")).is_ok());
        assert_eq!(session.runs_completed(), 0);
    }
}
