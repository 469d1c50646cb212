//! # Butter Labs Domain Layer
//!
//! Pure logic behind the Butter Labs landing page: the ROI estimator, the
//! scripted accent demo, animation math and page navigation.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/   - Value objects & session state                   ││
//! │  │  port/    - Trait definitions (not implementations)         ││
//! │  │  service/ - Estimator, demo script, animations, timelines   ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No clocks, no RNG, no I/O. Timelines describe *when* things happen;
//! the adapter layer decides how to wait.

pub mod model;
pub mod port;
pub mod service;

// Re-export commonly used types
pub use model::{
    accent::{Accent, ConversationExample},
    contact::{ContactError, ContactField, ContactSubmission},
    cost_model::CostModel,
    demo::{DemoError, DemoOutcome, DemoSample, DemoSession},
    inputs::{EstimateInputs, InputAdjustment, InputField, Sanitized, SanitizedInputs},
    navigation::{
        HeroButton, Navigation, NavigationError, NavigationState, Section, SectionAnimation,
    },
    result::{EstimateResult, Horizon},
    session::SiteSession,
};

pub use port::contact_gateway::{ContactGateway, ContactReceipt, GatewayError};

pub use service::{
    animation::{AccuracyBar, BarFill, Waveform},
    demo_script::{demo_timeline, DemoFrame, Speaker},
    estimator::{estimate, Estimator},
    playback::{CancelToken, PlaybackOutcome, TimedStep, Timeline},
};
