//! CLI Commands

pub mod accents;
pub mod contact;
pub mod demo;
pub mod estimate;
pub mod waveform;

pub use accents::AccentsCommand;
pub use contact::ContactCommand;
pub use demo::DemoCommand;
pub use estimate::EstimateCommand;
pub use waveform::WaveformCommand;
