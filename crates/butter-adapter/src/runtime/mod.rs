//! Runtime adapters built on tokio

pub mod debounce;
pub mod scheduler;
pub mod ticker;

pub use debounce::debounce;
pub use scheduler::Scheduler;
pub use ticker::{LoopSlot, WaveformTicker};
