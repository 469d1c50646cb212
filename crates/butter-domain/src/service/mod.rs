//! Domain Services - Calculations and scripts that don't belong to one model
//!
//! Services are stateless. Anything that varies per call is an argument.

pub mod animation;
pub mod demo_script;
pub mod estimator;
pub mod playback;
