//! # Butter Labs Adapter Layer
//!
//! Everything the domain leaves out on purpose (Hexagonal Architecture
//! adapters).
//!
//! ## Structure
//!
//! - `gateway/` - Outbound adapters (contact form backend)
//! - `runtime/` - Tokio-driven timelines, debouncing and animation loops
//! - `sampling` - Random draws the domain takes as arguments

pub mod gateway;
pub mod runtime;
pub mod sampling;
