//! # Butter Labs CLI
//!
//! Terminal presentation layer: reads inputs, calls into the domain, formats
//! what comes back.

pub mod commands;
pub mod context;
pub mod format;
pub mod interactive;
pub mod render;
pub mod report;
