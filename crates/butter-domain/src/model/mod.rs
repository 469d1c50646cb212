//! Domain Models - The vocabulary of the site
//!
//! Estimator inputs and results, the demo catalogue, and the per-visitor
//! page state.

pub mod accent;
pub mod contact;
pub mod cost_model;
pub mod demo;
pub mod inputs;
pub mod navigation;
pub mod result;
pub mod session;
