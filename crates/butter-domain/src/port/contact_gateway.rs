//! Contact Gateway - Where contact form submissions go
//!
//! This trait defines what the domain needs from a form backend.
//! The landing page has no backend, so the only adapter logs and returns a
//! receipt, but callers should not depend on that.

use crate::model::contact::ContactSubmission;

/// Acknowledgement for an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactReceipt {
    /// Reference the visitor can quote
    pub reference: String,
    /// RFC 3339 timestamp
    pub received_at: String,
}

/// Errors that can occur while submitting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Backend refused or could not be reached
    Unavailable { message: String },
}

impl core::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GatewayError::Unavailable { message } => {
                write!(f, "Contact backend unavailable: {}", message)
            }
        }
    }
}

/// Contact Gateway Trait
///
/// This is a PORT in hexagonal architecture. Submissions reaching it have
/// already passed `ContactSubmission::validate`.
pub trait ContactGateway {
    fn submit(&mut self, submission: &ContactSubmission) -> Result<ContactReceipt, GatewayError>;
}
