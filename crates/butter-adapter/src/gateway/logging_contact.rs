//! Logging Contact Gateway
//!
//! The landing page has no form backend. This adapter accepts every
//! submission, logs it, and hands back a receipt. Nothing is stored.

use butter_domain::{ContactGateway, ContactReceipt, ContactSubmission, GatewayError};
use tracing::info;

/// Contact gateway that only logs
#[derive(Debug, Clone, Default)]
pub struct LoggingContactGateway {
    accepted: u64,
}

impl LoggingContactGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submissions accepted so far
    pub fn accepted(&self) -> u64 {
        self.accepted
    }
}

impl ContactGateway for LoggingContactGateway {
    fn submit(&mut self, submission: &ContactSubmission) -> Result<ContactReceipt, GatewayError> {
        let reference = uuid::Uuid::new_v4().simple().to_string()[..8].to_uppercase();
        let received_at = chrono::Utc::now().to_rfc3339();

        let payload = serde_json::json!({
            "name": submission.name,
            "email": submission.email,
            "company": submission.company,
            "message": submission.message,
        });

        info!(%reference, %received_at, form = %payload, "contact form submitted");
        self.accepted += 1;

        Ok(ContactReceipt {
            reference,
            received_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_returns_receipt() {
        let mut gateway = LoggingContactGateway::new();
        let submission = ContactSubmission::new("Ada", "ada@example.com", "Hello");

        let receipt = gateway.submit(&submission).unwrap();

        assert_eq!(receipt.reference.len(), 8);
        assert!(receipt.reference.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(chrono::DateTime::parse_from_rfc3339(&receipt.received_at).is_ok());
        assert_eq!(gateway.accepted(), 1);
    }

    #[test]
    fn test_references_differ() {
        let mut gateway = LoggingContactGateway::new();
        let submission = ContactSubmission::new("Ada", "ada@example.com", "Hello");

        let a = gateway.submit(&submission).unwrap();
        let b = gateway.submit(&submission).unwrap();
        assert_ne!(a.reference, b.reference);
    }
}
