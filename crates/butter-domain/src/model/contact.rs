//! ContactSubmission - The "book a call" form

/// A filled-in contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}

/// Form fields that can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

/// Validation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    Blank(ContactField),
    InvalidEmail { email: String },
}

impl core::fmt::Display for ContactError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ContactError::Blank(field) => write!(f, "The {} field is required", field.name()),
            ContactError::InvalidEmail { email } => {
                write!(f, "'{}' is not a valid email address", email)
            }
        }
    }
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            company: None,
            message: message.into(),
        }
    }

    /// Builder: add company
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Check every field, returning all problems at once
    pub fn validate(&self) -> Result<(), Vec<ContactError>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ContactError::Blank(ContactField::Name));
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(ContactError::Blank(ContactField::Email));
        } else if !is_plausible_email(email) {
            errors.push(ContactError::InvalidEmail {
                email: email.to_string(),
            });
        }

        if self.message.trim().is_empty() {
            errors.push(ContactError::Blank(ContactField::Message));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// One `@`, something before it, and a dotted domain after it
fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_submission() {
        let submission = ContactSubmission::new("Ada", "ada@example.co.uk", "Call me")
            .with_company("Analytical Ltd");
        assert!(submission.validate().is_ok());
        assert_eq!(submission.company.as_deref(), Some("Analytical Ltd"));
    }

    #[test]
    fn test_collects_all_errors() {
        let submission = ContactSubmission::new("  ", "", "");
        let errors = submission.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                ContactError::Blank(ContactField::Name),
                ContactError::Blank(ContactField::Email),
                ContactError::Blank(ContactField::Message),
            ]
        );
    }

    #[test]
    fn test_rejects_bad_emails() {
        for email in ["ada", "@example.com", "ada@example", "a@b@c.com", "ada@.com", "a da@x.io"] {
            let submission = ContactSubmission::new("Ada", email, "hi");
            assert!(
                matches!(
                    submission.validate().unwrap_err().as_slice(),
                    [ContactError::InvalidEmail { .. }]
                ),
                "accepted {}",
                email
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::Blank(ContactField::Message).to_string(),
            "The message field is required"
        );
    }
}
