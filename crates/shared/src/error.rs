//! Error types for Butter Labs

use butter_domain::{ContactError, DemoError, GatewayError, NavigationError};
use thiserror::Error;

/// Error thrown when a contact form fails validation
#[derive(Debug, Error)]
#[error("Invalid contact form: {}", problems.iter().map(|p| p.to_string()).collect::<Vec<_>>().join("; "))]
pub struct InvalidContactError {
    pub problems: Vec<ContactError>,
}

/// General Butter Labs error type
#[derive(Debug, Error)]
pub enum ButterError {
    #[error("Unknown section '{id}'. Available sections: {}", butter_domain::Section::all().iter().map(|s| s.id()).collect::<Vec<_>>().join(", "))]
    UnknownSection { id: String },

    #[error("Unknown accent '{slug}'. Run `butter accents` for the list")]
    UnknownAccent { slug: String },

    #[error("Demo error: {0}")]
    Demo(String),

    #[error(transparent)]
    InvalidContact(#[from] InvalidContactError),

    #[error("Contact error: {0}")]
    Contact(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl From<NavigationError> for ButterError {
    fn from(err: NavigationError) -> Self {
        match err {
            NavigationError::UnknownSection { id } => ButterError::UnknownSection { id },
        }
    }
}

impl From<DemoError> for ButterError {
    fn from(err: DemoError) -> Self {
        match err {
            DemoError::UnknownAccent { slug } => ButterError::UnknownAccent { slug },
            other => ButterError::Demo(other.to_string()),
        }
    }
}

impl From<GatewayError> for ButterError {
    fn from(err: GatewayError) -> Self {
        ButterError::Contact(err.to_string())
    }
}

impl From<Vec<ContactError>> for ButterError {
    fn from(problems: Vec<ContactError>) -> Self {
        ButterError::InvalidContact(InvalidContactError { problems })
    }
}

pub type Result<T> = std::result::Result<T, ButterError>;
