//! Outbound adapters

pub mod logging_contact;

pub use logging_contact::LoggingContactGateway;
