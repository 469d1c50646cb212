//! Ports - What the domain needs from the outside world
//!
//! Traits only; implementations live in butter-adapter.

pub mod contact_gateway;
