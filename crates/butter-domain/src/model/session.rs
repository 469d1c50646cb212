//! SiteSession - Everything one visitor's page remembers
//!
//! The page used to keep this in globals. Here it is one value owned by
//! whoever drives the presentation, and every change goes through it.

use super::demo::DemoSession;
use super::navigation::NavigationState;

#[derive(Debug, Clone, Default)]
pub struct SiteSession {
    pub navigation: NavigationState,
    pub demo: DemoSession,
}

impl SiteSession {
    /// Fresh session on the home section, no demo running
    pub fn new() -> Self {
        Self::default()
    }
}
