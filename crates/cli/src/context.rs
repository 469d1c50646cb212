//! Settings shared by every command

use std::path::Path;

use shared::AppConfig;
use tracing::debug;

/// Global options resolved once in `main`
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub config: AppConfig,
    /// Emit JSON instead of styled text
    pub json: bool,
}

impl Context {
    /// Load the config file if one was given, defaults otherwise
    pub fn load(config_path: Option<&Path>, json: bool) -> shared::Result<Self> {
        let config = match config_path {
            Some(path) => {
                debug!(path = %path.display(), "loading configuration");
                AppConfig::from_file(path)?
            }
            None => AppConfig::default(),
        };
        Ok(Self { config, json })
    }
}
