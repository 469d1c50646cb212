//! Configuration types for Butter Labs

use butter_domain::service::animation::WAVEFORM_TICK;
use butter_domain::CostModel;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::ButterError;

/// How numbers are shown to visitors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresentationConfig {
    /// Prefixed to every currency amount
    pub currency_symbol: String,

    /// Inserted between groups of three digits
    pub thousands_separator: String,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "£".to_string(),
            thousands_separator: ",".to_string(),
        }
    }
}

/// Animation and input timings, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimingConfig {
    /// Quiet period before a changed input is re-estimated
    pub debounce_ms: u64,

    /// Pause before each typed character in the demo conversation
    pub typing_interval_ms: u64,

    /// Waveform redraw period
    pub waveform_interval_ms: u64,

    /// Number of bars in the waveform
    pub waveform_bars: usize,
}

impl TimingConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn typing_interval(&self) -> Duration {
        Duration::from_millis(self.typing_interval_ms)
    }

    pub fn waveform_interval(&self) -> Duration {
        Duration::from_millis(self.waveform_interval_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            typing_interval_ms: 30,
            waveform_interval_ms: WAVEFORM_TICK.as_millis() as u64,
            waveform_bars: 20,
        }
    }
}

/// Override for the estimator's cost model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostModelConfig {
    pub current_cost_per_call: f64,
    pub projected_cost_per_call: f64,
    pub agent_cost_retention: f64,
    pub implementation_cost: f64,
}

impl CostModelConfig {
    /// Reject values the estimator cannot use
    pub fn validate(&self) -> crate::Result<()> {
        let fields = [
            ("currentCostPerCall", self.current_cost_per_call),
            ("projectedCostPerCall", self.projected_cost_per_call),
            ("agentCostRetention", self.agent_cost_retention),
            ("implementationCost", self.implementation_cost),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ButterError::Config(format!(
                    "costModel.{} must be a finite, non-negative number (got {})",
                    name, value
                )));
            }
        }

        if self.implementation_cost == 0.0 {
            return Err(ButterError::Config(
                "costModel.implementationCost must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

impl From<CostModelConfig> for CostModel {
    fn from(config: CostModelConfig) -> Self {
        CostModel {
            current_cost_per_call: config.current_cost_per_call,
            projected_cost_per_call: config.projected_cost_per_call,
            agent_cost_retention: config.agent_cost_retention,
            implementation_cost: config.implementation_cost,
        }
    }
}

/// Application configuration (`butter.yaml` / `butter.json`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub presentation: PresentationConfig,

    pub timing: TimingConfig,

    /// Leave unset to use the standard model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_model: Option<CostModelConfig>,
}

impl AppConfig {
    /// Load configuration from a YAML or JSON file, chosen by extension
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );

        let config: Self = if is_yaml {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints serde can't express
    pub fn validate(&self) -> crate::Result<()> {
        if let Some(model) = &self.cost_model {
            model.validate()?;
        }
        if self.timing.waveform_interval_ms == 0 {
            return Err(ButterError::Config(
                "timing.waveformIntervalMs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Cost model the estimator should use
    pub fn cost_model(&self) -> CostModel {
        self.cost_model.map(CostModel::from).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.presentation.currency_symbol, "£");
        assert_eq!(config.timing.debounce(), Duration::from_millis(300));
        assert_eq!(config.timing.waveform_interval(), Duration::from_millis(200));
        assert_eq!(config.cost_model(), CostModel::STANDARD);
    }

    #[test]
    fn test_config_parse_json_partial() {
        let json = r#"{
            "presentation": { "currencySymbol": "$" },
            "timing": { "typingIntervalMs": 5 }
        }"#;

        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.presentation.currency_symbol, "$");
        assert_eq!(config.presentation.thousands_separator, ",");
        assert_eq!(config.timing.typing_interval_ms, 5);
        assert_eq!(config.timing.debounce_ms, 300);
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            r#"
costModel:
  currentCostPerCall: 10.0
  projectedCostPerCall: 1.0
  agentCostRetention: 0.5
  implementationCost: 20000
"#
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        let model = config.cost_model();
        assert_eq!(model.current_cost_per_call, 10.0);
        assert_eq!(model.implementation_cost, 20_000.0);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{ "timing": {{ "waveformBars": 8 }} }}"#).unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.timing.waveform_bars, 8);
    }

    #[test]
    fn test_rejects_negative_cost() {
        let config = AppConfig {
            cost_model: Some(CostModelConfig {
                current_cost_per_call: -1.0,
                projected_cost_per_call: 0.85,
                agent_cost_retention: 0.6,
                implementation_cost: 50_000.0,
            }),
            ..AppConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("costModel.currentCostPerCall"));
    }

    #[test]
    fn test_rejects_zero_waveform_interval() {
        let mut config = AppConfig::default();
        config.timing.waveform_interval_ms = 0;
        assert!(matches!(config.validate(), Err(ButterError::Config(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = AppConfig::from_file(Path::new("/definitely/not/here.yaml"));
        assert!(matches!(result, Err(ButterError::Io(_))));
    }

    #[test]
    fn test_malformed_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "timing: [not, a, map]").unwrap();
        assert!(matches!(
            AppConfig::from_file(file.path()),
            Err(ButterError::Yaml(_))
        ));
    }
}
