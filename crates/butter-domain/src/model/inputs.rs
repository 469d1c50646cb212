//! EstimateInputs - The three business figures the ROI estimator reads
//!
//! Inputs are a Value Object. Raw values are never rejected: anything out of
//! range is clamped to the nearest bound, anything that is not a number takes
//! the field default.

/// One of the three estimator inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    /// Number of customer-service agents
    AgentCount,
    /// Average yearly salary per agent
    AvgSalary,
    /// Calls handled per month
    CallVolume,
}

impl InputField {
    /// Field name as used in forms and JSON output
    pub fn name(&self) -> &'static str {
        match self {
            InputField::AgentCount => "agentCount",
            InputField::AvgSalary => "avgSalary",
            InputField::CallVolume => "callVolume",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            InputField::AgentCount => "Number of agents",
            InputField::AvgSalary => "Average salary",
            InputField::CallVolume => "Monthly call volume",
        }
    }

    /// Lowest accepted value
    pub fn min(&self) -> u32 {
        match self {
            InputField::AgentCount => 1,
            InputField::AvgSalary => 15_000,
            InputField::CallVolume => 100,
        }
    }

    /// Highest accepted value
    pub fn max(&self) -> u32 {
        match self {
            InputField::AgentCount => 10_000,
            InputField::AvgSalary => 200_000,
            InputField::CallVolume => 1_000_000,
        }
    }

    /// Value substituted when the raw input is not a number
    pub fn default_value(&self) -> u32 {
        match self {
            InputField::AgentCount => 50,
            InputField::AvgSalary => 35_000,
            InputField::CallVolume => 10_000,
        }
    }

    /// Clamp an integer into this field's range
    pub fn clamp(&self, raw: i64) -> Sanitized {
        let min = i64::from(self.min());
        let max = i64::from(self.max());
        let clamped = raw.clamp(min, max);

        let adjustment = if clamped == raw {
            InputAdjustment::Unchanged
        } else {
            InputAdjustment::Clamped { from: raw }
        };

        Sanitized {
            // In range of u32 by construction of min/max
            value: clamped as u32,
            adjustment,
        }
    }

    /// Sanitize raw text
    ///
    /// Integers are taken as-is, finite decimals are truncated toward zero,
    /// anything else becomes the field default.
    pub fn parse(&self, raw: &str) -> Sanitized {
        match parse_number(raw) {
            Some(n) => self.clamp(n),
            None => Sanitized {
                value: self.default_value(),
                adjustment: InputAdjustment::Defaulted,
            },
        }
    }
}

impl core::fmt::Display for InputField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn parse_number(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(n);
    }
    match trimmed.parse::<f64>() {
        // `as` saturates at the i64 bounds, which clamping then handles
        Ok(f) if f.is_finite() => Some(f.trunc() as i64),
        _ => None,
    }
}

/// What sanitation did to a raw value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAdjustment {
    Unchanged,
    /// Value was outside the range and moved to the nearest bound
    Clamped { from: i64 },
    /// Value was not a number and the field default was used
    Defaulted,
}

/// A sanitized field value together with how it was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sanitized {
    pub value: u32,
    pub adjustment: InputAdjustment,
}

/// Sanitized estimator inputs
///
/// Every instance is within range; there is no way to build one that isn't.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EstimateInputs {
    agent_count: u32,
    avg_salary: u32,
    call_volume: u32,
}

impl EstimateInputs {
    /// Build inputs from integers, clamping each to its range
    pub fn new(agent_count: i64, avg_salary: i64, call_volume: i64) -> Self {
        Self {
            agent_count: InputField::AgentCount.clamp(agent_count).value,
            avg_salary: InputField::AvgSalary.clamp(avg_salary).value,
            call_volume: InputField::CallVolume.clamp(call_volume).value,
        }
    }

    /// Build inputs from raw text, keeping a record of each adjustment
    pub fn parse(agent_count: &str, avg_salary: &str, call_volume: &str) -> SanitizedInputs {
        let agents = InputField::AgentCount.parse(agent_count);
        let salary = InputField::AvgSalary.parse(avg_salary);
        let calls = InputField::CallVolume.parse(call_volume);

        SanitizedInputs {
            inputs: Self {
                agent_count: agents.value,
                avg_salary: salary.value,
                call_volume: calls.value,
            },
            adjustments: [
                (InputField::AgentCount, agents.adjustment),
                (InputField::AvgSalary, salary.adjustment),
                (InputField::CallVolume, calls.adjustment),
            ],
        }
    }

    pub fn agent_count(&self) -> u32 {
        self.agent_count
    }

    pub fn avg_salary(&self) -> u32 {
        self.avg_salary
    }

    pub fn call_volume(&self) -> u32 {
        self.call_volume
    }

    /// Value of a single field
    pub fn get(&self, field: InputField) -> u32 {
        match field {
            InputField::AgentCount => self.agent_count,
            InputField::AvgSalary => self.avg_salary,
            InputField::CallVolume => self.call_volume,
        }
    }
}

impl Default for EstimateInputs {
    fn default() -> Self {
        Self {
            agent_count: InputField::AgentCount.default_value(),
            avg_salary: InputField::AvgSalary.default_value(),
            call_volume: InputField::CallVolume.default_value(),
        }
    }
}

/// Result of parsing raw inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SanitizedInputs {
    pub inputs: EstimateInputs,
    pub adjustments: [(InputField, InputAdjustment); 3],
}

impl SanitizedInputs {
    /// Fields whose raw value was changed during sanitation
    pub fn adjusted(&self) -> impl Iterator<Item = &(InputField, InputAdjustment)> {
        self.adjustments
            .iter()
            .filter(|(_, adjustment)| *adjustment != InputAdjustment::Unchanged)
    }
}
