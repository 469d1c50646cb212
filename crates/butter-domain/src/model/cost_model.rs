//! CostModel - The fixed constants behind the ROI estimate

/// Constants the estimator applies to the inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    /// What one call costs today
    pub current_cost_per_call: f64,
    /// What one call costs once automated
    pub projected_cost_per_call: f64,
    /// Share of today's agent cost that remains (0.6 = 40% reduction)
    pub agent_cost_retention: f64,
    /// One-off cost of rolling the product out
    pub implementation_cost: f64,
}

impl CostModel {
    /// The model the landing page advertises
    pub const STANDARD: CostModel = CostModel {
        current_cost_per_call: 8.50,
        projected_cost_per_call: 0.85,
        agent_cost_retention: 0.6,
        implementation_cost: 50_000.0,
    };

    /// Saving on every call handled
    pub fn cost_per_call_savings(&self) -> f64 {
        self.current_cost_per_call - self.projected_cost_per_call
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::STANDARD
    }
}
