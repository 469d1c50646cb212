//! EstimateResult - Everything the estimator derives from one input snapshot

/// A duration in months that may not exist
///
/// When savings are zero or negative the cost is never paid back, so the
/// estimator reports `NotApplicable` instead of dividing by a non-positive
/// number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizon {
    Months(u64),
    NotApplicable,
}

impl Horizon {
    /// Month count, if any
    pub fn months(&self) -> Option<u64> {
        match self {
            Horizon::Months(m) => Some(*m),
            Horizon::NotApplicable => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, Horizon::Months(_))
    }
}

/// Output of a single estimate
///
/// All fields are plain numbers; currency symbols, separators and units are
/// the caller's business.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateResult {
    // Breakdown
    pub current_monthly_agent_cost: f64,
    pub current_call_cost: f64,
    pub total_current_monthly_cost: f64,
    pub projected_agent_cost: f64,
    pub projected_call_cost: f64,
    pub total_projected_monthly_cost: f64,

    // Headline figures
    pub monthly_savings: f64,
    pub annual_savings: f64,
    /// Months until savings cover the implementation cost, at least 1
    pub payback_months: Horizon,
    /// Percentage, floored at zero
    pub three_year_roi: f64,
    /// Calls needed for per-call savings to cover the implementation cost
    pub break_even_calls: Option<u64>,
    pub months_to_break_even: Horizon,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizon_months() {
        assert_eq!(Horizon::Months(3).months(), Some(3));
        assert_eq!(Horizon::NotApplicable.months(), None);
        assert!(!Horizon::NotApplicable.is_applicable());
    }
}
