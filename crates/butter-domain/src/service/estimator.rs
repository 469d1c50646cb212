//! Estimator - The ROI calculation
//!
//! Given sanitized inputs and a cost model:
//! 1. Price today's operation (agents + calls)
//! 2. Price the projected operation (cheaper calls, fewer agent hours)
//! 3. Derive savings, payback, three-year ROI and break-even figures
//!
//! This is pure domain logic - no I/O, no state between calls. The same
//! inputs always give the same result, so callers may run it on every
//! keystroke without caching.

use crate::model::cost_model::CostModel;
use crate::model::inputs::EstimateInputs;
use crate::model::result::{EstimateResult, Horizon};

/// Estimator - evaluates a cost model
#[derive(Debug, Clone, Copy, Default)]
pub struct Estimator {
    model: CostModel,
}

impl Estimator {
    /// Create an estimator using the standard cost model
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an estimator for a custom cost model
    pub fn with_model(model: CostModel) -> Self {
        Self { model }
    }

    /// Compute the full result for one input snapshot
    pub fn estimate(&self, inputs: &EstimateInputs) -> EstimateResult {
        let model = &self.model;
        let agents = f64::from(inputs.agent_count());
        let salary = f64::from(inputs.avg_salary());
        let calls = f64::from(inputs.call_volume());

        let current_monthly_agent_cost = agents * salary / 12.0;
        let current_call_cost = calls * model.current_cost_per_call;
        let total_current_monthly_cost = current_monthly_agent_cost + current_call_cost;

        let projected_call_cost = calls * model.projected_cost_per_call;
        let projected_agent_cost = current_monthly_agent_cost * model.agent_cost_retention;
        let total_projected_monthly_cost = projected_agent_cost + projected_call_cost;

        let monthly_savings = total_current_monthly_cost - total_projected_monthly_cost;
        let annual_savings = monthly_savings * 12.0;

        let payback_months = payback(model.implementation_cost, monthly_savings);

        let three_year_roi = (((annual_savings * 3.0 - model.implementation_cost)
            / model.implementation_cost)
            * 100.0)
            .max(0.0);

        let break_even_calls = break_even_calls(model);

        // Break-even is meaningless when the operation is losing money overall
        let months_to_break_even = match break_even_calls {
            Some(needed) if monthly_savings > 0.0 => {
                Horizon::Months((needed as f64 / calls).ceil() as u64)
            }
            _ => Horizon::NotApplicable,
        };

        EstimateResult {
            current_monthly_agent_cost,
            current_call_cost,
            total_current_monthly_cost,
            projected_agent_cost,
            projected_call_cost,
            total_projected_monthly_cost,
            monthly_savings,
            annual_savings,
            payback_months,
            three_year_roi,
            break_even_calls,
            months_to_break_even,
        }
    }
}

/// Estimate with the standard cost model
pub fn estimate(inputs: &EstimateInputs) -> EstimateResult {
    Estimator::new().estimate(inputs)
}

fn payback(implementation_cost: f64, monthly_savings: f64) -> Horizon {
    // `!(x > 0)` also catches NaN
    if !(monthly_savings > 0.0) {
        return Horizon::NotApplicable;
    }
    let months = (implementation_cost / monthly_savings).ceil().max(1.0);
    Horizon::Months(months as u64)
}

fn break_even_calls(model: &CostModel) -> Option<u64> {
    let per_call = model.cost_per_call_savings();
    if !(per_call > 0.0) {
        return None;
    }
    Some((model.implementation_cost / per_call).ceil().max(0.0) as u64)
}
