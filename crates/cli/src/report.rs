//! EstimateReport - Serializable view of one estimate

use butter_domain::{EstimateResult, InputAdjustment, InputField, SanitizedInputs};
use console::style;
use serde::Serialize;

use crate::format::NumberFormat;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputsReport {
    pub agent_count: u32,
    pub avg_salary: u32,
    pub call_volume: u32,
}

/// How a raw input was changed
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentReport {
    pub field: &'static str,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<i64>,
    pub used: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownReport {
    pub current_monthly_agent_cost: f64,
    pub current_call_cost: f64,
    pub total_current_monthly_cost: f64,
    pub projected_agent_cost: f64,
    pub projected_call_cost: f64,
    pub total_projected_monthly_cost: f64,
}

/// Everything the page shows for one input snapshot
///
/// Sentinel values serialize as `null`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateReport {
    pub inputs: InputsReport,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub adjustments: Vec<AdjustmentReport>,
    pub monthly_savings: f64,
    pub annual_savings: f64,
    pub payback_months: Option<u64>,
    #[serde(rename = "threeYearROI")]
    pub three_year_roi: f64,
    pub break_even_calls: Option<u64>,
    pub months_to_break_even: Option<u64>,
    pub breakdown: BreakdownReport,
}

impl EstimateReport {
    pub fn new(sanitized: &SanitizedInputs, result: &EstimateResult) -> Self {
        let inputs = &sanitized.inputs;

        let adjustments = sanitized
            .adjusted()
            .map(|(field, adjustment)| AdjustmentReport {
                field: field.name(),
                kind: match adjustment {
                    InputAdjustment::Clamped { .. } => "clamped",
                    InputAdjustment::Defaulted => "defaulted",
                    InputAdjustment::Unchanged => "unchanged",
                },
                from: match adjustment {
                    InputAdjustment::Clamped { from } => Some(*from),
                    _ => None,
                },
                used: inputs.get(*field),
            })
            .collect();

        Self {
            inputs: InputsReport {
                agent_count: inputs.agent_count(),
                avg_salary: inputs.avg_salary(),
                call_volume: inputs.call_volume(),
            },
            adjustments,
            monthly_savings: result.monthly_savings,
            annual_savings: result.annual_savings,
            payback_months: result.payback_months.months(),
            three_year_roi: result.three_year_roi,
            break_even_calls: result.break_even_calls,
            months_to_break_even: result.months_to_break_even.months(),
            breakdown: BreakdownReport {
                current_monthly_agent_cost: result.current_monthly_agent_cost,
                current_call_cost: result.current_call_cost,
                total_current_monthly_cost: result.total_current_monthly_cost,
                projected_agent_cost: result.projected_agent_cost,
                projected_call_cost: result.projected_call_cost,
                total_projected_monthly_cost: result.total_projected_monthly_cost,
            },
        }
    }
}

/// Styled text for the terminal
pub fn render_text(
    fmt: &NumberFormat,
    sanitized: &SanitizedInputs,
    result: &EstimateResult,
) -> String {
    let inputs = &sanitized.inputs;
    let mut out = String::new();

    out.push_str(&format!(
        "{} {} agents, {} average salary, {} calls/month\n",
        style("ROI estimate for").bold(),
        fmt.count(u64::from(inputs.agent_count())),
        fmt.currency(f64::from(inputs.avg_salary())),
        fmt.count(u64::from(inputs.call_volume())),
    ));

    for (field, adjustment) in sanitized.adjusted() {
        out.push_str(&format!(
            "  {} {}\n",
            style("note:").yellow(),
            describe_adjustment(*field, *adjustment, inputs.get(*field))
        ));
    }

    out.push('\n');
    let rows = [
        ("Monthly savings", fmt.currency(result.monthly_savings)),
        ("Annual savings", fmt.currency(result.annual_savings)),
        ("Payback period", fmt.months(result.payback_months)),
        ("3-year ROI", fmt.percent(result.three_year_roi)),
        ("Break-even calls", fmt.calls(result.break_even_calls)),
        ("Months to break even", fmt.months(result.months_to_break_even)),
    ];
    for (label, value) in rows {
        out.push_str(&format!("  {:<22}{}\n", label, style(value).green().bold()));
    }

    out.push('\n');
    out.push_str(&format!(
        "  {:<22}{:>14}{:>14}\n",
        style("Monthly breakdown").dim(),
        "Current",
        "Projected"
    ));
    let breakdown = [
        ("Agents", result.current_monthly_agent_cost, result.projected_agent_cost),
        ("Calls", result.current_call_cost, result.projected_call_cost),
        (
            "Total",
            result.total_current_monthly_cost,
            result.total_projected_monthly_cost,
        ),
    ];
    for (label, current, projected) in breakdown {
        out.push_str(&format!(
            "  {:<22}{:>14}{:>14}\n",
            label,
            fmt.currency(current),
            fmt.currency(projected)
        ));
    }

    out
}

fn describe_adjustment(field: InputField, adjustment: InputAdjustment, used: u32) -> String {
    match adjustment {
        InputAdjustment::Clamped { from } => format!(
            "{} {} is outside {}..={}, using {}",
            field.label(),
            from,
            field.min(),
            field.max(),
            used
        ),
        InputAdjustment::Defaulted => {
            format!("{} is not a number, using default {}", field.label(), used)
        }
        InputAdjustment::Unchanged => format!("{} = {}", field.label(), used),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use butter_domain::{estimate, EstimateInputs};

    fn report(agents: &str, salary: &str, calls: &str) -> EstimateReport {
        let sanitized = EstimateInputs::parse(agents, salary, calls);
        EstimateReport::new(&sanitized, &estimate(&sanitized.inputs))
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(report("50", "35000", "10000")).unwrap();

        assert_eq!(json["inputs"]["agentCount"], 50);
        assert_eq!(json["paybackMonths"], 1);
        assert_eq!(json["breakEvenCalls"], 6536);
        assert_eq!(json["monthsToBreakEven"], 1);
        assert!(json.get("threeYearROI").is_some());
        assert!(json.get("adjustments").is_none());
    }

    #[test]
    fn test_adjustments_reported() {
        let report = report("-5", "abc", "10000");

        assert_eq!(report.adjustments.len(), 2);
        assert_eq!(report.adjustments[0].field, "agentCount");
        assert_eq!(report.adjustments[0].kind, "clamped");
        assert_eq!(report.adjustments[0].from, Some(-5));
        assert_eq!(report.adjustments[0].used, 1);
        assert_eq!(report.adjustments[1].kind, "defaulted");
        assert_eq!(report.adjustments[1].used, 35_000);
    }

    #[test]
    fn test_text_contains_headline_figures() {
        console::set_colors_enabled(false);
        let sanitized = EstimateInputs::parse("50", "35000", "10000");
        let text = render_text(
            &NumberFormat::default(),
            &sanitized,
            &estimate(&sanitized.inputs),
        );

        assert!(text.contains("£134,833"));
        assert!(text.contains("£1,618,000"));
        assert!(text.contains("9,608%"));
        assert!(text.contains("6,536 calls"));
        assert!(text.contains("£230,833"));
    }

    #[test]
    fn test_describe_adjustment() {
        let text = describe_adjustment(
            InputField::CallVolume,
            InputAdjustment::Clamped { from: 5 },
            100,
        );
        assert_eq!(text, "Monthly call volume 5 is outside 100..=1000000, using 100");
    }
}
