//! Number formatting for the estimator output

use butter_domain::Horizon;
use shared::PresentationConfig;

/// Formats amounts the way the page shows them
#[derive(Debug, Clone)]
pub struct NumberFormat {
    currency_symbol: String,
    separator: String,
}

impl NumberFormat {
    pub fn new(config: &PresentationConfig) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
            separator: config.thousands_separator.clone(),
        }
    }

    /// `£134,833` - rounded to whole units
    pub fn currency(&self, amount: f64) -> String {
        let rounded = amount.round();
        let sign = if rounded < 0.0 { "-" } else { "" };
        format!(
            "{}{}{}",
            sign,
            self.currency_symbol,
            self.group(rounded.abs() as u64)
        )
    }

    /// `9,608%` - whole percent
    pub fn percent(&self, value: f64) -> String {
        format!("{}%", self.group(value.round().max(0.0) as u64))
    }

    /// `6,536`
    pub fn count(&self, value: u64) -> String {
        self.group(value)
    }

    /// `1 month`, `40 months`, or `N/A`
    pub fn months(&self, horizon: Horizon) -> String {
        match horizon {
            Horizon::Months(1) => "1 month".to_string(),
            Horizon::Months(m) => format!("{} months", self.group(m)),
            Horizon::NotApplicable => "N/A".to_string(),
        }
    }

    /// `6,536 calls` or `N/A`
    pub fn calls(&self, calls: Option<u64>) -> String {
        match calls {
            Some(1) => "1 call".to_string(),
            Some(n) => format!("{} calls", self.group(n)),
            None => "N/A".to_string(),
        }
    }

    fn group(&self, value: u64) -> String {
        let digits = value.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push_str(&self.separator);
            }
            out.push(ch);
        }
        out
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new(&PresentationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.currency(134_833.33), "£134,833");
        assert_eq!(fmt.currency(1_618_000.0), "£1,618,000");
        assert_eq!(fmt.currency(999.5), "£1,000");
        assert_eq!(fmt.currency(0.0), "£0");
        assert_eq!(fmt.currency(-1_250.0), "-£1,250");
    }

    #[test]
    fn test_custom_symbol_and_separator() {
        let fmt = NumberFormat::new(&PresentationConfig {
            currency_symbol: "€".to_string(),
            thousands_separator: ".".to_string(),
        });
        assert_eq!(fmt.currency(1_234_567.0), "€1.234.567");
    }

    #[test]
    fn test_percent() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.percent(9_608.0), "9,608%");
        assert_eq!(fmt.percent(0.0), "0%");
        assert_eq!(fmt.percent(12.4), "12%");
    }

    #[test]
    fn test_months() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.months(Horizon::Months(1)), "1 month");
        assert_eq!(fmt.months(Horizon::Months(40)), "40 months");
        assert_eq!(fmt.months(Horizon::NotApplicable), "N/A");
    }

    #[test]
    fn test_calls() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.calls(Some(6_536)), "6,536 calls");
        assert_eq!(fmt.calls(None), "N/A");
    }

    #[test]
    fn test_group_boundaries() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.count(100), "100");
        assert_eq!(fmt.count(1_000), "1,000");
        assert_eq!(fmt.count(1_000_000), "1,000,000");
    }
}
