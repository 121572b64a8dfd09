//! Interest rate specification and monthly conversion
//!
//! Rates arrive as percentages tagged MONTHLY or ANNUAL. The schedules always
//! iterate monthly, so annual rates are de-annualized geometrically to the
//! equivalent effective monthly rate.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Period convention of a quoted interest rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateType {
    /// Rate is already per month
    Monthly,
    /// Rate is per year; converted as (1 + r)^(1/12) - 1
    Annual,
}

/// A quoted interest rate: percentage value plus period convention
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestRate {
    /// Rate as a percentage (0-100)
    pub value: f64,
    pub rate_type: RateType,
}

impl InterestRate {
    pub fn monthly(value: f64) -> Self {
        Self {
            value,
            rate_type: RateType::Monthly,
        }
    }

    pub fn annual(value: f64) -> Self {
        Self {
            value,
            rate_type: RateType::Annual,
        }
    }

    /// Effective monthly rate as a decimal.
    ///
    /// Annual rates use the monthly-compounding equivalence: twelve months at
    /// the returned rate reproduce the quoted annual rate exactly.
    pub fn monthly_rate(&self) -> f64 {
        let decimal = self.value / 100.0;
        match self.rate_type {
            RateType::Monthly => decimal,
            RateType::Annual => (1.0 + decimal).powf(1.0 / 12.0) - 1.0,
        }
    }

    /// Check the quoted percentage is finite and within [0, 100].
    pub fn validate(&self, field: &'static str) -> Result<()> {
        if !self.value.is_finite() || self.value < 0.0 || self.value > 100.0 {
            return Err(EngineError::validation(
                field,
                format!(
                    "rate must be a percentage between 0 and 100, got {}",
                    self.value
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_passthrough() {
        let rate = InterestRate::monthly(1.0);
        assert_relative_eq!(rate.monthly_rate(), 0.01);
    }

    #[test]
    fn test_annual_deannualization() {
        // 12 months at the converted rate must compound back to the annual rate
        let rate = InterestRate::annual(12.0);
        let monthly = rate.monthly_rate();
        assert_relative_eq!((1.0 + monthly).powi(12), 1.12, epsilon = 1e-12);

        // Geometric conversion sits below simple division by 12
        assert!(monthly < 0.12 / 12.0);
    }

    #[test]
    fn test_zero_rate() {
        assert_eq!(InterestRate::monthly(0.0).monthly_rate(), 0.0);
        assert_eq!(InterestRate::annual(0.0).monthly_rate(), 0.0);
    }

    #[test]
    fn test_validate_bounds() {
        assert!(InterestRate::monthly(0.0).validate("interest").is_ok());
        assert!(InterestRate::monthly(100.0).validate("interest").is_ok());
        assert!(InterestRate::monthly(-0.1).validate("interest").is_err());
        assert!(InterestRate::monthly(100.1).validate("interest").is_err());
        assert!(InterestRate::monthly(f64::NAN).validate("interest").is_err());
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_string(&RateType::Annual).unwrap();
        assert_eq!(json, "\"ANNUAL\"");
        let parsed: RateType = serde_json::from_str("\"MONTHLY\"").unwrap();
        assert_eq!(parsed, RateType::Monthly);
    }
}
