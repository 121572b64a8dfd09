//! Cash vs. installments purchase comparison
//!
//! Models keeping the cash price invested at the given return while each
//! installment is paid out of the invested balance. Whatever is left at the
//! end is the advantage of taking the installment plan; a negative leftover
//! means paying cash was cheaper.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::money;
use crate::projection::{CompoundInterestCalculator, CompoundInterestInput};
use crate::rates::{InterestRate, RateType};

/// Request for a cash vs. installments comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstallmentInput {
    /// Price when paying upfront
    pub cash_price: f64,

    /// Number of monthly installments (>= 1)
    pub installment_count: u32,

    /// Value of each installment
    pub installment_value: f64,

    /// Return the idle cash would earn, as a percentage (0-100)
    pub interest: f64,

    pub interest_type: RateType,
}

impl InstallmentInput {
    pub fn rate(&self) -> InterestRate {
        InterestRate {
            value: self.interest,
            rate_type: self.interest_type,
        }
    }

    /// Nominal cost of the installment plan
    pub fn total_installment_cost(&self) -> f64 {
        self.installment_value * self.installment_count as f64
    }

    pub fn validate(&self) -> Result<()> {
        if !self.cash_price.is_finite() || self.cash_price < 0.0 {
            return Err(EngineError::validation(
                "cash_price",
                format!("must be >= 0, got {}", self.cash_price),
            ));
        }
        if self.installment_count < 1 {
            return Err(EngineError::validation(
                "installment_count",
                format!("must be >= 1, got {}", self.installment_count),
            ));
        }
        if !self.installment_value.is_finite() || self.installment_value < 0.0 {
            return Err(EngineError::validation(
                "installment_value",
                format!("must be >= 0, got {}", self.installment_value),
            ));
        }
        self.rate().validate("interest")?;
        Ok(())
    }
}

/// The cheaper way to pay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentOption {
    Cash,
    Installments,
    /// Both cost the same to the cent
    Equivalent,
}

/// Outcome of a cash vs. installments comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstallmentComparison {
    pub recommended_option: PaymentOption,

    /// Absolute monetary gap between the two options
    #[serde(serialize_with = "money::serialize_cents")]
    pub difference: f64,

    /// Signed future-value advantage of the installment plan: positive means
    /// installments come out ahead
    #[serde(serialize_with = "money::serialize_cents")]
    pub installment_advantage: f64,

    /// Nominal cost of the installment plan
    #[serde(serialize_with = "money::serialize_cents")]
    pub total_installment_cost: f64,
}

/// Compares paying upfront against paying in installments
#[derive(Debug, Clone, Copy, Default)]
pub struct CashVsInstallmentsComparator {
    calculator: CompoundInterestCalculator,
}

impl CashVsInstallmentsComparator {
    pub fn new() -> Self {
        Self {
            calculator: CompoundInterestCalculator::new(),
        }
    }

    pub fn execute(&self, input: &InstallmentInput) -> Result<InstallmentComparison> {
        input.validate()?;

        // Invest the cash price, pay each installment from the balance
        let schedule = self.calculator.execute(&CompoundInterestInput {
            initial_deposit: input.cash_price,
            monthly_deposit: -input.installment_value,
            interest: input.interest,
            interest_type: input.interest_type,
            period_in_months: input.installment_count,
        })?;
        let installment_advantage = schedule.final_amount();

        let recommended_option = match money::round_to_cents(installment_advantage) {
            a if a > 0.0 => PaymentOption::Installments,
            a if a < 0.0 => PaymentOption::Cash,
            _ => PaymentOption::Equivalent,
        };

        Ok(InstallmentComparison {
            recommended_option,
            difference: installment_advantage.abs(),
            installment_advantage,
            total_installment_cost: input.total_installment_cost(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_input() -> InstallmentInput {
        InstallmentInput {
            cash_price: 1_000.0,
            installment_count: 10,
            installment_value: 105.0,
            interest: 1.0,
            interest_type: RateType::Monthly,
        }
    }

    #[test]
    fn test_installments_win_when_returns_beat_markup() {
        let comparator = CashVsInstallmentsComparator::new();
        let result = comparator.execute(&base_input()).unwrap();

        // 1% monthly growth outruns the 5% nominal markup spread over 10 months
        assert_eq!(result.recommended_option, PaymentOption::Installments);
        assert!(result.installment_advantage > 0.0);
        assert!((result.difference - result.installment_advantage).abs() < 1e-9);
        assert!((result.total_installment_cost - 1_050.0).abs() < 1e-9);
    }

    #[test]
    fn test_cash_wins_at_zero_return() {
        let comparator = CashVsInstallmentsComparator::new();
        let input = InstallmentInput {
            interest: 0.0,
            ..base_input()
        };
        let result = comparator.execute(&input).unwrap();

        // Idle cash earns nothing, so the nominal markup decides
        assert_eq!(result.recommended_option, PaymentOption::Cash);
        assert!((result.installment_advantage - (-50.0)).abs() < 1e-9);
        assert!((result.difference - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_equivalent_when_plan_has_no_markup_and_no_return() {
        let comparator = CashVsInstallmentsComparator::new();
        let input = InstallmentInput {
            installment_value: 100.0,
            interest: 0.0,
            ..base_input()
        };
        let result = comparator.execute(&input).unwrap();

        assert_eq!(result.recommended_option, PaymentOption::Equivalent);
        assert!(result.difference.abs() < 1e-9);
    }

    #[test]
    fn test_validation_rejects_zero_installments() {
        let comparator = CashVsInstallmentsComparator::new();
        let input = InstallmentInput {
            installment_count: 0,
            ..base_input()
        };
        match comparator.execute(&input) {
            Err(EngineError::Validation { field, .. }) => assert_eq!(field, "installment_count"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
