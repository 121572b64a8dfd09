//! Simple (linear) interest projection
//!
//! Interest accrues on the original principal only, so every month earns the
//! same amount. There is no recurring deposit concept here: total deposits
//! stay at the initial principal for the whole schedule.

use serde::{Deserialize, Serialize};

use super::schedule::{GrowthSchedule, MonthlyEntry};
use crate::error::{EngineError, Result};
use crate::rates::{InterestRate, RateType};

/// Request for a simple interest projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterestInput {
    /// Principal the interest accrues on
    pub initial_deposit: f64,

    /// Rate as a percentage (0-100)
    pub interest: f64,

    pub interest_type: RateType,

    /// Number of months to project (>= 1)
    pub period_in_months: u32,
}

impl SimpleInterestInput {
    pub fn rate(&self) -> InterestRate {
        InterestRate {
            value: self.interest,
            rate_type: self.interest_type,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.initial_deposit.is_finite() || self.initial_deposit < 0.0 {
            return Err(EngineError::validation(
                "initial_deposit",
                format!("must be >= 0, got {}", self.initial_deposit),
            ));
        }
        self.rate().validate("interest")?;
        if self.period_in_months < 1 {
            return Err(EngineError::validation(
                "period_in_months",
                format!("must be >= 1, got {}", self.period_in_months),
            ));
        }
        Ok(())
    }
}

/// Linear interest accrual on the original principal
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleInterestCalculator;

impl SimpleInterestCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, input: &SimpleInterestInput) -> Result<GrowthSchedule> {
        input.validate()?;

        let monthly_interest = input.initial_deposit * input.rate().monthly_rate();
        let mut schedule = GrowthSchedule::new();

        for month in 1..=input.period_in_months {
            let total_interest = monthly_interest * month as f64;
            schedule.push_month(
                month,
                MonthlyEntry {
                    deposit: 0.0,
                    interest: monthly_interest,
                    total_amount: input.initial_deposit + total_interest,
                    total_deposit: input.initial_deposit,
                    total_interest,
                },
            );
        }

        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_three_month_worked_example() {
        let calculator = SimpleInterestCalculator::new();
        let input = SimpleInterestInput {
            initial_deposit: 1000.0,
            interest: 1.0,
            interest_type: RateType::Monthly,
            period_in_months: 3,
        };
        let schedule = calculator.execute(&input).unwrap();

        // Constant 10/month on the original principal
        for month in 1..=3 {
            assert!((schedule.month(month).unwrap().interest - 10.0).abs() < 1e-9);
        }
        assert!((schedule.total_interest - 30.0).abs() < 1e-9);
        assert!((schedule.total_amount - 1030.0).abs() < 1e-9);
        assert!((schedule.total_deposit - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_interest_is_constant_every_month() {
        let calculator = SimpleInterestCalculator::new();
        let input = SimpleInterestInput {
            initial_deposit: 5000.0,
            interest: 9.0,
            interest_type: RateType::Annual,
            period_in_months: 48,
        };
        let schedule = calculator.execute(&input).unwrap();

        let first = schedule.month(1).unwrap().interest;
        for month in 2..=48 {
            assert_eq!(schedule.month(month).unwrap().interest, first);
        }
    }

    #[test]
    fn test_prefix_totals_identity() {
        let calculator = SimpleInterestCalculator::new();
        let input = SimpleInterestInput {
            initial_deposit: 750.0,
            interest: 0.7,
            interest_type: RateType::Monthly,
            period_in_months: 60,
        };
        let schedule = calculator.execute(&input).unwrap();

        for (month, entry) in &schedule.months {
            let gap = entry.total_amount - (entry.total_deposit + entry.total_interest);
            assert!(
                gap.abs() < 1e-6,
                "totals identity broken at month {}: {}",
                month,
                gap
            );
        }
    }

    #[test]
    fn test_single_month_period() {
        let calculator = SimpleInterestCalculator::new();
        let input = SimpleInterestInput {
            initial_deposit: 1000.0,
            interest: 2.0,
            interest_type: RateType::Monthly,
            period_in_months: 1,
        };
        let schedule = calculator.execute(&input).unwrap();

        assert_eq!(schedule.len(), 1);
        assert!((schedule.total_interest - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_validation_rejects_bad_inputs() {
        let calculator = SimpleInterestCalculator::new();
        let result = calculator.execute(&SimpleInterestInput {
            initial_deposit: 100.0,
            interest: 1.0,
            interest_type: RateType::Monthly,
            period_in_months: 0,
        });
        match result {
            Err(EngineError::Validation { field, .. }) => assert_eq!(field, "period_in_months"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
