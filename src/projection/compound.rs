//! Compound interest projection with optional recurring deposits
//!
//! The computational primitive of the engine: the retirement projector and
//! the cash-vs-installments comparator both run on top of this calculator.

use serde::{Deserialize, Serialize};

use super::schedule::{GrowthSchedule, MonthlyEntry};
use crate::error::{EngineError, Result};
use crate::rates::{InterestRate, RateType};

/// Request for a compound interest projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestInput {
    /// Starting balance
    pub initial_deposit: f64,

    /// Recurring end-of-month contribution; negative means a withdrawal
    #[serde(default)]
    pub monthly_deposit: f64,

    /// Rate as a percentage (0-100)
    pub interest: f64,

    pub interest_type: RateType,

    /// Number of months to project (>= 1)
    pub period_in_months: u32,
}

impl CompoundInterestInput {
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
        if !self.monthly_deposit.is_finite() {
            return Err(EngineError::validation(
                "monthly_deposit",
                "must be a finite amount",
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

/// Monthly compounding projection with an optional recurring deposit
#[derive(Debug, Clone, Copy, Default)]
pub struct CompoundInterestCalculator;

impl CompoundInterestCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Project the balance month by month.
    ///
    /// Each month earns interest on the running balance first; the recurring
    /// deposit lands at the end of the period, so month 1 interest accrues on
    /// the initial deposit alone. The balance may go negative when recurring
    /// withdrawals outrun growth; that negative balance is the shortfall.
    pub fn execute(&self, input: &CompoundInterestInput) -> Result<GrowthSchedule> {
        input.validate()?;

        let monthly_rate = input.rate().monthly_rate();
        let mut schedule = GrowthSchedule::new();

        let mut balance = input.initial_deposit;
        let mut total_deposit = input.initial_deposit;
        let mut total_interest = 0.0;

        for month in 1..=input.period_in_months {
            let interest = balance * monthly_rate;
            balance += interest + input.monthly_deposit;
            total_deposit += input.monthly_deposit;
            total_interest += interest;

            schedule.push_month(
                month,
                MonthlyEntry {
                    deposit: input.monthly_deposit,
                    interest,
                    total_amount: balance,
                    total_deposit,
                    total_interest,
                },
            );
        }

        Ok(schedule)
    }
}
