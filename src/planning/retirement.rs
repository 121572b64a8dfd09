//! Retirement readiness projection
//!
//! Two compounding runs back to back: an accumulation phase from the current
//! age to retirement, then a decumulation phase withdrawing the goal income
//! until life expectancy. The sustainable withdrawal is solved by bisection
//! over the decumulation projection.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::money;
use crate::projection::solver;
use crate::projection::{CompoundInterestCalculator, CompoundInterestInput};
use crate::rates::{InterestRate, RateType};

/// Request for a retirement projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementPlan {
    /// Current age in years
    pub age: u32,

    /// Age at which contributions stop and withdrawals begin
    pub retirement_age: u32,

    /// Age the patrimony must last until
    pub life_expectancy: u32,

    /// Patrimony already accumulated
    pub initial_deposit: f64,

    /// Gross monthly income during the accumulation phase
    pub monthly_income: f64,

    /// Percentage of income invested each month (0-100)
    pub income_investment_percentage: f64,

    /// Rate as a percentage (0-100)
    pub interest: f64,

    pub interest_type: RateType,

    /// Desired monthly income during retirement
    pub goal_income: f64,

    /// Desired patrimony at retirement
    pub goal_patrimony: f64,
}

impl RetirementPlan {
    pub fn rate(&self) -> InterestRate {
        InterestRate {
            value: self.interest,
            rate_type: self.interest_type,
        }
    }

    /// Months from the current age to retirement
    pub fn accumulation_months(&self) -> u32 {
        (self.retirement_age - self.age) * 12
    }

    /// Months from retirement to life expectancy
    pub fn retirement_months(&self) -> u32 {
        (self.life_expectancy - self.retirement_age) * 12
    }

    pub fn validate(&self) -> Result<()> {
        if self.retirement_age <= self.age {
            return Err(EngineError::validation(
                "retirement_age",
                format!(
                    "must be greater than current age {}, got {}",
                    self.age, self.retirement_age
                ),
            ));
        }
        if self.life_expectancy <= self.retirement_age {
            return Err(EngineError::validation(
                "life_expectancy",
                format!(
                    "must be greater than retirement age {}, got {}",
                    self.retirement_age, self.life_expectancy
                ),
            ));
        }
        if !self.initial_deposit.is_finite() || self.initial_deposit < 0.0 {
            return Err(EngineError::validation(
                "initial_deposit",
                format!("must be >= 0, got {}", self.initial_deposit),
            ));
        }
        if !self.monthly_income.is_finite() || self.monthly_income < 0.0 {
            return Err(EngineError::validation(
                "monthly_income",
                format!("must be >= 0, got {}", self.monthly_income),
            ));
        }
        if !self.income_investment_percentage.is_finite()
            || self.income_investment_percentage < 0.0
            || self.income_investment_percentage > 100.0
        {
            return Err(EngineError::validation(
                "income_investment_percentage",
                format!(
                    "must be a percentage between 0 and 100, got {}",
                    self.income_investment_percentage
                ),
            ));
        }
        self.rate().validate("interest")?;
        if !self.goal_income.is_finite() || self.goal_income < 0.0 {
            return Err(EngineError::validation(
                "goal_income",
                format!("must be >= 0, got {}", self.goal_income),
            ));
        }
        if !self.goal_patrimony.is_finite() || self.goal_patrimony < 0.0 {
            return Err(EngineError::validation(
                "goal_patrimony",
                format!("must be >= 0, got {}", self.goal_patrimony),
            ));
        }
        Ok(())
    }
}

/// Result of a retirement projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementProjection {
    /// Whether the sustainable withdrawal covers the goal income
    pub achieved_goal_income: bool,

    /// Whether the projected patrimony reaches the goal patrimony
    pub achieved_goal_patrimony: bool,

    /// Projected patrimony at retirement age
    #[serde(serialize_with = "money::serialize_cents")]
    pub patrimony_at_retirement: f64,

    /// Balance left at life expectancy when withdrawing exactly the goal
    /// income each month. Negative means the patrimony runs out early by
    /// that amount.
    #[serde(serialize_with = "money::serialize_cents")]
    pub heritage: f64,

    /// Largest level monthly withdrawal the patrimony sustains through
    /// the whole retirement phase
    #[serde(serialize_with = "money::serialize_cents")]
    pub max_monthly_expense: f64,
}

/// Composes two compounding runs into a retirement readiness verdict
#[derive(Debug, Clone, Copy, Default)]
pub struct RetirementProjector {
    calculator: CompoundInterestCalculator,
}

impl RetirementProjector {
    pub fn new() -> Self {
        Self {
            calculator: CompoundInterestCalculator::new(),
        }
    }

    pub fn execute(&self, plan: &RetirementPlan) -> Result<RetirementProjection> {
        plan.validate()?;

        let monthly_contribution = plan.monthly_income * plan.income_investment_percentage / 100.0;
        let accumulation = self.calculator.execute(&CompoundInterestInput {
            initial_deposit: plan.initial_deposit,
            monthly_deposit: monthly_contribution,
            interest: plan.interest,
            interest_type: plan.interest_type,
            period_in_months: plan.accumulation_months(),
        })?;
        let patrimony_at_retirement = accumulation.final_amount();

        // Withdraw the goal income through retirement; the final balance is
        // the heritage, negative when the patrimony runs out early
        let decumulation = self.calculator.execute(&CompoundInterestInput {
            initial_deposit: patrimony_at_retirement,
            monthly_deposit: -plan.goal_income,
            interest: plan.interest,
            interest_type: plan.interest_type,
            period_in_months: plan.retirement_months(),
        })?;
        let heritage = decumulation.final_amount();

        let max_monthly_expense = solver::solve_monthly_withdrawal(
            &self.calculator,
            patrimony_at_retirement,
            plan.rate(),
            plan.retirement_months(),
        )?;

        Ok(RetirementProjection {
            achieved_goal_income: max_monthly_expense >= plan.goal_income,
            achieved_goal_patrimony: patrimony_at_retirement >= plan.goal_patrimony,
            patrimony_at_retirement,
            heritage,
            max_monthly_expense,
        })
    }
}
