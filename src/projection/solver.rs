//! Level-withdrawal solver for decumulation planning
//!
//! Finds the fixed monthly withdrawal that exhausts a starting balance in
//! exactly `n` months at a given rate, by bisection over the projected final
//! balance. The final balance is strictly decreasing in the withdrawal, so
//! the root is unique and the bracket `[0, principal * (1 + rate)]` always
//! contains it.

use super::compound::{CompoundInterestCalculator, CompoundInterestInput};
use crate::error::Result;
use crate::rates::{InterestRate, RateType};

const TOLERANCE: f64 = 1e-6;
const MAX_ITERATIONS: u32 = 200;

/// Solve for the level monthly withdrawal that leaves a zero balance after
/// `months` withdrawals from `principal` growing at `rate`.
pub fn solve_monthly_withdrawal(
    calculator: &CompoundInterestCalculator,
    principal: f64,
    rate: InterestRate,
    months: u32,
) -> Result<f64> {
    if principal <= 0.0 {
        return Ok(0.0);
    }

    let monthly_rate = rate.monthly_rate();
    let mut low = 0.0_f64;
    let mut high = principal * (1.0 + monthly_rate);

    for _ in 0..MAX_ITERATIONS {
        let mid = (low + high) / 2.0;
        let balance = final_balance(calculator, principal, monthly_rate, months, mid)?;

        if balance.abs() < TOLERANCE || (high - low) / 2.0 < TOLERANCE {
            return Ok(mid);
        }

        if balance > 0.0 {
            low = mid;
        } else {
            high = mid;
        }
    }

    Ok((low + high) / 2.0)
}

/// Closed-form level annuity payment exhausting `principal` over `months`.
///
/// Used as a cross-check for the bisection solver; the two agree to well
/// under a cent.
pub fn annuity_payment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    if months == 0 {
        return 0.0;
    }
    if monthly_rate.abs() < 1e-12 {
        return principal / months as f64;
    }
    let v = 1.0 / (1.0 + monthly_rate);
    principal * monthly_rate / (1.0 - v.powi(months as i32))
}

fn final_balance(
    calculator: &CompoundInterestCalculator,
    principal: f64,
    monthly_rate: f64,
    months: u32,
    withdrawal: f64,
) -> Result<f64> {
    let schedule = calculator.execute(&CompoundInterestInput {
        initial_deposit: principal,
        monthly_deposit: -withdrawal,
        interest: monthly_rate * 100.0,
        interest_type: RateType::Monthly,
        period_in_months: months,
    })?;
    Ok(schedule.final_amount())
}
