//! Scenario runner for batch what-if projections
//!
//! Runs the same request across many candidate rates without rebuilding
//! calculators, in parallel for larger batches. Used for rate-sensitivity
//! comparisons and retirement what-ifs.

use rayon::prelude::*;

use crate::error::Result;
use crate::planning::{RetirementPlan, RetirementProjection, RetirementProjector};
use crate::projection::{CompoundInterestCalculator, CompoundInterestInput, GrowthSchedule};

/// Pre-built calculators for running many scenarios
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let schedules = runner.run_rate_scenarios(&base_input, &[6.0, 8.0, 10.0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioRunner {
    compound: CompoundInterestCalculator,
    retirement: RetirementProjector,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a single compound projection
    pub fn run(&self, input: &CompoundInterestInput) -> Result<GrowthSchedule> {
        self.compound.execute(input)
    }

    /// Run the same projection once per candidate rate (percentage, keeping
    /// the base request's rate type)
    pub fn run_rate_scenarios(
        &self,
        base: &CompoundInterestInput,
        rates: &[f64],
    ) -> Vec<Result<GrowthSchedule>> {
        log::debug!("running {} compound rate scenarios", rates.len());
        rates
            .par_iter()
            .map(|&rate| {
                self.compound.execute(&CompoundInterestInput {
                    interest: rate,
                    ..*base
                })
            })
            .collect()
    }

    /// Run the same retirement plan once per candidate rate
    pub fn run_retirement_scenarios(
        &self,
        base: &RetirementPlan,
        rates: &[f64],
    ) -> Vec<Result<RetirementProjection>> {
        log::debug!("running {} retirement rate scenarios", rates.len());
        rates
            .par_iter()
            .map(|&rate| {
                self.retirement.execute(&RetirementPlan {
                    interest: rate,
                    ..*base
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::RateType;

    #[test]
    fn test_rate_scenarios_preserve_order_and_monotonicity() {
        let runner = ScenarioRunner::new();
        let base = CompoundInterestInput {
            initial_deposit: 10_000.0,
            monthly_deposit: 100.0,
            interest: 0.0,
            interest_type: RateType::Annual,
            period_in_months: 120,
        };

        let results = runner.run_rate_scenarios(&base, &[3.0, 4.0, 5.0]);
        assert_eq!(results.len(), 3);

        let finals: Vec<f64> = results
            .into_iter()
            .map(|r| r.unwrap().final_amount())
            .collect();

        // Higher rate, higher final balance
        assert!(finals[1] > finals[0]);
        assert!(finals[2] > finals[1]);
    }

    #[test]
    fn test_invalid_scenario_surfaces_its_own_error() {
        let runner = ScenarioRunner::new();
        let base = CompoundInterestInput {
            initial_deposit: 1_000.0,
            monthly_deposit: 0.0,
            interest: 0.0,
            interest_type: RateType::Monthly,
            period_in_months: 12,
        };

        let results = runner.run_rate_scenarios(&base, &[1.0, 200.0]);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }

    #[test]
    fn test_retirement_scenarios() {
        let runner = ScenarioRunner::new();
        let base = RetirementPlan {
            age: 35,
            retirement_age: 65,
            life_expectancy: 90,
            initial_deposit: 50_000.0,
            monthly_income: 10_000.0,
            income_investment_percentage: 15.0,
            interest: 0.0,
            interest_type: RateType::Annual,
            goal_income: 6_000.0,
            goal_patrimony: 1_000_000.0,
        };

        let results = runner.run_retirement_scenarios(&base, &[4.0, 8.0]);
        let low = results[0].as_ref().unwrap();
        let high = results[1].as_ref().unwrap();
        assert!(high.patrimony_at_retirement > low.patrimony_at_retirement);
        assert!(high.max_monthly_expense > low.max_monthly_expense);
    }
}
