//! Emergency reserve sizing
//!
//! A policy-table lookup plus arithmetic: job stability determines how many
//! months of expenses to hold, and the savings rate determines how long it
//! takes to get there. The table ships with defaults and can be loaded from
//! CSV for deployments with a different risk policy.

use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::money;

/// Income stability category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    /// Irregular income, highest risk
    Entrepreneur,
    /// Salaried private-sector worker
    Employee,
    /// Stable income, lowest risk
    CivilServant,
}

impl JobType {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "ENTREPRENEUR" => Some(Self::Entrepreneur),
            "EMPLOYEE" => Some(Self::Employee),
            "CIVIL_SERVANT" => Some(Self::CivilServant),
            _ => None,
        }
    }
}

/// Recommended reserve duration, in months of expenses, by job type
#[derive(Debug, Clone, PartialEq)]
pub struct ReservePolicy {
    months_by_job: HashMap<JobType, u32>,
}

impl Default for ReservePolicy {
    fn default() -> Self {
        let mut months_by_job = HashMap::new();
        months_by_job.insert(JobType::Entrepreneur, 6);
        months_by_job.insert(JobType::Employee, 4);
        months_by_job.insert(JobType::CivilServant, 3);
        Self { months_by_job }
    }
}

impl ReservePolicy {
    /// Load a policy table from a CSV file with `job_type,months` rows
    pub fn from_csv_path(path: &Path) -> std::result::Result<Self, Box<dyn Error>> {
        let file = File::open(path)?;
        let mut reader = csv::Reader::from_reader(file);

        let mut months_by_job = HashMap::new();
        for result in reader.records() {
            let record = result?;
            let job = JobType::parse(&record[0])
                .ok_or_else(|| format!("unknown job type in reserve policy: {}", &record[0]))?;
            let months: u32 = record[1].parse()?;
            months_by_job.insert(job, months);
        }

        // An incomplete table would make some requests unanswerable
        for job in [JobType::Entrepreneur, JobType::Employee, JobType::CivilServant] {
            if !months_by_job.contains_key(&job) {
                return Err(format!("reserve policy is missing an entry for {:?}", job).into());
            }
        }

        Ok(Self { months_by_job })
    }

    /// Recommended months of expenses for a job type
    pub fn recommended_months(&self, job_type: JobType) -> u32 {
        self.months_by_job.get(&job_type).copied().unwrap_or(6)
    }
}

/// Request for an emergency reserve recommendation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReserveInput {
    pub job_type: JobType,

    /// Gross monthly income
    pub monthly_income: f64,

    /// Total monthly expenses the reserve must cover
    pub monthly_expenses: f64,

    /// Percentage of income set aside each month (0-100)
    pub monthly_savings_percentage: f64,
}

impl ReserveInput {
    pub fn validate(&self) -> Result<()> {
        if !self.monthly_income.is_finite() || self.monthly_income < 0.0 {
            return Err(EngineError::validation(
                "monthly_income",
                format!("must be >= 0, got {}", self.monthly_income),
            ));
        }
        if !self.monthly_expenses.is_finite() || self.monthly_expenses < 0.0 {
            return Err(EngineError::validation(
                "monthly_expenses",
                format!("must be >= 0, got {}", self.monthly_expenses),
            ));
        }
        if !self.monthly_savings_percentage.is_finite()
            || self.monthly_savings_percentage < 0.0
            || self.monthly_savings_percentage > 100.0
        {
            return Err(EngineError::validation(
                "monthly_savings_percentage",
                format!(
                    "must be a percentage between 0 and 100, got {}",
                    self.monthly_savings_percentage
                ),
            ));
        }
        Ok(())
    }
}

/// Emergency reserve recommendation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReserveRecommendation {
    /// Recommended reserve duration, in months of expenses
    pub reserve_in_months: u32,

    /// Recommended reserve value (months x expenses)
    #[serde(serialize_with = "money::serialize_cents")]
    pub reserve_in_value: f64,

    /// Amount saved each month (income x savings percentage)
    #[serde(serialize_with = "money::serialize_cents")]
    pub monthly_savings: f64,

    /// Whole months needed to fill the reserve at that savings rate
    pub months_to_achieve: u32,
}

/// Sizes an emergency reserve from a job-risk policy table
#[derive(Debug, Clone, Default)]
pub struct EmergencyReserveSizer {
    policy: ReservePolicy,
}

impl EmergencyReserveSizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ReservePolicy) -> Self {
        Self { policy }
    }

    pub fn execute(&self, input: &ReserveInput) -> Result<ReserveRecommendation> {
        input.validate()?;

        let monthly_savings = input.monthly_income * input.monthly_savings_percentage / 100.0;
        if monthly_savings <= 0.0 {
            return Err(EngineError::validation(
                "monthly_savings_percentage",
                "monthly savings (income x percentage) must be positive to reach the reserve",
            ));
        }

        let reserve_in_months = self.policy.recommended_months(input.job_type);
        let reserve_in_value = reserve_in_months as f64 * input.monthly_expenses;
        let months_to_achieve = (reserve_in_value / monthly_savings).ceil() as u32;

        Ok(ReserveRecommendation {
            reserve_in_months,
            reserve_in_value,
            monthly_savings,
            months_to_achieve,
        })
    }
}
