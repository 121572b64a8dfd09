//! Schedule output structures for projections

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::money;

/// One month of a growth projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyEntry {
    /// Contribution made this month (negative for a withdrawal)
    #[serde(serialize_with = "money::serialize_cents")]
    pub deposit: f64,

    /// Interest earned this month
    #[serde(serialize_with = "money::serialize_cents")]
    pub interest: f64,

    /// Running balance at the end of this month
    #[serde(serialize_with = "money::serialize_cents")]
    pub total_amount: f64,

    /// Cumulative deposits through this month, initial deposit included
    #[serde(serialize_with = "money::serialize_cents")]
    pub total_deposit: f64,

    /// Cumulative interest through this month
    #[serde(serialize_with = "money::serialize_cents")]
    pub total_interest: f64,
}

/// Complete monthly projection, keyed by 1-indexed month
///
/// Invariant: `total_amount == total_deposit + total_interest` for the final
/// month and for every prefix of months.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GrowthSchedule {
    /// Per-month results keyed by month index (1..=period)
    pub months: BTreeMap<u32, MonthlyEntry>,

    /// Balance at the end of the projection
    #[serde(serialize_with = "money::serialize_cents")]
    pub total_amount: f64,

    /// Total contributed, initial deposit included
    #[serde(serialize_with = "money::serialize_cents")]
    pub total_deposit: f64,

    /// Total interest earned
    #[serde(serialize_with = "money::serialize_cents")]
    pub total_interest: f64,
}

impl GrowthSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one month and roll the top-level totals forward
    pub fn push_month(&mut self, month: u32, entry: MonthlyEntry) {
        self.total_amount = entry.total_amount;
        self.total_deposit = entry.total_deposit;
        self.total_interest = entry.total_interest;
        self.months.insert(month, entry);
    }

    /// Entry for a given 1-indexed month
    pub fn month(&self, month: u32) -> Option<&MonthlyEntry> {
        self.months.get(&month)
    }

    /// Number of projected months
    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Balance at the end of the projection
    pub fn final_amount(&self) -> f64 {
        self.total_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_month_rolls_totals() {
        let mut schedule = GrowthSchedule::new();
        schedule.push_month(
            1,
            MonthlyEntry {
                deposit: 100.0,
                interest: 10.0,
                total_amount: 1110.0,
                total_deposit: 1100.0,
                total_interest: 10.0,
            },
        );

        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.total_amount, 1110.0);
        assert_eq!(schedule.total_deposit, 1100.0);
        assert_eq!(schedule.total_interest, 10.0);
        assert_eq!(schedule.month(1).unwrap().interest, 10.0);
        assert!(schedule.month(2).is_none());
    }

    #[test]
    fn test_month_keys_serialize_as_map() {
        let mut schedule = GrowthSchedule::new();
        schedule.push_month(
            1,
            MonthlyEntry {
                deposit: 0.0,
                interest: 10.006,
                total_amount: 1010.006,
                total_deposit: 1000.0,
                total_interest: 10.006,
            },
        );

        let json = serde_json::to_value(&schedule).unwrap();
        // 1-indexed month keys, monetary fields rounded to cents
        assert!(json["months"]["1"].is_object());
        assert_eq!(json["months"]["1"]["interest"], 10.01);
        assert_eq!(json["total_amount"], 1010.01);
    }
}
