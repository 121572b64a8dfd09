//! Currency rounding at the serialization boundary
//!
//! Projections accumulate in full f64 precision; amounts are rounded to the
//! currency minor unit (2 decimal places) only when they cross the JSON
//! boundary, so rounding error never compounds through a schedule.

use serde::Serializer;

/// Round a monetary amount to the currency minor unit.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Serde helper: serialize a monetary field rounded to cents.
pub fn serialize_cents<S>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(round_to_cents(*amount))
}
