//! Engine error types
//!
//! The calculators have exactly one failure mode: input validation. Every
//! `execute` validates its full request before iterating, so a caller either
//! gets a complete schedule or a `Validation` error naming the offending
//! field. No partial results are ever returned.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A request field violated its documented range.
    #[error("validation failed for `{field}`: {constraint}")]
    Validation {
        /// Name of the offending field, as it appears in the request body
        field: &'static str,
        /// The violated constraint
        constraint: String,
    },
}

impl EngineError {
    pub(crate) fn validation(field: &'static str, constraint: impl Into<String>) -> Self {
        Self::Validation {
            field,
            constraint: constraint.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
