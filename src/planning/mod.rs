//! Composed financial planning calculators
//!
//! Retirement and cash-vs-installments are layered on the compound interest
//! primitive; reserve sizing is a standalone policy lookup.

mod installments;
mod reserve;
mod retirement;

pub use installments::{
    CashVsInstallmentsComparator, InstallmentComparison, InstallmentInput, PaymentOption,
};
pub use reserve::{
    EmergencyReserveSizer, JobType, ReserveInput, ReservePolicy, ReserveRecommendation,
};
pub use retirement::{RetirementPlan, RetirementProjection, RetirementProjector};
