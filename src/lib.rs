//! Finance Engine - calculation core for a personal finance platform
//!
//! This library provides:
//! - Simple and compound interest projections with recurring deposits
//! - Retirement readiness projection (accumulation + decumulation phases)
//! - Emergency reserve sizing by job stability
//! - Cash vs. installments purchase comparison
//! - Multi-scenario batch runner

pub mod error;
pub mod money;
pub mod planning;
pub mod projection;
pub mod rates;
pub mod scenario;

// Re-export commonly used types
pub use error::{EngineError, Result};
pub use planning::{CashVsInstallmentsComparator, EmergencyReserveSizer, RetirementProjector};
pub use projection::{CompoundInterestCalculator, GrowthSchedule, SimpleInterestCalculator};
pub use rates::{InterestRate, RateType};
pub use scenario::ScenarioRunner;
