//! Month-by-month growth projections
//!
//! The compound calculator is the computational primitive: the retirement
//! projector and the cash-vs-installments comparator both run on top of it.

mod compound;
mod schedule;
mod simple;
pub mod solver;

pub use compound::{CompoundInterestCalculator, CompoundInterestInput};
pub use schedule::{GrowthSchedule, MonthlyEntry};
pub use simple::{SimpleInterestCalculator, SimpleInterestInput};
