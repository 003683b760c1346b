//! Projection pipeline: expenditure scheduling, contribution strategies,
//! and the funding plan simulation

pub mod contributions;
pub mod expenditure;
pub mod plan;

pub use expenditure::ExpenditureSchedule;
pub use plan::YearResult;
