//! Reporting analysis derived from the input and the expenditure schedule

pub mod allocation;
pub mod fully_funded;

pub use allocation::{CategoryAllocation, GraphSeries};
pub use fully_funded::ComponentSummary;
