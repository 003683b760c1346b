//! Reserve-fund projection engine
//!
//! Given an inventory of components with replacement or recurring
//! maintenance costs, this crate produces a multi-year cash-flow forecast
//! (contributions, expenditures, interest, balances) used to judge whether
//! a reserve fund stays solvent.
//!
//! The engine is a single-shot pure transform: [`calculate`] validates
//! its input, runs the expenditure scheduler, the contribution strategy,
//! and the funding plan simulator in order, and assembles an immutable
//! result. It performs no I/O and holds no state across calls, so
//! concurrent calls are safe and multiple scenarios parallelize trivially
//! (see [`scenario::run_batch`]).

pub mod analysis;
pub mod engine;
pub mod error;
pub mod input;
pub mod math;
pub mod projection;
pub mod result;
pub mod scenario;

// Re-export commonly used types
pub use engine::calculate;
pub use error::EngineError;
pub use input::{Component, CostMethod, StudyInput};
pub use projection::{ExpenditureSchedule, YearResult};
pub use result::{FundingStatus, StudyResult};
