//! Study input: component inventory, funding policies, and validation

mod component;
mod data;
mod validate;

pub use component::{Component, CostMethod};
pub use data::{
    ContributionFrequency, ContributionStrategy, ContributionTiming, ExpenditureTiming,
    InterestModel, RoundingPolicy, StudyInput,
};
pub use validate::{
    is_warning, MAX_PROJECTION_YEARS, MAX_START_YEAR, MIN_PROJECTION_YEARS, MIN_START_YEAR,
    WARNING_PREFIX,
};
