//! Study input definition and funding-policy enums

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::component::Component;

fn default_start_year() -> i32 {
    Utc::now().year()
}

fn default_years() -> u32 {
    30
}

/// Interest accrual model for the funding plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InterestModel {
    /// Closed-form annual interest on a timing-weighted average balance
    #[default]
    AnnualAverageBalance,
    /// Explicit 12-month simulation with monthly compounding
    MonthlySimulation,
}

/// How often contributions are deposited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContributionFrequency {
    Monthly,
    #[default]
    Annual,
}

/// When contributions land within their period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContributionTiming {
    StartOfPeriod,
    MidPeriod,
    #[default]
    EndOfPeriod,
}

/// When expenditures land within the year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExpenditureTiming {
    StartOfYear,
    #[default]
    MidYear,
    EndOfYear,
    MonthlySpread,
}

/// Where cents rounding applies while building expenditure totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundingPolicy {
    /// Round every per-component-year value before summing
    #[default]
    PerComponentPerYear,
    /// Sum unrounded component values, round only the yearly total
    PerYearTotalsOnly,
}

/// Funding strategy for the contribution stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContributionStrategy {
    /// Constant annual contribution
    #[default]
    FixedAnnual,
    /// Contribution escalating by a fixed percentage each year
    EscalatingPercent,
    /// Escalating baseline with forward deficit correction
    MaintainNonNegativeBalance,
}

/// Immutable input for one reserve study calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyInput {
    /// First calendar year of the projection
    #[serde(default = "default_start_year")]
    pub start_year: i32,

    /// Projection length N in years
    #[serde(default = "default_years")]
    pub years: u32,

    /// Fund balance at the start of year 1
    pub starting_balance: Decimal,

    /// Default annual inflation rate applied to component costs
    #[serde(default)]
    pub inflation_rate: Decimal,

    /// Annual interest rate earned on positive balances
    #[serde(default)]
    pub interest_rate: Decimal,

    #[serde(default)]
    pub interest_model: InterestModel,

    #[serde(default)]
    pub contribution_frequency: ContributionFrequency,

    #[serde(default)]
    pub contribution_timing: ContributionTiming,

    #[serde(default)]
    pub expenditure_timing: ExpenditureTiming,

    #[serde(default)]
    pub rounding_policy: RoundingPolicy,

    #[serde(default)]
    pub contribution_strategy: ContributionStrategy,

    /// First-year annual contribution for all strategies
    pub initial_annual_contribution: Decimal,

    /// Annual escalation rate for EscalatingPercent and the
    /// MaintainNonNegativeBalance baseline
    #[serde(default)]
    pub escalation_rate: Decimal,

    /// Component inventory, in reporting order
    pub components: Vec<Component>,
}

impl StudyInput {
    /// Create a study with the required fields and default policies.
    pub fn new(
        start_year: i32,
        years: u32,
        starting_balance: Decimal,
        initial_annual_contribution: Decimal,
        components: Vec<Component>,
    ) -> Self {
        Self {
            start_year,
            years,
            starting_balance,
            inflation_rate: Decimal::ZERO,
            interest_rate: Decimal::ZERO,
            interest_model: InterestModel::default(),
            contribution_frequency: ContributionFrequency::default(),
            contribution_timing: ContributionTiming::default(),
            expenditure_timing: ExpenditureTiming::default(),
            rounding_policy: RoundingPolicy::default(),
            contribution_strategy: ContributionStrategy::default(),
            initial_annual_contribution,
            escalation_rate: Decimal::ZERO,
            components,
        }
    }

    /// Effective inflation rate for a component: its override, else the
    /// study default.
    pub fn inflation_for(&self, component: &Component) -> Decimal {
        component.inflation_override.unwrap_or(self.inflation_rate)
    }

    /// Calendar year for a 1-based projection year index.
    pub fn calendar_year(&self, year_index: u32) -> i32 {
        self.start_year + year_index as i32 - 1
    }
}
