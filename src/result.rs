//! Calculation result and derived reporting metrics
//!
//! A result is either fully populated (success) or carries only an error
//! message (failure), never partial data. Summary metrics are derived on
//! read from the year rows and component summaries; nothing is stored
//! twice.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analysis::{CategoryAllocation, ComponentSummary, GraphSeries};
use crate::math::round2;
use crate::projection::{ExpenditureSchedule, YearResult};

/// Funding strength band derived from percent funded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FundingStatus {
    /// 70% funded or better
    Strong,
    /// 30% to 70% funded
    Fair,
    /// Below 30% funded
    Weak,
}

/// Complete output of one reserve study calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyResult {
    pub success: bool,
    pub error: Option<String>,
    pub warnings: Vec<String>,

    /// Year-by-year funding plan, ascending by year index
    pub years: Vec<YearResult>,

    /// Category spend allocations, descending by total
    pub allocations: Vec<CategoryAllocation>,

    /// Chart series parallel to `years`
    pub graph: GraphSeries,

    /// Per-component expenditure schedule
    pub schedule: ExpenditureSchedule,

    /// Per-component reporting summaries, in input order
    pub component_summaries: Vec<ComponentSummary>,
}

impl StudyResult {
    /// A failed calculation carrying only the error message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
            warnings: Vec::new(),
            years: Vec::new(),
            allocations: Vec::new(),
            graph: GraphSeries::default(),
            schedule: ExpenditureSchedule::default(),
            component_summaries: Vec::new(),
        }
    }

    /// Total fully-funded balance across all components.
    pub fn fully_funded_total(&self) -> Decimal {
        self.component_summaries
            .iter()
            .map(|s| s.fully_funded_balance)
            .sum()
    }

    /// Starting balance as a percentage of the fully-funded total.
    /// A study with no depreciation reserve requirement reports 100.
    pub fn percent_funded(&self) -> Decimal {
        let total = self.fully_funded_total();
        if total <= Decimal::ZERO {
            return Decimal::ONE_HUNDRED;
        }
        let starting = self
            .years
            .first()
            .map(|y| y.beginning_balance)
            .unwrap_or(Decimal::ZERO);
        round2(starting / total * Decimal::ONE_HUNDRED)
    }

    /// Categorical funding strength derived from percent funded.
    pub fn funding_status(&self) -> FundingStatus {
        let percent = self.percent_funded();
        if percent >= Decimal::from(70) {
            FundingStatus::Strong
        } else if percent >= Decimal::from(30) {
            FundingStatus::Fair
        } else {
            FundingStatus::Weak
        }
    }

    /// Calendar years whose ending balance is negative.
    pub fn deficit_years(&self) -> Vec<i32> {
        self.years
            .iter()
            .filter(|y| y.ending_balance < Decimal::ZERO)
            .map(|y| y.calendar_year)
            .collect()
    }

    /// First calendar year the fund goes negative, if any.
    pub fn first_deficit_year(&self) -> Option<i32> {
        self.deficit_years().first().copied()
    }

    /// Lowest ending balance across the projection.
    pub fn min_ending_balance(&self) -> Decimal {
        self.years
            .iter()
            .map(|y| y.ending_balance)
            .min()
            .unwrap_or(Decimal::ZERO)
    }

    /// One-time assessment needed to keep the fund non-negative.
    pub fn special_assessment_required(&self) -> Decimal {
        let min = self.min_ending_balance();
        if min < Decimal::ZERO {
            round2(-min)
        } else {
            Decimal::ZERO
        }
    }

    /// Largest single-year expenditure and its calendar year.
    pub fn peak_expenditure(&self) -> Option<(i32, Decimal)> {
        self.years
            .iter()
            .max_by_key(|y| y.expenditures)
            .filter(|y| y.expenditures > Decimal::ZERO)
            .map(|y| (y.calendar_year, y.expenditures))
    }

    /// Total contributions over the horizon.
    pub fn total_contributions(&self) -> Decimal {
        self.years.iter().map(|y| y.contribution).sum()
    }

    /// Total expenditures over the horizon.
    pub fn total_expenditures(&self) -> Decimal {
        self.years.iter().map(|y| y.expenditures).sum()
    }
}
