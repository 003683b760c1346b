//! Category spend allocations and chart series

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::input::StudyInput;
use crate::math::round2;
use crate::projection::{ExpenditureSchedule, YearResult};

/// Projected spend share for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAllocation {
    pub category: String,
    /// Total projected spend for the category over the horizon
    pub total: Decimal,
    /// Share of all projected spend, as a percentage rounded to cents
    pub percent: Decimal,
}

/// Parallel arrays for charting the projection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSeries {
    pub calendar_years: Vec<i32>,
    pub ending_balances: Vec<Decimal>,
    pub contributions: Vec<Decimal>,
    pub expenditures: Vec<Decimal>,
    pub interest: Vec<Decimal>,
}

/// Group projected spend by component category, sorted by total
/// descending.
pub fn allocations(input: &StudyInput, schedule: &ExpenditureSchedule) -> Vec<CategoryAllocation> {
    // Categories resolve through the first component bearing each
    // schedule key, so duplicate-keyed components count once.
    let mut key_category: HashMap<&str, &str> = HashMap::new();
    for component in &input.components {
        key_category.entry(component.key()).or_insert_with(|| component.category());
    }

    let mut totals: HashMap<&str, Decimal> = HashMap::new();
    for (key, series) in &schedule.by_component {
        let category = key_category.get(key.as_str()).copied().unwrap_or("General");
        let spend: Decimal = series.iter().copied().sum();
        *totals.entry(category).or_insert(Decimal::ZERO) += spend;
    }

    let grand_total: Decimal = totals.values().copied().sum();

    let mut allocations: Vec<CategoryAllocation> = totals
        .into_iter()
        .map(|(category, total)| {
            let percent = if grand_total > Decimal::ZERO {
                round2(total / grand_total * Decimal::ONE_HUNDRED)
            } else {
                Decimal::ZERO
            };
            CategoryAllocation {
                category: category.to_string(),
                total,
                percent,
            }
        })
        .collect();

    allocations.sort_by(|a, b| b.total.cmp(&a.total).then(a.category.cmp(&b.category)));
    allocations
}

/// Extract the chart series from the simulated years.
pub fn graph(years: &[YearResult]) -> GraphSeries {
    GraphSeries {
        calendar_years: years.iter().map(|y| y.calendar_year).collect(),
        ending_balances: years.iter().map(|y| y.ending_balance).collect(),
        contributions: years.iter().map(|y| y.contribution).collect(),
        expenditures: years.iter().map(|y| y.expenditures).collect(),
        interest: years.iter().map(|y| y.interest_earned).collect(),
    }
}
