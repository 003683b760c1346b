//! Expenditure scheduling: per-component projected outlays by year
//!
//! Each component's cost and lifecycle rules expand into an N-length
//! yearly series; the series sum into the study totals under the input's
//! rounding policy.

use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::input::{Component, CostMethod, RoundingPolicy, StudyInput};
use crate::math::{inflation_factor, round2};

/// Per-component expenditure series plus the yearly totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpenditureSchedule {
    /// Component key -> N-length series (index 0 = projection year 1).
    /// Components resolving to the same key accumulate into one series.
    pub by_component: HashMap<String, Vec<Decimal>>,

    /// N-length totals across all components
    pub totals: Vec<Decimal>,
}

impl ExpenditureSchedule {
    /// Series for a component key, if scheduled.
    pub fn series(&self, key: &str) -> Option<&[Decimal]> {
        self.by_component.get(key).map(Vec::as_slice)
    }

    /// Sum of all projected expenditures over the horizon.
    pub fn grand_total(&self) -> Decimal {
        self.totals.iter().copied().sum()
    }
}

/// Build the full expenditure schedule for a study.
pub fn generate(input: &StudyInput) -> ExpenditureSchedule {
    let n = input.years as usize;
    let mut schedule = ExpenditureSchedule {
        by_component: HashMap::new(),
        totals: vec![Decimal::ZERO; n],
    };

    for component in &input.components {
        let mut series = component_series(input, component);

        if input.rounding_policy == RoundingPolicy::PerComponentPerYear {
            for value in series.iter_mut() {
                *value = round2(*value);
            }
        }

        for (total, value) in schedule.totals.iter_mut().zip(&series) {
            *total += *value;
        }

        let entry = schedule
            .by_component
            .entry(component.key().to_string())
            .or_insert_with(|| vec![Decimal::ZERO; n]);
        for (slot, value) in entry.iter_mut().zip(&series) {
            *slot += *value;
        }
    }

    if input.rounding_policy == RoundingPolicy::PerYearTotalsOnly {
        for total in schedule.totals.iter_mut() {
            *total = round2(*total);
        }
    }

    debug!(
        "expenditure schedule: {} keys, grand total {}",
        schedule.by_component.len(),
        schedule.grand_total()
    );
    schedule
}

/// Unrounded expenditure series for one component.
fn component_series(input: &StudyInput, component: &Component) -> Vec<Decimal> {
    match component.method {
        CostMethod::Replacement => replacement_series(input, component),
        CostMethod::Prn => prn_series(input, component),
        CostMethod::Combo => {
            let mut series = replacement_series(input, component);
            for (slot, value) in series.iter_mut().zip(prn_series(input, component)) {
                *slot += value;
            }
            series
        }
    }
}

fn replacement_series(input: &StudyInput, component: &Component) -> Vec<Decimal> {
    let n = input.years as usize;
    let mut series = vec![Decimal::ZERO; n];

    // Lenient: no useful life means no replacement schedule
    if component.useful_life_years == 0 {
        return series;
    }

    let rate = input.inflation_for(component);
    let remaining = component.remaining_life(input.start_year);
    let first = if remaining <= 0 { 1 } else { remaining as u32 + 1 };

    let mut t = first;
    while (t as usize) <= n {
        series[t as usize - 1] += component.current_cost * inflation_factor(rate, t);
        t += component.useful_life_years;
    }
    series
}

fn prn_series(input: &StudyInput, component: &Component) -> Vec<Decimal> {
    let n = input.years as usize;
    let mut series = vec![Decimal::ZERO; n];

    let cycle = component.cycle_years.unwrap_or(1).max(1);
    let base = component.annual_cost_override.unwrap_or(component.current_cost);
    let rate = input.inflation_for(component);

    let mut t: u32 = 1;
    while (t as usize) <= n {
        series[t as usize - 1] += base * inflation_factor(rate, t);
        t += cycle;
    }
    series
}
