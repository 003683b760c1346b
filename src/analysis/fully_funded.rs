//! Fully-funded (ideal reserve) balances and component reporting summaries
//!
//! The fully-funded balance is the age-based depreciation fraction of a
//! component's current cost. It is computed from the input alone and does
//! not depend on the funding plan.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::input::{Component, CostMethod, StudyInput};
use crate::math::round2;
use crate::projection::ExpenditureSchedule;

/// Reporting summary for a single component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSummary {
    pub key: String,
    pub name: String,
    pub category: String,
    pub method: CostMethod,

    /// Age-based ideal reserve for this component
    pub fully_funded_balance: Decimal,

    /// Share of the starting balance allocated to this component, in
    /// proportion to its fully-funded balance. A reporting heuristic,
    /// not a tracked sub-ledger.
    pub current_reserve: Decimal,

    /// Calendar year of the first scheduled expenditure, if any
    pub next_expenditure_year: Option<i32>,

    /// Cost of the first scheduled expenditure, if any
    pub next_expenditure_cost: Option<Decimal>,

    /// Number of projection years with a scheduled expenditure
    pub expenditure_count: u32,

    /// Total projected expenditures over the horizon
    pub total_expenditures: Decimal,
}

/// Age-based ideal reserve for one component.
///
/// PRN components carry no depreciation reserve and always report zero,
/// as do components without a positive useful life.
pub fn component_balance(input: &StudyInput, component: &Component) -> Decimal {
    if component.method == CostMethod::Prn {
        return Decimal::ZERO;
    }
    let useful = component.useful_life_years as i32;
    if useful <= 0 {
        return Decimal::ZERO;
    }

    let remaining = component.remaining_life(input.start_year);
    let age = (useful - remaining).clamp(0, useful);
    round2(component.current_cost * Decimal::from(age) / Decimal::from(useful))
}

/// Total fully-funded balance across all components.
pub fn total_balance(input: &StudyInput) -> Decimal {
    input
        .components
        .iter()
        .map(|c| component_balance(input, c))
        .sum()
}

/// Build per-component reporting summaries.
pub fn summaries(input: &StudyInput, schedule: &ExpenditureSchedule) -> Vec<ComponentSummary> {
    let total = total_balance(input);

    input
        .components
        .iter()
        .map(|component| {
            let fully_funded = component_balance(input, component);
            let current_reserve = if total > Decimal::ZERO {
                round2(input.starting_balance * fully_funded / total)
            } else {
                Decimal::ZERO
            };

            let series = schedule.series(component.key()).unwrap_or(&[]);
            let next = series
                .iter()
                .enumerate()
                .find(|(_, value)| !value.is_zero())
                .map(|(i, value)| (input.calendar_year(i as u32 + 1), *value));

            ComponentSummary {
                key: component.key().to_string(),
                name: component.name.clone(),
                category: component.category().to_string(),
                method: component.method,
                fully_funded_balance: fully_funded,
                current_reserve,
                next_expenditure_year: next.map(|(year, _)| year),
                next_expenditure_cost: next.map(|(_, cost)| cost),
                expenditure_count: series.iter().filter(|v| !v.is_zero()).count() as u32,
                total_expenditures: series.iter().copied().sum(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::expenditure;
    use rust_decimal_macros::dec;

    fn roof(useful: u32, remaining: i32) -> Component {
        let mut c = Component::new("Roof", CostMethod::Replacement, dec!(100000));
        c.useful_life_years = useful;
        c.remaining_life_override = Some(remaining);
        c
    }

    #[test]
    fn test_age_based_balance() {
        let input = StudyInput::new(2025, 30, dec!(0), dec!(0), vec![roof(20, 5)]);
        // age = 20 - 5 = 15, balance = 100000 * 15/20
        assert_eq!(component_balance(&input, &input.components[0]), dec!(75000.00));
    }

    #[test]
    fn test_age_clamps_to_useful_life() {
        // Past due: remaining -3, age clamps to 20
        let input = StudyInput::new(2025, 30, dec!(0), dec!(0), vec![roof(20, -3)]);
        assert_eq!(
            component_balance(&input, &input.components[0]),
            dec!(100000.00)
        );

        // Brand new with extended remaining life: age clamps to 0
        let input = StudyInput::new(2025, 30, dec!(0), dec!(0), vec![roof(20, 25)]);
        assert_eq!(component_balance(&input, &input.components[0]), dec!(0.00));
    }

    #[test]
    fn test_prn_and_zero_life_components_need_no_reserve() {
        let mut paint = Component::new("Painting", CostMethod::Prn, dec!(5000));
        paint.useful_life_years = 10;
        paint.remaining_life_override = Some(0);
        let no_life = Component::new("Misc", CostMethod::Replacement, dec!(5000));

        let input = StudyInput::new(2025, 30, dec!(0), dec!(0), vec![paint, no_life]);
        assert_eq!(component_balance(&input, &input.components[0]), dec!(0));
        assert_eq!(component_balance(&input, &input.components[1]), dec!(0));
        assert_eq!(total_balance(&input), dec!(0));
    }

    #[test]
    fn test_current_reserve_allocation() {
        let mut input = StudyInput::new(
            2025,
            10,
            dec!(30000),
            dec!(0),
            vec![roof(20, 5), roof(10, 5)],
        );
        input.components[1].name = "Boiler".to_string();
        input.components[1].current_cost = dec!(50000);

        // Roof: 75000, Boiler: 50000 * 5/10 = 25000, total 100000
        let schedule = expenditure::generate(&input);
        let summaries = summaries(&input, &schedule);

        assert_eq!(summaries[0].current_reserve, dec!(22500.00));
        assert_eq!(summaries[1].current_reserve, dec!(7500.00));
    }

    #[test]
    fn test_next_expenditure_and_counts() {
        let mut input = StudyInput::new(2025, 25, dec!(0), dec!(0), vec![roof(10, 4)]);
        input.components[0].current_cost = dec!(40000);

        let schedule = expenditure::generate(&input);
        let summaries = summaries(&input, &schedule);
        let summary = &summaries[0];

        // First occurrence at year 5 (remaining 4), recurring at 15, 25
        assert_eq!(summary.next_expenditure_year, Some(2029));
        assert_eq!(summary.next_expenditure_cost, Some(dec!(40000.00)));
        assert_eq!(summary.expenditure_count, 3);
        assert_eq!(summary.total_expenditures, dec!(120000.00));
    }

    #[test]
    fn test_zero_total_keeps_reserves_at_zero() {
        let paint = Component::new("Painting", CostMethod::Prn, dec!(5000));
        let input = StudyInput::new(2025, 5, dec!(10000), dec!(0), vec![paint]);

        let schedule = expenditure::generate(&input);
        let summaries = summaries(&input, &schedule);
        assert_eq!(summaries[0].current_reserve, dec!(0));
    }
}
