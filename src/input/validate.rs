//! Input validation
//!
//! Produces a flat list of messages. Hard range violations abort the
//! calculation; advisories carry a `Warning:` prefix and let the pipeline
//! proceed with the message attached to the result.

use std::collections::HashSet;

use rust_decimal::Decimal;

use super::data::StudyInput;

/// Minimum projection length in years
pub const MIN_PROJECTION_YEARS: u32 = 1;
/// Maximum projection length in years
pub const MAX_PROJECTION_YEARS: u32 = 100;
/// Earliest supported start year
pub const MIN_START_YEAR: i32 = 1900;
/// Latest supported start year
pub const MAX_START_YEAR: i32 = 2200;

/// Prefix distinguishing advisories from hard errors
pub const WARNING_PREFIX: &str = "Warning:";

/// Whether a validation message is a non-fatal advisory.
pub fn is_warning(message: &str) -> bool {
    message.starts_with(WARNING_PREFIX)
}

fn inflation_bounds() -> (Decimal, Decimal) {
    (Decimal::new(-20, 2), Decimal::new(50, 2))
}

fn interest_bounds() -> (Decimal, Decimal) {
    (Decimal::new(-10, 2), Decimal::new(30, 2))
}

fn escalation_bounds() -> (Decimal, Decimal) {
    (Decimal::new(-20, 2), Decimal::new(50, 2))
}

impl StudyInput {
    /// Validate ranges and structure. Returns every finding; callers
    /// partition on [`is_warning`].
    pub fn validate(&self) -> Vec<String> {
        let mut messages = Vec::new();

        if !(MIN_PROJECTION_YEARS..=MAX_PROJECTION_YEARS).contains(&self.years) {
            messages.push(format!(
                "Projection length must be between {MIN_PROJECTION_YEARS} and {MAX_PROJECTION_YEARS} years"
            ));
        }

        if !(MIN_START_YEAR..=MAX_START_YEAR).contains(&self.start_year) {
            messages.push(format!(
                "Start year must be between {MIN_START_YEAR} and {MAX_START_YEAR}"
            ));
        }

        if self.starting_balance < Decimal::ZERO {
            messages.push("Starting balance cannot be negative".to_string());
        }

        let (inf_lo, inf_hi) = inflation_bounds();
        if self.inflation_rate < inf_lo || self.inflation_rate > inf_hi {
            messages.push("Inflation rate must be between -20% and 50%".to_string());
        }

        let (int_lo, int_hi) = interest_bounds();
        if self.interest_rate < int_lo || self.interest_rate > int_hi {
            messages.push("Interest rate must be between -10% and 30%".to_string());
        }

        let (esc_lo, esc_hi) = escalation_bounds();
        if self.escalation_rate < esc_lo || self.escalation_rate > esc_hi {
            messages.push("Escalation rate must be between -20% and 50%".to_string());
        }

        if self.components.is_empty() {
            messages.push("At least one component is required".to_string());
        }

        for component in &self.components {
            if let Some(rate) = component.inflation_override {
                if rate < inf_lo || rate > inf_hi {
                    messages.push(format!(
                        "Component '{}': inflation override must be between -20% and 50%",
                        component.name
                    ));
                }
            }
        }

        // Duplicate names are advisory only
        let mut seen = HashSet::new();
        for component in &self.components {
            if !seen.insert(component.name.as_str()) {
                messages.push(format!(
                    "{WARNING_PREFIX} duplicate component name '{}'",
                    component.name
                ));
            }
        }

        messages
    }
}
