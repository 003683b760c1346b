//! Component inventory records and cost-recurrence methods

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cost-recurrence method for a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostMethod {
    /// One-time replacement recurring on the useful-life cycle
    Replacement,
    /// Periodic repair/maintenance with no depreciation reserve
    Prn,
    /// Replacement plus PRN on the same component
    Combo,
}

/// A single fund-requiring asset with its own cost and recurrence rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    /// Stable identifier; the schedule key falls back to `name` when absent
    #[serde(default)]
    pub id: Option<String>,

    /// Display name
    pub name: String,

    /// Reporting category; defaults to "General"
    #[serde(default)]
    pub category: Option<String>,

    /// Cost-recurrence method
    pub method: CostMethod,

    /// Current replacement cost in today's dollars
    pub current_cost: Decimal,

    /// Overrides the study-level inflation rate when set
    #[serde(default)]
    pub inflation_override: Option<Decimal>,

    /// Calendar year the component was last replaced or serviced
    #[serde(default)]
    pub last_service_year: i32,

    /// Useful life in years; zero disables the replacement schedule
    #[serde(default)]
    pub useful_life_years: u32,

    /// Overrides the derived remaining life when set; zero or negative
    /// means replacement is already due
    #[serde(default)]
    pub remaining_life_override: Option<i32>,

    /// PRN cycle length in years; treated as 1 when absent or zero
    #[serde(default)]
    pub cycle_years: Option<u32>,

    /// PRN per-occurrence cost; falls back to `current_cost`
    #[serde(default)]
    pub annual_cost_override: Option<Decimal>,
}

impl Component {
    /// Create a component with the required fields; everything else
    /// starts unset.
    pub fn new(name: impl Into<String>, method: CostMethod, current_cost: Decimal) -> Self {
        Self {
            id: None,
            name: name.into(),
            category: None,
            method,
            current_cost,
            inflation_override: None,
            last_service_year: 0,
            useful_life_years: 0,
            remaining_life_override: None,
            cycle_years: None,
            annual_cost_override: None,
        }
    }

    /// Schedule key: explicit id when present and non-empty, else name.
    pub fn key(&self) -> &str {
        match &self.id {
            Some(id) if !id.is_empty() => id,
            _ => &self.name,
        }
    }

    /// Reporting category, defaulting to "General".
    pub fn category(&self) -> &str {
        match &self.category {
            Some(c) if !c.is_empty() => c,
            _ => "General",
        }
    }

    /// Remaining life in years measured from the study start year.
    /// Negative when the component is already past due.
    pub fn remaining_life(&self, start_year: i32) -> i32 {
        self.remaining_life_override.unwrap_or_else(|| {
            self.last_service_year + self.useful_life_years as i32 - start_year
        })
    }
}
