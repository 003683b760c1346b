//! Contribution strategies for the funding plan

use rust_decimal::Decimal;

use crate::error::EngineError;
use crate::input::{ContributionStrategy, StudyInput};
use crate::math::{compound, round2};

/// Build the N-year contribution stream, every entry rounded to cents.
///
/// `expenditure_totals` must cover the full projection horizon; only the
/// MaintainNonNegativeBalance strategy reads it.
pub fn build(
    input: &StudyInput,
    expenditure_totals: &[Decimal],
) -> Result<Vec<Decimal>, EngineError> {
    if expenditure_totals.len() != input.years as usize {
        return Err(EngineError::Computation(format!(
            "expenditure totals cover {} years, projection needs {}",
            expenditure_totals.len(),
            input.years
        )));
    }

    let stream = match input.contribution_strategy {
        ContributionStrategy::FixedAnnual => fixed_annual(input),
        ContributionStrategy::EscalatingPercent => escalating(input),
        ContributionStrategy::MaintainNonNegativeBalance => {
            maintain_non_negative(input, expenditure_totals)
        }
    };

    Ok(stream.into_iter().map(round2).collect())
}

fn fixed_annual(input: &StudyInput) -> Vec<Decimal> {
    vec![input.initial_annual_contribution; input.years as usize]
}

fn escalating(input: &StudyInput) -> Vec<Decimal> {
    (0..input.years)
        .map(|i| input.initial_annual_contribution * compound(input.escalation_rate, i))
        .collect()
}

/// Escalating baseline with a single forward correction pass.
///
/// The pass projects each year with simple interest on the beginning
/// balance only (zero when negative) and raises that year's contribution
/// by exactly the shortfall whenever the projected ending balance would
/// dip below zero. This approximation is intentionally simpler than the
/// funding plan's interest models, so the final simulated plan can still
/// show a smaller residual deficit.
fn maintain_non_negative(input: &StudyInput, expenditure_totals: &[Decimal]) -> Vec<Decimal> {
    let mut contributions = escalating(input);
    let mut balance = input.starting_balance;

    for (contribution, expenditure) in contributions.iter_mut().zip(expenditure_totals) {
        let interest = if balance > Decimal::ZERO {
            balance * input.interest_rate
        } else {
            Decimal::ZERO
        };
        let mut ending = balance + *contribution + interest - *expenditure;
        if ending < Decimal::ZERO {
            *contribution -= ending;
            ending = Decimal::ZERO;
        }
        balance = ending;
    }

    contributions
}
