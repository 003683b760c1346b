//! Funding plan simulation: year-by-year balances under two interest models
//!
//! Interest never accrues on a non-positive balance under either model.
//! The balance itself is never floored; deficits show up as negative
//! ending balances.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::input::{
    ContributionFrequency, ContributionTiming, ExpenditureTiming, InterestModel, StudyInput,
};
use crate::math::{annual_to_monthly, round2};

/// One projection year of the funding plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearResult {
    /// 1-based projection year index
    pub year_index: u32,
    pub calendar_year: i32,
    pub beginning_balance: Decimal,
    pub contribution: Decimal,
    pub interest_earned: Decimal,
    pub expenditures: Decimal,
    pub ending_balance: Decimal,
}

/// Availability weight of the year's contributions toward the average balance
fn contribution_weight(timing: ContributionTiming) -> Decimal {
    match timing {
        ContributionTiming::StartOfPeriod => Decimal::ONE,
        ContributionTiming::MidPeriod => Decimal::new(5, 1),
        ContributionTiming::EndOfPeriod => Decimal::ZERO,
    }
}

/// How much of the year's expenditures still count toward the average balance
fn expenditure_weight(timing: ExpenditureTiming) -> Decimal {
    match timing {
        ExpenditureTiming::StartOfYear => Decimal::ZERO,
        ExpenditureTiming::MidYear => Decimal::new(5, 1),
        ExpenditureTiming::EndOfYear => Decimal::ONE,
        ExpenditureTiming::MonthlySpread => Decimal::new(5, 1),
    }
}

/// Month index (0-based) for an annual lump deposit
fn lump_month(timing: ContributionTiming) -> usize {
    match timing {
        ContributionTiming::StartOfPeriod => 0,
        ContributionTiming::MidPeriod => 5,
        ContributionTiming::EndOfPeriod => 11,
    }
}

/// Simulate the funding plan, dispatched by interest model.
///
/// `contributions` and `expenditures` must both cover the projection
/// horizon.
pub fn build(
    input: &StudyInput,
    contributions: &[Decimal],
    expenditures: &[Decimal],
) -> Result<Vec<YearResult>, EngineError> {
    let n = input.years as usize;
    if contributions.len() != n || expenditures.len() != n {
        return Err(EngineError::Computation(format!(
            "plan inputs cover {} contribution years and {} expenditure years, projection needs {}",
            contributions.len(),
            expenditures.len(),
            input.years
        )));
    }

    let years = match input.interest_model {
        InterestModel::AnnualAverageBalance => annual_average(input, contributions, expenditures),
        InterestModel::MonthlySimulation => monthly_simulation(input, contributions, expenditures),
    };
    Ok(years)
}

fn annual_average(
    input: &StudyInput,
    contributions: &[Decimal],
    expenditures: &[Decimal],
) -> Vec<YearResult> {
    let contrib_weight = contribution_weight(input.contribution_timing);
    let expend_weight = expenditure_weight(input.expenditure_timing);

    let mut years = Vec::with_capacity(input.years as usize);
    let mut balance = input.starting_balance;

    for i in 0..input.years as usize {
        let contribution = contributions[i];
        let expenditure = expenditures[i];

        let average = balance + contribution * contrib_weight
            - expenditure * (Decimal::ONE - expend_weight);
        let interest = if average > Decimal::ZERO {
            round2(average * input.interest_rate)
        } else {
            Decimal::ZERO
        };
        let ending = round2(balance + contribution + interest - expenditure);

        years.push(YearResult {
            year_index: i as u32 + 1,
            calendar_year: input.calendar_year(i as u32 + 1),
            beginning_balance: balance,
            contribution,
            interest_earned: interest,
            expenditures: expenditure,
            ending_balance: ending,
        });
        balance = ending;
    }
    years
}

fn monthly_simulation(
    input: &StudyInput,
    contributions: &[Decimal],
    expenditures: &[Decimal],
) -> Vec<YearResult> {
    let monthly_rate = annual_to_monthly(input.interest_rate);
    let twelve = Decimal::from(12);

    let mut years = Vec::with_capacity(input.years as usize);
    let mut balance = input.starting_balance;

    for i in 0..input.years as usize {
        let contribution = contributions[i];
        let expenditure = expenditures[i];
        let beginning = balance;

        let mut deposits = [Decimal::ZERO; 12];
        match input.contribution_frequency {
            ContributionFrequency::Monthly => {
                let slice = contribution / twelve;
                deposits = [slice; 12];
            }
            ContributionFrequency::Annual => {
                deposits[lump_month(input.contribution_timing)] = contribution;
            }
        }

        let mut outflows = [Decimal::ZERO; 12];
        match input.expenditure_timing {
            ExpenditureTiming::StartOfYear => outflows[0] = expenditure,
            ExpenditureTiming::MidYear => outflows[5] = expenditure,
            ExpenditureTiming::EndOfYear => outflows[11] = expenditure,
            ExpenditureTiming::MonthlySpread => {
                let slice = expenditure / twelve;
                outflows = [slice; 12];
            }
        }

        let mut interest_accrued = Decimal::ZERO;
        for month in 0..12 {
            balance += deposits[month];
            balance -= outflows[month];
            if balance > Decimal::ZERO {
                let earned = balance * monthly_rate;
                balance += earned;
                interest_accrued += earned;
            }
        }

        let interest = round2(interest_accrued);
        let ending = round2(balance);

        years.push(YearResult {
            year_index: i as u32 + 1,
            calendar_year: input.calendar_year(i as u32 + 1),
            beginning_balance: beginning,
            contribution,
            interest_earned: interest,
            expenditures: expenditure,
            ending_balance: ending,
        });
        balance = ending;
    }
    years
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Component, CostMethod};
    use rust_decimal_macros::dec;

    fn study(model: InterestModel, years: u32) -> StudyInput {
        let mut input = StudyInput::new(
            2025,
            years,
            dec!(1000),
            dec!(0),
            vec![Component::new("Roof", CostMethod::Replacement, dec!(1))],
        );
        input.interest_model = model;
        input
    }

    #[test]
    fn test_annual_average_mid_timing_weights() {
        let mut input = study(InterestModel::AnnualAverageBalance, 1);
        input.interest_rate = dec!(0.10);
        input.contribution_timing = ContributionTiming::MidPeriod;
        input.expenditure_timing = ExpenditureTiming::MidYear;

        let years = build(&input, &[dec!(1200)], &[dec!(400)]).expect("plan");
        let year = &years[0];

        // average = 1000 + 1200*0.5 - 400*(1-0.5) = 1400
        assert_eq!(year.interest_earned, dec!(140.00));
        // ending = 1000 + 1200 + 140 - 400
        assert_eq!(year.ending_balance, dec!(1940.00));
    }

    #[test]
    fn test_annual_average_start_and_end_weights() {
        let mut input = study(InterestModel::AnnualAverageBalance, 1);
        input.interest_rate = dec!(0.10);
        input.contribution_timing = ContributionTiming::StartOfPeriod;
        input.expenditure_timing = ExpenditureTiming::StartOfYear;

        // average = 1000 + 1200*1.0 - 400*1.0 = 1800
        let years = build(&input, &[dec!(1200)], &[dec!(400)]).expect("plan");
        assert_eq!(years[0].interest_earned, dec!(180.00));

        input.contribution_timing = ContributionTiming::EndOfPeriod;
        input.expenditure_timing = ExpenditureTiming::EndOfYear;

        // average = 1000 + 0 - 0 = 1000
        let years = build(&input, &[dec!(1200)], &[dec!(400)]).expect("plan");
        assert_eq!(years[0].interest_earned, dec!(100.00));
    }

    #[test]
    fn test_monthly_spread_weight_matches_mid_year() {
        let mut mid = study(InterestModel::AnnualAverageBalance, 1);
        mid.interest_rate = dec!(0.10);
        mid.expenditure_timing = ExpenditureTiming::MidYear;

        let mut spread = mid.clone();
        spread.expenditure_timing = ExpenditureTiming::MonthlySpread;

        // Both timings weight expenditures at 0.5 in the average balance
        let mid_years = build(&mid, &[dec!(0)], &[dec!(600)]).expect("plan");
        let spread_years = build(&spread, &[dec!(0)], &[dec!(600)]).expect("plan");

        // average = 1000 - 600*0.5 = 700
        assert_eq!(spread_years[0].interest_earned, dec!(70.00));
        assert_eq!(spread_years[0].interest_earned, mid_years[0].interest_earned);
        assert_eq!(spread_years[0].ending_balance, mid_years[0].ending_balance);
    }

    #[test]
    fn test_no_interest_on_negative_average_balance() {
        let mut input = study(InterestModel::AnnualAverageBalance, 2);
        input.interest_rate = dec!(0.10);
        input.expenditure_timing = ExpenditureTiming::StartOfYear;

        let years = build(&input, &[dec!(0), dec!(0)], &[dec!(5000), dec!(0)]).expect("plan");

        // Year 1 average goes negative: no interest, balance not floored
        assert_eq!(years[0].interest_earned, dec!(0));
        assert_eq!(years[0].ending_balance, dec!(-4000.00));
        // Year 2 beginning balance stays negative and still earns nothing
        assert_eq!(years[1].beginning_balance, dec!(-4000.00));
        assert_eq!(years[1].interest_earned, dec!(0));
    }

    #[test]
    fn test_monthly_simulation_compounds_to_annual_rate() {
        let mut input = study(InterestModel::MonthlySimulation, 1);
        input.starting_balance = dec!(10000);
        input.interest_rate = dec!(0.12);

        let years = build(&input, &[dec!(0)], &[dec!(0)]).expect("plan");

        // Twelve months of compounding reproduce the annual effective rate
        assert!((years[0].interest_earned - dec!(1200.00)).abs() <= dec!(0.01));
        assert!((years[0].ending_balance - dec!(11200.00)).abs() <= dec!(0.01));
    }

    #[test]
    fn test_monthly_simulation_zero_rate_is_pure_cashflow() {
        let mut input = study(InterestModel::MonthlySimulation, 2);
        input.starting_balance = dec!(500);
        input.contribution_frequency = ContributionFrequency::Monthly;

        let years = build(&input, &[dec!(1200), dec!(1200)], &[dec!(300), dec!(0)]).expect("plan");

        assert_eq!(years[0].interest_earned, dec!(0.00));
        assert_eq!(years[0].ending_balance, dec!(1400.00));
        assert_eq!(years[1].ending_balance, dec!(2600.00));
    }

    #[test]
    fn test_monthly_lump_timing_changes_interest() {
        let mut base = study(InterestModel::MonthlySimulation, 1);
        base.starting_balance = dec!(0);
        base.interest_rate = dec!(0.12);
        base.contribution_frequency = ContributionFrequency::Annual;

        let mut early = base.clone();
        early.contribution_timing = ContributionTiming::StartOfPeriod;
        let mut late = base.clone();
        late.contribution_timing = ContributionTiming::EndOfPeriod;

        let early_years = build(&early, &[dec!(12000)], &[dec!(0)]).expect("plan");
        let late_years = build(&late, &[dec!(12000)], &[dec!(0)]).expect("plan");

        // A January lump earns a full year of interest; a December lump
        // earns one month
        assert!(early_years[0].interest_earned > late_years[0].interest_earned);
        assert!(late_years[0].interest_earned > dec!(0));
    }

    #[test]
    fn test_monthly_spread_expenditure_between_lump_timings() {
        let mut base = study(InterestModel::MonthlySimulation, 1);
        base.starting_balance = dec!(10000);
        base.interest_rate = dec!(0.12);

        let mut early = base.clone();
        early.expenditure_timing = ExpenditureTiming::StartOfYear;
        let mut late = base.clone();
        late.expenditure_timing = ExpenditureTiming::EndOfYear;
        let mut spread = base.clone();
        spread.expenditure_timing = ExpenditureTiming::MonthlySpread;

        let early_years = build(&early, &[dec!(0)], &[dec!(6000)]).expect("plan");
        let late_years = build(&late, &[dec!(0)], &[dec!(6000)]).expect("plan");
        let spread_years = build(&spread, &[dec!(0)], &[dec!(6000)]).expect("plan");

        // A January lump starves the balance all year, a December lump
        // barely touches it, and a 1/12 monthly drain lands in between
        assert!(spread_years[0].interest_earned > early_years[0].interest_earned);
        assert!(spread_years[0].interest_earned < late_years[0].interest_earned);
    }

    #[test]
    fn test_monthly_mid_period_lump_between_start_and_end() {
        let mut base = study(InterestModel::MonthlySimulation, 1);
        base.starting_balance = dec!(0);
        base.interest_rate = dec!(0.12);
        base.contribution_frequency = ContributionFrequency::Annual;

        let mut early = base.clone();
        early.contribution_timing = ContributionTiming::StartOfPeriod;
        let mut mid = base.clone();
        mid.contribution_timing = ContributionTiming::MidPeriod;
        let mut late = base.clone();
        late.contribution_timing = ContributionTiming::EndOfPeriod;

        let early_years = build(&early, &[dec!(12000)], &[dec!(0)]).expect("plan");
        let mid_years = build(&mid, &[dec!(12000)], &[dec!(0)]).expect("plan");
        let late_years = build(&late, &[dec!(12000)], &[dec!(0)]).expect("plan");

        // A June lump earns seven months of interest: more than December,
        // less than January
        assert!(mid_years[0].interest_earned < early_years[0].interest_earned);
        assert!(mid_years[0].interest_earned > late_years[0].interest_earned);
    }

    #[test]
    fn test_monthly_no_interest_while_balance_negative() {
        let mut input = study(InterestModel::MonthlySimulation, 1);
        input.starting_balance = dec!(100);
        input.interest_rate = dec!(0.12);
        input.expenditure_timing = ExpenditureTiming::StartOfYear;

        let years = build(&input, &[dec!(0)], &[dec!(2000)]).expect("plan");

        assert_eq!(years[0].interest_earned, dec!(0.00));
        assert_eq!(years[0].ending_balance, dec!(-1900.00));
    }

    #[test]
    fn test_years_ascend_with_calendar() {
        let input = study(InterestModel::AnnualAverageBalance, 5);
        let zeros = vec![Decimal::ZERO; 5];
        let years = build(&input, &zeros, &zeros).expect("plan");

        for (i, year) in years.iter().enumerate() {
            assert_eq!(year.year_index, i as u32 + 1);
            assert_eq!(year.calendar_year, 2025 + i as i32);
        }
    }

    #[test]
    fn test_mismatched_inputs_are_an_error() {
        let input = study(InterestModel::AnnualAverageBalance, 5);
        assert!(build(&input, &[Decimal::ZERO; 3], &[Decimal::ZERO; 5]).is_err());
    }
}
