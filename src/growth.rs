//! Compound growth projection with periodic contributions, the inverse
//! months-to-goal solve, and investment return summaries.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::rate::{compound_factor, nominal_monthly_rate, periodic_rate};

/// Longest supported projection horizon.
pub const MAX_PROJECTION_YEARS: u32 = 100;

/// Iteration cap of the goal solve (50 years).
pub const MAX_GOAL_MONTHS: u32 = 600;

/// A goal balance past this point is diverging rather than converging on a
/// reachable target.
const RUNAWAY_BALANCE: Decimal = dec!(1_000_000_000_000_000);

/// How often the lump sum compounds.
///
/// Contributions always compound monthly, independent of this choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompoundingFrequency {
    Annually,
    SemiAnnually,
    Quarterly,
    Monthly,
    Daily,
}

impl CompoundingFrequency {
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Annually => 1,
            CompoundingFrequency::SemiAnnually => 2,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Daily => 365,
        }
    }
}

/// One year of the projection ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearlyBreakdown {
    pub year: u32,
    /// Cumulative contributions through this year.
    pub principal: Decimal,
    /// Growth beyond contributions through this year.
    pub interest: Decimal,
    pub total: Decimal,
}

/// Full result of a growth projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthResult {
    pub total_value: Decimal,
    /// Starting principal plus every monthly contribution.
    pub total_contributions: Decimal,
    pub total_interest: Decimal,
    /// One entry per year from 0 through the horizon.
    pub yearly: Vec<YearlyBreakdown>,
}

/// Projects the future value of a lump sum plus monthly contributions.
///
/// The lump sum compounds at the chosen frequency:
/// `principal * (1 + rate/n)^(n*t)`. The contributions grow as a monthly
/// annuity future value, `c * ((1 + r)^months - 1) / r`, degenerating to
/// `c * months` at a zero rate. Every ledger entry is recomputed from year
/// zero by the closed form, so the yearly curve carries no accumulated
/// iteration error.
///
/// # Arguments
///
/// * `principal` - The starting lump sum.
/// * `monthly_contribution` - Amount added every month.
/// * `annual_rate` - The annual growth rate as a percentage (e.g., 7.0 for 7%).
/// * `years` - Projection horizon, 1 through [`MAX_PROJECTION_YEARS`].
/// * `frequency` - Compounding frequency of the lump sum.
///
/// # Errors
///
/// Returns an error on negative amounts or rates, or a horizon outside the
/// supported range.
pub fn project_growth(
    principal: Decimal,
    monthly_contribution: Decimal,
    annual_rate: Decimal,
    years: u32,
    frequency: CompoundingFrequency,
) -> Result<GrowthResult, anyhow::Error> {
    if principal < Decimal::ZERO {
        return Err(anyhow::anyhow!("Principal cannot be negative."));
    }
    if monthly_contribution < Decimal::ZERO {
        return Err(anyhow::anyhow!("Monthly contribution cannot be negative."));
    }
    if annual_rate < Decimal::ZERO {
        return Err(anyhow::anyhow!("Annual rate cannot be negative."));
    }
    if years == 0 || years > MAX_PROJECTION_YEARS {
        return Err(anyhow::anyhow!(
            "Years must be between 1 and {MAX_PROJECTION_YEARS}."
        ));
    }

    let mut yearly = Vec::with_capacity(years as usize + 1);
    for year in 0..=years {
        let total = value_at(principal, monthly_contribution, annual_rate, year, frequency)?;
        let contributed = principal + monthly_contribution * dec!(12) * Decimal::from(year);
        yearly.push(YearlyBreakdown {
            year,
            principal: contributed,
            interest: total - contributed,
            total,
        });
    }

    let total_value = yearly.last().map(|entry| entry.total).unwrap_or(principal);
    let total_contributions = principal + monthly_contribution * dec!(12) * Decimal::from(years);

    Ok(GrowthResult {
        total_value: total_value.round_dp(2),
        total_contributions: total_contributions.round_dp(2),
        total_interest: (total_value - total_contributions).round_dp(2),
        yearly,
    })
}

/// Closed-form value after `years`, always computed from year zero.
fn value_at(
    principal: Decimal,
    monthly_contribution: Decimal,
    annual_rate: Decimal,
    years: u32,
    frequency: CompoundingFrequency,
) -> Result<Decimal, anyhow::Error> {
    let periods_per_year = frequency.periods_per_year();
    let lump = principal
        * compound_factor(
            periodic_rate(annual_rate, periods_per_year),
            periods_per_year * years,
        )?;

    let monthly_rate = nominal_monthly_rate(annual_rate);
    let months = years * 12;
    let contributions = if monthly_rate.is_zero() {
        monthly_contribution * Decimal::from(months)
    } else {
        monthly_contribution * (compound_factor(monthly_rate, months)? - dec!(1)) / monthly_rate
    };

    Ok(lump + contributions)
}

/// Months of `balance = balance * (1 + r) + contribution` needed to reach
/// `target`, capped at [`MAX_GOAL_MONTHS`].
///
/// Returns `Some(0)` when the starting balance already meets the target and
/// `None` when the target is not reached within the cap. The zero-rate case
/// is solved directly by ceiling division and is subject to the same cap.
///
/// # Errors
///
/// Returns an error on negative amounts or rates, or a non-positive target.
pub fn months_to_goal(
    starting_balance: Decimal,
    monthly_contribution: Decimal,
    annual_rate: Decimal,
    target: Decimal,
) -> Result<Option<u32>, anyhow::Error> {
    if starting_balance < Decimal::ZERO {
        return Err(anyhow::anyhow!("Starting balance cannot be negative."));
    }
    if monthly_contribution < Decimal::ZERO {
        return Err(anyhow::anyhow!("Monthly contribution cannot be negative."));
    }
    if annual_rate < Decimal::ZERO {
        return Err(anyhow::anyhow!("Annual rate cannot be negative."));
    }
    if target <= Decimal::ZERO {
        return Err(anyhow::anyhow!("Target must be greater than zero."));
    }

    if starting_balance >= target {
        return Ok(Some(0));
    }

    let monthly_rate = nominal_monthly_rate(annual_rate);
    if monthly_rate.is_zero() {
        if monthly_contribution.is_zero() {
            return Ok(None);
        }
        let months = ((target - starting_balance) / monthly_contribution).ceil();
        return Ok(months.to_u32().filter(|m| *m <= MAX_GOAL_MONTHS));
    }

    let mut balance = starting_balance;
    for month in 1..=MAX_GOAL_MONTHS {
        balance = balance * (dec!(1) + monthly_rate) + monthly_contribution;
        if balance >= target {
            return Ok(Some(month));
        }
        if balance > RUNAWAY_BALANCE {
            break;
        }
    }
    debug!(%target, "goal not reached within the month cap");
    Ok(None)
}

/// Total and annualized return between an initial and final value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnSummary {
    pub total_return_percent: Decimal,
    /// Compound annual growth rate.
    pub annualized_return_percent: Decimal,
}

/// Summarizes the return of a holding over a number of years.
///
/// # Errors
///
/// Returns an error if the initial value is not positive, the final value is
/// negative, or the horizon is outside 1 through [`MAX_PROJECTION_YEARS`].
pub fn investment_return(
    initial_value: Decimal,
    final_value: Decimal,
    years: u32,
) -> Result<ReturnSummary, anyhow::Error> {
    if initial_value <= Decimal::ZERO {
        return Err(anyhow::anyhow!("Initial value must be greater than zero."));
    }
    if final_value < Decimal::ZERO {
        return Err(anyhow::anyhow!("Final value cannot be negative."));
    }
    if years == 0 || years > MAX_PROJECTION_YEARS {
        return Err(anyhow::anyhow!(
            "Years must be between 1 and {MAX_PROJECTION_YEARS}."
        ));
    }

    let ratio = final_value / initial_value;
    let total = (ratio - dec!(1)) * dec!(100);
    let annualized = (ratio.powd(dec!(1) / Decimal::from(years)) - dec!(1)) * dec!(100);

    Ok(ReturnSummary {
        total_return_percent: total.round_dp(2),
        annualized_return_percent: annualized.round_dp(2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_projection_with_contributions() {
        // $10k lump sum plus $500/month at 7% over 25 years.
        let result =
            project_growth(dec!(10000), dec!(500), dec!(7.0), 25, CompoundingFrequency::Monthly)
                .unwrap();
        assert_eq!(result.total_contributions, dec!(160000));
        assert!(result.total_interest > dec!(0));
        assert!(result.total_value > dec!(400000));
        assert!(result.total_value < dec!(500000));
        assert_eq!(result.yearly.len(), 26);
    }

    #[test]
    fn test_yearly_totals_never_decrease() {
        let result =
            project_growth(dec!(5000), dec!(250), dec!(6.0), 30, CompoundingFrequency::Quarterly)
                .unwrap();
        for pair in result.yearly.windows(2) {
            assert!(pair[1].total >= pair[0].total);
        }
    }

    #[test]
    fn test_zero_rate_projection_is_pure_contributions() {
        let result =
            project_growth(dec!(1000), dec!(100), dec!(0), 2, CompoundingFrequency::Monthly)
                .unwrap();
        assert_eq!(result.total_value, dec!(3400));
        assert_eq!(result.total_interest, dec!(0));
    }

    #[rstest]
    #[case(CompoundingFrequency::Annually, 1)]
    #[case(CompoundingFrequency::SemiAnnually, 2)]
    #[case(CompoundingFrequency::Quarterly, 4)]
    #[case(CompoundingFrequency::Monthly, 12)]
    #[case(CompoundingFrequency::Daily, 365)]
    fn test_periods_per_year(#[case] frequency: CompoundingFrequency, #[case] expected: u32) {
        assert_eq!(frequency.periods_per_year(), expected);
    }

    #[test]
    fn test_more_frequent_compounding_grows_more() {
        let annually =
            project_growth(dec!(10000), dec!(0), dec!(5), 10, CompoundingFrequency::Annually)
                .unwrap();
        let daily = project_growth(dec!(10000), dec!(0), dec!(5), 10, CompoundingFrequency::Daily)
            .unwrap();
        assert!(daily.total_value > annually.total_value);
    }

    #[test]
    fn test_months_to_goal_zero_rate() {
        // 3000 short at 500/month is exactly 6 months.
        let months = months_to_goal(dec!(1000), dec!(500), dec!(0), dec!(4000)).unwrap();
        assert_eq!(months, Some(6));
    }

    #[test]
    fn test_months_to_goal_with_growth() {
        // 1000 at 1%/month with no contributions passes 1104 in month 10.
        let months = months_to_goal(dec!(1000), dec!(0), dec!(12), dec!(1104)).unwrap();
        assert_eq!(months, Some(10));
    }

    #[test]
    fn test_months_to_goal_already_funded() {
        let months = months_to_goal(dec!(5000), dec!(0), dec!(4), dec!(5000)).unwrap();
        assert_eq!(months, Some(0));
    }

    #[test]
    fn test_months_to_goal_unreachable() {
        assert_eq!(
            months_to_goal(dec!(0), dec!(0), dec!(0), dec!(1000)).unwrap(),
            None
        );
        assert_eq!(
            months_to_goal(dec!(100), dec!(1), dec!(0.1), dec!(1000000)).unwrap(),
            None
        );
    }

    #[test]
    fn test_investment_return() {
        let summary = investment_return(dec!(1000), dec!(2000), 10).unwrap();
        assert_eq!(summary.total_return_percent, dec!(100));
        // 2^(1/10) - 1 is about 7.18% per year.
        assert!((summary.annualized_return_percent - dec!(7.18)).abs() < dec!(0.01));
    }

    #[test]
    fn test_investment_return_rejects_zero_initial() {
        assert!(investment_return(dec!(0), dec!(2000), 10).is_err());
    }
}
