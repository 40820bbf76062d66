//! Nest-egg projection between two ages.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Serialize, Deserialize};

use crate::growth::{CompoundingFrequency, YearlyBreakdown, project_growth};

/// Annual withdrawal rate behind the sustainable-income estimate.
pub const SAFE_WITHDRAWAL_RATE: Decimal = dec!(0.04);

/// Input parameters for a retirement projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementInput {
    pub current_age: u32,
    pub retirement_age: u32,
    pub current_savings: Decimal,
    pub monthly_contribution: Decimal,
    /// Expected annual return as a percentage (e.g., 7.0 for 7%).
    pub annual_return: Decimal,
}

/// Projected savings at retirement plus the income they could sustain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetirementProjection {
    pub years_to_retirement: u32,
    pub projected_savings: Decimal,
    pub total_contributions: Decimal,
    /// Projected savings beyond contributions.
    pub growth: Decimal,
    /// Monthly income at the 4% annual withdrawal rate.
    pub monthly_income: Decimal,
    pub yearly: Vec<YearlyBreakdown>,
}

/// Projects current savings plus contributions to retirement age, with
/// monthly compounding, and derives the monthly income the result could
/// sustain at the 4% rule.
///
/// # Errors
///
/// Returns an error if the retirement age is not past the current age or
/// above 120, or on any invalid growth input.
pub fn project_retirement(input: RetirementInput) -> Result<RetirementProjection, anyhow::Error> {
    if input.retirement_age <= input.current_age {
        return Err(anyhow::anyhow!(
            "Retirement age must be greater than the current age."
        ));
    }
    if input.retirement_age > 120 {
        return Err(anyhow::anyhow!("Retirement age must be 120 or less."));
    }

    let years = input.retirement_age - input.current_age;
    let growth = project_growth(
        input.current_savings,
        input.monthly_contribution,
        input.annual_return,
        years,
        CompoundingFrequency::Monthly,
    )?;

    let monthly_income = (growth.total_value * SAFE_WITHDRAWAL_RATE / dec!(12)).round_dp(2);

    Ok(RetirementProjection {
        years_to_retirement: years,
        projected_savings: growth.total_value,
        total_contributions: growth.total_contributions,
        growth: growth.total_interest,
        monthly_income,
        yearly: growth.yearly,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_input() -> RetirementInput {
        RetirementInput {
            current_age: 30,
            retirement_age: 65,
            current_savings: dec!(50000),
            monthly_contribution: dec!(500),
            annual_return: dec!(7.0),
        }
    }

    #[test]
    fn test_projection_horizon_and_contributions() {
        let projection = project_retirement(base_input()).unwrap();
        assert_eq!(projection.years_to_retirement, 35);
        // 50k starting plus 500 * 12 * 35.
        assert_eq!(projection.total_contributions, dec!(260000));
        assert!(projection.projected_savings > projection.total_contributions);
    }

    #[test]
    fn test_monthly_income_follows_the_withdrawal_rate() {
        let projection = project_retirement(base_input()).unwrap();
        assert_eq!(
            projection.monthly_income,
            (projection.projected_savings * SAFE_WITHDRAWAL_RATE / dec!(12)).round_dp(2)
        );
    }

    #[test]
    fn test_retirement_age_must_be_in_the_future() {
        let mut input = base_input();
        input.retirement_age = 30;
        assert!(project_retirement(input).is_err());
    }
}
