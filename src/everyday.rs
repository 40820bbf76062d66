//! Small everyday calculators: tipping, sales tax, percentages, inflation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Serialize, Deserialize};

use crate::rate::{compound_factor, periodic_rate};

/// Tip on a bill, split across a party.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipResult {
    pub tip_amount: Decimal,
    pub total: Decimal,
    pub per_person: Decimal,
}

/// Calculates the tip on a bill and the per-person share of the total.
///
/// # Errors
///
/// Returns an error on a non-positive bill, a negative tip percentage, or an
/// empty party.
pub fn tip_and_split(
    bill: Decimal,
    tip_percent: Decimal,
    people: u32,
) -> Result<TipResult, anyhow::Error> {
    if bill <= Decimal::ZERO {
        return Err(anyhow::anyhow!("Bill must be greater than zero."));
    }
    if tip_percent < Decimal::ZERO {
        return Err(anyhow::anyhow!("Tip percentage cannot be negative."));
    }
    if people == 0 {
        return Err(anyhow::anyhow!("Party size cannot be zero."));
    }

    let tip_amount = bill * tip_percent / dec!(100);
    let total = bill + tip_amount;
    Ok(TipResult {
        tip_amount: tip_amount.round_dp(2),
        total: total.round_dp(2),
        per_person: (total / Decimal::from(people)).round_dp(2),
    })
}

/// Price plus sales tax.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesTaxResult {
    pub tax_amount: Decimal,
    pub total: Decimal,
}

/// Applies a sales tax percentage to a price.
///
/// # Errors
///
/// Returns an error on a non-positive price or a negative rate.
pub fn sales_tax(price: Decimal, rate_percent: Decimal) -> Result<SalesTaxResult, anyhow::Error> {
    if price <= Decimal::ZERO {
        return Err(anyhow::anyhow!("Price must be greater than zero."));
    }
    if rate_percent < Decimal::ZERO {
        return Err(anyhow::anyhow!("Tax rate cannot be negative."));
    }

    let tax_amount = price * rate_percent / dec!(100);
    Ok(SalesTaxResult {
        tax_amount: tax_amount.round_dp(2),
        total: (price + tax_amount).round_dp(2),
    })
}

/// `percent` percent of `value`.
pub fn percent_of(percent: Decimal, value: Decimal) -> Decimal {
    value * percent / dec!(100)
}

/// What percentage `part` is of `whole`.
///
/// # Errors
///
/// Returns an error when `whole` is zero.
pub fn what_percent_of(part: Decimal, whole: Decimal) -> Result<Decimal, anyhow::Error> {
    if whole.is_zero() {
        return Err(anyhow::anyhow!("Whole cannot be zero."));
    }
    Ok(part / whole * dec!(100))
}

/// Percentage change from one value to another.
///
/// # Errors
///
/// Returns an error when the starting value is zero.
pub fn percent_change(from: Decimal, to: Decimal) -> Result<Decimal, anyhow::Error> {
    if from.is_zero() {
        return Err(anyhow::anyhow!("Starting value cannot be zero."));
    }
    Ok((to - from) / from * dec!(100))
}

/// What inflation does to an amount over a horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InflationResult {
    /// What today's amount will cost after the horizon.
    pub future_cost: Decimal,
    /// What today's amount will be worth, in today's terms.
    pub purchasing_power: Decimal,
}

/// Compounds a flat annual inflation rate over a number of years.
///
/// # Errors
///
/// Returns an error on a negative amount or rate, or a zero-year horizon.
pub fn inflation_adjusted(
    amount: Decimal,
    annual_inflation_rate: Decimal,
    years: u32,
) -> Result<InflationResult, anyhow::Error> {
    if amount < Decimal::ZERO {
        return Err(anyhow::anyhow!("Amount cannot be negative."));
    }
    if annual_inflation_rate < Decimal::ZERO {
        return Err(anyhow::anyhow!("Inflation rate cannot be negative."));
    }
    if years == 0 {
        return Err(anyhow::anyhow!("Years must be greater than zero."));
    }

    let factor = compound_factor(periodic_rate(annual_inflation_rate, 1), years)?;
    Ok(InflationResult {
        future_cost: (amount * factor).round_dp(2),
        purchasing_power: (amount / factor).round_dp(2),
    })
}
