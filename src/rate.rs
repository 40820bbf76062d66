//! Rate helpers shared by the calculation modules.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

/// Converts an annual percentage rate into its nominal monthly rate.
///
/// A rate like 18.99% per year becomes `18.99 / 100 / 12` per month, the
/// convention used by every monthly loop in this crate.
pub fn nominal_monthly_rate(annual_percent: Decimal) -> Decimal {
    annual_percent / dec!(100) / dec!(12)
}

/// Converts an annual percentage rate into the rate of one compounding period.
pub fn periodic_rate(annual_percent: Decimal, periods_per_year: u32) -> Decimal {
    annual_percent / dec!(100) / Decimal::from(periods_per_year)
}

/// Compounding factor `(1 + rate)^periods`.
///
/// # Errors
///
/// Returns an error when the factor overflows the supported numeric range.
pub fn compound_factor(rate_per_period: Decimal, periods: u32) -> Result<Decimal, anyhow::Error> {
    (dec!(1) + rate_per_period)
        .checked_powu(u64::from(periods))
        .ok_or_else(|| anyhow::anyhow!("Compounding factor is too large to represent."))
}
