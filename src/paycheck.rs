//! Take-home pay under a flat-percentage withholding model.
//!
//! Federal and state taxes are flat rates on taxable pay; no brackets, no
//! wage caps. Good enough for a planning estimate, not a tax filing.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Serialize, Deserialize};

/// Social Security tax as a percentage of gross pay.
pub const SOCIAL_SECURITY_RATE: Decimal = dec!(6.2);

/// Medicare tax as a percentage of gross pay.
pub const MEDICARE_RATE: Decimal = dec!(1.45);

/// How often a paycheck arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayFrequency {
    Weekly,
    BiWeekly,
    SemiMonthly,
    Monthly,
}

impl PayFrequency {
    pub fn periods_per_year(&self) -> u32 {
        match self {
            PayFrequency::Weekly => 52,
            PayFrequency::BiWeekly => 26,
            PayFrequency::SemiMonthly => 24,
            PayFrequency::Monthly => 12,
        }
    }
}

/// Input parameters for a paycheck calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaycheckInput {
    pub annual_salary: Decimal,
    pub frequency: PayFrequency,
    /// Flat federal tax as a percentage of taxable pay.
    pub federal_rate: Decimal,
    /// Flat state tax as a percentage of taxable pay.
    pub state_rate: Decimal,
    /// Pre-tax retirement contribution as a percentage of gross pay.
    pub retirement_rate: Decimal,
}

/// One paycheck, decomposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaycheckResult {
    pub gross_pay: Decimal,
    pub retirement_contribution: Decimal,
    pub federal_tax: Decimal,
    pub state_tax: Decimal,
    pub social_security: Decimal,
    pub medicare: Decimal,
    pub net_pay: Decimal,
    pub annual_net: Decimal,
}

/// Calculates take-home pay per period.
///
/// The retirement contribution comes out of gross before federal and state
/// taxes apply; Social Security and Medicare apply to the full gross.
///
/// # Errors
///
/// Returns an error if the salary is not positive, any rate is outside
/// 0 through 100, or the combined deductions exceed the gross pay.
pub fn calculate_paycheck(input: PaycheckInput) -> Result<PaycheckResult, anyhow::Error> {
    if input.annual_salary <= Decimal::ZERO {
        return Err(anyhow::anyhow!("Annual salary must be greater than zero."));
    }
    for (label, rate) in [
        ("Federal rate", input.federal_rate),
        ("State rate", input.state_rate),
        ("Retirement rate", input.retirement_rate),
    ] {
        if rate < Decimal::ZERO || rate > dec!(100) {
            return Err(anyhow::anyhow!("{label} must be between 0 and 100."));
        }
    }

    let periods = Decimal::from(input.frequency.periods_per_year());
    let gross_pay = input.annual_salary / periods;
    let retirement_contribution = gross_pay * input.retirement_rate / dec!(100);
    let taxable = gross_pay - retirement_contribution;
    let federal_tax = taxable * input.federal_rate / dec!(100);
    let state_tax = taxable * input.state_rate / dec!(100);
    let social_security = gross_pay * SOCIAL_SECURITY_RATE / dec!(100);
    let medicare = gross_pay * MEDICARE_RATE / dec!(100);

    let net_pay =
        gross_pay - retirement_contribution - federal_tax - state_tax - social_security - medicare;
    if net_pay < Decimal::ZERO {
        return Err(anyhow::anyhow!("Combined deductions exceed the gross pay."));
    }

    Ok(PaycheckResult {
        gross_pay: gross_pay.round_dp(2),
        retirement_contribution: retirement_contribution.round_dp(2),
        federal_tax: federal_tax.round_dp(2),
        state_tax: state_tax.round_dp(2),
        social_security: social_security.round_dp(2),
        medicare: medicare.round_dp(2),
        net_pay: net_pay.round_dp(2),
        annual_net: (net_pay * periods).round_dp(2),
    })
}
