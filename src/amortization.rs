//! Fixed-payment loan decomposition.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Serialize, Deserialize};

use crate::rate::{compound_factor, nominal_monthly_rate};

/// One month of a fixed-payment loan schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationItem {
    /// 1-based month index.
    pub month: u32,
    /// The level payment (constant over the loan).
    pub payment: Decimal,
    /// The portion of the payment that reduces the principal.
    pub principal: Decimal,
    /// The portion of the payment that covers interest.
    pub interest: Decimal,
    /// Remaining balance after the payment, never negative.
    pub balance: Decimal,
}

/// Full result of a loan amortization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationResult {
    /// The level monthly payment.
    pub payment: Decimal,
    /// Payment times the number of months.
    pub total_paid: Decimal,
    /// Everything paid beyond the principal.
    pub total_interest: Decimal,
    /// A vector containing the payment split for each month.
    pub schedule: Vec<AmortizationItem>,
}

/// Decomposes a fixed-payment, fixed-rate loan into a month-by-month
/// principal/interest split.
///
/// The level payment follows the annuity formula
/// `PMT = P * [i(1 + i)^n] / [(1 + i)^n - 1]`. A zero rate degenerates to the
/// straight-line `P / n`, handled explicitly so no division by zero occurs.
///
/// # Arguments
///
/// * `principal` - The loan amount.
/// * `annual_rate` - The annual interest rate as a percentage (e.g., 6.5 for 6.5%).
/// * `term_months` - The total number of payments.
///
/// # Errors
///
/// Returns an error if the principal is not positive, the rate is negative,
/// or `term_months` is zero.
pub fn amortize(
    principal: Decimal,
    annual_rate: Decimal,
    term_months: u32,
) -> Result<AmortizationResult, anyhow::Error> {
    if principal <= Decimal::ZERO {
        return Err(anyhow::anyhow!("Principal must be greater than zero."));
    }
    if annual_rate < Decimal::ZERO {
        return Err(anyhow::anyhow!("Annual rate cannot be negative."));
    }
    if term_months == 0 {
        return Err(anyhow::anyhow!("Total months cannot be zero."));
    }

    let monthly_rate = nominal_monthly_rate(annual_rate);
    let payment = if monthly_rate.is_zero() {
        principal / Decimal::from(term_months)
    } else {
        let factor = compound_factor(monthly_rate, term_months)?;
        principal * (monthly_rate * factor) / (factor - dec!(1))
    };

    let mut balance = principal;
    let mut schedule = Vec::with_capacity(term_months as usize);
    for month in 1..=term_months {
        let interest = balance * monthly_rate;
        let principal_portion = payment - interest;
        balance = (balance - principal_portion).max(Decimal::ZERO);
        schedule.push(AmortizationItem {
            month,
            payment,
            principal: principal_portion,
            interest,
            balance,
        });
    }

    let total_paid = payment * Decimal::from(term_months);
    Ok(AmortizationResult {
        payment: payment.round_dp(2),
        total_paid: total_paid.round_dp(2),
        total_interest: (total_paid - principal).round_dp(2),
        schedule,
    })
}
