//! The debt set that feeds the payoff simulation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Serialize, Deserialize};

use crate::rate::nominal_monthly_rate;

/// A balance at or below this is treated as paid off. Currency rounding makes
/// an exact-zero test meaningless after hundreds of payments.
pub const PAID_OFF_THRESHOLD: Decimal = dec!(0.01);

/// A single debt as entered by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    /// Display label, not required to be unique.
    pub name: String,
    /// Current principal owed.
    pub balance: Decimal,
    /// Annual interest rate as a percentage (e.g., 18.99 for 18.99%).
    pub annual_rate: Decimal,
    /// Contractual minimum monthly payment.
    pub minimum_payment: Decimal,
}

impl Debt {
    /// Nominal monthly rate derived from the annual percentage.
    pub fn monthly_rate(&self) -> Decimal {
        nominal_monthly_rate(self.annual_rate)
    }

    /// Whether the debt still carries a balance above the paid-off threshold.
    pub fn is_active(&self) -> bool {
        self.balance > PAID_OFF_THRESHOLD
    }

    /// Whether the debt can take part in a payoff simulation at all.
    pub fn is_payable(&self) -> bool {
        self.balance > Decimal::ZERO
            && self.annual_rate > Decimal::ZERO
            && self.minimum_payment > Decimal::ZERO
    }
}

/// Input to the payoff simulation: the debt set plus the extra monthly budget.
///
/// The order of `debts` does not matter; the chosen strategy imposes its own
/// ordering on a working copy at simulation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffPlan {
    pub debts: Vec<Debt>,
    /// Additional budget applied on top of all minimums each month.
    pub extra_monthly_payment: Decimal,
}

impl PayoffPlan {
    /// Copies out the debts that satisfy the simulation precondition.
    ///
    /// Debts without a positive balance, rate, and minimum payment contribute
    /// nothing and are never touched by the simulation.
    pub fn payable_debts(&self) -> Vec<Debt> {
        self.debts
            .iter()
            .filter(|debt| debt.is_payable())
            .cloned()
            .collect()
    }

    /// Validates the plan before a simulation run.
    ///
    /// # Errors
    ///
    /// Returns an error if the extra payment is negative or no debt passes
    /// the payable filter.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.extra_monthly_payment < Decimal::ZERO {
            return Err(anyhow::anyhow!("Extra monthly payment cannot be negative."));
        }
        if !self.debts.iter().any(Debt::is_payable) {
            return Err(anyhow::anyhow!(
                "At least one debt needs a positive balance, rate, and minimum payment."
            ));
        }
        Ok(())
    }
}
