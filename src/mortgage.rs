//! Mortgage payment built on the amortization engine plus the flat monthly
//! add-ons a housing payment carries.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Serialize, Deserialize};

use crate::amortization::{AmortizationItem, amortize};

/// PMI applies while the down payment is below this fraction of the price.
pub const PMI_DOWN_PAYMENT_THRESHOLD: Decimal = dec!(0.2);

/// Input parameters for a mortgage calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageInput {
    pub home_price: Decimal,
    pub down_payment: Decimal,
    /// The annual interest rate as a percentage (e.g., 6.5 for 6.5%).
    pub annual_rate: Decimal,
    pub term_years: u32,
    /// Yearly property tax, billed as a flat twelfth each month.
    pub annual_property_tax: Decimal,
    /// Yearly homeowner insurance, billed as a flat twelfth each month.
    pub annual_insurance: Decimal,
    pub monthly_hoa: Decimal,
    /// Annual PMI as a percentage of the loan amount. Charged only while the
    /// down payment is below 20% of the price.
    pub annual_pmi_rate: Decimal,
}

/// Monthly cost breakdown of a mortgage.
///
/// The add-ons are summed alongside the principal-and-interest payment; they
/// never compound into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageResult {
    pub loan_amount: Decimal,
    /// The level principal-and-interest payment.
    pub principal_and_interest: Decimal,
    pub monthly_property_tax: Decimal,
    pub monthly_insurance: Decimal,
    pub monthly_hoa: Decimal,
    pub monthly_pmi: Decimal,
    /// P&I plus every flat add-on.
    pub total_monthly_payment: Decimal,
    /// Interest paid over the full term.
    pub total_interest: Decimal,
    pub schedule: Vec<AmortizationItem>,
}

/// Calculates the monthly cost of a fixed-rate mortgage.
///
/// # Errors
///
/// Returns an error if the price is not positive, the down payment does not
/// leave a positive loan amount, the term is zero, or any add-on is negative.
pub fn calculate_mortgage(input: MortgageInput) -> Result<MortgageResult, anyhow::Error> {
    if input.home_price <= Decimal::ZERO {
        return Err(anyhow::anyhow!("Home price must be greater than zero."));
    }
    if input.down_payment < Decimal::ZERO {
        return Err(anyhow::anyhow!("Down payment cannot be negative."));
    }
    if input.down_payment >= input.home_price {
        return Err(anyhow::anyhow!("Down payment must be less than the home price."));
    }
    if input.term_years == 0 {
        return Err(anyhow::anyhow!("Term cannot be zero years."));
    }
    for (label, amount) in [
        ("Property tax", input.annual_property_tax),
        ("Insurance", input.annual_insurance),
        ("HOA", input.monthly_hoa),
        ("PMI rate", input.annual_pmi_rate),
    ] {
        if amount < Decimal::ZERO {
            return Err(anyhow::anyhow!("{label} cannot be negative."));
        }
    }

    let loan_amount = input.home_price - input.down_payment;
    let amortization = amortize(loan_amount, input.annual_rate, input.term_years * 12)?;

    let monthly_property_tax = (input.annual_property_tax / dec!(12)).round_dp(2);
    let monthly_insurance = (input.annual_insurance / dec!(12)).round_dp(2);
    let monthly_hoa = input.monthly_hoa.round_dp(2);
    let monthly_pmi = if input.down_payment < input.home_price * PMI_DOWN_PAYMENT_THRESHOLD {
        (loan_amount * input.annual_pmi_rate / dec!(100) / dec!(12)).round_dp(2)
    } else {
        Decimal::ZERO
    };

    let total_monthly_payment =
        amortization.payment + monthly_property_tax + monthly_insurance + monthly_hoa + monthly_pmi;

    Ok(MortgageResult {
        loan_amount,
        principal_and_interest: amortization.payment,
        monthly_property_tax,
        monthly_insurance,
        monthly_hoa,
        monthly_pmi,
        total_monthly_payment,
        total_interest: amortization.total_interest,
        schedule: amortization.schedule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_input() -> MortgageInput {
        MortgageInput {
            home_price: dec!(400000),
            down_payment: dec!(40000),
            annual_rate: dec!(6.5),
            term_years: 30,
            annual_property_tax: dec!(4800),
            annual_insurance: dec!(1800),
            monthly_hoa: dec!(50),
            annual_pmi_rate: dec!(0.5),
        }
    }

    #[test]
    fn test_pmi_charged_below_twenty_percent_down() {
        // 10% down on a 360k loan at 0.5%/year: 150 per month.
        let result = calculate_mortgage(base_input()).unwrap();
        assert_eq!(result.loan_amount, dec!(360000));
        assert_eq!(result.monthly_pmi, dec!(150));
    }

    #[test]
    fn test_pmi_dropped_at_twenty_percent_down() {
        let mut input = base_input();
        input.down_payment = dec!(80000);
        let result = calculate_mortgage(input).unwrap();
        assert_eq!(result.monthly_pmi, dec!(0));
    }

    #[test]
    fn test_total_is_sum_of_parts() {
        let result = calculate_mortgage(base_input()).unwrap();
        assert_eq!(result.monthly_property_tax, dec!(400));
        assert_eq!(result.monthly_insurance, dec!(150));
        assert_eq!(
            result.total_monthly_payment,
            result.principal_and_interest
                + result.monthly_property_tax
                + result.monthly_insurance
                + result.monthly_hoa
                + result.monthly_pmi
        );
    }

    #[test]
    fn test_full_price_down_payment_rejected() {
        let mut input = base_input();
        input.down_payment = dec!(400000);
        assert!(calculate_mortgage(input).is_err());
    }
}
