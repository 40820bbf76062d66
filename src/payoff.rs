//! Month-by-month debt payoff simulation and the snowball/avalanche
//! strategy comparison.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Serialize, Deserialize};
use tracing::{debug, warn};

use crate::debt::{Debt, PayoffPlan};

/// Hard cap on simulated months (50 years). A plan that is still carrying
/// balance at the cap does not resolve.
pub const MAX_PAYOFF_MONTHS: u32 = 600;

/// A balance past this point is diverging; the simulation stops early with
/// the cap flag set instead of compounding further.
const RUNAWAY_BALANCE: Decimal = dec!(1_000_000_000_000_000);

/// Debt-elimination ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Smallest balance first.
    Snowball,
    /// Highest annual rate first.
    Avalanche,
}

impl Strategy {
    /// Display label used in summaries and log events.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Snowball => "Snowball",
            Strategy::Avalanche => "Avalanche",
        }
    }

    /// Orders a working set of debts. Both sorts are stable, so debts that
    /// tie on the key keep their input order.
    fn order(&self, debts: &mut [Debt]) {
        match self {
            Strategy::Snowball => debts.sort_by(|a, b| a.balance.cmp(&b.balance)),
            Strategy::Avalanche => debts.sort_by(|a, b| b.annual_rate.cmp(&a.annual_rate)),
        }
    }
}

/// One ledger row: what one debt paid in one month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyPayment {
    /// 1-based month index.
    pub month: u32,
    pub debt_name: String,
    /// Amount paid against this debt in this month.
    pub payment: Decimal,
    pub principal_payment: Decimal,
    pub interest_payment: Decimal,
    /// Balance left after the payment, never negative.
    pub remaining_balance: Decimal,
}

/// Outcome of a payoff simulation under one strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffResult {
    pub strategy: Strategy,
    /// Months until every balance fell to the paid-off threshold, capped at
    /// [`MAX_PAYOFF_MONTHS`].
    pub total_months: u32,
    /// True when the simulation stopped at the cap with balance left over.
    /// A capped total is not a real payoff time.
    pub cap_reached: bool,
    /// Sum of every interest portion across all months and debts.
    pub total_interest: Decimal,
    /// Chronological ledger, one row per active debt per month.
    pub monthly_breakdown: Vec<MonthlyPayment>,
}

impl PayoffResult {
    /// Payoff horizon in years.
    pub fn years(&self) -> Decimal {
        (Decimal::from(self.total_months) / dec!(12)).round_dp(2)
    }
}

/// Simulates monthly payments until every debt is retired.
///
/// Each month every active debt accrues interest and receives its contractual
/// minimum; afterwards the whole extra budget goes to the first debt in
/// strategy order that still carries a balance, clamped to that balance.
/// Leftover extra budget is not passed on to the next debt within the same
/// month; it is redirected only from the following month on, through the same
/// first-active-debt rule.
///
/// # Arguments
///
/// * `plan` - The debt set and the extra monthly budget.
/// * `strategy` - The ordering applied to the working copy of the debts.
///
/// # Errors
///
/// Returns an error if the extra payment is negative or no debt has a
/// positive balance, rate, and minimum payment.
pub fn simulate_payoff(
    plan: &PayoffPlan,
    strategy: Strategy,
) -> Result<PayoffResult, anyhow::Error> {
    plan.validate()?;

    let mut working = plan.payable_debts();
    strategy.order(&mut working);

    let mut monthly_breakdown = Vec::new();
    let mut total_interest = dec!(0);
    let mut month = 0u32;
    let mut cap_reached = false;

    while working.iter().any(Debt::is_active) {
        if month == MAX_PAYOFF_MONTHS {
            cap_reached = true;
            warn!(
                strategy = strategy.label(),
                months = MAX_PAYOFF_MONTHS,
                "payoff simulation hit the month cap with balance remaining"
            );
            break;
        }
        month += 1;

        for debt in working.iter_mut().filter(|debt| debt.is_active()) {
            let interest_payment = debt.balance * debt.monthly_rate();
            let principal_payment = (debt.minimum_payment - interest_payment).min(debt.balance);
            debt.balance = (debt.balance - principal_payment).max(Decimal::ZERO);
            total_interest += interest_payment;
            monthly_breakdown.push(MonthlyPayment {
                month,
                debt_name: debt.name.clone(),
                payment: interest_payment + principal_payment,
                principal_payment,
                interest_payment,
                remaining_balance: debt.balance,
            });
        }

        if plan.extra_monthly_payment > Decimal::ZERO {
            if let Some(target) = working.iter_mut().find(|debt| debt.is_active()) {
                let extra_applied = plan.extra_monthly_payment.min(target.balance);
                target.balance -= extra_applied;
            }
        }

        if working.iter().any(|debt| debt.balance > RUNAWAY_BALANCE) {
            cap_reached = true;
            warn!(strategy = strategy.label(), month, "payoff balances diverged");
            break;
        }
    }

    debug!(
        strategy = strategy.label(),
        total_months = month,
        cap_reached,
        "payoff simulation finished"
    );

    Ok(PayoffResult {
        strategy,
        total_months: month,
        cap_reached,
        total_interest: total_interest.round_dp(2),
        monthly_breakdown,
    })
}

/// Interest and time saved by the avalanche ordering when it beats snowball.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategySavings {
    pub interest_saved: Decimal,
    /// Snowball months minus avalanche months. Can be negative: avalanche
    /// optimality on interest does not guarantee fewer months.
    pub months_saved: i64,
}

/// Both canonical orderings simulated over the same plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyComparison {
    pub snowball: PayoffResult,
    pub avalanche: PayoffResult,
    /// Present only when avalanche's total interest is strictly lower.
    pub savings: Option<StrategySavings>,
}

/// Runs the snowball and avalanche simulations over the same plan and derives
/// the comparative savings when avalanche comes out strictly ahead on
/// interest. When it does not, no savings claim is made.
///
/// # Errors
///
/// Propagates the validation errors of [`simulate_payoff`].
pub fn compare_payoff_strategies(
    plan: &PayoffPlan,
) -> Result<StrategyComparison, anyhow::Error> {
    let snowball = simulate_payoff(plan, Strategy::Snowball)?;
    let avalanche = simulate_payoff(plan, Strategy::Avalanche)?;

    let savings = (avalanche.total_interest < snowball.total_interest).then(|| StrategySavings {
        interest_saved: (snowball.total_interest - avalanche.total_interest).round_dp(2),
        months_saved: i64::from(snowball.total_months) - i64::from(avalanche.total_months),
    });

    Ok(StrategyComparison {
        snowball,
        avalanche,
        savings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debt(name: &str, balance: Decimal, rate: Decimal, minimum: Decimal) -> Debt {
        Debt {
            name: name.to_string(),
            balance,
            annual_rate: rate,
            minimum_payment: minimum,
        }
    }

    fn three_debt_plan() -> PayoffPlan {
        serde_json::from_str(
            r#"{
                "debts": [
                    {"name": "Credit Card", "balance": "5000", "annual_rate": "18.99", "minimum_payment": "125"},
                    {"name": "Student Loan", "balance": "15000", "annual_rate": "6.5", "minimum_payment": "180"},
                    {"name": "Car Loan", "balance": "8000", "annual_rate": "4.2", "minimum_payment": "220"}
                ],
                "extra_monthly_payment": "200"
            }"#,
        )
        .unwrap()
    }

    fn first_month_order(result: &PayoffResult) -> Vec<String> {
        result
            .monthly_breakdown
            .iter()
            .filter(|row| row.month == 1)
            .map(|row| row.debt_name.clone())
            .collect()
    }

    #[test]
    fn test_snowball_orders_by_ascending_balance() {
        let result = simulate_payoff(&three_debt_plan(), Strategy::Snowball).unwrap();
        assert_eq!(
            first_month_order(&result),
            vec!["Credit Card", "Car Loan", "Student Loan"]
        );
    }

    #[test]
    fn test_avalanche_orders_by_descending_rate() {
        let result = simulate_payoff(&three_debt_plan(), Strategy::Avalanche).unwrap();
        assert_eq!(
            first_month_order(&result),
            vec!["Credit Card", "Student Loan", "Car Loan"]
        );
    }

    #[test]
    fn test_three_debt_comparison() {
        let comparison = compare_payoff_strategies(&three_debt_plan()).unwrap();

        assert!(comparison.snowball.total_months > 0);
        assert!(comparison.avalanche.total_months > 0);
        assert!(!comparison.snowball.cap_reached);
        assert!(!comparison.avalanche.cap_reached);
        assert!(comparison.avalanche.total_interest <= comparison.snowball.total_interest);

        // The extra budget targets the 6.5% loan under avalanche but the
        // 4.2% loan under snowball once the card is gone, so avalanche is
        // strictly cheaper here.
        let savings = comparison.savings.unwrap();
        assert!(savings.interest_saved > dec!(0));
    }

    #[test]
    fn test_valid_plan_terminates_under_the_cap() {
        let result = simulate_payoff(&three_debt_plan(), Strategy::Snowball).unwrap();
        assert!(result.total_months < MAX_PAYOFF_MONTHS);
        assert!(!result.cap_reached);
    }

    #[test]
    fn test_balances_never_negative() {
        let result = simulate_payoff(&three_debt_plan(), Strategy::Avalanche).unwrap();
        assert!(result
            .monthly_breakdown
            .iter()
            .all(|row| row.remaining_balance >= dec!(0)));
    }

    #[test]
    fn test_total_interest_matches_ledger_sum() {
        let result = simulate_payoff(&three_debt_plan(), Strategy::Snowball).unwrap();
        let ledger_sum: Decimal = result
            .monthly_breakdown
            .iter()
            .map(|row| row.interest_payment)
            .sum();
        assert_eq!(result.total_interest, ledger_sum.round_dp(2));
    }

    #[test]
    fn test_underwater_minimum_hits_the_cap() {
        // 2% monthly interest against a 150 minimum: the balance never
        // shrinks, so the simulation must stop at the cap and say so.
        let plan = PayoffPlan {
            debts: vec![debt("Payday", dec!(10000), dec!(24), dec!(150))],
            extra_monthly_payment: dec!(0),
        };
        let result = simulate_payoff(&plan, Strategy::Snowball).unwrap();
        assert_eq!(result.total_months, MAX_PAYOFF_MONTHS);
        assert!(result.cap_reached);
        let last = result.monthly_breakdown.last().unwrap();
        assert!(last.remaining_balance > dec!(10000));
    }

    #[test]
    fn test_extra_payment_does_not_cascade() {
        // Month 1 retires debt A: minimum 50 pays 49 of principal, the extra
        // budget covers the remaining 51, and the unused 449 is NOT passed on
        // to debt B. B therefore enters month 2 at 960, not 511.
        let plan = PayoffPlan {
            debts: vec![
                debt("A", dec!(100), dec!(12), dec!(50)),
                debt("B", dec!(1000), dec!(12), dec!(50)),
            ],
            extra_monthly_payment: dec!(500),
        };
        let result = simulate_payoff(&plan, Strategy::Snowball).unwrap();

        let b_month_two = result
            .monthly_breakdown
            .iter()
            .find(|row| row.month == 2 && row.debt_name == "B")
            .unwrap();
        assert_eq!(b_month_two.interest_payment, dec!(9.6));
        assert!(!result
            .monthly_breakdown
            .iter()
            .any(|row| row.month == 2 && row.debt_name == "A"));
    }

    #[test]
    fn test_single_debt_comparison_claims_no_savings() {
        let plan = PayoffPlan {
            debts: vec![debt("Card", dec!(3000), dec!(19.99), dec!(90))],
            extra_monthly_payment: dec!(50),
        };
        let comparison = compare_payoff_strategies(&plan).unwrap();
        assert_eq!(
            comparison.snowball.total_interest,
            comparison.avalanche.total_interest
        );
        assert!(comparison.savings.is_none());
    }

    #[test]
    fn test_years_from_months() {
        let result = simulate_payoff(&three_debt_plan(), Strategy::Snowball).unwrap();
        assert_eq!(
            result.years(),
            (Decimal::from(result.total_months) / dec!(12)).round_dp(2)
        );
    }
}
