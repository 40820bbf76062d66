//! Monthly budget summary and emergency-fund planning.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Serialize, Deserialize};

use crate::growth::months_to_goal;

/// One named monthly expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseItem {
    pub name: String,
    pub amount: Decimal,
}

/// A month of income against its expenses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetPlan {
    pub monthly_income: Decimal,
    pub expenses: Vec<ExpenseItem>,
}

/// Where the month's money goes, plus 50/30/20 guideline targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub total_expenses: Decimal,
    /// Income left after all expenses; negative when overspent.
    pub remaining: Decimal,
    /// Share of income left over, as a percentage.
    pub save_rate: Decimal,
    pub needs_target: Decimal,
    pub wants_target: Decimal,
    pub savings_target: Decimal,
}

/// Summarizes a monthly budget.
///
/// # Errors
///
/// Returns an error on a non-positive income or a negative expense.
pub fn summarize_budget(plan: &BudgetPlan) -> Result<BudgetSummary, anyhow::Error> {
    if plan.monthly_income <= Decimal::ZERO {
        return Err(anyhow::anyhow!("Monthly income must be greater than zero."));
    }
    for item in &plan.expenses {
        if item.amount < Decimal::ZERO {
            return Err(anyhow::anyhow!("Expense '{}' cannot be negative.", item.name));
        }
    }

    let total_expenses: Decimal = plan.expenses.iter().map(|item| item.amount).sum();
    let remaining = plan.monthly_income - total_expenses;

    Ok(BudgetSummary {
        total_expenses: total_expenses.round_dp(2),
        remaining: remaining.round_dp(2),
        save_rate: (remaining / plan.monthly_income * dec!(100)).round_dp(2),
        needs_target: (plan.monthly_income * dec!(0.5)).round_dp(2),
        wants_target: (plan.monthly_income * dec!(0.3)).round_dp(2),
        savings_target: (plan.monthly_income * dec!(0.2)).round_dp(2),
    })
}

/// An emergency-fund target and the road to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyFundPlan {
    /// Monthly expenses times the months of coverage.
    pub target: Decimal,
    /// What is still missing today.
    pub shortfall: Decimal,
    /// Months until the target at the given contribution and rate; `None`
    /// when the target is out of reach within 600 months.
    pub months_to_target: Option<u32>,
}

/// Plans an emergency fund of `months_of_coverage` months of expenses.
///
/// # Errors
///
/// Returns an error on non-positive expenses or coverage, or any invalid
/// goal-solve input.
pub fn emergency_fund_plan(
    monthly_expenses: Decimal,
    months_of_coverage: u32,
    current_balance: Decimal,
    monthly_contribution: Decimal,
    annual_rate: Decimal,
) -> Result<EmergencyFundPlan, anyhow::Error> {
    if monthly_expenses <= Decimal::ZERO {
        return Err(anyhow::anyhow!("Monthly expenses must be greater than zero."));
    }
    if months_of_coverage == 0 {
        return Err(anyhow::anyhow!("Months of coverage cannot be zero."));
    }

    let target = monthly_expenses * Decimal::from(months_of_coverage);
    let months_to_target =
        months_to_goal(current_balance, monthly_contribution, annual_rate, target)?;

    Ok(EmergencyFundPlan {
        target: target.round_dp(2),
        shortfall: (target - current_balance).max(Decimal::ZERO).round_dp(2),
        months_to_target,
    })
}
