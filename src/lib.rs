//! `pf_financial` is a Rust library for personal finance planning math.
//!
//! It provides the projection engines behind a set of personal finance
//! calculators:
//! - **Debt payoff**: month-by-month simulation of the two canonical
//!   elimination strategies, with a comparison of what the better one saves:
//!   **Snowball** (smallest balance first) and **Avalanche** (highest rate
//!   first).
//! - **Amortization and mortgages**: fixed-payment loan schedules, plus the
//!   flat monthly add-ons a housing payment carries.
//! - **Growth**: compound growth with contributions, savings goals,
//!   retirement projection, investment returns.
//! - **Household math**: paycheck withholding, budget and net worth
//!   summaries, tips, sales tax, inflation, currency and unit conversion.
//!
//! ## Usage
//!
//! Add `pf_financial` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pf_financial = "0.3.0"
//! rust_decimal = "1.39.0"
//! rust_decimal_macros = "1.39.0"
//! ```
//!
//! Then, use the `compare_payoff_strategies` function to weigh the two
//! payoff orderings against each other:
//!
//! ```rust
//! use pf_financial::{compare_payoff_strategies, Debt, PayoffPlan};
//! use rust_decimal_macros::dec;
//!
//! fn main() {
//!     let plan = PayoffPlan {
//!         debts: vec![
//!             Debt {
//!                 name: "Credit Card".to_string(),
//!                 balance: dec!(5_000),
//!                 annual_rate: dec!(18.99),
//!                 minimum_payment: dec!(125),
//!             },
//!             Debt {
//!                 name: "Car Loan".to_string(),
//!                 balance: dec!(8_000),
//!                 annual_rate: dec!(4.2),
//!                 minimum_payment: dec!(220),
//!             },
//!         ],
//!         extra_monthly_payment: dec!(200),
//!     };
//!
//!     match compare_payoff_strategies(&plan) {
//!         Ok(comparison) => {
//!             println!("Snowball:  {} months, {} interest",
//!                 comparison.snowball.total_months,
//!                 comparison.snowball.total_interest);
//!             println!("Avalanche: {} months, {} interest",
//!                 comparison.avalanche.total_months,
//!                 comparison.avalanche.total_interest);
//!             if let Some(savings) = comparison.savings {
//!                 println!("Avalanche saves {}", savings.interest_saved);
//!             }
//!         }
//!         Err(e) => {
//!             eprintln!("Error comparing payoff strategies: {}", e);
//!         }
//!     }
//! }
//! ```

pub mod amortization;
pub mod budget;
pub mod conversion;
pub mod debt;
pub mod everyday;
pub mod growth;
pub mod mortgage;
pub mod net_worth;
pub mod paycheck;
pub mod payoff;
pub mod rate;
pub mod retirement;

pub use amortization::{AmortizationItem, AmortizationResult, amortize};
pub use debt::{Debt, PAID_OFF_THRESHOLD, PayoffPlan};
pub use growth::{
    CompoundingFrequency, GrowthResult, ReturnSummary, YearlyBreakdown, investment_return,
    months_to_goal, project_growth,
};
pub use mortgage::{MortgageInput, MortgageResult, calculate_mortgage};
pub use paycheck::{PayFrequency, PaycheckInput, PaycheckResult, calculate_paycheck};
pub use payoff::{
    MAX_PAYOFF_MONTHS, MonthlyPayment, PayoffResult, Strategy, StrategyComparison,
    StrategySavings, compare_payoff_strategies, simulate_payoff,
};
pub use retirement::{RetirementInput, RetirementProjection, project_retirement};
