//! Net worth from a list of asset and liability entries.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Serialize, Deserialize};

/// Whether an entry adds to or subtracts from net worth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Asset,
    Liability,
}

/// One line of the balance sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetWorthEntry {
    pub name: String,
    pub kind: EntryKind,
    pub amount: Decimal,
}

/// Asset and liability totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetWorthSummary {
    pub assets: Decimal,
    pub liabilities: Decimal,
    pub net_worth: Decimal,
    /// Liabilities over assets; `None` when there are no assets.
    pub debt_to_asset_ratio: Option<Decimal>,
}

/// Sums a balance sheet into its totals.
///
/// # Errors
///
/// Returns an error on a negative entry amount (a liability is entered as a
/// positive number under its own kind).
pub fn summarize_net_worth(entries: &[NetWorthEntry]) -> Result<NetWorthSummary, anyhow::Error> {
    let mut assets = dec!(0);
    let mut liabilities = dec!(0);
    for entry in entries {
        if entry.amount < Decimal::ZERO {
            return Err(anyhow::anyhow!("Entry '{}' cannot be negative.", entry.name));
        }
        match entry.kind {
            EntryKind::Asset => assets += entry.amount,
            EntryKind::Liability => liabilities += entry.amount,
        }
    }

    Ok(NetWorthSummary {
        assets: assets.round_dp(2),
        liabilities: liabilities.round_dp(2),
        net_worth: (assets - liabilities).round_dp(2),
        debt_to_asset_ratio: (!assets.is_zero()).then(|| (liabilities / assets).round_dp(4)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, kind: EntryKind, amount: Decimal) -> NetWorthEntry {
        NetWorthEntry { name: name.to_string(), kind, amount }
    }

    #[test]
    fn test_net_worth_totals() {
        let entries = vec![
            entry("Checking", EntryKind::Asset, dec!(4000)),
            entry("Brokerage", EntryKind::Asset, dec!(26000)),
            entry("Car Loan", EntryKind::Liability, dec!(9000)),
            entry("Credit Card", EntryKind::Liability, dec!(3000)),
        ];
        let summary = summarize_net_worth(&entries).unwrap();
        assert_eq!(summary.assets, dec!(30000));
        assert_eq!(summary.liabilities, dec!(12000));
        assert_eq!(summary.net_worth, dec!(18000));
        assert_eq!(summary.debt_to_asset_ratio, Some(dec!(0.4)));
    }

    #[test]
    fn test_ratio_absent_without_assets() {
        let entries = vec![entry("Card", EntryKind::Liability, dec!(500))];
        let summary = summarize_net_worth(&entries).unwrap();
        assert_eq!(summary.net_worth, dec!(-500));
        assert_eq!(summary.debt_to_asset_ratio, None);
    }

    #[test]
    fn test_empty_sheet_is_zero() {
        let summary = summarize_net_worth(&[]).unwrap();
        assert_eq!(summary.net_worth, dec!(0));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let entries = vec![entry("Broken", EntryKind::Asset, dec!(-1))];
        assert!(summarize_net_worth(&entries).is_err());
    }
}
