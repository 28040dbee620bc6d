//! Classification of signed outstanding balances.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// State of a signed outstanding balance.
///
/// - `Outstanding`: collections exceed deposits (cash still owed)
/// - `Reconciled`: exactly zero
/// - `OverDeposited`: deposits exceed collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceState {
    /// Positive balance.
    Outstanding,
    /// Zero balance, a fully reconciled point.
    Reconciled,
    /// Negative balance.
    OverDeposited,
}

impl BalanceState {
    /// Classifies a balance. Negative values are never clamped.
    #[must_use]
    pub fn of(balance: Decimal) -> Self {
        if balance.is_zero() {
            Self::Reconciled
        } else if balance.is_sign_negative() {
            Self::OverDeposited
        } else {
            Self::Outstanding
        }
    }

    /// Returns true for a zero balance.
    #[must_use]
    pub fn is_reconciled(self) -> bool {
        matches!(self, Self::Reconciled)
    }
}

impl std::fmt::Display for BalanceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Outstanding => write!(f, "outstanding"),
            Self::Reconciled => write!(f, "reconciled"),
            Self::OverDeposited => write!(f, "over-deposited"),
        }
    }
}
