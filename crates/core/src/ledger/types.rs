//! Ledger domain types.
//!
//! Raw records arrive from the external service and are turned into
//! [`Transaction`]s by the validation policy; everything downstream of that
//! (reports, ledgers, summaries) is derived and never persisted.

use cashrecon_shared::types::{EmployeeId, TransactionId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::balance::BalanceState;

/// Kind of cash movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Cash collected by the employee (increases outstanding).
    Collection,
    /// Cash deposited by the employee (decreases outstanding).
    Deposit,
}

impl TransactionKind {
    /// Wire name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Collection => "collection",
            Self::Deposit => "deposit",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "collection" => Ok(Self::Collection),
            "deposit" => Ok(Self::Deposit),
            _ => Err(format!("Unknown transaction kind: {s}")),
        }
    }
}

/// Employee identity record, owned by the external service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Opaque identifier.
    pub id: EmployeeId,
    /// Display name.
    pub name: String,
    /// Human-facing employee code.
    pub employee_code: String,
}

/// A validated collection or deposit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Record id, when the service supplied one.
    pub id: Option<TransactionId>,
    /// Collection or deposit.
    pub kind: TransactionKind,
    /// The employee this transaction is attributed to.
    pub employee_id: EmployeeId,
    /// Calendar date of the transaction.
    pub date: NaiveDate,
    /// Strictly positive amount.
    pub amount: Decimal,
}

impl Transaction {
    /// Returns the effect on the outstanding balance
    /// (positive for collections, negative for deposits).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Collection => self.amount,
            TransactionKind::Deposit => -self.amount,
        }
    }
}

/// Per-employee outstanding summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutstandingReport {
    /// The employee the report is for.
    pub employee: Employee,
    /// Sum of collection amounts.
    pub total_collection: Decimal,
    /// Sum of deposit amounts.
    pub total_deposit: Decimal,
    /// `total_collection - total_deposit`; negative means over-deposited.
    pub outstanding: Decimal,
    /// Latest transaction date across both kinds, `None` without transactions.
    pub most_recent_date: Option<NaiveDate>,
}

impl OutstandingReport {
    /// Classifies the outstanding balance.
    #[must_use]
    pub fn balance_state(&self) -> BalanceState {
        BalanceState::of(self.outstanding)
    }
}

/// One row of an employee's running ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Collection or deposit.
    pub kind: TransactionKind,
    /// Transaction date.
    pub date: NaiveDate,
    /// Transaction amount (always positive).
    pub amount: Decimal,
    /// Outstanding balance after applying this entry.
    pub running_outstanding: Decimal,
}

impl LedgerEntry {
    /// Classifies the running balance at this entry.
    #[must_use]
    pub fn balance_state(&self) -> BalanceState {
        BalanceState::of(self.running_outstanding)
    }
}

/// An employee's full reconciliation: the running ledger plus its summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeLedger {
    /// Date-ordered entries with running balances.
    pub entries: Vec<LedgerEntry>,
    /// Summary over the same transactions.
    pub report: OutstandingReport,
}

/// Totals across every employee report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Sum of all collections.
    pub total_collection: Decimal,
    /// Sum of all deposits.
    pub total_deposit: Decimal,
    /// `total_collection - total_deposit`.
    pub total_outstanding: Decimal,
}

/// Result of aggregating many employees at once.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AggregateOutcome {
    /// One report per employee, in the order the employees were given.
    pub reports: Vec<OutstandingReport>,
    /// Transactions whose employee id matched no employee.
    pub orphans: Vec<Transaction>,
}
