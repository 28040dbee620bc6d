//! Cash-reconciliation ledger logic.
//!
//! This module implements the core reconciliation functionality:
//! - Domain types (transactions, reports, ledger entries)
//! - Validation policy for raw records
//! - Outstanding-balance aggregation
//! - Running reconciliation ledger
//! - Balance classification

pub mod aggregate;
pub mod balance;
pub mod error;
pub mod reconciliation;
pub mod types;
pub mod validation;

#[cfg(test)]
mod ledger_props;

pub use aggregate::{aggregate, aggregate_all, summarize};
pub use balance::BalanceState;
pub use error::LedgerError;
pub use reconciliation::{Drift, build_employee_ledger, build_ledger, find_drift};
pub use types::{
    AggregateOutcome, Employee, EmployeeLedger, LedgerEntry, OutstandingReport, PortfolioSummary,
    Transaction, TransactionKind,
};
pub use validation::{RawTransaction, ValidationPolicy, max_amount, parse_date};
