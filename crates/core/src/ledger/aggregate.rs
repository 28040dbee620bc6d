//! Ledger aggregator: per-employee outstanding reports and portfolio totals.

use std::collections::HashMap;

use cashrecon_shared::types::EmployeeId;
use rayon::prelude::*;
use rust_decimal::Decimal;

use super::types::{
    AggregateOutcome, Employee, OutstandingReport, PortfolioSummary, Transaction, TransactionKind,
};

/// Aggregates one employee's transactions into an outstanding report.
///
/// The caller partitions by employee; this function trusts its input. Order
/// of `transactions` does not matter. An empty slice yields a zero report
/// with no most recent date.
#[must_use]
pub fn aggregate(transactions: &[Transaction], employee: &Employee) -> OutstandingReport {
    let mut total_collection = Decimal::ZERO;
    let mut total_deposit = Decimal::ZERO;

    for tx in transactions {
        match tx.kind {
            TransactionKind::Collection => total_collection += tx.amount,
            TransactionKind::Deposit => total_deposit += tx.amount,
        }
    }

    OutstandingReport {
        employee: employee.clone(),
        total_collection,
        total_deposit,
        outstanding: total_collection - total_deposit,
        most_recent_date: transactions.iter().map(|tx| tx.date).max(),
    }
}

/// Aggregates every employee from one combined transaction list.
///
/// Transactions are partitioned by employee id in retrieval order, and each
/// partition is aggregated independently (in parallel). Reports come back in
/// the order of `employees`; employees without transactions get a zero
/// report. Transactions naming no known employee are returned as orphans.
#[must_use]
pub fn aggregate_all(employees: &[Employee], transactions: Vec<Transaction>) -> AggregateOutcome {
    let mut partitions: HashMap<EmployeeId, Vec<Transaction>> = employees
        .iter()
        .map(|employee| (employee.id.clone(), Vec::new()))
        .collect();
    let mut orphans = Vec::new();

    for tx in transactions {
        match partitions.get_mut(&tx.employee_id) {
            Some(bucket) => bucket.push(tx),
            None => orphans.push(tx),
        }
    }

    let reports = employees
        .par_iter()
        .map(|employee| {
            let bucket = partitions
                .get(&employee.id)
                .map_or(&[][..], Vec::as_slice);
            aggregate(bucket, employee)
        })
        .collect();

    AggregateOutcome { reports, orphans }
}

/// Totals across a set of reports.
#[must_use]
pub fn summarize(reports: &[OutstandingReport]) -> PortfolioSummary {
    let total_collection: Decimal = reports.iter().map(|r| r.total_collection).sum();
    let total_deposit: Decimal = reports.iter().map(|r| r.total_deposit).sum();

    PortfolioSummary {
        total_collection,
        total_deposit,
        total_outstanding: total_collection - total_deposit,
    }
}
