//! Plain-text tables for terminal output.

use std::io::{self, Write};

use cashrecon_client::{EmployeeLedgerView, OutstandingOverview, SubmissionReceipt};
use cashrecon_core::entry::{BulkSubmission, NewTransaction};
use cashrecon_core::ledger::{BalanceState, Employee};
use cashrecon_shared::types::{Currency, Money};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Marker shown for a reconciled running balance and for missing dates.
const EMPTY_MARKER: &str = "-";

fn money(amount: Decimal, currency: Currency) -> String {
    Money::new(amount, currency).to_string()
}

fn running_cell(amount: Decimal, currency: Currency) -> String {
    if BalanceState::of(amount).is_reconciled() {
        EMPTY_MARKER.to_string()
    } else {
        money(amount, currency)
    }
}

fn date_cell(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| EMPTY_MARKER.to_string(), |d| d.to_string())
}

/// Writes the employee directory: the id `ledger` takes, code, and name.
pub fn employee_table(out: &mut impl Write, employees: &[Employee]) -> io::Result<()> {
    writeln!(out, "{:<26} {:<10} {}", "ID", "CODE", "NAME")?;
    for employee in employees {
        writeln!(
            out,
            "{:<26} {:<10} {}",
            employee.id.as_str(),
            employee.employee_code,
            employee.name
        )?;
    }
    Ok(())
}

/// Writes one row per employee followed by portfolio totals.
pub fn outstanding_table(
    out: &mut impl Write,
    overview: &OutstandingOverview,
    currency: Currency,
) -> io::Result<()> {
    writeln!(
        out,
        "{:<26} {:<24} {:<10} {:>16} {:>16} {:>16}  {}",
        "ID", "EMPLOYEE", "CODE", "COLLECTED", "DEPOSITED", "OUTSTANDING", "LAST ACTIVITY"
    )?;
    for report in &overview.reports {
        writeln!(
            out,
            "{:<26} {:<24} {:<10} {:>16} {:>16} {:>16}  {}",
            report.employee.id.as_str(),
            report.employee.name,
            report.employee.employee_code,
            money(report.total_collection, currency),
            money(report.total_deposit, currency),
            money(report.outstanding, currency),
            date_cell(report.most_recent_date),
        )?;
    }
    writeln!(
        out,
        "{:<26} {:<24} {:<10} {:>16} {:>16} {:>16}",
        "TOTAL",
        "",
        "",
        money(overview.summary.total_collection, currency),
        money(overview.summary.total_deposit, currency),
        money(overview.summary.total_outstanding, currency),
    )?;
    if overview.orphaned_records > 0 {
        writeln!(
            out,
            "note: {} record(s) reference unknown employees and were left out",
            overview.orphaned_records
        )?;
    }
    Ok(())
}

/// Writes the running ledger of one employee.
pub fn ledger_table(
    out: &mut impl Write,
    view: &EmployeeLedgerView,
    currency: Currency,
) -> io::Result<()> {
    let report = &view.ledger.report;
    writeln!(
        out,
        "{} ({})",
        report.employee.name, report.employee.employee_code
    )?;
    writeln!(out, "{:<12} {:<11} {:>16} {:>16}", "DATE", "TYPE", "AMOUNT", "OUTSTANDING")?;
    for entry in &view.ledger.entries {
        writeln!(
            out,
            "{:<12} {:<11} {:>16} {:>16}",
            entry.date.to_string(),
            entry.kind.as_str(),
            money(entry.amount, currency),
            running_cell(entry.running_outstanding, currency),
        )?;
    }
    writeln!(
        out,
        "collected {}, deposited {}, outstanding {} ({})",
        money(report.total_collection, currency),
        money(report.total_deposit, currency),
        money(report.outstanding, currency),
        report.balance_state(),
    )?;
    if !view.drift_checked {
        writeln!(
            out,
            "note: service running balances were not compared with the recomputed ledger"
        )?;
    }
    for drift in &view.drift {
        writeln!(
            out,
            "warning: entry {} on {}: service reports {}, recomputed {}",
            drift.position + 1,
            drift.date,
            money(drift.reported, currency),
            money(drift.expected, currency),
        )?;
    }
    Ok(())
}

fn batch(
    out: &mut impl Write,
    title: &str,
    records: &[NewTransaction],
    currency: Currency,
) -> io::Result<()> {
    writeln!(out, "{title} ({})", records.len())?;
    for record in records {
        writeln!(
            out,
            "  {:<24} {:<12} {:>16}",
            record.employee_id.as_str(),
            record.date.to_string(),
            money(record.amount, currency),
        )?;
    }
    Ok(())
}

/// Writes the two batches a submission would send.
pub fn submission_preview(
    out: &mut impl Write,
    submission: &BulkSubmission,
    currency: Currency,
) -> io::Result<()> {
    batch(out, "collections", &submission.collections, currency)?;
    batch(out, "deposits", &submission.deposits, currency)
}

/// Writes a one-line summary of an accepted submission.
pub fn receipt_line(out: &mut impl Write, receipt: SubmissionReceipt) -> io::Result<()> {
    writeln!(
        out,
        "submitted {} collection(s) and {} deposit(s)",
        receipt.collections, receipt.deposits
    )
}
