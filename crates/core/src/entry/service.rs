//! Submission building.

use std::str::FromStr;

use cashrecon_shared::types::EmployeeId;
use rust_decimal::Decimal;

use super::error::EntryError;
use super::types::{BulkSubmission, EntryRow, NewTransaction};
use crate::ledger::{LedgerError, TransactionKind, ValidationPolicy, parse_date};

/// Splits entry rows into collection and deposit batches.
///
/// Amounts follow the same rules as fetched records (positive, within the
/// currency's minor unit); a filled-in side must carry a date.
///
/// # Errors
///
/// Returns the first problem found, naming its row.
pub fn build_submission(
    rows: &[EntryRow],
    policy: &ValidationPolicy,
) -> Result<BulkSubmission, EntryError> {
    let mut submission = BulkSubmission::default();

    for (index, row) in rows.iter().enumerate() {
        let row_number = index + 1;

        let employee_id = row
            .employee_id
            .as_deref()
            .and_then(|id| EmployeeId::from_str(id).ok())
            .ok_or(EntryError::MissingEmployee { row: row_number })?;

        if row.collection_amount.is_none() && row.deposit_amount.is_none() {
            return Err(EntryError::EmptyRow { row: row_number });
        }

        if let Some(amount) = row.collection_amount {
            let record = side(
                policy,
                &employee_id,
                amount,
                row.collection_date.as_deref(),
            )
            .map_err(|source| EntryError::InvalidSide {
                row: row_number,
                kind: TransactionKind::Collection,
                source,
            })?;
            submission.collections.push(record);
        }

        if let Some(amount) = row.deposit_amount {
            let record = side(policy, &employee_id, amount, row.deposit_date.as_deref())
                .map_err(|source| EntryError::InvalidSide {
                    row: row_number,
                    kind: TransactionKind::Deposit,
                    source,
                })?;
            submission.deposits.push(record);
        }
    }

    tracing::debug!(
        collections = submission.collections.len(),
        deposits = submission.deposits.len(),
        "Built bulk submission"
    );

    Ok(submission)
}

fn side(
    policy: &ValidationPolicy,
    employee_id: &EmployeeId,
    amount: Decimal,
    date: Option<&str>,
) -> Result<NewTransaction, LedgerError> {
    policy.check_amount(amount)?;
    let date = parse_date(date.ok_or(LedgerError::MissingDate)?)?;

    Ok(NewTransaction {
        employee_id: employee_id.clone(),
        date,
        amount,
    })
}
