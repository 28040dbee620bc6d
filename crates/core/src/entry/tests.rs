//! Tests for bulk data entry.

use chrono::NaiveDate;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::EntryError;
use super::service::build_submission;
use super::types::EntryRow;
use crate::ledger::{LedgerError, TransactionKind, ValidationPolicy};

fn row(employee: &str) -> EntryRow {
    EntryRow {
        employee_id: Some(employee.into()),
        ..EntryRow::default()
    }
}

fn with_collection(mut row: EntryRow, amount: Decimal, date: &str) -> EntryRow {
    row.collection_amount = Some(amount);
    row.collection_date = Some(date.into());
    row
}

fn with_deposit(mut row: EntryRow, amount: Decimal, date: &str) -> EntryRow {
    row.deposit_amount = Some(amount);
    row.deposit_date = Some(date.into());
    row
}

#[test]
fn test_rows_split_into_batches_in_row_order() {
    let rows = vec![
        with_deposit(
            with_collection(row("a"), dec!(5000), "2024-05-01"),
            dec!(3000),
            "2024-05-02",
        ),
        with_collection(row("b"), dec!(100), "2024-05-03"),
        with_deposit(row("c"), dec!(40.50), "2024-05-04"),
    ];

    let submission = build_submission(&rows, &ValidationPolicy::default()).unwrap();

    assert_eq!(submission.len(), 4);
    let collection_ids: Vec<&str> = submission
        .collections
        .iter()
        .map(|c| c.employee_id.as_str())
        .collect();
    assert_eq!(collection_ids, ["a", "b"]);
    let deposit_ids: Vec<&str> = submission
        .deposits
        .iter()
        .map(|d| d.employee_id.as_str())
        .collect();
    assert_eq!(deposit_ids, ["a", "c"]);
    assert_eq!(submission.deposits[1].amount, dec!(40.50));
    assert_eq!(
        submission.collections[0].date,
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    );
}

#[test]
fn test_no_rows_is_empty_submission() {
    let submission = build_submission(&[], &ValidationPolicy::default()).unwrap();
    assert!(submission.is_empty());
    assert_eq!(submission.len(), 0);
}

#[rstest]
#[case(None)]
#[case(Some(""))]
fn test_missing_employee(#[case] employee: Option<&str>) {
    let mut entry = with_collection(row("x"), dec!(1), "2024-05-01");
    entry.employee_id = employee.map(str::to_string);
    assert_eq!(
        build_submission(&[entry], &ValidationPolicy::default()),
        Err(EntryError::MissingEmployee { row: 1 })
    );
}

#[test]
fn test_empty_row() {
    let rows = vec![with_collection(row("a"), dec!(1), "2024-05-01"), row("b")];
    assert_eq!(
        build_submission(&rows, &ValidationPolicy::default()),
        Err(EntryError::EmptyRow { row: 2 })
    );
}

#[test]
fn test_zero_amount_is_rejected() {
    let rows = vec![with_deposit(row("a"), dec!(0), "2024-05-01")];
    assert_eq!(
        build_submission(&rows, &ValidationPolicy::default()),
        Err(EntryError::InvalidSide {
            row: 1,
            kind: TransactionKind::Deposit,
            source: LedgerError::NonPositiveAmount(dec!(0)),
        })
    );
}

#[test]
fn test_present_side_requires_date() {
    let mut entry = row("a");
    entry.collection_amount = Some(dec!(10));
    assert_eq!(
        build_submission(&[entry], &ValidationPolicy::default()),
        Err(EntryError::InvalidSide {
            row: 1,
            kind: TransactionKind::Collection,
            source: LedgerError::MissingDate,
        })
    );
}

#[test]
fn test_error_message_names_row_and_side() {
    let rows = vec![with_collection(row("a"), dec!(-5), "2024-05-01")];
    let err = build_submission(&rows, &ValidationPolicy::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Row 1 collection: Transaction amount must be positive, got -5"
    );
}

#[test]
fn test_rows_deserialize_from_form_json() {
    let body = r#"[
        {"employeeId": "a", "collectionAmount": "1200.50", "collectionDate": "2024-05-01"},
        {"employeeId": "b", "depositAmount": 300, "depositDate": "2024-05-02"}
    ]"#;
    let rows: Vec<EntryRow> = serde_json::from_str(body).unwrap();
    let submission = build_submission(&rows, &ValidationPolicy::default()).unwrap();
    assert_eq!(submission.collections[0].amount, dec!(1200.50));
    assert_eq!(submission.deposits[0].amount, dec!(300));
}
