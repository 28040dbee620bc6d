//! Running reconciliation builder.
//!
//! Replays one employee's transactions in date order and records the
//! outstanding balance after each of them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::aggregate::aggregate;
use super::types::{Employee, EmployeeLedger, LedgerEntry, Transaction};

/// Builds the running ledger for one employee.
///
/// Transactions are stable-sorted by date ascending: entries sharing a date
/// keep their input order, so the same input always yields the same running
/// balances. The running value starts at zero; collections add, deposits
/// subtract, and each entry carries the value after applying itself.
#[must_use]
pub fn build_ledger(transactions: &[Transaction]) -> Vec<LedgerEntry> {
    let mut ordered: Vec<&Transaction> = transactions.iter().collect();
    // `sort_by_key` is stable.
    ordered.sort_by_key(|tx| tx.date);

    let mut running = Decimal::ZERO;
    ordered
        .into_iter()
        .map(|tx| {
            running += tx.signed_amount();
            LedgerEntry {
                kind: tx.kind,
                date: tx.date,
                amount: tx.amount,
                running_outstanding: running,
            }
        })
        .collect()
}

/// Builds the ledger and the matching outstanding report in one go.
#[must_use]
pub fn build_employee_ledger(transactions: &[Transaction], employee: &Employee) -> EmployeeLedger {
    EmployeeLedger {
        entries: build_ledger(transactions),
        report: aggregate(transactions, employee),
    }
}

/// A running balance reported by the service that disagrees with ours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drift {
    /// Zero-based position in the ledger.
    pub position: usize,
    /// Date of the entry.
    pub date: NaiveDate,
    /// Locally recomputed running balance.
    pub expected: Decimal,
    /// Running balance claimed by the service.
    pub reported: Decimal,
}

/// Compares service-reported running balances against the local ledger.
///
/// Both slices are compared position by position; `reported` is expected
/// in the same date order the local ledger uses.
#[must_use]
pub fn find_drift(local: &[LedgerEntry], reported: &[Decimal]) -> Vec<Drift> {
    local
        .iter()
        .zip(reported)
        .enumerate()
        .filter(|(_, (entry, reported))| entry.running_outstanding != **reported)
        .map(|(position, (entry, reported))| Drift {
            position,
            date: entry.date,
            expected: entry.running_outstanding,
            reported: *reported,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{BalanceState, TransactionKind};
    use cashrecon_shared::types::EmployeeId;
    use rust_decimal_macros::dec;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn tx(kind: TransactionKind, d: u32, amount: Decimal) -> Transaction {
        Transaction {
            id: None,
            kind,
            employee_id: EmployeeId::new("e1"),
            date: day(d),
            amount,
        }
    }

    fn running(entries: &[LedgerEntry]) -> Vec<Decimal> {
        entries.iter().map(|e| e.running_outstanding).collect()
    }

    #[test]
    fn test_empty_ledger() {
        assert!(build_ledger(&[]).is_empty());
    }

    #[test]
    fn test_collection_then_deposit() {
        let ledger = build_ledger(&[
            tx(TransactionKind::Collection, 1, dec!(5000)),
            tx(TransactionKind::Deposit, 2, dec!(3000)),
        ]);
        assert_eq!(
            ledger,
            vec![
                LedgerEntry {
                    kind: TransactionKind::Collection,
                    date: day(1),
                    amount: dec!(5000),
                    running_outstanding: dec!(5000),
                },
                LedgerEntry {
                    kind: TransactionKind::Deposit,
                    date: day(2),
                    amount: dec!(3000),
                    running_outstanding: dec!(2000),
                },
            ]
        );
    }

    #[test]
    fn test_same_day_ties_follow_input_order() {
        let deposit_first = build_ledger(&[
            tx(TransactionKind::Deposit, 1, dec!(1000)),
            tx(TransactionKind::Collection, 1, dec!(1000)),
        ]);
        assert_eq!(running(&deposit_first), [dec!(-1000), dec!(0)]);
        assert_eq!(deposit_first[1].balance_state(), BalanceState::Reconciled);

        let collection_first = build_ledger(&[
            tx(TransactionKind::Collection, 1, dec!(1000)),
            tx(TransactionKind::Deposit, 1, dec!(1000)),
        ]);
        assert_eq!(running(&collection_first), [dec!(1000), dec!(0)]);
    }

    #[test]
    fn test_out_of_order_input_is_sorted_by_date() {
        let ledger = build_ledger(&[
            tx(TransactionKind::Collection, 3, dec!(100)),
            tx(TransactionKind::Collection, 1, dec!(200)),
        ]);
        assert_eq!(ledger[0].date, day(1));
        assert_eq!(ledger[1].date, day(3));
        assert_eq!(running(&ledger), [dec!(200), dec!(300)]);
    }

    #[test]
    fn test_ties_keep_order_among_other_dates() {
        let ledger = build_ledger(&[
            tx(TransactionKind::Collection, 5, dec!(10)),
            tx(TransactionKind::Deposit, 2, dec!(1)),
            tx(TransactionKind::Collection, 2, dec!(2)),
            tx(TransactionKind::Deposit, 2, dec!(3)),
        ]);
        let amounts: Vec<Decimal> = ledger.iter().map(|e| e.amount).collect();
        assert_eq!(amounts, [dec!(1), dec!(2), dec!(3), dec!(10)]);
        assert_eq!(running(&ledger), [dec!(-1), dec!(1), dec!(-2), dec!(8)]);
    }

    #[test]
    fn test_employee_ledger_agrees_with_report() {
        let employee = Employee {
            id: EmployeeId::new("e1"),
            name: "Mayank".into(),
            employee_code: "1".into(),
        };
        let txs = [
            tx(TransactionKind::Collection, 1, dec!(700)),
            tx(TransactionKind::Deposit, 2, dec!(1200)),
        ];
        let ledger = build_employee_ledger(&txs, &employee);
        assert_eq!(
            ledger.entries.last().map(|e| e.running_outstanding),
            Some(ledger.report.outstanding)
        );
        assert_eq!(ledger.report.outstanding, dec!(-500));
    }

    #[test]
    fn test_find_drift() {
        let ledger = build_ledger(&[
            tx(TransactionKind::Collection, 1, dec!(100)),
            tx(TransactionKind::Deposit, 2, dec!(40)),
        ]);

        assert!(find_drift(&ledger, &[dec!(100), dec!(60)]).is_empty());

        let drift = find_drift(&ledger, &[dec!(100), dec!(140)]);
        assert_eq!(
            drift,
            vec![Drift {
                position: 1,
                date: day(2),
                expected: dec!(60),
                reported: dec!(140),
            }]
        );
    }
}
