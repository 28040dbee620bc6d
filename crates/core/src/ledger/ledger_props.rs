//! Property-based tests for the aggregator and the reconciliation builder.

use cashrecon_shared::types::EmployeeId;
use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::aggregate::aggregate;
use super::reconciliation::build_ledger;
use super::types::{Employee, Transaction, TransactionKind};

/// Amounts from 0.01 to 1,000,000.00.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Dates within a small window so that ties are common.
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1u32..=10).prop_map(|d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap())
}

fn kind_strategy() -> impl Strategy<Value = TransactionKind> {
    prop_oneof![Just(TransactionKind::Collection), Just(TransactionKind::Deposit)]
}

fn transaction_strategy() -> impl Strategy<Value = Transaction> {
    (kind_strategy(), date_strategy(), amount_strategy()).prop_map(|(kind, date, amount)| {
        Transaction {
            id: None,
            kind,
            employee_id: EmployeeId::new("e1"),
            date,
            amount,
        }
    })
}

fn transactions_strategy(max_len: usize) -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(transaction_strategy(), 0..=max_len)
}

fn employee() -> Employee {
    Employee {
        id: EmployeeId::new("e1"),
        name: "Test".into(),
        employee_code: "T1".into(),
    }
}

fn sum_of(txs: &[Transaction], kind: TransactionKind) -> Decimal {
    txs.iter().filter(|tx| tx.kind == kind).map(|tx| tx.amount).sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Outstanding equals collections minus deposits, exactly.
    #[test]
    fn prop_outstanding_is_collections_minus_deposits(
        txs in transactions_strategy(40),
    ) {
        let report = aggregate(&txs, &employee());
        let collections = sum_of(&txs, TransactionKind::Collection);
        let deposits = sum_of(&txs, TransactionKind::Deposit);

        prop_assert_eq!(report.total_collection, collections);
        prop_assert_eq!(report.total_deposit, deposits);
        prop_assert_eq!(report.outstanding, collections - deposits);
    }

    /// Aggregation does not depend on input order.
    #[test]
    fn prop_aggregate_is_order_independent(
        (txs, shuffled) in transactions_strategy(30)
            .prop_flat_map(|txs| (Just(txs.clone()), Just(txs).prop_shuffle())),
    ) {
        prop_assert_eq!(aggregate(&txs, &employee()), aggregate(&shuffled, &employee()));
    }

    /// The ledger has one entry per transaction and ends at the report's outstanding.
    #[test]
    fn prop_ledger_ends_at_outstanding(
        txs in transactions_strategy(40),
    ) {
        let ledger = build_ledger(&txs);
        let report = aggregate(&txs, &employee());

        prop_assert_eq!(ledger.len(), txs.len());
        let last = ledger.last().map_or(Decimal::ZERO, |e| e.running_outstanding);
        prop_assert_eq!(last, report.outstanding);
    }

    /// Each running value is the previous one plus the entry's signed amount.
    #[test]
    fn prop_running_balance_chain(
        txs in transactions_strategy(40),
    ) {
        let ledger = build_ledger(&txs);
        let mut previous = Decimal::ZERO;
        for entry in &ledger {
            let delta = match entry.kind {
                TransactionKind::Collection => entry.amount,
                TransactionKind::Deposit => -entry.amount,
            };
            prop_assert_eq!(entry.running_outstanding, previous + delta);
            previous = entry.running_outstanding;
        }
    }

    /// Entries come out in non-decreasing date order.
    #[test]
    fn prop_ledger_is_date_ordered(
        txs in transactions_strategy(40),
    ) {
        let ledger = build_ledger(&txs);
        for pair in ledger.windows(2) {
            prop_assert!(pair[0].date <= pair[1].date);
        }
    }

    /// Same-day entries keep their relative input order.
    #[test]
    fn prop_ties_preserve_input_order(
        txs in transactions_strategy(40),
    ) {
        let ledger = build_ledger(&txs);
        for date in ledger.iter().map(|e| e.date) {
            let input: Vec<(TransactionKind, Decimal)> = txs
                .iter()
                .filter(|tx| tx.date == date)
                .map(|tx| (tx.kind, tx.amount))
                .collect();
            let output: Vec<(TransactionKind, Decimal)> = ledger
                .iter()
                .filter(|e| e.date == date)
                .map(|e| (e.kind, e.amount))
                .collect();
            prop_assert_eq!(input, output);
        }
    }

    /// Calling either operation twice on the same input gives identical output.
    #[test]
    fn prop_idempotent(
        txs in transactions_strategy(30),
    ) {
        prop_assert_eq!(build_ledger(&txs), build_ledger(&txs));
        prop_assert_eq!(aggregate(&txs, &employee()), aggregate(&txs, &employee()));
    }

    /// Most recent date is the maximum date, or absent for empty input.
    #[test]
    fn prop_most_recent_date_is_max(
        txs in transactions_strategy(30),
    ) {
        let report = aggregate(&txs, &employee());
        prop_assert_eq!(report.most_recent_date, txs.iter().map(|tx| tx.date).max());
    }
}
