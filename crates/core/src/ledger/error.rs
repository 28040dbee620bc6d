//! Ledger error types.
//!
//! Every malformed record is rejected with one of these errors; nothing is
//! coerced into a zero amount or a default date.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while validating raw transaction records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    // ========== Identity ==========
    /// Record carries no employee reference.
    #[error("Transaction has no employee id")]
    MissingEmployee,

    // ========== Kind ==========
    /// Record does not say whether it is a collection or a deposit.
    #[error("Transaction kind is missing")]
    MissingKind,

    /// Record kind is neither `collection` nor `deposit`.
    #[error("Unknown transaction kind: {0}")]
    UnknownKind(String),

    // ========== Amount ==========
    /// Record carries no amount.
    #[error("Transaction amount is missing")]
    MissingAmount,

    /// Amount is zero or negative.
    #[error("Transaction amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Amount is finer than the currency's minor unit.
    #[error("Amount {amount} has more than {minor_units} decimal places")]
    ExcessPrecision {
        /// The offending amount.
        amount: Decimal,
        /// Decimal places allowed by the currency.
        minor_units: u32,
    },

    /// Amount exceeds the largest value a single record may carry.
    #[error("Amount {amount} exceeds the maximum of {max}")]
    AmountTooLarge {
        /// The offending amount.
        amount: Decimal,
        /// Largest accepted amount.
        max: Decimal,
    },

    // ========== Date ==========
    /// Record carries no date.
    #[error("Transaction date is missing")]
    MissingDate,

    /// Date is neither `YYYY-MM-DD` nor an RFC 3339 timestamp.
    #[error("Invalid transaction date: {0}")]
    InvalidDate(String),

    // ========== Batch ==========
    /// A record in a batch failed validation.
    #[error("Record {index}: {source}")]
    InvalidRecord {
        /// Zero-based position of the record in its batch.
        index: usize,
        /// Why the record was rejected.
        #[source]
        source: Box<LedgerError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        assert_eq!(
            LedgerError::NonPositiveAmount(dec!(0)).to_string(),
            "Transaction amount must be positive, got 0"
        );
        assert_eq!(
            LedgerError::ExcessPrecision {
                amount: dec!(1.005),
                minor_units: 2
            }
            .to_string(),
            "Amount 1.005 has more than 2 decimal places"
        );
        assert_eq!(
            LedgerError::AmountTooLarge {
                amount: dec!(2000000000000000),
                max: dec!(1000000000000000)
            }
            .to_string(),
            "Amount 2000000000000000 exceeds the maximum of 1000000000000000"
        );
        assert_eq!(
            LedgerError::InvalidRecord {
                index: 3,
                source: Box::new(LedgerError::MissingDate),
            }
            .to_string(),
            "Record 3: Transaction date is missing"
        );
    }
}
