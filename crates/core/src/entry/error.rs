//! Data-entry error types.

use thiserror::Error;

use crate::ledger::{LedgerError, TransactionKind};

/// Errors raised while turning entry rows into a submission.
///
/// Row numbers are 1-based, as shown to the person filling in the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// Row has no employee selected.
    #[error("Row {row}: no employee selected")]
    MissingEmployee {
        /// 1-based row number.
        row: usize,
    },

    /// Row has neither a collection nor a deposit amount.
    #[error("Row {row}: enter a collection or a deposit amount")]
    EmptyRow {
        /// 1-based row number.
        row: usize,
    },

    /// One side of the row failed validation.
    #[error("Row {row} {kind}: {source}")]
    InvalidSide {
        /// 1-based row number.
        row: usize,
        /// Which side of the row.
        kind: TransactionKind,
        /// Why the side was rejected.
        #[source]
        source: LedgerError,
    },
}
