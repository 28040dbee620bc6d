//! Data-entry types.

use cashrecon_shared::types::EmployeeId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the data-entry form.
///
/// A side with no amount is treated as not filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRow {
    /// Selected employee.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Collected amount, if any.
    #[serde(default)]
    pub collection_amount: Option<Decimal>,
    /// Collection date (`YYYY-MM-DD`).
    #[serde(default)]
    pub collection_date: Option<String>,
    /// Deposited amount, if any.
    #[serde(default)]
    pub deposit_amount: Option<Decimal>,
    /// Deposit date (`YYYY-MM-DD`).
    #[serde(default)]
    pub deposit_date: Option<String>,
}

/// A validated record ready to be written to the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// The employee the record belongs to.
    pub employee_id: EmployeeId,
    /// Calendar date.
    pub date: NaiveDate,
    /// Strictly positive amount.
    pub amount: Decimal,
}

/// Collections and deposits split out of a set of entry rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkSubmission {
    /// Collection records, in row order.
    pub collections: Vec<NewTransaction>,
    /// Deposit records, in row order.
    pub deposits: Vec<NewTransaction>,
}

impl BulkSubmission {
    /// Returns true if there is nothing to submit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty() && self.deposits.is_empty()
    }

    /// Total number of records across both batches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collections.len() + self.deposits.len()
    }
}
