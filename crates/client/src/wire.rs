//! Wire formats of the external REST service.
//!
//! Field names follow the service (camelCase, `_id`). Incoming records are
//! deliberately lenient, with every field optional, so that the validation
//! policy in the core decides what is acceptable.

use cashrecon_core::entry::NewTransaction;
use cashrecon_core::ledger::{Employee, RawTransaction, TransactionKind};
use cashrecon_shared::types::EmployeeId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employee as returned by `/employees`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeRecord {
    /// Opaque id.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Human-facing employee code.
    #[serde(rename = "employeeId")]
    pub employee_code: String,
}

impl From<EmployeeRecord> for Employee {
    fn from(record: EmployeeRecord) -> Self {
        Self {
            id: EmployeeId::new(record.id),
            name: record.name,
            employee_code: record.employee_code,
        }
    }
}

/// Collection or deposit as returned by `/collections` and `/deposits`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    /// Record id.
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    /// Employee reference.
    #[serde(default)]
    pub employee_id: Option<String>,
    /// Date string.
    #[serde(default)]
    pub date: Option<String>,
    /// Amount.
    #[serde(default)]
    pub amount: Option<Decimal>,
}

impl TransactionRecord {
    /// Tags the record with the kind implied by the endpoint it came from.
    #[must_use]
    pub fn into_raw(self, kind: TransactionKind) -> RawTransaction {
        RawTransaction {
            id: self.id,
            kind: Some(kind.as_str().to_string()),
            employee_id: self.employee_id,
            date: self.date,
            amount: self.amount,
        }
    }
}

/// Row of `/reports/payments/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    /// `collection` or `deposit`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Date string.
    #[serde(default)]
    pub date: Option<String>,
    /// Amount.
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// Running balance as computed by the service.
    #[serde(default)]
    pub running_outstanding: Option<Decimal>,
}

impl PaymentRecord {
    /// Converts the row into a raw transaction for `employee_id`.
    #[must_use]
    pub fn to_raw(&self, employee_id: &EmployeeId) -> RawTransaction {
        RawTransaction {
            id: None,
            kind: self.kind.clone(),
            employee_id: Some(employee_id.as_str().to_string()),
            date: self.date.clone(),
            amount: self.amount,
        }
    }
}

/// Outgoing record for the bulk endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransactionRecord {
    /// Employee reference.
    pub employee_id: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// Exact amount, sent as a JSON number.
    #[serde(serialize_with = "rust_decimal::serde::arbitrary_precision::serialize")]
    pub amount: Decimal,
}

impl From<&NewTransaction> for NewTransactionRecord {
    fn from(tx: &NewTransaction) -> Self {
        Self {
            employee_id: tx.employee_id.as_str().to_string(),
            date: tx.date.format("%Y-%m-%d").to_string(),
            amount: tx.amount,
        }
    }
}

/// Body of `POST /collections/bulk`.
#[derive(Debug, Clone, Serialize)]
pub struct BulkCollections {
    /// Records to create.
    pub collections: Vec<NewTransactionRecord>,
}

/// Body of `POST /deposits/bulk`.
#[derive(Debug, Clone, Serialize)]
pub struct BulkDeposits {
    /// Records to create.
    pub deposits: Vec<NewTransactionRecord>,
}

/// Error body returned by the service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
}
