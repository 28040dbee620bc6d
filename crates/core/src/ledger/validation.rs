//! Validation policy turning raw records into transactions.

use std::str::FromStr;

use cashrecon_shared::types::{Currency, EmployeeId, TransactionId};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{Transaction, TransactionKind};

/// Largest amount a single record may carry, in major units.
///
/// Keeps every sum over validated records far inside `Decimal`'s range, so
/// aggregation and running balances cannot overflow.
#[must_use]
pub fn max_amount() -> Decimal {
    Decimal::new(1_000_000_000_000_000, 0)
}

/// An unvalidated record as received from the external service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTransaction {
    /// Record id.
    pub id: Option<String>,
    /// `collection` or `deposit`.
    pub kind: Option<String>,
    /// Employee reference.
    pub employee_id: Option<String>,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub date: Option<String>,
    /// Amount in major units.
    pub amount: Option<Decimal>,
}

/// Explicit rules a raw record must satisfy to enter the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationPolicy {
    /// Currency the amounts are recorded in; bounds their precision.
    pub currency: Currency,
}

impl ValidationPolicy {
    /// Creates a policy for the given currency.
    #[must_use]
    pub const fn new(currency: Currency) -> Self {
        Self { currency }
    }

    /// Validates a single record.
    ///
    /// # Errors
    ///
    /// Returns the first rule the record violates.
    pub fn validate(&self, raw: &RawTransaction) -> Result<Transaction, LedgerError> {
        let employee_id = raw
            .employee_id
            .as_deref()
            .and_then(|id| EmployeeId::from_str(id).ok())
            .ok_or(LedgerError::MissingEmployee)?;

        let kind = match raw.kind.as_deref() {
            None => return Err(LedgerError::MissingKind),
            Some(kind) => TransactionKind::from_str(kind)
                .map_err(|_| LedgerError::UnknownKind(kind.to_string()))?,
        };

        let amount = raw.amount.ok_or(LedgerError::MissingAmount)?;
        self.check_amount(amount)?;

        let date = raw
            .date
            .as_deref()
            .ok_or(LedgerError::MissingDate)
            .and_then(parse_date)?;

        let id = raw
            .id
            .as_deref()
            .and_then(|id| TransactionId::from_str(id).ok());

        Ok(Transaction {
            id,
            kind,
            employee_id,
            date,
            amount,
        })
    }

    /// Validates a batch, preserving its order.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidRecord`] for the first bad record.
    pub fn validate_all(&self, raws: &[RawTransaction]) -> Result<Vec<Transaction>, LedgerError> {
        raws.iter()
            .enumerate()
            .map(|(index, raw)| {
                self.validate(raw).map_err(|source| LedgerError::InvalidRecord {
                    index,
                    source: Box::new(source),
                })
            })
            .collect()
    }

    /// Checks that an amount is positive, bounded, and fits the currency's
    /// minor unit.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::NonPositiveAmount`], [`LedgerError::AmountTooLarge`]
    /// or [`LedgerError::ExcessPrecision`].
    pub fn check_amount(&self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount(amount));
        }
        let max = max_amount();
        if amount > max {
            return Err(LedgerError::AmountTooLarge { amount, max });
        }
        if !self.currency.fits_minor_units(amount) {
            return Err(LedgerError::ExcessPrecision {
                amount,
                minor_units: self.currency.minor_units(),
            });
        }
        Ok(())
    }
}

/// Parses a transaction date.
///
/// Accepts a plain calendar date or an RFC 3339 timestamp, which is reduced
/// to its UTC calendar date.
///
/// # Errors
///
/// Returns [`LedgerError::InvalidDate`] for anything else.
pub fn parse_date(raw: &str) -> Result<NaiveDate, LedgerError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::MissingDate);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|ts| ts.with_timezone(&Utc).date_naive())
        .map_err(|_| LedgerError::InvalidDate(raw.to_string()))
}
