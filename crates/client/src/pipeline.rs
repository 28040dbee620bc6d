//! Explicit fetch pipeline feeding the reconciliation core.
//!
//! Each operation is one discrete stage triggered by its caller: fetch the
//! raw records, validate them, and hand them to the pure core. Nothing is
//! cached; every call recomputes from freshly fetched input.

use cashrecon_core::entry::BulkSubmission;
use cashrecon_core::ledger::{
    Drift, EmployeeLedger, OutstandingReport, PortfolioSummary, ValidationPolicy, aggregate_all,
    build_employee_ledger, find_drift, summarize,
};
use cashrecon_shared::types::EmployeeId;
use cashrecon_shared::{LoginRequest, Session};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::client::ApiClient;
use crate::error::ClientError;

/// Outstanding balances for every employee.
#[derive(Debug, Clone, Serialize)]
pub struct OutstandingOverview {
    /// One report per employee, in service order.
    pub reports: Vec<OutstandingReport>,
    /// Totals across all reports.
    pub summary: PortfolioSummary,
    /// Number of fetched records that named an unknown employee.
    pub orphaned_records: usize,
}

/// One employee's ledger plus any disagreement with the service's own figures.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeLedgerView {
    /// Locally recomputed ledger and report.
    pub ledger: EmployeeLedger,
    /// Positions where the service reported a different running balance.
    pub drift: Vec<Drift>,
    /// Whether the service's running balances could be compared at all.
    pub drift_checked: bool,
}

/// What a bulk submission wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmissionReceipt {
    /// Collections accepted by the service.
    pub collections: usize,
    /// Deposits accepted by the service.
    pub deposits: usize,
}

/// Orchestrates fetch, validation, and reconciliation.
#[derive(Debug, Clone)]
pub struct Dashboard {
    client: ApiClient,
    policy: ValidationPolicy,
}

impl Dashboard {
    /// Creates a dashboard over a client, validating with `policy`.
    #[must_use]
    pub fn new(client: ApiClient, policy: ValidationPolicy) -> Self {
        Self { client, policy }
    }

    /// Returns the underlying client.
    #[must_use]
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Logs in and verifies the new token.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ClientError> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let session = self.client.login(&request).await?;
        let user = self.client.verify(&session).await?;
        info!(username = %user.username, role = %user.role, "Logged in");
        Ok(session.with_user(user))
    }

    /// Verifies a stored token and returns a session carrying its user.
    pub async fn resume(&self, token: &str) -> Result<Session, ClientError> {
        let session = Session::from_token(token);
        let user = self.client.verify(&session).await?;
        Ok(session.with_user(user))
    }

    /// Fetches all records and aggregates every employee.
    pub async fn outstanding(&self, session: &Session) -> Result<OutstandingOverview, ClientError> {
        let (employees, collections, deposits) = tokio::try_join!(
            self.client.employees(session),
            self.client.collections(session),
            self.client.deposits(session),
        )?;
        info!(
            employees = employees.len(),
            collections = collections.len(),
            deposits = deposits.len(),
            "Fetched outstanding inputs"
        );

        let mut transactions = self
            .policy
            .validate_all(&collections)
            .map_err(|source| ClientError::InvalidRecord {
                what: "collections",
                source,
            })?;
        transactions.extend(self.policy.validate_all(&deposits).map_err(|source| {
            ClientError::InvalidRecord {
                what: "deposits",
                source,
            }
        })?);

        let outcome = aggregate_all(&employees, transactions);
        for orphan in &outcome.orphans {
            warn!(
                employee_id = %orphan.employee_id,
                kind = %orphan.kind,
                date = %orphan.date,
                "Record references unknown employee"
            );
        }

        let summary = summarize(&outcome.reports);
        Ok(OutstandingOverview {
            orphaned_records: outcome.orphans.len(),
            reports: outcome.reports,
            summary,
        })
    }

    /// Fetches one employee's history and rebuilds the running ledger.
    pub async fn employee_ledger(
        &self,
        session: &Session,
        id: &EmployeeId,
    ) -> Result<EmployeeLedgerView, ClientError> {
        let (employee, history) = tokio::try_join!(
            self.client.employee(session, id),
            self.client.payment_history(session, id),
        )?;
        info!(employee_id = %id, records = history.len(), "Fetched payment history");

        let raws: Vec<_> = history.iter().map(|row| row.to_raw(&employee.id)).collect();
        let transactions =
            self.policy
                .validate_all(&raws)
                .map_err(|source| ClientError::InvalidRecord {
                    what: "payments",
                    source,
                })?;

        let ledger = build_employee_ledger(&transactions, &employee);

        // Only comparable when the service already lists entries in date order.
        let in_date_order = transactions.windows(2).all(|w| w[0].date <= w[1].date);
        let reported: Option<Vec<Decimal>> =
            history.iter().map(|row| row.running_outstanding).collect();
        let (drift, drift_checked) = match reported {
            Some(reported) if in_date_order => (find_drift(&ledger.entries, &reported), true),
            Some(_) => {
                debug!(employee_id = %id, "Payment history not in date order, drift check skipped");
                (Vec::new(), false)
            }
            None => {
                debug!(employee_id = %id, "Running balance missing from history, drift check skipped");
                (Vec::new(), false)
            }
        };
        for d in &drift {
            warn!(
                employee_id = %id,
                position = d.position,
                date = %d.date,
                expected = %d.expected,
                reported = %d.reported,
                "Service running balance disagrees with recomputed value"
            );
        }

        Ok(EmployeeLedgerView {
            ledger,
            drift,
            drift_checked,
        })
    }

    /// Writes a bulk submission: collections first, then deposits.
    ///
    /// Empty batches are not sent. If deposits fail after collections were
    /// accepted, the error is [`ClientError::PartialSubmission`] naming the
    /// committed collections.
    pub async fn submit(
        &self,
        session: &Session,
        submission: &BulkSubmission,
    ) -> Result<SubmissionReceipt, ClientError> {
        let mut receipt = SubmissionReceipt {
            collections: 0,
            deposits: 0,
        };

        if !submission.collections.is_empty() {
            self.client
                .submit_collections(session, &submission.collections)
                .await?;
            receipt.collections = submission.collections.len();
        }
        if !submission.deposits.is_empty() {
            if let Err(source) = self
                .client
                .submit_deposits(session, &submission.deposits)
                .await
            {
                if receipt.collections == 0 {
                    return Err(source);
                }
                warn!(
                    committed_collections = receipt.collections,
                    error = %source,
                    "Deposits failed after collections were written"
                );
                return Err(ClientError::PartialSubmission {
                    committed: receipt,
                    source: Box::new(source),
                });
            }
            receipt.deposits = submission.deposits.len();
        }

        info!(
            collections = receipt.collections,
            deposits = receipt.deposits,
            "Submitted bulk entries"
        );
        Ok(receipt)
    }
}
