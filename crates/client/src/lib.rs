//! REST client and fetch pipeline for the external reconciliation service.
//!
//! [`ApiClient`] maps the service's endpoints one to one. [`Dashboard`]
//! chains them into explicit stages (fetch, validate, reconcile) and is the
//! only place where network data meets the pure core.

pub mod client;
pub mod error;
pub mod pipeline;
pub mod wire;

pub use client::ApiClient;
pub use error::ClientError;
pub use pipeline::{Dashboard, EmployeeLedgerView, OutstandingOverview, SubmissionReceipt};
