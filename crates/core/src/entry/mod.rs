//! Bulk data entry.
//!
//! Turns rows of the data-entry form (one employee per row, with an
//! optional collection and an optional deposit) into the two batches the
//! external service accepts.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::EntryError;
pub use service::build_submission;
pub use types::{BulkSubmission, EntryRow, NewTransaction};
