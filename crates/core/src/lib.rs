//! Core reconciliation logic for cashrecon.
//!
//! This crate contains pure business logic with ZERO network dependencies.
//! Everything here is a deterministic function of its input.
//!
//! # Modules
//!
//! - `ledger` - Validation, outstanding aggregation, and running reconciliation
//! - `entry` - Bulk data entry for new collections and deposits

pub mod entry;
pub mod ledger;
