//! Shared types, errors, and configuration for cashrecon.
//!
//! This crate provides common types used across all other crates:
//! - Money types with decimal precision
//! - Typed IDs for type-safe entity references
//! - Session and authentication payloads for the external service
//! - Application-wide error types
//! - Configuration management

pub mod auth;
pub mod config;
pub mod error;
pub mod types;

pub use auth::{LoginRequest, LoginResponse, Session, User, VerifyResponse};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
