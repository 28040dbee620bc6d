//! Command-line arguments.

use std::path::PathBuf;

use cashrecon_shared::types::EmployeeId;
use clap::{Parser, Subcommand};

/// Cash reconciliation for field collections and bank deposits.
#[derive(Debug, Parser)]
#[command(name = "cashrecon", version, about, long_about = None)]
pub struct Cli {
    /// Bearer token from a previous login (overrides configuration).
    #[arg(long, global = true, env = "CASHRECON_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Print machine-readable JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and print a bearer token.
    Login {
        /// Account name.
        #[arg(short, long)]
        username: String,
        /// Account password.
        #[arg(short, long, env = "CASHRECON_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Show the user the token belongs to.
    Whoami,
    /// List employees with the ids the `ledger` command takes.
    Employees,
    /// Outstanding balance of every employee.
    Outstanding,
    /// Running ledger of one employee.
    Ledger {
        /// Employee id as issued by the service.
        employee: EmployeeId,
    },
    /// Validate data-entry rows and submit them in bulk.
    Submit {
        /// JSON file holding an array of entry rows.
        #[arg(value_name = "FILE")]
        rows: PathBuf,
        /// Validate and print the batches without sending them.
        #[arg(long)]
        dry_run: bool,
    },
}
