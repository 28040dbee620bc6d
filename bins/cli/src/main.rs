//! Cashrecon CLI
//!
//! Command-line front end over the reconciliation service.

mod cli;
mod render;

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cashrecon_client::{ApiClient, ClientError, Dashboard};
use cashrecon_core::entry::{BulkSubmission, EntryRow, build_submission};
use cashrecon_core::ledger::ValidationPolicy;
use cashrecon_shared::{AppConfig, AppError, AppResult, Session};

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cashrecon=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let json = cli.json;

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let app_error = err.downcast_ref::<AppError>();
            let code = app_error.map_or("INTERNAL_ERROR", AppError::error_code);
            if json {
                let body = serde_json::json!({
                    "error": { "code": code, "message": format!("{err:#}") }
                });
                println!("{body}");
            } else {
                eprintln!("error: {err:#}");
            }
            let status = app_error.map_or(1, AppError::exit_code);
            ExitCode::from(u8::try_from(status).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load().map_err(AppError::from)?;
    let currency = config.report.currency;

    let client = ApiClient::new(&config.api).map_err(AppError::from)?;
    let policy = ValidationPolicy::new(currency);
    let dashboard = Dashboard::new(client, policy);
    debug!(base_url = dashboard.client().base_url(), %currency, "Configuration loaded");

    if let Command::Login { username, password } = &cli.command {
        let session = dashboard
            .login(username, password)
            .await
            .map_err(AppError::from)?;
        return print(cli.json, &TokenOutput::from(&session), |out| {
            writeln!(out, "{}", session.token())
        });
    }

    // Dry runs validate locally and never need a session
    if let Command::Submit { rows, dry_run: true } = &cli.command {
        let submission = load_submission(rows, &policy)?;
        return print(cli.json, &submission, |out| {
            render::submission_preview(out, &submission, currency)
        });
    }

    let token = cli.token.or(config.api.token).ok_or_else(|| {
        AppError::Unauthorized(
            "no token; run `cashrecon login` or set CASHRECON__API__TOKEN".to_string(),
        )
    })?;
    let session = dashboard.resume(&token).await.map_err(AppError::from)?;

    match cli.command {
        Command::Login { .. } => Ok(()),
        Command::Whoami => {
            let user = session
                .user()
                .ok_or_else(|| AppError::Internal("verified session carries no user".into()))?;
            print(cli.json, user, |out| {
                writeln!(out, "{} ({})", user.username, user.role)
            })
        }
        Command::Employees => {
            let employees = dashboard
                .client()
                .employees(&session)
                .await
                .map_err(AppError::from)?;
            print(cli.json, &employees, |out| {
                render::employee_table(out, &employees)
            })
        }
        Command::Outstanding => {
            let overview = dashboard
                .outstanding(&session)
                .await
                .map_err(AppError::from)?;
            print(cli.json, &overview, |out| {
                render::outstanding_table(out, &overview, currency)
            })
        }
        Command::Ledger { employee } => {
            let view = dashboard
                .employee_ledger(&session, &employee)
                .await
                .map_err(AppError::from)?;
            print(cli.json, &view, |out| render::ledger_table(out, &view, currency))
        }
        Command::Submit { rows, .. } => {
            let submission = load_submission(&rows, &policy)?;
            let receipt = dashboard
                .submit(&session, &submission)
                .await
                .map_err(ClientError::into_write_error)?;
            print(cli.json, &receipt, |out| render::receipt_line(out, receipt))
        }
    }
}

fn load_submission(path: &Path, policy: &ValidationPolicy) -> AppResult<BulkSubmission> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| AppError::InputUnavailable(format!("{}: {e}", path.display())))?;
    let rows: Vec<EntryRow> = serde_json::from_str(&text)
        .map_err(|e| AppError::Validation(format!("malformed entry rows: {e}")))?;
    let submission =
        build_submission(&rows, policy).map_err(|e| AppError::Validation(e.to_string()))?;
    if submission.is_empty() {
        return Err(AppError::Validation("nothing to submit".into()));
    }
    Ok(submission)
}

#[derive(Serialize)]
struct TokenOutput<'a> {
    token: &'a str,
}

impl<'a> From<&'a Session> for TokenOutput<'a> {
    fn from(session: &'a Session) -> Self {
        Self {
            token: session.token(),
        }
    }
}

fn print<T, F>(json: bool, value: &T, table: F) -> anyhow::Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&mut io::StdoutLock<'static>) -> io::Result<()>,
{
    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, value).context("writing JSON output")?;
        writeln!(out)?;
    } else {
        table(&mut out).context("writing table output")?;
    }
    Ok(())
}
