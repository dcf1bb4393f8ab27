//! bankline - command line client for a retail banking backend.
//!
//! Signs in against the backend's token endpoints, keeps the session token
//! between runs, and drives the account and payment screens as subcommands.

mod cli;
mod commands;

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bankline_core::{ApiClient, App, Config};

use cli::Cli;
use commands::Ctx;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args: Cli = argh::from_env();
    init_tracing();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Cli) -> Result<()> {
    let config = Config::load()?;
    info!(backend = %config.api_url, store = %config.token_backend, "bankline starting");

    let session = config.session()?;
    let client = ApiClient::new(session.clone(), config.client_options())?;
    let mut ctx = Ctx {
        app: App::new(client, session),
        config,
        json: args.json,
    };

    commands::run(args.command, &mut ctx).await
}
