//! CLI tool for running health checks from the command line.
//!
//! Uses the same configuration as the server, so it reports exactly what
//! `GET /health` would.
//!
//! # Usage
//!
//! ```bash
//! # Run the aggregated health check once (exit code 1 when unhealthy)
//! cargo run --bin healthctl -- check
//!
//! # Machine-readable output
//! cargo run --bin healthctl -- check --json
//!
//! # Check whether a database exists
//! cargo run --bin healthctl -- db exists sw360db
//!
//! # Run the health service over the configured (or given) databases
//! cargo run --bin healthctl -- db status sw360db sw360changelogs
//!
//! # Show CouchDB server information
//! cargo run --bin healthctl -- db info
//! ```
//!
//! # Environment Variables
//!
//! See [`health_aggregator::config`]; `.env` files are honored.

use health_aggregator::config;
use health_aggregator::domain::health::HealthRecord;
use health_aggregator::domain::repositories::{DatabaseClient, HealthService};
use health_aggregator::server::Components;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde_json::Value;
use std::collections::BTreeSet;
use std::process::ExitCode;

/// CLI tool for health checks.
#[derive(Parser)]
#[command(name = "healthctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Run the aggregated health check once
    Check {
        /// Print the detail map as JSON
        #[arg(long)]
        json: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check whether a database exists
    Exists {
        /// Database name
        name: String,
    },

    /// Report the health of databases (configured ones if none given)
    Status {
        /// Database names
        names: Vec<String>,
    },

    /// Show CouchDB server information
    Info,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let components = Components::build(&config)?;

    match cli.command {
        Commands::Check { json } => handle_check(&components, json).await,
        Commands::Db { action } => handle_db_action(action, &components).await,
    }
}

/// Runs the REST indicator once and prints its details.
async fn handle_check(components: &Components, json: bool) -> Result<ExitCode> {
    let outcome = components.indicator.check().await;
    let details = outcome.details();

    if json {
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        let headline = if outcome.is_healthy() {
            "✅ UP".green().bold()
        } else {
            "❌ DOWN".red().bold()
        };
        println!("{}", headline);
        println!();

        for (key, value) in &details {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            println!("  {}: {}", key.bright_white(), rendered);
        }
    }

    Ok(exit_code(outcome.is_healthy()))
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, components: &Components) -> Result<ExitCode> {
    match action {
        DbAction::Exists { name } => {
            println!("{}", format!("🔍 Checking database '{}'...", name).bright_blue());

            let exists = components.couchdb.db_exists(&name).await?;

            if exists {
                println!("{}", "✅ Database exists".green().bold());
            } else {
                println!("{}", "❌ Database does not exist".red().bold());
            }
            Ok(exit_code(exists))
        }
        DbAction::Status { names } => {
            let record = if names.is_empty() {
                components.backend.get_health().await?
            } else {
                let databases: BTreeSet<String> = names.into_iter().collect();
                components
                    .backend
                    .get_health_of_specific_databases(&databases)
                    .await?
            };

            print_record(&record);
            Ok(exit_code(record.is_up()))
        }
        DbAction::Info => {
            println!("{}", "ℹ️  CouchDB Information".bright_blue().bold());
            println!();

            let info = components.couchdb.server_info().await?;

            println!("  Server: {}", info.couchdb.bright_white());
            println!("  Version: {}", info.version.bright_white());
            println!();
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_record(record: &HealthRecord) {
    let status = record.status.to_string();
    let status = if record.is_up() {
        status.green().bold()
    } else {
        status.red().bold()
    };
    println!("Status: {}", status);

    for (database, message) in &record.details {
        println!("  {}: {}", database.yellow(), message);
    }
}

fn exit_code(healthy: bool) -> ExitCode {
    if healthy {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
