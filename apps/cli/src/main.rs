//! Keystash CLI.

use anyhow::Context;
use clap::{Parser, Subcommand};

use keystash_core::config::KeychainConfig;
use keystash_core::keychain::KeychainClient;

mod commands;
mod telemetry;

pub const DEFAULT_NAMESPACE: &str = "example.application.com";

#[derive(Debug, Parser)]
#[command(name = "keystash")]
#[command(about = "Store and retrieve secrets in the system keychain", long_about = None)]
pub struct Cli {
    /// Namespace (application) the secrets belong to
    #[arg(long, short, env = "KEYSTASH_NAMESPACE", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Save a new secret
    Write {
        /// Account or key name
        identifier: String,
        /// Secret value; read from stdin when omitted
        secret: Option<String>,
    },
    /// Print a stored secret
    Read {
        /// Account or key name
        identifier: String,
    },
    /// Replace the value of an existing secret
    Update {
        /// Account or key name
        identifier: String,
        /// New secret value; read from stdin when omitted
        secret: Option<String>,
    },
    /// Remove a secret
    Delete {
        /// Account or key name
        identifier: String,
    },
    /// List the secrets of the namespace
    List {
        /// Print the entries as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    let cli = Cli::parse();
    let config = KeychainConfig::from_env().context("Failed to load configuration")?;
    tracing::debug!(namespace = %cli.namespace, ?config, "Starting keystash");

    let client = KeychainClient::from_config(&config);
    commands::execute(
        &cli.command,
        &cli.namespace,
        &client,
        &mut std::io::stdin().lock(),
        &mut std::io::stdout().lock(),
    )
}
