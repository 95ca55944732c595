//! # CLI Interface
//!
//! Defines the command-line argument structure for `tracker-node` using
//! `clap` derive. Supports three subcommands: `run`, `init`, and
//! `version`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tracker_ledger::config::{DEFAULT_METRICS_PORT, DEFAULT_RPC_PORT};

/// TurboChainx transfer tracker node.
///
/// Serves the transfer-metadata ledger over a REST API: owner-gated
/// record creation and updates, open reads, and Prometheus metrics.
#[derive(Parser, Debug)]
#[command(
    name = "tracker-node",
    about = "TurboChainx transfer tracker node",
    version,
    propagate_version = true
)]
pub struct TrackerNodeCli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the tracker node binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the tracker node.
    Run(RunArgs),
    /// Initialize a new data directory, optionally seeding the ledger
    /// owner in the same step.
    Init(InitArgs),
    /// Print version information and exit.
    Version,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the node data directory where the ledger database is stored.
    ///
    /// Created on first run if it does not exist.
    #[arg(long, short = 'd', env = "TRACKER_DATA_DIR", default_value = "~/.tracker")]
    pub data_dir: PathBuf,

    /// Port for the REST API.
    #[arg(long, env = "TRACKER_RPC_PORT", default_value_t = DEFAULT_RPC_PORT)]
    pub rpc_port: u16,

    /// Port for the Prometheus metrics endpoint.
    #[arg(long, env = "TRACKER_METRICS_PORT", default_value_t = DEFAULT_METRICS_PORT)]
    pub metrics_port: u16,

    /// Log output format: "pretty" or "json".
    #[arg(long, env = "TRACKER_LOG_FORMAT", default_value = "pretty")]
    pub log_format: String,
}

/// Arguments for the `init` subcommand.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Path to the data directory to initialize.
    #[arg(long, short = 'd', env = "TRACKER_DATA_DIR", default_value = "~/.tracker")]
    pub data_dir: PathBuf,

    /// Hex-encoded 32-byte identity to install as the ledger owner.
    ///
    /// When omitted, the data directory is created but the owner is left
    /// uninitialized; the first `POST /owner/initialize` claims it.
    #[arg(long)]
    pub owner: Option<String>,
}
