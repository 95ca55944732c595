// Copyright (c) 2026 TurboChainx Labs. MIT License.
// See LICENSE for details.

//! # Transfer Tracker Node
//!
//! Entry point for the `tracker-node` binary. Parses CLI arguments,
//! initializes logging and metrics, opens the ledger, and serves the
//! HTTP API.
//!
//! The binary supports three subcommands:
//!
//! - `run`     — start the tracker node
//! - `init`    — initialize the data directory, optionally seeding the owner
//! - `version` — print build version information

mod api;
mod cli;
mod logging;
mod metrics;

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tokio::signal;
use tokio::sync::RwLock;

use tracker_ledger::identity::Identity;
use tracker_ledger::ledger::Ledger;

use cli::{Commands, TrackerNodeCli};
use logging::LogFormat;
use metrics::TrackerMetrics;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = TrackerNodeCli::parse();

    match cli.command {
        Commands::Run(args) => run_node(args).await,
        Commands::Init(args) => init_node(args),
        Commands::Version => {
            print_version();
            Ok(())
        }
    }
}

/// Starts the full tracker node: API server and metrics endpoint.
async fn run_node(args: cli::RunArgs) -> Result<()> {
    logging::init_logging(
        "tracker_node=info,tracker_ledger=info,tower_http=debug",
        LogFormat::from_str_lossy(&args.log_format),
    );

    tracing::info!(
        rpc_port = args.rpc_port,
        metrics_port = args.metrics_port,
        data_dir = %args.data_dir.display(),
        "starting tracker-node"
    );

    // --- Persistent storage ---
    let db_path = args.data_dir.join("db");
    std::fs::create_dir_all(&db_path)
        .with_context(|| format!("failed to create database directory: {}", db_path.display()))?;

    let ledger = Ledger::open(&db_path)
        .with_context(|| format!("failed to open ledger at {}", db_path.display()))?;
    tracing::info!(path = %db_path.display(), "ledger opened");

    // --- Metrics ---
    let tracker_metrics = Arc::new(TrackerMetrics::new());
    tracker_metrics.stored_records.set(ledger.record_count() as i64);

    // --- Application state ---
    let app_state = api::AppState {
        version: format!(
            "{} (ledger {})",
            env!("CARGO_PKG_VERSION"),
            tracker_ledger::config::LEDGER_VERSION,
        ),
        started_at: chrono::Utc::now(),
        ledger: Arc::new(RwLock::new(ledger)),
        metrics: Arc::clone(&tracker_metrics),
    };

    // --- API server ---
    let api_router = api::create_router(app_state);
    let api_addr = format!("0.0.0.0:{}", args.rpc_port);
    let api_listener = tokio::net::TcpListener::bind(&api_addr)
        .await
        .with_context(|| format!("failed to bind RPC listener on {}", api_addr))?;
    tracing::info!("RPC/API server listening on {}", api_addr);

    // --- Metrics server ---
    let metrics_router = axum::Router::new()
        .route("/metrics", axum::routing::get(metrics::metrics_handler))
        .with_state(Arc::clone(&tracker_metrics));
    let metrics_addr = format!("0.0.0.0:{}", args.metrics_port);
    let metrics_listener = tokio::net::TcpListener::bind(&metrics_addr)
        .await
        .with_context(|| format!("failed to bind metrics listener on {}", metrics_addr))?;
    tracing::info!("Metrics server listening on {}", metrics_addr);

    // --- Serve ---
    tokio::select! {
        res = axum::serve(api_listener, api_router) => {
            if let Err(e) = res {
                tracing::error!("API server error: {}", e);
            }
        }
        res = axum::serve(metrics_listener, metrics_router) => {
            if let Err(e) = res {
                tracing::error!("Metrics server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            tracing::info!("shutdown signal received, draining connections");
        }
    }

    tracing::info!("tracker-node stopped");
    Ok(())
}

/// Initializes a new node data directory and, when an owner identity is
/// supplied, seeds the ledger owner so the node comes up already claimed.
fn init_node(args: cli::InitArgs) -> Result<()> {
    logging::init_logging("tracker_node=info", LogFormat::Pretty);

    let data_dir = &args.data_dir;
    tracing::info!(data_dir = %data_dir.display(), "initializing node");

    let db_path = data_dir.join("db");
    std::fs::create_dir_all(&db_path)
        .with_context(|| format!("failed to create database directory: {}", db_path.display()))?;

    let owner_line = match &args.owner {
        Some(owner_hex) => {
            let owner: Identity = owner_hex
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid owner identity: {}", e))?;

            let ledger = Ledger::open(&db_path)
                .with_context(|| format!("failed to open ledger at {}", db_path.display()))?;
            let account = ledger
                .initialize_owner(owner)
                .context("failed to initialize ledger owner")?;

            tracing::info!(owner = %account.owner, "ledger owner seeded");
            account.owner.to_hex()
        }
        None => "(unclaimed)".to_string(),
    };

    println!("Node initialized successfully.");
    println!("  Data directory : {}", data_dir.display());
    println!("  Ledger path    : {}", db_path.display());
    println!("  Owner          : {}", owner_line);

    Ok(())
}

/// Prints version information to stdout.
fn print_version() {
    println!("tracker-node {}", env!("CARGO_PKG_VERSION"));
    println!("ledger       {}", tracker_ledger::config::LEDGER_VERSION);
    println!("rustc        {}", rustc_version());
}

/// Returns the Rust compiler version used to build this binary.
fn rustc_version() -> &'static str {
    option_env!("RUSTC_VERSION").unwrap_or("unknown")
}

/// Waits for SIGINT (Ctrl+C) or SIGTERM, whichever comes first.
///
/// On non-Unix platforms, only Ctrl+C is supported.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
