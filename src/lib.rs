//! `tracker_rust` - Minimal issue-tracking backend library
//!
//! This crate provides the HTTP layer for the `trackd` server binary,
//! a small issue-tracking backend for a single web frontend.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`api`] - axum router, handlers, and wire types
//! - [`cli`] - Command-line interface using clap
//! - [`logging`] - tracing subscriber setup
//! - [`seed`] - Fixed sample data loaded at startup
//!
//! The issue store itself lives in the `tracker-lib` crate; this crate
//! owns one instance behind a mutex and translates HTTP requests into
//! store operations.

pub mod api;
pub mod cli;
pub mod logging;
pub mod seed;

use clap::Parser;
use tracker_lib::IssueStore;

use crate::api::AppState;

/// Run the server.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if logging cannot be initialized or the listen
/// address cannot be bound.
pub async fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    logging::init(args.verbose, args.quiet)?;

    let mut store = IssueStore::new();
    for draft in seed::sample_issues() {
        store.create_issue(draft);
    }
    tracing::info!(issues = store.len(), "store seeded");

    let state = AppState::new(store);
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    tracing::info!(addr = %args.bind, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
