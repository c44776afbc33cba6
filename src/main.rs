//! `tracker_rust` (trackd) - Minimal issue-tracking backend
//!
//! Serves a single web frontend over HTTP with JSON payloads. All state is
//! in memory; no database, no daemon beyond the server itself.

use tracker_rust::run;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
