//! Command-line interface for `trackd`.

use std::net::SocketAddr;

use clap::Parser;

/// `tracker_rust` (trackd) - Minimal issue-tracking backend.
#[derive(Parser, Debug)]
#[command(name = "trackd")]
#[command(
    author,
    version,
    about = "Minimal issue-tracking backend (HTTP + JSON, in-memory)",
    long_about = None
)]
pub struct Cli {
    /// Address to listen on
    #[arg(long, env = "TRACKD_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,
}
