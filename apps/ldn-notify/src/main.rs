//! # ldn-notify - Linked Data Notifications poller
//!
//! The main binary. Parses the command line, sets up logging and runs the
//! selected command.
//!
//! ## Usage
//!
//! ```bash
//! # Poll every minute until Ctrl+C
//! ldn-notify --profile https://alice.example/profile/card#me watch
//!
//! # One cycle, persisting what was shown
//! ldn-notify --state ldn-notify.redb once
//!
//! # Inspect
//! ldn-notify inbox --json-mode
//! ldn-notify show https://alice.example/inbox/3f2a.ttl
//! ```

use clap::Parser;
use ldn_notify::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Initialize tracing - LDN_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("LDN_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let default_level = if cli.verbose { "debug" } else { "info" };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("ldn_notify={default_level}").into());

    // Logs go to stderr so stdout stays clean for --json-mode output.
    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // Display startup banner
    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        "ldn-notify v{} - Linked Data Notifications poller\n",
        env!("CARGO_PKG_VERSION")
    );
}
