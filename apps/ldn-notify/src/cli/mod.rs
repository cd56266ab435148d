//! # ldn-notify CLI Module
//!
//! This module implements the CLI interface for ldn-notify.
//!
//! ## Available Commands
//!
//! - `watch` - Poll the inbox until interrupted (default)
//! - `once` - Run a single polling cycle
//! - `inbox` - List the inbox, newest first
//! - `show` - Resolve one notification and print its record

mod commands;

use crate::NotifyError;
use crate::config::{Config, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// ldn-notify - Linked Data Notifications poller
///
/// Watches the inbox advertised by a Solid profile and shows every
/// notification in it once.
#[derive(Parser, Debug)]
#[command(name = "ldn-notify")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the TOML configuration file (default: ./ldn-notify.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// WebID whose inbox is polled (overrides config and LDN_PROFILE)
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// redb file recording displayed notifications (overrides config)
    #[arg(short = 'S', long, global = true)]
    pub state: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll the inbox until Ctrl+C
    Watch {
        /// Seconds between cycles (overrides config)
        #[arg(short, long)]
        interval: Option<u64>,
    },

    /// Run a single polling cycle
    Once,

    /// List the notifications in the inbox, newest first
    Inbox,

    /// Resolve one notification resource and print its display record
    Show {
        /// Notification resource URL
        url: String,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), NotifyError> {
    let mut config = Config::load(cli.config.as_deref())?;
    config.override_profile(cli.profile);
    if let Some(state) = cli.state {
        config.state_path = Some(state);
    }
    let json_mode = cli.json_mode || config.output == OutputFormat::Json;

    match cli.command {
        Some(Commands::Watch { interval }) => {
            if let Some(secs) = interval {
                config.poll_interval_secs = secs;
            }
            cmd_watch(&config, json_mode).await
        }
        Some(Commands::Once) => cmd_once(&config, json_mode).await,
        Some(Commands::Inbox) => cmd_inbox(&config, json_mode).await,
        Some(Commands::Show { url }) => cmd_show(&config, json_mode, &url).await,
        None => {
            // No subcommand - keep polling by default
            cmd_watch(&config, json_mode).await
        }
    }
}
