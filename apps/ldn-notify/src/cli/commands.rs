//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::NotifyError;
use crate::config::{Config, OutputFormat};
use crate::display::{ConsoleNotifier, Notifier};
use crate::report::{ErrorReporter, TracingReporter};
use crate::session::{CycleReport, NotificationSession};
use crate::transport::{HttpTransport, Transport};
use ldn_core::{HandledSet, HandledStore};
use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

type ConsoleSession = NotificationSession<HttpTransport, ConsoleNotifier, TracingReporter>;

fn output_format(json_mode: bool) -> OutputFormat {
    if json_mode {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    }
}

fn build_session(config: &Config, json_mode: bool) -> Result<ConsoleSession, NotifyError> {
    let transport = HttpTransport::new(config.timeout(), config.user_agent.as_deref())?;
    Ok(NotificationSession::new(
        transport,
        ConsoleNotifier::stdout(output_format(json_mode)),
        TracingReporter,
    ))
}

/// Open the configured state database and load what it recorded.
///
/// Without a `state_path` the handled set starts empty and is not persisted.
fn open_state(config: &Config) -> Result<(Option<HandledStore>, HandledSet), NotifyError> {
    let Some(path) = &config.state_path else {
        return Ok((None, HandledSet::new()));
    };

    let store = HandledStore::open(path)?;
    let handled = store.load()?;
    tracing::info!(
        "Loaded {} handled notification(s) from {:?}",
        handled.len(),
        path
    );
    Ok((Some(store), handled))
}

fn persist(store: Option<&HandledStore>, report: &CycleReport) -> Result<(), NotifyError> {
    if let Some(store) = store {
        let added = store.record(report.displayed.iter().map(String::as_str))?;
        tracing::debug!("Recorded {} notification(s) as handled", added);
    }
    Ok(())
}

/// One JSON line per cycle.
fn print_report_json(report: &CycleReport) {
    let output = serde_json::json!({ "cycle": report });
    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}

// =============================================================================
// WATCH COMMAND
// =============================================================================

/// Poll the inbox on a fixed interval until Ctrl+C.
///
/// A failing cycle is reported and the next tick tries again.
pub async fn cmd_watch(config: &Config, json_mode: bool) -> Result<(), NotifyError> {
    let profile = config.profile()?;
    let mut session = build_session(config, json_mode)?;
    let (store, mut handled) = open_state(config)?;

    tracing::info!(
        "Watching inbox of {} every {}s (Ctrl+C to stop)",
        profile,
        config.poll_interval().as_secs()
    );

    run_watch(
        &mut session,
        profile,
        &mut handled,
        store.as_ref(),
        config.poll_interval(),
        tokio::signal::ctrl_c(),
        json_mode,
    )
    .await
}

/// The watch loop: one cycle per tick until `shutdown` resolves.
///
/// Shutdown is only observed between cycles. A cycle in progress runs to
/// completion and its displayed identifiers are persisted before returning.
pub async fn run_watch<T, N, R, S>(
    session: &mut NotificationSession<T, N, R>,
    profile: &str,
    handled: &mut HandledSet,
    store: Option<&HandledStore>,
    period: Duration,
    shutdown: S,
    json_mode: bool,
) -> Result<(), NotifyError>
where
    T: Transport,
    N: Notifier,
    R: ErrorReporter,
    S: Future<Output = std::io::Result<()>>,
{
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;
            signal = &mut shutdown => {
                signal?;
                tracing::info!("Shutting down");
                return Ok(());
            }
            _ = ticker.tick() => {}
        }

        // Cycle errors were already reported by the session.
        if let Ok(report) = session.run_cycle(profile, handled).await {
            persist(store, &report)?;
            if json_mode {
                print_report_json(&report);
            }
        }
    }
}

// =============================================================================
// ONCE COMMAND
// =============================================================================

/// Run a single cycle.
pub async fn cmd_once(config: &Config, json_mode: bool) -> Result<(), NotifyError> {
    let profile = config.profile()?;
    let mut session = build_session(config, json_mode)?;
    let (store, mut handled) = open_state(config)?;

    let report = session.run_cycle(profile, &mut handled).await?;
    persist(store.as_ref(), &report)?;

    if json_mode {
        print_report_json(&report);
    } else {
        println!(
            "{} displayed, {} already handled, {} unresolved, {} failed",
            report.displayed.len(),
            report.skipped,
            report.unresolved,
            report.failed
        );
    }
    Ok(())
}

// =============================================================================
// INBOX COMMAND
// =============================================================================

/// List the inbox, newest first.
pub async fn cmd_inbox(config: &Config, json_mode: bool) -> Result<(), NotifyError> {
    let profile = config.profile()?;
    let session = build_session(config, json_mode)?;

    let inbox = session.discover_inbox(profile).await?;
    let refs = session.scan_inbox(&inbox).await?;

    if json_mode {
        let output = serde_json::json!({
            "inbox": inbox,
            "notifications": refs,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
    } else {
        println!("Inbox: {}", inbox);
        if refs.is_empty() {
            println!("  (empty)");
        }
        for notification in &refs {
            println!("  {}  {}", notification.modified.to_rfc3339(), notification.id);
        }
    }
    Ok(())
}

// =============================================================================
// SHOW COMMAND
// =============================================================================

/// Resolve one notification resource and print its record.
///
/// Does not read or update the handled set.
pub async fn cmd_show(config: &Config, json_mode: bool, url: &str) -> Result<(), NotifyError> {
    let session = build_session(config, json_mode)?;

    let Some(record) = session.resolve_notification(url).await? else {
        if json_mode {
            println!("null");
        } else {
            println!("{} names no generator: nothing to display", url);
        }
        return Ok(());
    };

    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&record).unwrap_or_default()
        );
        Ok(())
    } else {
        ConsoleNotifier::stdout(OutputFormat::Text).notify(&record)
    }
}
