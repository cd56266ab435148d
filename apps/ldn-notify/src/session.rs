//! # Notification Session
//!
//! One polling cycle: profile → inbox → notifications → display.
//!
//! ```text
//! run_cycle(profile, handled)
//!   │
//!   ├─ fetch profile ──► discover_inbox ──────────────── none: Configuration error
//!   ├─ fetch inbox (reload) ──► InboxScanner::scan
//!   └─ for each ref, newest first
//!        ├─ in handled set ──────────────────────────── skipped
//!        ├─ fetch + resolve ─── error ───────────────── reported, failed
//!        │                  └── no generator ────────── unresolved
//!        └─ notify ── ok ──► handled.insert(ref) ────── displayed
//!                   └ error ─────────────────────────── reported, failed
//! ```
//!
//! Fetches are sequential, in scanner order. The session holds no state
//! between cycles: the caller owns the [`HandledSet`] and passes it in.

use crate::display::Notifier;
use crate::report::ErrorReporter;
use crate::transport::{CacheMode, Transport};
use crate::NotifyError;
use ldn_core::vocab::TURTLE_MEDIA_TYPE;
use ldn_core::{
    ActivityResolver, DisplayRecord, FactStore, HandledSet, InboxScanner, NotificationRef,
    document_url, fallback_icon_url,
};
use serde::Serialize;

/// Outcome of one cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    /// Inbox that was polled.
    pub inbox: String,
    /// Notification resources displayed this cycle, in display order.
    pub displayed: Vec<String>,
    /// Already handled in an earlier cycle.
    pub skipped: usize,
    /// Resources with no generator; re-evaluated next cycle.
    pub unresolved: usize,
    /// Fetch, parse or display failures; retried next cycle.
    pub failed: usize,
}

/// Drives polling cycles over a transport, a notifier and an error reporter.
#[derive(Debug)]
pub struct NotificationSession<T, N, R> {
    transport: T,
    notifier: N,
    reporter: R,
}

impl<T, N, R> NotificationSession<T, N, R>
where
    T: Transport,
    N: Notifier,
    R: ErrorReporter,
{
    pub fn new(transport: T, notifier: N, reporter: R) -> Self {
        Self {
            transport,
            notifier,
            reporter,
        }
    }

    /// Run one cycle, displaying every unhandled notification in the inbox.
    ///
    /// Identifiers are added to `handled` only after a successful display.
    /// Errors are returned only when the profile or the inbox cannot be
    /// read; they are reported as well.
    pub async fn run_cycle(
        &mut self,
        profile: &str,
        handled: &mut HandledSet,
    ) -> Result<CycleReport, NotifyError> {
        let inbox = match self.discover_inbox(profile).await {
            Ok(inbox) => inbox,
            Err(e) => {
                self.reporter
                    .report(&format!("cannot resolve the inbox of {profile}"), &e);
                return Err(e);
            }
        };

        let refs = match self.scan_inbox(&inbox).await {
            Ok(refs) => refs,
            Err(e) => {
                self.reporter
                    .report(&format!("cannot read inbox {inbox}"), &e);
                return Err(e);
            }
        };

        let mut report = CycleReport {
            inbox,
            ..CycleReport::default()
        };

        for notification in refs {
            if handled.contains(&notification.id) {
                report.skipped = report.skipped.saturating_add(1);
                continue;
            }

            let record = match self.resolve_notification(&notification.id).await {
                Ok(Some(record)) => record,
                Ok(None) => {
                    tracing::debug!(id = %notification.id, "no generator, nothing to display");
                    report.unresolved = report.unresolved.saturating_add(1);
                    continue;
                }
                Err(e) => {
                    self.reporter.report(
                        &format!("cannot load notification {}", notification.id),
                        &e,
                    );
                    report.failed = report.failed.saturating_add(1);
                    continue;
                }
            };

            match self.notifier.notify(&record) {
                Ok(()) => {
                    handled.insert(notification.id.clone());
                    report.displayed.push(notification.id);
                }
                Err(e) => {
                    self.reporter.report(
                        &format!("cannot display notification {}", notification.id),
                        &e,
                    );
                    report.failed = report.failed.saturating_add(1);
                }
            }
        }

        tracing::info!(
            inbox = %report.inbox,
            displayed = report.displayed.len(),
            skipped = report.skipped,
            unresolved = report.unresolved,
            failed = report.failed,
            "cycle complete"
        );
        Ok(report)
    }

    /// Inbox advertised by `profile`.
    pub async fn discover_inbox(&self, profile: &str) -> Result<String, NotifyError> {
        let store = self.load(profile, CacheMode::Default).await?;
        ldn_core::discover_inbox(&store, profile).ok_or_else(|| {
            NotifyError::Configuration(format!("profile {profile} does not advertise an inbox"))
        })
    }

    /// Notifications listed in `inbox`, newest first. Bypasses caches.
    pub async fn scan_inbox(&self, inbox: &str) -> Result<Vec<NotificationRef>, NotifyError> {
        let store = self.load(inbox, CacheMode::Reload).await?;
        Ok(InboxScanner::scan(&store))
    }

    /// Fetch and resolve one notification resource.
    ///
    /// `Ok(None)` means the resource names no generator. A failing icon
    /// fallback is reported and leaves the small icon without a `url`.
    pub async fn resolve_notification(
        &self,
        url: &str,
    ) -> Result<Option<DisplayRecord>, NotifyError> {
        let store = self.load(url, CacheMode::Default).await?;
        let Some(resolution) = ActivityResolver::resolve(&store) else {
            return Ok(None);
        };

        let Some(generator) = resolution.icon_fallback_target().map(str::to_owned) else {
            return Ok(Some(resolution.into_record()));
        };

        let fallback = match self.load(&generator, CacheMode::Default).await {
            Ok(generator_store) => fallback_icon_url(&generator_store),
            Err(e) => {
                self.reporter
                    .report(&format!("cannot fetch icon of generator {generator}"), &e);
                None
            }
        };
        Ok(Some(resolution.complete(fallback)))
    }

    /// Fetch a document as Turtle and index it, with the document URL as base.
    async fn load(&self, url: &str, cache: CacheMode) -> Result<FactStore, NotifyError> {
        let document = document_url(url);
        let text = self
            .transport
            .fetch(document, TURTLE_MEDIA_TYPE, cache)
            .await?;
        Ok(FactStore::from_turtle(&text, document)?)
    }
}
