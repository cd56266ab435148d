//! # ldn-notify
//!
//! Polls the Linked Data Notifications inbox of a Solid profile and hands
//! every new notification to a display collaborator, once.
//!
//! The resolution logic lives in `ldn-core`; this crate adds the async
//! edges: fetching over HTTP, displaying, reporting, configuration and the
//! CLI.
//!
//! ```text
//!   Transport ──► NotificationSession ──► Notifier
//!                        │    ▲
//!                        ▼    │
//!                      ldn-core          ErrorReporter ◄── per-item failures
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod report;
pub mod session;
pub mod transport;

pub use config::{Config, OutputFormat};
pub use display::{ConsoleNotifier, NotificationOptions, Notifier};
pub use error::NotifyError;
pub use report::{ErrorReporter, TracingReporter};
pub use session::{CycleReport, NotificationSession};
pub use transport::{CacheMode, HttpTransport, Transport};
