//! # Application Errors
//!
//! Everything the poller can fail with. Per-item failures are reported and
//! skipped by the session; only profile and inbox failures end a cycle.

use ldn_core::LdnError;
use thiserror::Error;

/// Errors produced by the ldn-notify application layer.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Missing or unusable configuration, including a profile without an inbox.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A fetch failed: unreachable host, non-success status or unreadable body.
    #[error("Fetch of {url} failed: {message}")]
    Transport { url: String, message: String },

    /// Parse or storage failure from the engine.
    #[error(transparent)]
    Core(#[from] LdnError),

    /// The display collaborator rejected a record.
    #[error("Display failed: {0}")]
    Notify(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NotifyError {
    /// Build a transport error for `url`.
    pub fn transport(url: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_message_names_the_url() {
        let err = NotifyError::transport("https://pod.example/inbox/", "HTTP 404 Not Found");
        assert_eq!(
            err.to_string(),
            "Fetch of https://pod.example/inbox/ failed: HTTP 404 Not Found"
        );
    }

    #[test]
    fn core_errors_pass_through() {
        let err: NotifyError = LdnError::InvalidIri("not an iri".into()).into();
        assert_eq!(err.to_string(), LdnError::InvalidIri("not an iri".into()).to_string());
    }
}
