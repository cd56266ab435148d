//! # Error Reporting
//!
//! Per-item failures never stop a cycle; they are handed to an
//! [`ErrorReporter`] and the cycle moves on.

use crate::NotifyError;

/// Fire-and-forget sink for recoverable failures.
pub trait ErrorReporter {
    fn report(&self, message: &str, error: &NotifyError);
}

/// Reports failures as `tracing` warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, message: &str, error: &NotifyError) {
        tracing::warn!(error = %error, "{}", message);
    }
}
