//! # Display
//!
//! The host-facing end of a cycle. A [`Notifier`] shows one record; its
//! success is what marks a notification as handled.

use crate::NotifyError;
use crate::config::OutputFormat;
use ldn_core::{DisplayRecord, Icon, Scalar};
use serde::Serialize;
use std::io::Write;

/// Shows resolved notifications to the user.
pub trait Notifier {
    fn notify(&mut self, record: &DisplayRecord) -> Result<(), NotifyError>;
}

/// The payload handed to a desktop-style notification API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationOptions {
    pub icon_url: Option<String>,
    pub image_url: Option<String>,
    /// Record title, empty when absent.
    pub title: String,
    /// Record text, empty when absent.
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<&DisplayRecord> for NotificationOptions {
    fn from(record: &DisplayRecord) -> Self {
        let icon_url = |icon: &Option<Icon>| icon.as_ref().and_then(Icon::url).map(str::to_owned);
        let text = |value: &Option<Scalar>| {
            value
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default()
        };

        Self {
            icon_url: icon_url(&record.small_icon),
            image_url: icon_url(&record.large_icon),
            title: text(&record.title),
            message: text(&record.text),
            kind: "basic".to_string(),
        }
    }
}

/// Prints each notification to a writer, as a text block or one JSON line.
#[derive(Debug)]
pub struct ConsoleNotifier<W = std::io::Stdout> {
    out: W,
    format: OutputFormat,
}

impl ConsoleNotifier {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(std::io::stdout(), format)
    }
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_record(&mut self, record: &DisplayRecord) -> std::io::Result<()> {
        let options = NotificationOptions::from(record);
        match self.format {
            OutputFormat::Json => {
                let line = serde_json::json!({ "id": record.id, "options": options });
                writeln!(self.out, "{line}")?;
            }
            OutputFormat::Text => {
                let app = record
                    .app_name
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| "notification".to_string());
                writeln!(self.out, "[{}] {}", app, options.title)?;
                if !options.message.is_empty() {
                    writeln!(self.out, "  {}", options.message)?;
                }
                if let Some(published) = &record.timestamp {
                    writeln!(self.out, "  published: {published}")?;
                }
                if let Some(url) = &options.icon_url {
                    writeln!(self.out, "  icon:  {url}")?;
                }
                if let Some(url) = &options.image_url {
                    writeln!(self.out, "  image: {url}")?;
                }
                writeln!(self.out, "  id:    {}", record.id)?;
            }
        }
        self.out.flush()
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn notify(&mut self, record: &DisplayRecord) -> Result<(), NotifyError> {
        self.write_record(record)
            .map_err(|e| NotifyError::Notify(e.to_string()))
    }
}
