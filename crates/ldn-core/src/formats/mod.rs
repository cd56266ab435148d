//! # Formats
//!
//! Document formats the engine can read facts from.
//!
//! Only Turtle is supported: every fetch asks for `text/turtle`.

pub mod turtle;

pub use turtle::{document_url, parse_turtle};
