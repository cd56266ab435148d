//! # Core Type Definitions
//!
//! This module contains all core types for the ldn-core resolution engine:
//! - Graph terms and facts (`Term`, `Literal`, `Fact`)
//! - Native values coerced from literals (`Scalar`)
//! - Output structures (`Icon`, `DisplayRecord`, `NotificationRef`)
//! - Error types (`LdnError`)
//!
//! ## Determinism Guarantees
//!
//! Terms and facts implement `Ord` so they can key `BTreeMap`/`BTreeSet`
//! indexes. Icon attributes are kept in a `BTreeMap` so two resolutions of
//! the same resource serialize identically.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

// =============================================================================
// TERMS & FACTS
// =============================================================================

/// A typed literal value as it appeared in the source document.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Literal {
    /// Lexical form, unchanged.
    pub value: String,
    /// Full datatype IRI (`xsd:string` for plain literals).
    pub datatype: String,
}

impl Literal {
    /// Create a new literal.
    #[must_use]
    pub fn new(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            datatype: datatype.into(),
        }
    }
}

/// The object position of a fact: either an identifier or a typed literal.
///
/// Identifiers cover both IRIs and blank nodes. Blank nodes carry the
/// `_:` prefix so they can never collide with an absolute IRI.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Term {
    /// An IRI or blank node label.
    Id(String),
    /// A typed literal.
    Literal(Literal),
}

impl Term {
    /// Create an identifier term.
    #[must_use]
    pub fn id(value: impl Into<String>) -> Self {
        Self::Id(value.into())
    }

    /// Create a literal term.
    #[must_use]
    pub fn literal(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self::Literal(Literal::new(value, datatype))
    }

    /// The identifier, if this term is one.
    #[must_use]
    pub fn as_id(&self) -> Option<&str> {
        match self {
            Self::Id(id) => Some(id),
            Self::Literal(_) => None,
        }
    }

    /// The raw string value: the identifier or the literal's lexical form.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Literal(lit) => &lit.value,
        }
    }

    /// True for blank node identifiers.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Id(id) if id.starts_with("_:"))
    }

    /// Convert to a display value.
    ///
    /// Literals go through [`crate::literal::coerce`]; identifiers pass
    /// through as their string.
    #[must_use]
    pub fn to_scalar(&self) -> Scalar {
        match self {
            Self::Id(id) => Scalar::Text(id.clone()),
            Self::Literal(lit) => crate::literal::coerce(&lit.value, &lit.datatype),
        }
    }
}

/// A single (subject, predicate, object) statement.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Fact {
    /// Subject identifier (IRI or `_:` blank node).
    pub subject: String,
    /// Predicate IRI.
    pub predicate: String,
    /// Object term.
    pub object: Term,
}

impl Fact {
    /// Create a new fact.
    #[must_use]
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        }
    }
}

// =============================================================================
// SCALAR
// =============================================================================

/// A native value produced by literal coercion.
///
/// `Decimal(NaN)` is the sentinel for numeric literals that failed to parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Decimal(f64),
    Boolean(bool),
    DateTime(DateTime<Utc>),
    Date(NaiveDate),
    Time(NaiveTime),
    Text(String),
}

impl Scalar {
    /// The text, if this scalar is a string.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// True for the not-a-number sentinel.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        matches!(self, Self::Decimal(v) if v.is_nan())
    }

    /// Render back to a lexical form that coerces to the same value.
    #[must_use]
    pub fn lexical(&self) -> String {
        match self {
            Self::Integer(v) => v.to_string(),
            Self::Decimal(v) => v.to_string(),
            Self::Boolean(v) => v.to_string(),
            Self::DateTime(v) => v.to_rfc3339(),
            Self::Date(v) => v.format("%Y-%m-%d").to_string(),
            Self::Time(v) => v.format("%H:%M:%S%.f").to_string(),
            Self::Text(v) => v.clone(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexical())
    }
}

// =============================================================================
// ICON
// =============================================================================

/// Attribute map of an icon resource, keyed by predicate local name.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Icon {
    attributes: BTreeMap<String, Scalar>,
}

impl Icon {
    /// Create an icon with no attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute. A later value for the same name replaces the earlier one.
    pub fn insert(&mut self, name: impl Into<String>, value: Scalar) {
        self.attributes.insert(name.into(), value);
    }

    /// Look up an attribute.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.attributes.get(name)
    }

    /// True if a `url` attribute is present.
    #[must_use]
    pub fn has_url(&self) -> bool {
        self.attributes.contains_key("url")
    }

    /// The `url` attribute as text.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.get("url").and_then(Scalar::as_text)
    }

    /// Set the `url` attribute.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.insert("url", Scalar::Text(url.into()));
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// True if no attribute was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterate attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v))
    }
}

// =============================================================================
// OUTPUT STRUCTURES
// =============================================================================

/// The resolved, UI-ready shape of one notification.
///
/// Every field except `id` may be absent; absence means the graph did not
/// carry the value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    /// Identifier of the head activity.
    pub id: String,
    /// Generator `as:name`.
    pub app_name: Option<Scalar>,
    /// Generator `rdf:type`.
    pub app_type: Option<Scalar>,
    /// Generator icon.
    pub small_icon: Option<Icon>,
    /// Activity image, only kept when it has a `url`.
    pub large_icon: Option<Icon>,
    /// Activity `as:published`.
    pub timestamp: Option<Scalar>,
    /// Activity `as:name`.
    pub title: Option<Scalar>,
    /// Activity `as:content`, or `as:summary` when there is no content.
    pub text: Option<Scalar>,
    /// Activity `rdf:type`.
    #[serde(rename = "type")]
    pub kind: Option<Scalar>,
}

impl DisplayRecord {
    /// Create a record with only its identifier set.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            app_name: None,
            app_type: None,
            small_icon: None,
            large_icon: None,
            timestamp: None,
            title: None,
            text: None,
            kind: None,
        }
    }
}

/// A notification listed in an inbox container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationRef {
    /// Notification resource identifier.
    pub id: String,
    /// Container-level modification time.
    pub modified: DateTime<Utc>,
}

impl NotificationRef {
    /// Create a new reference.
    #[must_use]
    pub fn new(id: impl Into<String>, modified: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            modified,
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the ldn-core engine.
///
/// Resolution itself never fails; errors come from parsing input documents
/// and from the optional durable storage.
#[derive(Debug, Error)]
pub enum LdnError {
    /// The document is not well-formed Turtle.
    #[error("Parse error in <{base}>: {message}")]
    Parse { base: String, message: String },

    /// A base IRI handed to the parser is not an absolute IRI.
    #[error("Invalid base IRI: {0}")]
    InvalidIri(String),

    /// The durable state store failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

// =============================================================================
// TESTS
// =============================================================================
