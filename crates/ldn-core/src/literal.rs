//! # Literal Coercion
//!
//! Converts typed literals into native [`Scalar`] values.
//!
//! Coercion is total: every datatype, known or not, yields a value. A
//! malformed literal degrades to a sentinel or to its raw text and never
//! aborts the traversal that asked for it.

use crate::Scalar;
use crate::vocab::{
    XSD_BOOLEAN, XSD_DATE, XSD_DATE_TIME, XSD_DECIMAL, XSD_INTEGER, XSD_NON_NEGATIVE_INTEGER,
    XSD_TIME,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Coerce a literal's lexical form according to its datatype IRI.
///
/// | datatype | result |
/// |---|---|
/// | `xsd:integer`, `xsd:nonNegativeInteger` | `Integer`, or `Decimal(NaN)` on failure |
/// | `xsd:decimal` | `Decimal`, NaN on failure |
/// | `xsd:boolean` | `Boolean`, raw text if not a boolean lexical form |
/// | `xsd:date`, `xsd:time`, `xsd:dateTime` | calendar value, raw text on failure |
/// | anything else | raw text |
#[must_use]
pub fn coerce(value: &str, datatype: &str) -> Scalar {
    match datatype {
        XSD_INTEGER | XSD_NON_NEGATIVE_INTEGER => value
            .trim()
            .parse::<i64>()
            .map(Scalar::Integer)
            .unwrap_or(Scalar::Decimal(f64::NAN)),
        XSD_DECIMAL => value
            .trim()
            .parse::<f64>()
            .map(Scalar::Decimal)
            .unwrap_or(Scalar::Decimal(f64::NAN)),
        XSD_BOOLEAN => match value.trim() {
            "true" | "1" => Scalar::Boolean(true),
            "false" | "0" => Scalar::Boolean(false),
            _ => Scalar::Text(value.to_string()),
        },
        XSD_DATE => parse_date(value)
            .map(Scalar::Date)
            .unwrap_or_else(|| Scalar::Text(value.to_string())),
        XSD_TIME => parse_time(value)
            .map(Scalar::Time)
            .unwrap_or_else(|| Scalar::Text(value.to_string())),
        XSD_DATE_TIME => parse_date_time(value)
            .map(Scalar::DateTime)
            .unwrap_or_else(|| Scalar::Text(value.to_string())),
        _ => Scalar::Text(value.to_string()),
    }
}

/// Parse an `xsd:dateTime` lexical form into UTC.
///
/// Values without a timezone are read as UTC.
#[must_use]
pub fn parse_date_time(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    // A trailing timezone ("2024-05-01Z", "2024-05-01+02:00") is ignored.
    let day = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Parse an `xsd:time`. A `Z` or numeric offset is normalised to UTC.
fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(&format!("1970-01-01T{value}")) {
        return Some(at.with_timezone(&Utc).time());
    }
    ["%H:%M:%S%.f", "%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(value, fmt).ok())
}

/// Local name of a predicate IRI.
///
/// Everything up to and including the final `#` is stripped, then everything
/// up to and including the final `/`. A trailing separator falls back to the
/// segment before it, so `http://x.org/ns/url/` yields `url`.
#[must_use]
pub fn local_name(iri: &str) -> &str {
    last_segment(last_segment(iri, '#'), '/')
}

fn last_segment(s: &str, sep: char) -> &str {
    let mut parts = s.rsplit(sep);
    let last = parts.next().unwrap_or(s);
    if last.is_empty() {
        parts.next().unwrap_or(last)
    } else {
        last
    }
}

// =============================================================================
// TESTS
// =============================================================================
