//! # Inbox Scanner
//!
//! Lists the notifications of an inbox container in display order.
//!
//! Ordering uses the container's `dcterms:modified` metadata, not the
//! publication time inside each notification. Reading the container alone
//! avoids one fetch per notification before anything can be shown, at the
//! cost of ordering by when the pod last touched each resource.

use crate::literal::{coerce, parse_date_time};
use crate::store::FactStore;
use crate::vocab::{DCTERMS_MODIFIED, LDP_CONTAINS};
use crate::{NotificationRef, Scalar, Term};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::collections::BTreeSet;

/// The Inbox Scanner turns container facts into ordered notification refs.
pub struct InboxScanner;

impl InboxScanner {
    /// Identifiers listed through `ldp:contains`, in parser order.
    #[must_use]
    pub fn contained(store: &FactStore) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        store
            .find(None, Some(LDP_CONTAINS), None)
            .filter_map(|fact| fact.object.as_id())
            .filter(|id| seen.insert(*id))
            .collect()
    }

    /// Ordered notification refs, newest first.
    ///
    /// - Only contained identifiers are listed.
    /// - An identifier without a parseable `dcterms:modified` is dropped;
    ///   no default timestamp is substituted.
    /// - With several `modified` facts, the first parseable one is used.
    /// - Equal timestamps are ordered by identifier.
    #[must_use]
    pub fn scan(store: &FactStore) -> Vec<NotificationRef> {
        let contained: BTreeSet<&str> = Self::contained(store).into_iter().collect();
        let mut seen = BTreeSet::new();

        let mut refs: Vec<NotificationRef> = store
            .find(None, Some(DCTERMS_MODIFIED), None)
            .filter(|fact| contained.contains(fact.subject.as_str()))
            .filter_map(|fact| modified_time(&fact.object).map(|at| (fact.subject.as_str(), at)))
            .filter(|(id, _)| seen.insert(*id))
            .map(|(id, at)| NotificationRef::new(id, at))
            .collect();

        refs.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.id.cmp(&b.id)));
        refs
    }
}

fn modified_time(term: &Term) -> Option<DateTime<Utc>> {
    let Term::Literal(lit) = term else {
        return None;
    };
    match coerce(&lit.value, &lit.datatype) {
        Scalar::DateTime(at) => Some(at),
        Scalar::Date(day) => Some(midnight(day)),
        // Untyped literals still count when they read as a timestamp or a day.
        _ => parse_date_time(&lit.value).or_else(|| {
            NaiveDate::parse_from_str(lit.value.trim(), "%Y-%m-%d")
                .ok()
                .map(midnight)
        }),
    }
}

fn midnight(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const INBOX: &str = "https://pod.example/inbox/";

    fn inbox(body: &str) -> FactStore {
        let text = format!(
            r#"
            @prefix ldp: <http://www.w3.org/ns/ldp#> .
            @prefix dct: <http://purl.org/dc/terms/> .
            @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
            {body}
            "#
        );
        FactStore::from_turtle(&text, INBOX).expect("parse")
    }

    fn ids(refs: &[NotificationRef]) -> Vec<&str> {
        refs.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn newest_first() {
        let store = inbox(
            r#"
            <> ldp:contains <a.ttl>, <b.ttl>, <c.ttl> .
            <a.ttl> dct:modified "2024-05-01T10:00:00Z"^^xsd:dateTime .
            <b.ttl> dct:modified "2024-05-03T10:00:00Z"^^xsd:dateTime .
            <c.ttl> dct:modified "2024-05-02T10:00:00Z"^^xsd:dateTime .
            "#,
        );
        let refs = InboxScanner::scan(&store);
        assert_eq!(
            ids(&refs),
            vec![
                "https://pod.example/inbox/b.ttl",
                "https://pod.example/inbox/c.ttl",
                "https://pod.example/inbox/a.ttl",
            ]
        );
    }

    #[test]
    fn missing_modified_is_dropped() {
        let store = inbox(
            r#"
            <> ldp:contains <a.ttl>, <b.ttl> .
            <a.ttl> dct:modified "2024-05-01T10:00:00Z"^^xsd:dateTime .
            "#,
        );
        assert_eq!(
            ids(&InboxScanner::scan(&store)),
            vec!["https://pod.example/inbox/a.ttl"]
        );
        assert_eq!(InboxScanner::contained(&store).len(), 2);
    }

    #[test]
    fn unparseable_modified_is_dropped() {
        let store = inbox(
            r#"
            <> ldp:contains <a.ttl> .
            <a.ttl> dct:modified "last tuesday" .
            "#,
        );
        assert!(InboxScanner::scan(&store).is_empty());
    }

    #[test]
    fn uncontained_subjects_are_ignored() {
        let store = inbox(
            r#"
            <> ldp:contains <a.ttl> ;
               dct:modified "2024-05-09T10:00:00Z"^^xsd:dateTime .
            <a.ttl> dct:modified "2024-05-01T10:00:00Z"^^xsd:dateTime .
            <stray.ttl> dct:modified "2024-05-05T10:00:00Z"^^xsd:dateTime .
            "#,
        );
        assert_eq!(
            ids(&InboxScanner::scan(&store)),
            vec!["https://pod.example/inbox/a.ttl"]
        );
    }

    #[test]
    fn identifiers_are_unique() {
        let store = inbox(
            r#"
            <> ldp:contains <a.ttl> .
            <a.ttl> dct:modified "2024-05-01T10:00:00Z"^^xsd:dateTime ,
                                 "2024-06-01T10:00:00Z"^^xsd:dateTime .
            "#,
        );
        let refs = InboxScanner::scan(&store);
        assert_eq!(refs.len(), 1);
    }

    #[test]
    fn untyped_and_date_literals_are_accepted() {
        let store = inbox(
            r#"
            <> ldp:contains <a.ttl>, <b.ttl> .
            <a.ttl> dct:modified "2024-05-01T10:00:00Z" .
            <b.ttl> dct:modified "2024-05-02"^^xsd:date .
            "#,
        );
        assert_eq!(
            ids(&InboxScanner::scan(&store)),
            vec![
                "https://pod.example/inbox/b.ttl",
                "https://pod.example/inbox/a.ttl",
            ]
        );
    }

    #[test]
    fn untyped_bare_dates_are_accepted() {
        let store = inbox(
            r#"
            <> ldp:contains <a.ttl>, <b.ttl>, <c.ttl>, <d.ttl> .
            <a.ttl> dct:modified "2024-05-01" .
            <b.ttl> dct:modified "2024-05-02"^^xsd:string .
            <c.ttl> dct:modified "2024-05-01T12:00:00Z" .
            <d.ttl> dct:modified "2024-05-01 or so" .
            "#,
        );
        let refs = InboxScanner::scan(&store);
        assert_eq!(
            ids(&refs),
            vec![
                "https://pod.example/inbox/b.ttl",
                "https://pod.example/inbox/c.ttl",
                "https://pod.example/inbox/a.ttl",
            ]
        );
        assert_eq!(refs[2].modified.to_rfc3339(), "2024-05-01T00:00:00+00:00");
    }

    #[test]
    fn equal_timestamps_order_by_identifier() {
        let store = inbox(
            r#"
            <> ldp:contains <b.ttl>, <a.ttl> .
            <b.ttl> dct:modified "2024-05-01T10:00:00Z"^^xsd:dateTime .
            <a.ttl> dct:modified "2024-05-01T10:00:00Z"^^xsd:dateTime .
            "#,
        );
        assert_eq!(
            ids(&InboxScanner::scan(&store)),
            vec![
                "https://pod.example/inbox/a.ttl",
                "https://pod.example/inbox/b.ttl",
            ]
        );
    }

    #[test]
    fn empty_container() {
        let store = inbox("<> a ldp:BasicContainer .");
        assert!(InboxScanner::scan(&store).is_empty());
    }
}
