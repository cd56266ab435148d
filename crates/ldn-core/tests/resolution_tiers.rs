//! # Resolution Tier Tests (T0-T3)
//!
//! End-to-end checks of the pure pipeline over realistic Turtle documents.
//!
//! ## Tiers
//! - T0: Document Integrity
//! - T1: Inbox Ordering
//! - T2: Head Activity Selection
//! - T3: Display Record Extraction

use ldn_core::{
    ActivityResolver, FactStore, InboxScanner, LdnError, Scalar, discover_inbox,
    fallback_icon_url,
};

const INBOX: &str = "https://pod.example/inbox/";
const NOTIFICATION: &str = "https://pod.example/inbox/3f2a.ttl";

const INBOX_DOC: &str = r#"
@prefix ldp: <http://www.w3.org/ns/ldp#> .
@prefix dct: <http://purl.org/dc/terms/> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .

<> a ldp:BasicContainer, ldp:Container ;
   dct:modified "2024-05-03T09:00:00Z"^^xsd:dateTime ;
   ldp:contains <3f2a.ttl>, <9c1e.ttl>, <broken.ttl> .

<3f2a.ttl> a ldp:Resource ; dct:modified "2024-05-02T08:00:00Z"^^xsd:dateTime .
<9c1e.ttl> a ldp:Resource ; dct:modified "2024-05-03T08:30:00Z"^^xsd:dateTime .
<broken.ttl> a ldp:Resource .
"#;

/// An announcement wrapping the creation of a comment.
const NOTIFICATION_DOC: &str = r#"
@prefix as: <https://www.w3.org/ns/activitystreams#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .

<#create> a as:Create ;
    as:generator <https://dokie.li/#app> ;
    as:actor <https://bob.example/profile#me> ;
    as:object <https://alice.example/articles/one#comment-1> ;
    as:name "Comment created" .

<#announce> a as:Announce ;
    as:generator <https://dokie.li/#app> ;
    as:actor <https://bob.example/profile#me> ;
    as:object <#create> ;
    as:name "Bob commented on your article" ;
    as:summary "Bob left a comment on \"One\"" ;
    as:published "2024-05-02T07:59:12Z"^^xsd:dateTime ;
    as:image <#preview> .

<#preview> as:url <https://alice.example/articles/one/cover.jpg> ;
    as:mediaType "image/jpeg" ;
    as:height 360 .

<https://dokie.li/#app> a as:Application ;
    as:name "dokieli" ;
    as:icon <#app-icon> .

<#app-icon> as:mediaType "image/svg+xml" .
"#;

const GENERATOR_DOC: &str = r#"
@prefix schema: <http://schema.org/> .
<#app> schema:name "dokieli" ; schema:image <https://dokie.li/media/images/logo.svg> .
"#;

// =============================================================================
// TIER T0: DOCUMENT INTEGRITY
// =============================================================================

mod t0_document_integrity {
    use super::*;

    /// T0.1: Realistic documents parse.
    #[test]
    fn documents_parse() {
        assert!(!FactStore::from_turtle(INBOX_DOC, INBOX).expect("inbox").is_empty());
        assert!(
            !FactStore::from_turtle(NOTIFICATION_DOC, NOTIFICATION)
                .expect("notification")
                .is_empty()
        );
    }

    /// T0.2: Non-Turtle bodies are parse errors, not empty stores.
    #[test]
    fn html_body_is_rejected() {
        let result = FactStore::from_turtle("<!DOCTYPE html><html></html>", NOTIFICATION);
        assert!(matches!(result, Err(LdnError::Parse { .. })));
    }

    /// T0.3: Inbox discovery from a Solid profile.
    #[test]
    fn inbox_from_profile() {
        let profile = FactStore::from_turtle(
            r#"
            @prefix ldp: <http://www.w3.org/ns/ldp#> .
            @prefix foaf: <http://xmlns.com/foaf/0.1/> .
            <#me> a foaf:Person ; foaf:name "Alice" ; ldp:inbox <https://pod.example/inbox/> .
            "#,
            "https://pod.example/profile/card#me",
        )
        .expect("profile");
        assert_eq!(
            discover_inbox(&profile, "https://pod.example/profile/card#me"),
            Some(INBOX.to_string())
        );
    }
}

// =============================================================================
// TIER T1: INBOX ORDERING
// =============================================================================

mod t1_inbox_ordering {
    use super::*;

    /// T1.1: Newest container modification first, undated entries dropped.
    #[test]
    fn container_order() {
        let store = FactStore::from_turtle(INBOX_DOC, INBOX).expect("inbox");
        let refs = InboxScanner::scan(&store);

        let ids: Vec<_> = refs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "https://pod.example/inbox/9c1e.ttl",
                "https://pod.example/inbox/3f2a.ttl",
            ]
        );
    }

    /// T1.2: The container's own modified fact is not a notification.
    #[test]
    fn container_itself_not_listed() {
        let store = FactStore::from_turtle(INBOX_DOC, INBOX).expect("inbox");
        assert!(InboxScanner::scan(&store).iter().all(|r| r.id != INBOX));
    }
}

// =============================================================================
// TIER T2: HEAD ACTIVITY SELECTION
// =============================================================================

mod t2_head_selection {
    use super::*;

    /// T2.1: The wrapping activity is the head, not the wrapped one.
    #[test]
    fn announce_wraps_create() {
        let store = FactStore::from_turtle(NOTIFICATION_DOC, NOTIFICATION).expect("parse");
        assert_eq!(
            ActivityResolver::head_activity(&store),
            Some("https://pod.example/inbox/3f2a.ttl#announce")
        );
    }
}

// =============================================================================
// TIER T3: DISPLAY RECORD EXTRACTION
// =============================================================================

mod t3_record_extraction {
    use super::*;

    /// T3.1: Full record with icon fallback resolved from the generator.
    #[test]
    fn full_record() {
        let store = FactStore::from_turtle(NOTIFICATION_DOC, NOTIFICATION).expect("parse");
        let resolution = ActivityResolver::resolve(&store).expect("resolution");

        // The icon resource has no url, so the generator must be consulted.
        assert_eq!(resolution.icon_fallback_target(), Some("https://dokie.li/#app"));

        let generator = FactStore::from_turtle(GENERATOR_DOC, "https://dokie.li/#app")
            .expect("generator");
        let record = resolution.complete(fallback_icon_url(&generator));

        assert_eq!(record.id, "https://pod.example/inbox/3f2a.ttl#announce");
        assert_eq!(record.app_name, Some(Scalar::Text("dokieli".into())));
        assert_eq!(
            record.title,
            Some(Scalar::Text("Bob commented on your article".into()))
        );
        assert_eq!(
            record.text,
            Some(Scalar::Text("Bob left a comment on \"One\"".into()))
        );
        assert!(matches!(record.timestamp, Some(Scalar::DateTime(_))));

        let small = record.small_icon.expect("small icon");
        assert_eq!(small.url(), Some("https://dokie.li/media/images/logo.svg"));
        assert_eq!(
            small.get("mediaType"),
            Some(&Scalar::Text("image/svg+xml".into()))
        );

        let large = record.large_icon.expect("large icon");
        assert_eq!(
            large.url(),
            Some("https://alice.example/articles/one/cover.jpg")
        );
        assert_eq!(large.get("height"), Some(&Scalar::Integer(360)));
    }

    /// T3.2: Records serialize with the display field names.
    #[test]
    fn record_serializes_camel_case() {
        let store = FactStore::from_turtle(NOTIFICATION_DOC, NOTIFICATION).expect("parse");
        let record = ActivityResolver::resolve(&store)
            .expect("resolution")
            .into_record();

        let json = serde_json::to_value(&record).expect("serialize");
        assert_eq!(json["appName"], "dokieli");
        assert_eq!(json["type"], "https://www.w3.org/ns/activitystreams#Announce");
        assert_eq!(json["largeIcon"]["height"], 360);
        assert!(json["smallIcon"].get("url").is_none());
    }
}
