//! # Profile Discovery
//!
//! Finds a user's inbox in their profile document.

use crate::store::FactStore;
use crate::vocab::{AS_INBOX, LDP_INBOX};

/// Inbox URL advertised by `profile` in its own document.
///
/// Both `ldp:inbox` and `as:inbox` are accepted; the first identifier
/// object in parser order wins. Literal objects are ignored.
#[must_use]
pub fn discover_inbox(store: &FactStore, profile: &str) -> Option<String> {
    store
        .outgoing(profile)
        .filter(|fact| fact.predicate == LDP_INBOX || fact.predicate == AS_INBOX)
        .find_map(|fact| fact.object.as_id())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: &str = "https://alice.example/profile/card";
    const WEBID: &str = "https://alice.example/profile/card#me";

    #[test]
    fn ldp_inbox() {
        let store = FactStore::from_turtle(
            "<#me> <http://www.w3.org/ns/ldp#inbox> </inbox/> .",
            CARD,
        )
        .expect("parse");
        assert_eq!(
            discover_inbox(&store, WEBID),
            Some("https://alice.example/inbox/".into())
        );
    }

    #[test]
    fn activitystreams_inbox() {
        let store = FactStore::from_turtle(
            "<#me> <https://www.w3.org/ns/activitystreams#inbox> <https://inbox.example/alice/> .",
            CARD,
        )
        .expect("parse");
        assert_eq!(
            discover_inbox(&store, WEBID),
            Some("https://inbox.example/alice/".into())
        );
    }

    #[test]
    fn inbox_of_another_subject_is_ignored() {
        let store = FactStore::from_turtle(
            "<#bob> <http://www.w3.org/ns/ldp#inbox> </bob/inbox/> .",
            CARD,
        )
        .expect("parse");
        assert_eq!(discover_inbox(&store, WEBID), None);
    }

    #[test]
    fn literal_inbox_is_ignored() {
        let store = FactStore::from_turtle(
            r#"<#me> <http://www.w3.org/ns/ldp#inbox> "https://alice.example/inbox/" ."#,
            CARD,
        )
        .expect("parse");
        assert_eq!(discover_inbox(&store, WEBID), None);
    }
}
