//! # Activity Resolver
//!
//! Finds the head activity of a notification resource and extracts its
//! [`DisplayRecord`].
//!
//! A notification resource often describes several activities (an
//! announcement wrapping an offer wrapping a create, and so on). Every
//! activity that names a `generator` is a candidate; the head is the one no
//! other activity points at through `subject`, `object`, `target` or
//! `actor`.
//!
//! The resolver never fetches. When the generator's icon has no `url`, the
//! resolution carries the generator as a pending fallback target; the caller
//! fetches the generator's resource and hands the result back through
//! [`fallback_icon_url`] and [`Resolution::complete`].

use crate::literal::local_name;
use crate::store::FactStore;
use crate::vocab::{
    AS_CONTENT, AS_GENERATOR, AS_ICON, AS_IMAGE, AS_NAME, AS_PUBLISHED, AS_SUMMARY, FOAF_IMG,
    RDF_TYPE, SCHEMA_IMAGE, SUB_ACTIVITY_LINKS,
};
use crate::{DisplayRecord, Icon, Term};

/// Outcome of resolving one notification resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    record: DisplayRecord,
    /// Generator to fetch when the small icon lacks a `url`.
    pending_icon: Option<String>,
}

impl Resolution {
    /// The record as resolved from the notification resource alone.
    #[must_use]
    pub fn record(&self) -> &DisplayRecord {
        &self.record
    }

    /// Generator resource to fetch for the icon fallback, if one is needed.
    #[must_use]
    pub fn icon_fallback_target(&self) -> Option<&str> {
        self.pending_icon.as_deref()
    }

    /// Finish the resolution with the outcome of the icon fallback.
    ///
    /// `None` leaves the small icon without a `url`.
    #[must_use]
    pub fn complete(mut self, fallback_url: Option<String>) -> DisplayRecord {
        if let (Some(url), Some(icon)) = (fallback_url, self.record.small_icon.as_mut()) {
            icon.set_url(url);
        }
        self.record
    }

    /// Finish without running the icon fallback.
    #[must_use]
    pub fn into_record(self) -> DisplayRecord {
        self.record
    }
}

/// The Activity Resolver turns a notification's facts into a display record.
pub struct ActivityResolver;

impl ActivityResolver {
    /// Resolve a notification resource.
    ///
    /// Returns `None` if and only if the store has no `as:generator` fact.
    #[must_use]
    pub fn resolve(store: &FactStore) -> Option<Resolution> {
        let head = Self::head_activity(store)?;
        let generator = store.first_object(head, AS_GENERATOR)?;
        let generator_id = generator.as_id();

        let scalar = |subject: &str, predicate: &str| {
            store.first_object(subject, predicate).map(Term::to_scalar)
        };

        let small_icon = generator_id
            .map(|id| collect_icon(store, store.first_object(id, AS_ICON)))
            .unwrap_or_default();
        let pending_icon = if small_icon.has_url() {
            None
        } else {
            fetchable(generator)
        };

        let large_icon = Some(collect_icon(store, store.first_object(head, AS_IMAGE)))
            .filter(Icon::has_url);

        let record = DisplayRecord {
            id: head.to_string(),
            app_name: generator_id.and_then(|id| scalar(id, AS_NAME)),
            app_type: generator_id.and_then(|id| scalar(id, RDF_TYPE)),
            small_icon: Some(small_icon),
            large_icon,
            timestamp: scalar(head, AS_PUBLISHED),
            title: scalar(head, AS_NAME),
            text: scalar(head, AS_CONTENT).or_else(|| scalar(head, AS_SUMMARY)),
            kind: scalar(head, RDF_TYPE),
        };

        Some(Resolution {
            record,
            pending_icon,
        })
    }

    /// Select the head activity among the `generator` subjects.
    ///
    /// With several candidates, the unique one that no other fact links to
    /// through a sub-activity predicate wins. If none or several qualify,
    /// the first candidate is used.
    #[must_use]
    pub fn head_activity(store: &FactStore) -> Option<&str> {
        let candidates = store.subjects(AS_GENERATOR);
        if candidates.len() <= 1 {
            return candidates.first().copied();
        }

        let mut top_level = candidates
            .iter()
            .copied()
            .filter(|candidate| !is_sub_activity(store, candidate));
        match (top_level.next(), top_level.next()) {
            (Some(head), None) => Some(head),
            _ => candidates.first().copied(),
        }
    }
}

/// Image URL advertised by a generator's own resource.
///
/// The first `schema:image` or `foaf:img` fact wins.
#[must_use]
pub fn fallback_icon_url(generator: &FactStore) -> Option<String> {
    generator
        .iter()
        .find(|fact| fact.predicate == SCHEMA_IMAGE || fact.predicate == FOAF_IMG)
        .map(|fact| fact.object.value().to_string())
}

fn is_sub_activity(store: &FactStore, candidate: &str) -> bool {
    let term = Term::id(candidate);
    SUB_ACTIVITY_LINKS
        .iter()
        .any(|predicate| store.has_object(predicate, &term))
}

fn collect_icon(store: &FactStore, icon: Option<&Term>) -> Icon {
    let mut attributes = Icon::new();
    if let Some(Term::Id(id)) = icon {
        for fact in store.outgoing(id) {
            attributes.insert(local_name(&fact.predicate), fact.object.to_scalar());
        }
    }
    attributes
}

/// Generators that name a resource that can be dereferenced.
fn fetchable(generator: &Term) -> Option<String> {
    match generator {
        Term::Id(id) if !generator.is_blank() => Some(id.clone()),
        _ => None,
    }
}

// =============================================================================
// TESTS
// =============================================================================
