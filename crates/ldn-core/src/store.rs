//! # Fact Store
//!
//! In-memory index over the facts of one fetched resource.
//!
//! Facts are kept in parser order and indexed by subject, predicate and
//! object. A query intersects the narrowest index with the remaining filters
//! and returns matches in parser order, so "first match" is deterministic for
//! a given store. All data structures use `BTreeMap` for deterministic
//! ordering. The store is read-only once built.

use crate::formats::turtle::parse_turtle;
use crate::{Fact, LdnError, Term};
use std::collections::{BTreeMap, BTreeSet};

/// An immutable, indexed set of facts scoped to one resource.
#[derive(Debug, Clone, Default)]
pub struct FactStore {
    /// Facts in parser order, duplicates removed.
    facts: Vec<Fact>,

    /// subject -> positions in `facts`
    by_subject: BTreeMap<String, Vec<usize>>,

    /// predicate -> positions in `facts`
    by_predicate: BTreeMap<String, Vec<usize>>,

    /// object -> positions in `facts`
    by_object: BTreeMap<Term, Vec<usize>>,
}

impl FactStore {
    /// Build a store from parsed facts.
    ///
    /// Exact duplicates are kept once, at their first position.
    #[must_use]
    pub fn new(facts: impl IntoIterator<Item = Fact>) -> Self {
        let mut store = Self::default();
        let mut seen = BTreeSet::new();

        for fact in facts {
            if !seen.insert(fact.clone()) {
                continue;
            }
            let pos = store.facts.len();
            store
                .by_subject
                .entry(fact.subject.clone())
                .or_default()
                .push(pos);
            store
                .by_predicate
                .entry(fact.predicate.clone())
                .or_default()
                .push(pos);
            store
                .by_object
                .entry(fact.object.clone())
                .or_default()
                .push(pos);
            store.facts.push(fact);
        }

        store
    }

    /// Parse a Turtle document and index its facts.
    pub fn from_turtle(text: &str, base: &str) -> Result<Self, LdnError> {
        Ok(Self::new(parse_turtle(text, base)?))
    }

    /// Number of distinct facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// True if the resource carried no facts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// All facts in parser order.
    pub fn iter(&self) -> impl Iterator<Item = &Fact> {
        self.facts.iter()
    }

    /// Pattern query. `None` matches any value.
    ///
    /// Results are in parser order.
    pub fn find<'a, 'q>(
        &'a self,
        subject: Option<&'q str>,
        predicate: Option<&'q str>,
        object: Option<&'q Term>,
    ) -> impl Iterator<Item = &'a Fact> + 'q
    where
        'a: 'q,
    {
        const NO_MATCH: &[usize] = &[];

        // Pick the narrowest index among the bound positions.
        let mut candidates: Option<&[usize]> = None;
        let mut narrow = |positions: Option<&'a Vec<usize>>| {
            let positions = positions.map_or(NO_MATCH, Vec::as_slice);
            if candidates.is_none_or(|current| positions.len() < current.len()) {
                candidates = Some(positions);
            }
        };
        if let Some(s) = subject {
            narrow(self.by_subject.get(s));
        }
        if let Some(p) = predicate {
            narrow(self.by_predicate.get(p));
        }
        if let Some(o) = object {
            narrow(self.by_object.get(o));
        }

        let positions: Box<dyn Iterator<Item = usize> + 'q> = match candidates {
            Some(slice) => Box::new(slice.iter().copied()),
            None => Box::new(0..self.facts.len()),
        };

        positions
            .map(move |pos| &self.facts[pos])
            .filter(move |fact| {
                subject.is_none_or(|s| fact.subject == s)
                    && predicate.is_none_or(|p| fact.predicate == p)
                    && object.is_none_or(|o| &fact.object == o)
            })
    }

    /// Objects of `predicate` on `subject`, in parser order.
    pub fn objects<'a, 'q>(
        &'a self,
        subject: &'q str,
        predicate: &'q str,
    ) -> impl Iterator<Item = &'a Term> + 'q
    where
        'a: 'q,
    {
        self.find(Some(subject), Some(predicate), None)
            .map(|fact| &fact.object)
    }

    /// First object of `predicate` on `subject`.
    #[must_use]
    pub fn first_object(&self, subject: &str, predicate: &str) -> Option<&Term> {
        self.find(Some(subject), Some(predicate), None)
            .map(|fact| &fact.object)
            .next()
    }

    /// Distinct subjects carrying `predicate`, in first-seen order.
    #[must_use]
    pub fn subjects(&self, predicate: &str) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.find(None, Some(predicate), None)
            .map(|fact| fact.subject.as_str())
            .filter(|subject| seen.insert(*subject))
            .collect()
    }

    /// Outgoing facts of `subject`, in parser order.
    pub fn outgoing<'a, 'q>(&'a self, subject: &'q str) -> impl Iterator<Item = &'a Fact> + 'q
    where
        'a: 'q,
    {
        self.find(Some(subject), None, None)
    }

    /// True if some fact links to `object` through `predicate`.
    #[must_use]
    pub fn has_object(&self, predicate: &str, object: &Term) -> bool {
        self.find(None, Some(predicate), Some(object)).next().is_some()
    }
}

// =============================================================================
// TESTS
// =============================================================================
