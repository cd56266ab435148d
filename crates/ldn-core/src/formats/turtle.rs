//! # Turtle Format
//!
//! Turns a Turtle document into the engine's [`Fact`] sequence.
//!
//! Parsing itself is delegated to `sophia_turtle`; this adapter only maps
//! sophia terms onto [`Term`]. Relative IRIs are resolved against the
//! document's own URL, and blank nodes are rendered as `_:label`.

use crate::vocab::XSD_STRING;
use crate::{Fact, LdnError, Term};
use sophia_api::parser::TripleParser;
use sophia_api::source::TripleSource;
use sophia_api::term::TermKind;
use sophia_api::triple::Triple;
use sophia_iri::Iri;
use sophia_turtle::parser::turtle::TurtleParser;

/// Parse `text` as Turtle, resolving relative references against `base`.
///
/// Facts are returned in document order. Any syntax error fails the whole
/// document; there is no partial result.
pub fn parse_turtle(text: &str, base: &str) -> Result<Vec<Fact>, LdnError> {
    let base_iri = Iri::new(document_url(base).to_string())
        .map_err(|e| LdnError::InvalidIri(format!("{base}: {e}")))?;
    let parser = TurtleParser {
        base: Some(base_iri),
    };

    let mut facts = Vec::new();
    parser
        .parse_str(text)
        .for_each_triple(|triple| {
            if let (Some(s), Some(p), Some(o)) = (
                identifier(triple.s()),
                identifier(triple.p()),
                object_term(triple.o()),
            ) {
                facts.push(Fact::new(s, p, o));
            }
        })
        .map_err(|e| LdnError::Parse {
            base: base.to_string(),
            message: e.to_string(),
        })?;

    Ok(facts)
}

/// The URL of the document holding `iri` (fragment removed).
#[must_use]
pub fn document_url(iri: &str) -> &str {
    iri.split_once('#').map_or(iri, |(doc, _)| doc)
}

fn identifier<T: sophia_api::term::Term>(term: T) -> Option<String> {
    match term.kind() {
        TermKind::Iri => term.iri().map(|iri| iri.as_str().to_string()),
        TermKind::BlankNode => term.bnode_id().map(|id| format!("_:{}", id.as_str())),
        _ => None,
    }
}

fn object_term<T: sophia_api::term::Term>(term: T) -> Option<Term> {
    match term.kind() {
        TermKind::Literal => {
            let value = term.lexical_form()?.to_string();
            let datatype = term
                .datatype()
                .map(|dt| dt.as_str().to_string())
                .unwrap_or_else(|| XSD_STRING.to_string());
            Some(Term::literal(value, datatype))
        }
        _ => identifier(term).map(Term::Id),
    }
}

// =============================================================================
// TESTS
// =============================================================================
