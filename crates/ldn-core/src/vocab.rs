//! # Vocabulary
//!
//! Fixed identifiers consumed by the resolution engine.
//!
//! All matching is full-IRI and case-sensitive. These constants are compiled
//! into the binary and never change at runtime.

/// ActivityStreams 2.0 namespace.
pub const AS: &str = "https://www.w3.org/ns/activitystreams#";
/// XML Schema datatypes namespace.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

// =============================================================================
// CONTAINERS & PROFILES
// =============================================================================

/// `ldp:contains`, links an inbox container to its notifications.
pub const LDP_CONTAINS: &str = "http://www.w3.org/ns/ldp#contains";
/// `ldp:inbox`, links a profile to its inbox.
pub const LDP_INBOX: &str = "http://www.w3.org/ns/ldp#inbox";
/// `as:inbox`, the ActivityStreams equivalent of `ldp:inbox`.
pub const AS_INBOX: &str = "https://www.w3.org/ns/activitystreams#inbox";
/// `dcterms:modified`, container-level modification time.
pub const DCTERMS_MODIFIED: &str = "http://purl.org/dc/terms/modified";

// =============================================================================
// ACTIVITIES
// =============================================================================

pub const AS_GENERATOR: &str = "https://www.w3.org/ns/activitystreams#generator";
pub const AS_SUBJECT: &str = "https://www.w3.org/ns/activitystreams#subject";
pub const AS_OBJECT: &str = "https://www.w3.org/ns/activitystreams#object";
pub const AS_TARGET: &str = "https://www.w3.org/ns/activitystreams#target";
pub const AS_ACTOR: &str = "https://www.w3.org/ns/activitystreams#actor";
pub const AS_IMAGE: &str = "https://www.w3.org/ns/activitystreams#image";
pub const AS_ICON: &str = "https://www.w3.org/ns/activitystreams#icon";
pub const AS_NAME: &str = "https://www.w3.org/ns/activitystreams#name";
pub const AS_PUBLISHED: &str = "https://www.w3.org/ns/activitystreams#published";
pub const AS_CONTENT: &str = "https://www.w3.org/ns/activitystreams#content";
pub const AS_SUMMARY: &str = "https://www.w3.org/ns/activitystreams#summary";
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

/// Predicates that mark an activity as a sub-part of another activity.
pub const SUB_ACTIVITY_LINKS: [&str; 4] = [AS_SUBJECT, AS_OBJECT, AS_TARGET, AS_ACTOR];

// =============================================================================
// ICON FALLBACK
// =============================================================================

/// `schema:image` on a generator's own profile.
pub const SCHEMA_IMAGE: &str = "http://schema.org/image";
/// `foaf:img` on a generator's own profile.
pub const FOAF_IMG: &str = "http://xmlns.com/foaf/0.1/img";

// =============================================================================
// LITERAL DATATYPES
// =============================================================================

pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
pub const XSD_NON_NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";
pub const XSD_DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";
pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
pub const XSD_DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
pub const XSD_TIME: &str = "http://www.w3.org/2001/XMLSchema#time";
pub const XSD_DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

// =============================================================================
// MEDIA TYPES
// =============================================================================

/// Accept header sent for every linked-data fetch.
pub const TURTLE_MEDIA_TYPE: &str = "text/turtle";
