//! # ldn-core
//!
//! The notification resolution engine for ldn-notify - THE LOGIC.
//!
//! Given the facts of a user's inbox container and of each notification it
//! lists, this crate decides the display order, finds the head activity of
//! every notification and extracts a normalized [`DisplayRecord`] from it.
//!
//! ## Data Flow
//!
//! ```text
//! profile ──► discover_inbox ──► inbox FactStore ──► InboxScanner ──► [NotificationRef]
//!                                                                        │
//!                    notification FactStore ◄────────── (fetched by caller)
//!                              │
//!                              ▼
//!                      ActivityResolver ──► Resolution ──► DisplayRecord
//! ```
//!
//! ## Architectural Constraints
//!
//! - NO async, NO network: the caller fetches, the core parses and resolves
//! - Resolution is total: malformed data yields absent fields, never errors
//! - Fact stores are read-only once built
//! - The displayed-notification set is a value owned by the caller

// =============================================================================
// MODULES
// =============================================================================

pub mod formats;
pub mod handled;
pub mod literal;
pub mod profile;
pub mod resolver;
pub mod scanner;
pub mod storage;
pub mod store;
pub mod types;
pub mod vocab;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{DisplayRecord, Fact, Icon, LdnError, Literal, NotificationRef, Scalar, Term};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use handled::HandledSet;
pub use literal::{coerce, local_name};
pub use profile::discover_inbox;
pub use resolver::{ActivityResolver, Resolution, fallback_icon_url};
pub use scanner::InboxScanner;
pub use storage::HandledStore;
pub use store::FactStore;

// =============================================================================
// RE-EXPORTS: Formats (from formats module)
// =============================================================================

pub use formats::{document_url, parse_turtle};
