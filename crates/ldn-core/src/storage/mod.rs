//! # Storage
//!
//! Durable backings for caller-owned state.

pub mod redb_handled;

pub use redb_handled::HandledStore;
