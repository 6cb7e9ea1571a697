//! # Dyad Runtime
//!
//! Session management and persistence.
//!
//! A [`Session`](session::Session) owns the knowledge base, remembers the
//! classification awaiting feedback, and writes a snapshot through an
//! injected [`SnapshotStore`](store::SnapshotStore) after every change.

pub mod prelude;
pub mod session;
pub mod store;
