//! Dyad Runtime Prelude: convenient imports for common usage.
//!
//! ```rust
//! use dyad_runtime::prelude::*;
//! ```

// Re-export session
pub use crate::session::{Session, SessionOrigin};

// Re-export stores
pub use crate::store::{load_snapshot, save_snapshot, JsonFileStore, MemoryStore, SnapshotStore};

// Re-export from core
pub use dyad_core::prelude::*;
