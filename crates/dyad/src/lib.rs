//! # Dyad
//!
//! A two-class, feature-based classifier that learns from feedback.
//!
//! Train it with a handful of features for each of two classes, ask it to
//! classify an unlabeled feature list, then tell it whether it was right.
//! Every answer teaches: unknown features join the correct class, and a
//! feature that turns out to fit both classes moves to the common set.
//!
//! ## Quick Start
//!
//! ```rust
//! use dyad::prelude::*;
//!
//! let mut session = Session::open(MemoryStore::new());
//! session
//!     .train("Cat", "Dog", "furry\nmeows\nwhiskers", "barks\nwags tail\nfurry")
//!     .unwrap();
//!
//! let result = session.classify("barks\nbig").unwrap();
//! let names = session.knowledge().names().clone();
//! assert_eq!(names.get(result.predicted), "Dog");
//! println!("{}", result.analysis(&names));
//!
//! // Wrong: it was a cat.
//! let report = session.confirm(false).unwrap();
//! println!("{}", report.summary(&names));
//! ```
//!
//! ## Architecture
//!
//! - [`dyad_core`] - Knowledge base, normalizer, reports and snapshot format
//! - [`dyad_runtime`] - Sessions and snapshot stores
//!
//! ## Scoring
//!
//! | Outcome | Prediction | Reason |
//! |---------|------------|--------|
//! | A scores higher | A | `MORE_MATCHES` |
//! | B scores higher | B | `MORE_MATCHES` |
//! | Equal, non-zero | A | `TIE_DEFAULT_FIRST` |
//! | Nothing matched | A | `NO_MATCHES_DEFAULT` |
//!
//! A class's score is its exclusive matches plus the common matches.
//!
//! ## Session Persistence
//!
//! ```rust,ignore
//! use dyad::prelude::*;
//!
//! // Loads .dyad/knowledge.json if present, saves after every change.
//! let mut session = Session::open(JsonFileStore::new(".dyad/knowledge.json"));
//! ```

// Re-export all subcrates
pub use dyad_core as core;
pub use dyad_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust
/// use dyad::prelude::*;
/// ```
pub mod prelude {
    pub use dyad_core::prelude::*;
    pub use dyad_runtime::prelude::*;
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
