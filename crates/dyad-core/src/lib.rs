//! # Dyad Core
//!
//! Knowledge base and learning rules for a two-class, feature-based
//! classifier.
//!
//! Knowledge is kept as three pairwise-disjoint sets of features:
//!
//! - features seen only on class **A**
//! - features seen only on class **B**
//! - **common** features seen on both
//!
//! An unknown feature set is classified by counting overlap with each class
//! (common features count for both). Feedback on a prediction, whether a
//! confirmation, a rejection or an explicit label, teaches the knowledge base:
//! new features join the correct class and features that turn out to belong
//! to both classes are promoted to the common set.
//!
//! ## Quick Start
//!
//! ```rust
//! use dyad_core::prelude::*;
//!
//! let mut kb = KnowledgeBase::new();
//! kb.train("Cat", "Dog", "furry\nmeows\nwhiskers", "barks\nwags tail\nfurry").unwrap();
//!
//! let result = kb.classify("barks\nbig").unwrap();
//! assert_eq!(result.predicted, ClassLabel::B);
//! assert_eq!(result.reason, ReasonCode::MoreMatches);
//!
//! let report = kb.confirm(&result, false);
//! assert_eq!(report.target, ClassLabel::A);
//! assert!(kb.features(ClassLabel::A).contains("big"));
//! ```

pub mod error;
pub mod knowledge;
pub mod normalize;
pub mod prelude;
pub mod report;
pub mod snapshot;
pub mod types;
