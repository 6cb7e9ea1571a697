//! Dyad Core Prelude: convenient imports for common usage.
//!
//! ```rust
//! use dyad_core::prelude::*;
//! ```

pub use crate::types::{ClassLabel, ClassNames, Feature, ReasonCode};

pub use crate::normalize::{normalize, normalize_lines, Normalized};

pub use crate::knowledge::{KnowledgeBase, KnowledgeStats, KnowledgeView, Reinforcement};

pub use crate::report::{
    ClassificationResult, FeedbackKind, FeedbackReport, MatchCounts, TrainingReport,
};

pub use crate::snapshot::Snapshot;

pub use crate::error::{DyadError, Result, ValidationError};
