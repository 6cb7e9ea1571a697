//! Structured outcomes of training, classification and feedback.
//!
//! Every operation that classifies or mutates returns one of these so the
//! presentation layer can show exactly what happened.

use crate::types::{ClassLabel, ClassNames, Feature, ReasonCode};
use serde::Serialize;
use std::collections::BTreeSet;

fn join(features: &BTreeSet<Feature>) -> String {
    features
        .iter()
        .map(Feature::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Advisory warnings produced by training. Never blocks success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrainingReport {
    pub names: ClassNames,
    /// Duplicate lines dropped from class A's input.
    pub duplicates_a: Vec<String>,
    /// Duplicate lines dropped from class B's input.
    pub duplicates_b: Vec<String>,
    /// Features given for both classes, stored as common.
    pub common: BTreeSet<Feature>,
}

impl TrainingReport {
    pub fn has_warnings(&self) -> bool {
        !self.duplicates_a.is_empty() || !self.duplicates_b.is_empty() || !self.common.is_empty()
    }

    /// Human-readable warnings, one per line of the report.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for (label, dups) in [
            (ClassLabel::A, &self.duplicates_a),
            (ClassLabel::B, &self.duplicates_b),
        ] {
            if !dups.is_empty() {
                warnings.push(format!(
                    "Removed duplicates from {}: {}",
                    self.names.get(label),
                    dups.join(", ")
                ));
            }
        }
        if !self.common.is_empty() {
            warnings.push(format!(
                "Found common features: {}. They were moved to the common list.",
                join(&self.common)
            ));
        }
        warnings
    }
}

/// How many unknown features hit each knowledge set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchCounts {
    pub a: usize,
    pub b: usize,
    pub common: usize,
}

impl MatchCounts {
    pub fn exclusive(&self, label: ClassLabel) -> usize {
        match label {
            ClassLabel::A => self.a,
            ClassLabel::B => self.b,
        }
    }

    /// Exclusive matches plus common matches.
    pub fn score(&self, label: ClassLabel) -> usize {
        self.exclusive(label) + self.common
    }
}

/// The decision for one classification request.
///
/// Ephemeral: it is handed back with feedback and then dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub predicted: ClassLabel,
    pub reason: ReasonCode,
    pub score_a: usize,
    pub score_b: usize,
    pub matches: MatchCounts,
    /// Normalized unique features that were scored.
    pub features: BTreeSet<Feature>,
    /// Duplicate input lines ignored during scoring.
    pub duplicates: Vec<String>,
}

impl ClassificationResult {
    pub fn score(&self, label: ClassLabel) -> usize {
        match label {
            ClassLabel::A => self.score_a,
            ClassLabel::B => self.score_b,
        }
    }

    /// Per-class breakdown of the score.
    pub fn analysis(&self, names: &ClassNames) -> String {
        let mut lines = vec!["Feature analysis:".to_string()];
        for label in ClassLabel::ALL {
            lines.push(format!(
                "Matches with {}: {} unique + {} common = {}",
                names.get(label),
                self.matches.exclusive(label),
                self.matches.common,
                self.score(label)
            ));
        }
        lines.join("\n")
    }

    pub fn duplicate_warning(&self) -> Option<String> {
        if self.duplicates.is_empty() {
            None
        } else {
            Some(format!(
                "Duplicates found: {}. They were ignored.",
                self.duplicates.join(", ")
            ))
        }
    }
}

/// What triggered a reinforcement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    /// The prediction was accepted.
    Confirmed,
    /// The prediction was rejected; the other class is correct.
    Corrected,
    /// The user named the class directly.
    SelfLabeled,
}

/// Changes applied by one round of feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackReport {
    pub kind: FeedbackKind,
    /// The class the features were reinforced toward.
    pub target: ClassLabel,
    /// Features that were unknown and now belong to `target`.
    pub added: BTreeSet<Feature>,
    /// Features that were exclusive to the other class and are now common.
    pub moved_to_common: BTreeSet<Feature>,
}

impl FeedbackReport {
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.moved_to_common.is_empty()
    }

    /// One-paragraph summary for display.
    pub fn summary(&self, names: &ClassNames) -> String {
        let target = names.get(self.target);
        let mut lines = Vec::new();
        if self.kind == FeedbackKind::SelfLabeled {
            lines.push(format!("Self-learning finished for: {}", target));
        }
        if !self.added.is_empty() {
            lines.push(format!("Added new features to {}: {}", target, join(&self.added)));
        }
        if !self.moved_to_common.is_empty() {
            lines.push(format!(
                "Conflicting features moved to common: {}",
                join(&self.moved_to_common)
            ));
        }
        if self.is_unchanged() {
            lines.push("All features were already known. Nothing changed.".to_string());
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<Feature> {
        items.iter().filter_map(|s| Feature::parse(s)).collect()
    }

    #[test]
    fn training_warnings_name_each_class() {
        let report = TrainingReport {
            names: ClassNames::new("Cat", "Dog"),
            duplicates_a: vec!["Meows".into()],
            duplicates_b: vec![],
            common: set(&["furry"]),
        };
        assert!(report.has_warnings());
        let warnings = report.warnings();
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0], "Removed duplicates from Cat: Meows");
        assert!(warnings[1].contains("furry"));
    }

    #[test]
    fn analysis_lists_both_classes() {
        let result = ClassificationResult {
            predicted: ClassLabel::B,
            reason: ReasonCode::MoreMatches,
            score_a: 1,
            score_b: 3,
            matches: MatchCounts { a: 0, b: 2, common: 1 },
            features: set(&["barks", "furry", "wags tail"]),
            duplicates: vec![],
        };
        let text = result.analysis(&ClassNames::new("Cat", "Dog"));
        assert!(text.contains("Matches with Cat: 0 unique + 1 common = 1"));
        assert!(text.contains("Matches with Dog: 2 unique + 1 common = 3"));
        assert!(result.duplicate_warning().is_none());
    }

    #[test]
    fn unchanged_feedback_says_so() {
        let report = FeedbackReport {
            kind: FeedbackKind::Confirmed,
            target: ClassLabel::A,
            added: BTreeSet::new(),
            moved_to_common: BTreeSet::new(),
        };
        assert!(report.is_unchanged());
        assert!(report
            .summary(&ClassNames::new("Cat", "Dog"))
            .contains("Nothing changed"));
    }
}
