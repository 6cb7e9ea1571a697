//! The knowledge base: three disjoint feature sets and the rules that
//! grow them.
//!
//! `train` builds the sets from scratch, `classify` reads them, and all
//! feedback funnels through [`KnowledgeBase::reinforce`], the only mutator
//! outside of training. Every path keeps the sets pairwise disjoint: a
//! feature is exclusive to A, exclusive to B, common, or unknown.

use crate::error::{DyadError, Result, ValidationError};
use crate::normalize::{normalize, normalize_lines};
use crate::report::{
    ClassificationResult, FeedbackKind, FeedbackReport, MatchCounts, TrainingReport,
};
use crate::snapshot::Snapshot;
use crate::types::{ClassLabel, ClassNames, Feature, ReasonCode};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Features touched by one reinforcement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reinforcement {
    /// Previously unknown features now exclusive to the correct class.
    pub added: BTreeSet<Feature>,
    /// Features taken from the other class and promoted to common.
    pub moved_to_common: BTreeSet<Feature>,
}

/// Sorted, display-ready copy of the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgeView {
    pub names: ClassNames,
    pub features_a: Vec<String>,
    pub features_b: Vec<String>,
    pub common: Vec<String>,
    pub trained: bool,
}

/// Set sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KnowledgeStats {
    pub features_a: usize,
    pub features_b: usize,
    pub common: usize,
}

impl KnowledgeStats {
    pub fn total(&self) -> usize {
        self.features_a + self.features_b + self.common
    }
}

/// Classification state for exactly two classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    names: ClassNames,
    features_a: BTreeSet<Feature>,
    features_b: BTreeSet<Feature>,
    common: BTreeSet<Feature>,
    trained: bool,
}

impl KnowledgeBase {
    /// An empty, untrained knowledge base.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_trained(&self) -> bool {
        self.trained
    }

    pub fn names(&self) -> &ClassNames {
        &self.names
    }

    /// Features exclusive to `label`.
    pub fn features(&self, label: ClassLabel) -> &BTreeSet<Feature> {
        match label {
            ClassLabel::A => &self.features_a,
            ClassLabel::B => &self.features_b,
        }
    }

    pub fn common_features(&self) -> &BTreeSet<Feature> {
        &self.common
    }

    fn features_mut(&mut self, label: ClassLabel) -> &mut BTreeSet<Feature> {
        match label {
            ClassLabel::A => &mut self.features_a,
            ClassLabel::B => &mut self.features_b,
        }
    }

    /// Whether a feature is in any of the three sets.
    pub fn knows(&self, feature: &str) -> bool {
        self.features_a.contains(feature)
            || self.features_b.contains(feature)
            || self.common.contains(feature)
    }

    /// Replace the whole knowledge base with two labelled feature blocks.
    ///
    /// Features listed for both classes become common. Duplicate lines and
    /// discovered common features are reported, not rejected.
    pub fn train(
        &mut self,
        name_a: &str,
        name_b: &str,
        raw_a: &str,
        raw_b: &str,
    ) -> Result<TrainingReport> {
        let names = ClassNames::new(name_a.trim(), name_b.trim());
        if !names.is_complete() {
            return Err(DyadError::Validation(ValidationError::MissingClassNames));
        }
        if raw_a.trim().is_empty() && raw_b.trim().is_empty() {
            return Err(DyadError::Validation(ValidationError::NoTrainingFeatures));
        }

        let side_a = normalize(raw_a);
        let side_b = normalize(raw_b);

        let common: BTreeSet<Feature> =
            side_a.unique.intersection(&side_b.unique).cloned().collect();
        let features_a = side_a.unique.difference(&common).cloned().collect();
        let features_b = side_b.unique.difference(&common).cloned().collect();

        *self = Self {
            names: names.clone(),
            features_a,
            features_b,
            common: common.clone(),
            trained: true,
        };

        info!(
            a = %self.names.a,
            b = %self.names.b,
            features_a = self.features_a.len(),
            features_b = self.features_b.len(),
            common = self.common.len(),
            "trained knowledge base"
        );

        Ok(TrainingReport {
            names,
            duplicates_a: side_a.duplicates,
            duplicates_b: side_b.duplicates,
            common,
        })
    }

    /// Predict the class of a block of unknown features.
    ///
    /// Common features count toward both scores. Ties and empty overlap fall
    /// back to class A. Never mutates the knowledge base.
    pub fn classify(&self, raw: &str) -> Result<ClassificationResult> {
        self.classify_lines(raw.lines())
    }

    /// [`classify`](Self::classify) over pre-split lines.
    pub fn classify_lines<I, S>(&self, lines: I) -> Result<ClassificationResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !self.trained {
            return Err(DyadError::Validation(ValidationError::NotTrained));
        }
        let input = normalize_lines(lines);
        if input.is_empty() {
            return Err(DyadError::Validation(ValidationError::EmptyClassificationInput));
        }

        let count = |set: &BTreeSet<Feature>| input.unique.intersection(set).count();
        let matches = MatchCounts {
            a: count(&self.features_a),
            b: count(&self.features_b),
            common: count(&self.common),
        };
        let score_a = matches.score(ClassLabel::A);
        let score_b = matches.score(ClassLabel::B);

        let (predicted, reason) = if score_a > score_b {
            (ClassLabel::A, ReasonCode::MoreMatches)
        } else if score_b > score_a {
            (ClassLabel::B, ReasonCode::MoreMatches)
        } else if score_a > 0 {
            (ClassLabel::A, ReasonCode::TieDefaultFirst)
        } else {
            (ClassLabel::A, ReasonCode::NoMatchesDefault)
        };

        debug!(score_a, score_b, ?predicted, %reason, "classified feature set");

        Ok(ClassificationResult {
            predicted,
            reason,
            score_a,
            score_b,
            matches,
            features: input.unique,
            duplicates: input.duplicates,
        })
    }

    /// Apply a yes/no verdict on a prediction.
    ///
    /// A rejection means the other class is correct. Both verdicts teach.
    pub fn confirm(&mut self, result: &ClassificationResult, is_correct: bool) -> FeedbackReport {
        let (kind, target) = if is_correct {
            (FeedbackKind::Confirmed, result.predicted)
        } else {
            (FeedbackKind::Corrected, result.predicted.other())
        };
        self.feedback(kind, target, &result.features)
    }

    /// Apply an explicit class chosen by the user, regardless of the
    /// prediction.
    pub fn self_label(&mut self, result: &ClassificationResult, chosen: ClassLabel) -> FeedbackReport {
        self.feedback(FeedbackKind::SelfLabeled, chosen, &result.features)
    }

    fn feedback(
        &mut self,
        kind: FeedbackKind,
        target: ClassLabel,
        features: &BTreeSet<Feature>,
    ) -> FeedbackReport {
        let Reinforcement {
            added,
            moved_to_common,
        } = self.reinforce(target, features);
        FeedbackReport {
            kind,
            target,
            added,
            moved_to_common,
        }
    }

    /// Teach that `features` describe `correct`.
    ///
    /// Features already exclusive to `correct` or already common are left
    /// alone. A feature exclusive to the other class is promoted to common.
    /// Anything else becomes exclusive to `correct`.
    pub fn reinforce(&mut self, correct: ClassLabel, features: &BTreeSet<Feature>) -> Reinforcement {
        let mut outcome = Reinforcement::default();
        for feature in features {
            if self.features(correct).contains(feature) || self.common.contains(feature) {
                continue;
            }
            if self.features_mut(correct.other()).remove(feature) {
                self.common.insert(feature.clone());
                outcome.moved_to_common.insert(feature.clone());
            } else {
                self.features_mut(correct).insert(feature.clone());
                outcome.added.insert(feature.clone());
            }
        }
        info!(
            class = %self.names.get(correct),
            added = outcome.added.len(),
            moved_to_common = outcome.moved_to_common.len(),
            "reinforced knowledge base"
        );
        outcome
    }

    /// Forget everything.
    pub fn reset(&mut self) {
        *self = Self::default();
        info!("knowledge base reset");
    }

    /// Sorted copy for display.
    pub fn view(&self) -> KnowledgeView {
        let sorted = |set: &BTreeSet<Feature>| -> Vec<String> {
            set.iter().map(|f| f.as_str().to_string()).collect()
        };
        KnowledgeView {
            names: self.names.clone(),
            features_a: sorted(&self.features_a),
            features_b: sorted(&self.features_b),
            common: sorted(&self.common),
            trained: self.trained,
        }
    }

    pub fn stats(&self) -> KnowledgeStats {
        KnowledgeStats {
            features_a: self.features_a.len(),
            features_b: self.features_b.len(),
            common: self.common.len(),
        }
    }

    /// True when no feature sits in two sets at once.
    pub fn is_disjoint(&self) -> bool {
        self.features_a.is_disjoint(&self.features_b)
            && self.features_a.is_disjoint(&self.common)
            && self.features_b.is_disjoint(&self.common)
    }

    pub fn to_snapshot(&self) -> Snapshot {
        let list = |set: &BTreeSet<Feature>| -> Vec<String> {
            set.iter().map(|f| f.as_str().to_string()).collect()
        };
        Snapshot {
            name_a: self.names.a.clone(),
            name_b: self.names.b.clone(),
            features_a: list(&self.features_a),
            features_b: list(&self.features_b),
            common_features: list(&self.common),
            trained: self.trained,
        }
    }

    /// Rebuild from a snapshot.
    ///
    /// An untrained or incomplete snapshot yields an empty knowledge base.
    /// Stored strings are normalized again, and any feature found in more
    /// than one set is kept only as common so the result is disjoint.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        if !snapshot.trained {
            return Self::default();
        }
        let names = ClassNames::new(snapshot.name_a.trim(), snapshot.name_b.trim());
        if !names.is_complete() {
            warn!("snapshot is marked trained but lacks class names; starting untrained");
            return Self::default();
        }

        let a = normalize_lines(&snapshot.features_a).unique;
        let b = normalize_lines(&snapshot.features_b).unique;
        let mut common = normalize_lines(&snapshot.common_features).unique;
        common.extend(a.intersection(&b).cloned());

        let features_a: BTreeSet<Feature> = a.difference(&common).cloned().collect();
        let features_b: BTreeSet<Feature> = b.difference(&common).cloned().collect();

        if features_a.is_empty() && features_b.is_empty() && common.is_empty() {
            warn!("snapshot is marked trained but holds no features; starting untrained");
            return Self::default();
        }

        Self {
            names,
            features_a,
            features_b,
            common,
            trained: true,
        }
    }
}
