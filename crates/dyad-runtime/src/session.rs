//! Session: the knowledge base plus its persistence and feedback loop.
//!
//! A session loads the stored snapshot when opened, keeps the latest
//! classification until feedback arrives, and saves after every change.
//! All mutation flows through the session; callers only get shared
//! references to the knowledge base for display.

use crate::store::{load_snapshot, save_snapshot, SnapshotStore};
use dyad_core::error::{Result, ValidationError};
use dyad_core::knowledge::KnowledgeBase;
use dyad_core::report::{ClassificationResult, FeedbackReport, TrainingReport};
use dyad_core::types::ClassLabel;
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

/// Where the knowledge base came from when the session opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOrigin {
    /// The store was empty.
    Fresh,
    /// A stored snapshot was restored.
    Restored,
    /// The store could not be read; started empty instead.
    Recovered(String),
}

/// One user's working state.
pub struct Session<S: SnapshotStore> {
    knowledge: KnowledgeBase,
    pending: Option<ClassificationResult>,
    store: S,
    origin: SessionOrigin,
}

impl<S: SnapshotStore> Session<S> {
    /// Open a session over `store`.
    ///
    /// A missing snapshot starts a fresh knowledge base. An unreadable one
    /// is logged and also starts fresh rather than failing.
    pub fn open(store: S) -> Self {
        let (knowledge, origin) = match store.load() {
            Ok(Some(snapshot)) => {
                let knowledge = KnowledgeBase::from_snapshot(&snapshot);
                info!(trained = knowledge.is_trained(), "restored knowledge base");
                (knowledge, SessionOrigin::Restored)
            }
            Ok(None) => (KnowledgeBase::new(), SessionOrigin::Fresh),
            Err(e) => {
                warn!(error = %e, "could not load snapshot; starting untrained");
                (KnowledgeBase::new(), SessionOrigin::Recovered(e.to_string()))
            }
        };
        Self {
            knowledge,
            pending: None,
            store,
            origin,
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn origin(&self) -> &SessionOrigin {
        &self.origin
    }

    /// The classification awaiting feedback, if any.
    pub fn pending(&self) -> Option<&ClassificationResult> {
        self.pending.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Train from scratch and save. Drops any pending classification.
    pub fn train(
        &mut self,
        name_a: &str,
        name_b: &str,
        raw_a: &str,
        raw_b: &str,
    ) -> Result<TrainingReport> {
        let report = self.knowledge.train(name_a, name_b, raw_a, raw_b)?;
        self.pending = None;
        self.save()?;
        Ok(report)
    }

    /// Classify and hold the result until feedback.
    ///
    /// A new classification replaces any result still awaiting feedback.
    pub fn classify(&mut self, raw: &str) -> Result<ClassificationResult> {
        let result = self.knowledge.classify(raw)?;
        self.pending = Some(result.clone());
        Ok(result)
    }

    /// Accept or reject the pending prediction, then save.
    pub fn confirm(&mut self, is_correct: bool) -> Result<FeedbackReport> {
        let result = self.take_pending()?;
        let report = self.knowledge.confirm(&result, is_correct);
        self.save()?;
        Ok(report)
    }

    /// Label the pending features explicitly, then save.
    pub fn self_label(&mut self, chosen: ClassLabel) -> Result<FeedbackReport> {
        let result = self.take_pending()?;
        let report = self.knowledge.self_label(&result, chosen);
        self.save()?;
        Ok(report)
    }

    /// Drop the pending classification without learning from it.
    pub fn discard_pending(&mut self) -> Option<ClassificationResult> {
        self.pending.take()
    }

    fn take_pending(&mut self) -> Result<ClassificationResult> {
        self.pending
            .take()
            .ok_or_else(|| ValidationError::NoPendingResult.into())
    }

    /// Forget everything, in memory and in the store.
    pub fn reset(&mut self) -> Result<()> {
        self.knowledge.reset();
        self.pending = None;
        self.store.clear()
    }

    /// Write the current knowledge base to the store.
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.knowledge.to_snapshot())
    }

    /// Write the current knowledge base to an explicit file.
    pub fn export_to(&self, path: &Path) -> Result<()> {
        save_snapshot(path, &self.knowledge.to_snapshot())
    }

    /// Replace the knowledge base with a snapshot file, then save.
    ///
    /// Unlike opening a session, a malformed file here is an error: the
    /// caller asked for that file specifically.
    pub fn import_from(&mut self, path: &Path) -> Result<()> {
        let snapshot = load_snapshot(path)?;
        self.knowledge = KnowledgeBase::from_snapshot(&snapshot);
        self.pending = None;
        info!(path = %path.display(), trained = self.knowledge.is_trained(), "imported snapshot");
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use dyad_core::error::DyadError;

    fn trained() -> Session<MemoryStore> {
        let mut session = Session::open(MemoryStore::new());
        session
            .train("Cat", "Dog", "furry\nmeows\nwhiskers", "barks\nwags tail\nfurry")
            .unwrap();
        session
    }

    #[test]
    fn open_on_empty_store_is_fresh() {
        let session = Session::open(MemoryStore::new());
        assert_eq!(session.origin(), &SessionOrigin::Fresh);
        assert!(!session.knowledge().is_trained());
    }

    #[test]
    fn train_saves() {
        let session = trained();
        assert_eq!(session.store().saves(), 1);
        assert!(session.store().snapshot().unwrap().trained);
    }

    #[test]
    fn classify_does_not_save() {
        let mut session = trained();
        session.classify("barks").unwrap();
        assert_eq!(session.store().saves(), 1);
        assert!(session.pending().is_some());
    }

    #[test]
    fn feedback_consumes_pending_and_saves() {
        let mut session = trained();
        session.classify("barks\nbig").unwrap();
        let report = session.confirm(false).unwrap();
        assert_eq!(report.target, ClassLabel::A);
        assert!(session.pending().is_none());
        assert_eq!(session.store().saves(), 2);

        let stored = session.store().snapshot().unwrap();
        assert!(stored.features_a.contains(&"big".to_string()));
        assert!(stored.common_features.contains(&"barks".to_string()));
    }

    #[test]
    fn feedback_without_pending_is_rejected() {
        let mut session = trained();
        let err = session.confirm(true).unwrap_err();
        assert_eq!(err, DyadError::Validation(ValidationError::NoPendingResult));
        let err = session.self_label(ClassLabel::B).unwrap_err();
        assert_eq!(err, DyadError::Validation(ValidationError::NoPendingResult));
        assert_eq!(session.store().saves(), 1);
    }

    #[test]
    fn failed_classification_keeps_previous_pending() {
        let mut session = trained();
        session.classify("barks").unwrap();
        assert!(session.classify("   ").is_err());
        assert!(session.pending().is_some());
    }

    #[test]
    fn reset_clears_store_and_pending() {
        let mut session = trained();
        session.classify("barks").unwrap();
        session.reset().unwrap();
        assert!(!session.knowledge().is_trained());
        assert!(session.pending().is_none());
        assert!(session.store().snapshot().is_none());
    }
}
