//! Serializable snapshot of the knowledge base.
//!
//! The record uses the camelCase field names of the stored format. Missing
//! fields fall back to empty values so partial or older files still load.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Persisted form of a [`KnowledgeBase`](crate::knowledge::KnowledgeBase).
///
/// Feature order is not significant; set membership is what round-trips.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub name_a: String,
    pub name_b: String,
    pub features_a: Vec<String>,
    pub features_b: Vec<String>,
    pub common_features: Vec<String>,
    pub trained: bool,
}

impl Snapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
