//! Feature normalization and duplicate detection.

use crate::types::Feature;
use serde::Serialize;
use std::collections::BTreeSet;

/// Outcome of normalizing a block of raw feature lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Normalized {
    /// Distinct normalized features.
    pub unique: BTreeSet<Feature>,
    /// Raw lines whose normalized form was already seen, in input order.
    pub duplicates: Vec<String>,
}

impl Normalized {
    pub fn is_empty(&self) -> bool {
        self.unique.is_empty()
    }
}

/// Normalize a newline-delimited block of features.
pub fn normalize(text: &str) -> Normalized {
    normalize_lines(text.lines())
}

/// Normalize a sequence of raw lines.
///
/// Blank lines are dropped. A line whose normalized form was already seen
/// is reported as a duplicate with its original spelling preserved.
pub fn normalize_lines<I, S>(lines: I) -> Normalized
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Normalized::default();
    for line in lines {
        let raw = line.as_ref();
        let Some(feature) = Feature::parse(raw) else {
            continue;
        };
        if out.unique.contains(&feature) {
            out.duplicates.push(raw.to_string());
        } else {
            out.unique.insert(feature);
        }
    }
    tracing::debug!(
        unique = out.unique.len(),
        duplicates = out.duplicates.len(),
        "normalized feature block"
    );
    out
}
