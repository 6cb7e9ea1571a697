//! Shared types used across all Dyad crates.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// A normalized feature: trimmed and lower-cased, never empty.
///
/// Two raw strings describe the same feature iff their normalized forms
/// are equal, so `" Furry "` and `"furry"` are one feature.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feature(String);

impl Feature {
    /// Normalize a raw line. Returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Feature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Feature {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// One of the two classes the knowledge base distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClassLabel {
    A,
    B,
}

impl ClassLabel {
    pub const ALL: [ClassLabel; 2] = [ClassLabel::A, ClassLabel::B];

    /// The only other class. With exactly two classes a rejected
    /// prediction always resolves to this one.
    pub fn other(self) -> Self {
        match self {
            ClassLabel::A => ClassLabel::B,
            ClassLabel::B => ClassLabel::A,
        }
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassLabel::A => write!(f, "A"),
            ClassLabel::B => write!(f, "B"),
        }
    }
}

impl FromStr for ClassLabel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "1" => Ok(ClassLabel::A),
            "b" | "2" => Ok(ClassLabel::B),
            other => Err(format!("unknown class label: {} (expected A or B)", other)),
        }
    }
}

/// Display names bound to the two class labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassNames {
    pub a: String,
    pub b: String,
}

impl ClassNames {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    pub fn get(&self, label: ClassLabel) -> &str {
        match label {
            ClassLabel::A => &self.a,
            ClassLabel::B => &self.b,
        }
    }

    /// Resolve user input to a label: a display name (case-insensitive)
    /// or one of the label spellings accepted by [`ClassLabel::from_str`].
    ///
    /// Names win over label spellings, and class A wins when both names
    /// are equal.
    pub fn resolve(&self, input: &str) -> Option<ClassLabel> {
        let wanted = input.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        ClassLabel::ALL
            .into_iter()
            .find(|label| self.get(*label).to_lowercase() == wanted)
            .or_else(|| wanted.parse().ok())
    }

    pub fn is_complete(&self) -> bool {
        !self.a.trim().is_empty() && !self.b.trim().is_empty()
    }
}

/// Why a prediction was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    /// One class matched strictly more features.
    MoreMatches,
    /// Equal, non-zero scores; the first class wins.
    TieDefaultFirst,
    /// Nothing matched either class; the first class is the default.
    NoMatchesDefault,
}

impl ReasonCode {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            ReasonCode::MoreMatches => "MORE_MATCHES",
            ReasonCode::TieDefaultFirst => "TIE_DEFAULT_FIRST",
            ReasonCode::NoMatchesDefault => "NO_MATCHES_DEFAULT",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            ReasonCode::MoreMatches => "more matching features",
            ReasonCode::TieDefaultFirst => "equal number of matches, first class chosen",
            ReasonCode::NoMatchesDefault => "no matches, first class chosen by default",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_parse_trims_and_lowercases() {
        let f = Feature::parse("  Wags Tail \t").unwrap();
        assert_eq!(f.as_str(), "wags tail");
        assert!(Feature::parse("   ").is_none());
        assert!(Feature::parse("").is_none());
    }

    #[test]
    fn other_is_an_involution() {
        for label in ClassLabel::ALL {
            assert_ne!(label.other(), label);
            assert_eq!(label.other().other(), label);
        }
    }

    #[test]
    fn resolve_prefers_names_then_labels() {
        let names = ClassNames::new("Cat", "Dog");
        assert_eq!(names.resolve("dog"), Some(ClassLabel::B));
        assert_eq!(names.resolve(" CAT "), Some(ClassLabel::A));
        assert_eq!(names.resolve("b"), Some(ClassLabel::B));
        assert_eq!(names.resolve("horse"), None);
        assert_eq!(names.resolve(""), None);

        // A class literally named "B" is still class A.
        let tricky = ClassNames::new("B", "A");
        assert_eq!(tricky.resolve("b"), Some(ClassLabel::A));
    }

    #[test]
    fn reason_codes_serialize_as_screaming_snake() {
        let json = serde_json::to_string(&ReasonCode::TieDefaultFirst).unwrap();
        assert_eq!(json, "\"TIE_DEFAULT_FIRST\"");
        assert_eq!(ReasonCode::NoMatchesDefault.to_string(), "NO_MATCHES_DEFAULT");
    }
}
