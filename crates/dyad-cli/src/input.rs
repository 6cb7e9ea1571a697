//! Turning command-line input into feature blocks and feedback answers.

use anyhow::{Context, Result};
use dyad::prelude::*;
use std::io::Read;
use std::path::Path;

/// Join inline features and an optional file into one newline-delimited
/// block.
pub fn gather(inline: &[String], file: Option<&Path>) -> Result<String> {
    let mut block = inline.join("\n");
    if let Some(path) = file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read features: {}", path.display()))?;
        if !block.is_empty() {
            block.push('\n');
        }
        block.push_str(&content);
    }
    Ok(block)
}

/// Read the whole of stdin.
pub fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read features from stdin")?;
    Ok(buf)
}

/// A reply to "is this prediction right?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Accept,
    Reject,
    Label(ClassLabel),
    Skip,
}

/// Interpret a typed reply. `None` means the reply was not understood.
pub fn parse_answer(reply: &str, names: &ClassNames) -> Option<Answer> {
    match reply.trim().to_lowercase().as_str() {
        "" | "s" | "skip" => Some(Answer::Skip),
        "y" | "yes" => Some(Answer::Accept),
        "n" | "no" => Some(Answer::Reject),
        other => names.resolve(other).map(Answer::Label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gather_joins_inline_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("features.txt");
        std::fs::write(&path, "whiskers\nmeows\n").unwrap();

        let block = gather(&["furry".to_string()], Some(&path)).unwrap();
        assert_eq!(block, "furry\nwhiskers\nmeows\n");

        let only_inline = gather(&["a".to_string(), "b".to_string()], None).unwrap();
        assert_eq!(only_inline, "a\nb");
    }

    #[test]
    fn gather_reports_missing_file() {
        let err = gather(&[], Some(Path::new("/definitely/not/here.txt"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read features"));
    }

    #[test]
    fn answers_accept_names_and_shortcuts() {
        let names = ClassNames::new("Cat", "Dog");
        assert_eq!(parse_answer("Y", &names), Some(Answer::Accept));
        assert_eq!(parse_answer("no", &names), Some(Answer::Reject));
        assert_eq!(parse_answer("", &names), Some(Answer::Skip));
        assert_eq!(parse_answer("dog", &names), Some(Answer::Label(ClassLabel::B)));
        assert_eq!(parse_answer("a", &names), Some(Answer::Label(ClassLabel::A)));
        assert_eq!(parse_answer("horse", &names), None);
    }
}
