//! Classify a feature list and learn from the answer.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use dyad::prelude::*;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::Path;

use super::{open_session, print_json};
use crate::config::Config;
use crate::input::{self, Answer};
use crate::FeedbackArgs;

#[derive(Serialize)]
struct ClassifyOutput<'a> {
    predicted_name: &'a str,
    result: &'a ClassificationResult,
    feedback: Option<FeedbackReport>,
}

pub fn run(
    config: &Config,
    features: &[String],
    file: Option<&Path>,
    feedback: &FeedbackArgs,
    json: bool,
) -> Result<()> {
    let from_stdin = features.is_empty() && file.is_none();
    let raw = if from_stdin {
        input::read_stdin()?
    } else {
        input::gather(features, file)?
    };

    let mut session = open_session(config);
    if !session.knowledge().is_trained() {
        bail!("No knowledge base found. Run {} first.", "dyad train".cyan());
    }

    let result = session.classify(&raw)?;
    let names = session.knowledge().names().clone();
    let predicted_name = names.get(result.predicted).to_string();

    if !json {
        print_result(config, &result, &names);
    }

    let can_prompt = !(json || from_stdin);
    let answer = match preset_answer(feedback, &names, can_prompt)? {
        Some(answer) => answer,
        None => prompt(&predicted_name, &names)?,
    };
    if from_stdin && !json && answer == Answer::Skip && !feedback.skip {
        println!(
            "{} Features came from stdin; pass {} or {} to teach this result.",
            "•".yellow(),
            "--accept".cyan(),
            "--label <CLASS>".cyan()
        );
    }

    let report = apply(&mut session, answer)?;

    if json {
        return print_json(&ClassifyOutput {
            predicted_name: &predicted_name,
            result: &result,
            feedback: report,
        });
    }

    match report {
        Some(report) => {
            println!();
            println!("{} {}", "✓".green().bold(), report.summary(&names));
        }
        None => println!("{} Nothing learned from this classification.", "•".yellow()),
    }

    Ok(())
}

fn print_result(config: &Config, result: &ClassificationResult, names: &ClassNames) {
    if let Some(warning) = result.duplicate_warning() {
        println!("{} {}", "!".yellow().bold(), warning);
    }

    println!(
        "{} This is {}",
        "→".blue(),
        names.get(result.predicted).white().bold()
    );
    println!(
        "  Reason: {} {}",
        result.reason.describe(),
        format!("({})", result.reason).dimmed()
    );

    if config.display.show_analysis {
        println!();
        for line in result.analysis(names).lines() {
            println!("  {}", line.dimmed());
        }
    }
}

/// The answer to use without asking. `None` means prompt the user.
///
/// Without a flag, a run that cannot prompt skips learning.
fn preset_answer(
    feedback: &FeedbackArgs,
    names: &ClassNames,
    can_prompt: bool,
) -> Result<Option<Answer>> {
    match requested_answer(feedback, names)? {
        Some(answer) => Ok(Some(answer)),
        None if can_prompt => Ok(None),
        None => Ok(Some(Answer::Skip)),
    }
}

/// Feed the answer back into the session.
fn apply<S: SnapshotStore>(
    session: &mut Session<S>,
    answer: Answer,
) -> Result<Option<FeedbackReport>> {
    let report = match answer {
        Answer::Accept => Some(session.confirm(true)?),
        Answer::Reject => Some(session.confirm(false)?),
        Answer::Label(label) => Some(session.self_label(label)?),
        Answer::Skip => {
            session.discard_pending();
            None
        }
    };
    Ok(report)
}

/// The answer given by flags, if any.
fn requested_answer(feedback: &FeedbackArgs, names: &ClassNames) -> Result<Option<Answer>> {
    if feedback.accept {
        return Ok(Some(Answer::Accept));
    }
    if feedback.reject {
        return Ok(Some(Answer::Reject));
    }
    if feedback.skip {
        return Ok(Some(Answer::Skip));
    }
    match &feedback.label {
        Some(class) => match names.resolve(class) {
            Some(label) => Ok(Some(Answer::Label(label))),
            None => bail!(
                "Unknown class: {} (expected {}, {}, A or B)",
                class,
                names.a,
                names.b
            ),
        },
        None => Ok(None),
    }
}

fn prompt(predicted_name: &str, names: &ClassNames) -> Result<Answer> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!();
        print!(
            "Is it {}? [{}]es / [{}]o / class name to label / Enter to skip: ",
            predicted_name.white().bold(),
            "y".cyan(),
            "n".cyan()
        );
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let reply = match lines.next() {
            Some(line) => line.context("Failed to read answer")?,
            None => return Ok(Answer::Skip),
        };
        match input::parse_answer(&reply, names) {
            Some(answer) => return Ok(answer),
            None => println!(
                "{} Answer y, n, {}, {} or press Enter.",
                "!".yellow().bold(),
                names.a,
                names.b
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> ClassNames {
        ClassNames::new("Cat", "Dog")
    }

    fn flags() -> FeedbackArgs {
        FeedbackArgs::default()
    }

    fn classified(raw: &str) -> Session<MemoryStore> {
        let mut session = Session::open(MemoryStore::new());
        session
            .train("Cat", "Dog", "furry\nmeows\nwhiskers", "barks\nwags tail\nfurry")
            .unwrap();
        session.classify(raw).unwrap();
        session
    }

    #[test]
    fn flags_map_to_answers() {
        let names = names();
        let accept = FeedbackArgs { accept: true, ..flags() };
        let reject = FeedbackArgs { reject: true, ..flags() };
        let skip = FeedbackArgs { skip: true, ..flags() };

        assert_eq!(requested_answer(&accept, &names).unwrap(), Some(Answer::Accept));
        assert_eq!(requested_answer(&reject, &names).unwrap(), Some(Answer::Reject));
        assert_eq!(requested_answer(&skip, &names).unwrap(), Some(Answer::Skip));
        assert_eq!(requested_answer(&flags(), &names).unwrap(), None);
    }

    #[test]
    fn label_flag_resolves_class_names() {
        let names = names();
        let dog = FeedbackArgs {
            label: Some("dog".into()),
            ..flags()
        };
        let first = FeedbackArgs {
            label: Some("A".into()),
            ..flags()
        };
        assert_eq!(
            requested_answer(&dog, &names).unwrap(),
            Some(Answer::Label(ClassLabel::B))
        );
        assert_eq!(
            requested_answer(&first, &names).unwrap(),
            Some(Answer::Label(ClassLabel::A))
        );
    }

    #[test]
    fn unknown_label_is_an_error() {
        let horse = FeedbackArgs {
            label: Some("horse".into()),
            ..flags()
        };
        let err = requested_answer(&horse, &names()).unwrap_err();
        assert!(err.to_string().contains("Unknown class: horse"));
    }

    #[test]
    fn no_flag_prompts_only_when_possible() {
        let names = names();
        assert_eq!(preset_answer(&flags(), &names, true).unwrap(), None);
        assert_eq!(
            preset_answer(&flags(), &names, false).unwrap(),
            Some(Answer::Skip)
        );

        let accept = FeedbackArgs { accept: true, ..flags() };
        assert_eq!(
            preset_answer(&accept, &names, false).unwrap(),
            Some(Answer::Accept)
        );
    }

    #[test]
    fn accept_reinforces_the_prediction() {
        let mut session = classified("barks\nbig");
        let report = apply(&mut session, Answer::Accept).unwrap().unwrap();

        assert_eq!(report.kind, FeedbackKind::Confirmed);
        assert_eq!(report.target, ClassLabel::B);
        assert!(session.knowledge().features(ClassLabel::B).contains("big"));
    }

    #[test]
    fn reject_reinforces_the_other_class() {
        let mut session = classified("barks\nbig");
        let report = apply(&mut session, Answer::Reject).unwrap().unwrap();

        assert_eq!(report.kind, FeedbackKind::Corrected);
        assert_eq!(report.target, ClassLabel::A);
        assert!(session.knowledge().features(ClassLabel::A).contains("big"));
        assert!(session.knowledge().common_features().contains("barks"));
        assert!(session.pending().is_none());
    }

    #[test]
    fn label_reinforces_the_named_class() {
        let mut session = classified("scales");
        let report = apply(&mut session, Answer::Label(ClassLabel::B))
            .unwrap()
            .unwrap();

        assert_eq!(report.kind, FeedbackKind::SelfLabeled);
        assert!(session.knowledge().features(ClassLabel::B).contains("scales"));
    }

    #[test]
    fn skip_learns_nothing() {
        let mut session = classified("scales");
        let saves = session.store().saves();

        assert!(apply(&mut session, Answer::Skip).unwrap().is_none());
        assert!(session.pending().is_none());
        assert!(!session.knowledge().knows("scales"));
        assert_eq!(session.store().saves(), saves);
    }
}
