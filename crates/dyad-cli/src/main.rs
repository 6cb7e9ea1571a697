//! Dyad CLI - train, classify and teach a two-class feature classifier.

mod commands;
mod config;
mod input;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "dyad")]
#[command(author, version, about = "Dyad - a two-class classifier that learns from feedback", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print reports as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new Dyad project
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    #[command(flatten)]
    Project(ProjectCommand),
}

/// Commands that run against an initialized project's knowledge base.
#[derive(Subcommand)]
enum ProjectCommand {
    /// Train the knowledge base from scratch
    Train {
        /// Display name of the first class
        #[arg(long)]
        name_a: String,

        /// Display name of the second class
        #[arg(long)]
        name_b: String,

        /// Feature of the first class (repeatable)
        #[arg(short = 'a', long = "feature-a")]
        features_a: Vec<String>,

        /// Feature of the second class (repeatable)
        #[arg(short = 'b', long = "feature-b")]
        features_b: Vec<String>,

        /// File with one feature of the first class per line
        #[arg(long)]
        file_a: Option<PathBuf>,

        /// File with one feature of the second class per line
        #[arg(long)]
        file_b: Option<PathBuf>,
    },

    /// Classify a feature list, then teach the result
    Classify {
        /// Features to classify (reads stdin when none are given)
        features: Vec<String>,

        /// File with one feature per line
        #[arg(short, long)]
        file: Option<PathBuf>,

        #[command(flatten)]
        feedback: FeedbackArgs,
    },

    /// Show the knowledge base
    Show,

    /// Show knowledge base statistics
    Stats,

    /// Forget everything
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Write the knowledge base to a snapshot file
    Export {
        /// Output file path
        output: PathBuf,
    },

    /// Replace the knowledge base with a snapshot file
    Import {
        /// Snapshot file path
        input: PathBuf,
    },
}

/// How to answer the prediction. Prompts when none is given.
#[derive(Args, Debug, Default)]
#[group(multiple = false)]
pub struct FeedbackArgs {
    /// The prediction is correct
    #[arg(long)]
    pub accept: bool,

    /// The prediction is wrong; the other class is correct
    #[arg(long)]
    pub reject: bool,

    /// Teach the features as this class (name, A or B)
    #[arg(short, long, value_name = "CLASS")]
    pub label: Option<String>,

    /// Do not learn from this classification
    #[arg(long)]
    pub skip: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Project(command) => run_in_project(command, cli.json),
    }
}

fn run_in_project(command: ProjectCommand, json: bool) -> Result<()> {
    let config = Config::load()?;
    if !config.display.color {
        colored::control::set_override(false);
    }

    match command {
        ProjectCommand::Train {
            name_a,
            name_b,
            features_a,
            features_b,
            file_a,
            file_b,
        } => {
            let raw_a = input::gather(&features_a, file_a.as_deref())?;
            let raw_b = input::gather(&features_b, file_b.as_deref())?;
            commands::train::run(&config, &name_a, &name_b, &raw_a, &raw_b, json)
        }
        ProjectCommand::Classify {
            features,
            file,
            feedback,
        } => commands::classify::run(&config, &features, file.as_deref(), &feedback, json),
        ProjectCommand::Show => commands::show::run(&config, json),
        ProjectCommand::Stats => commands::stats::run(&config, json),
        ProjectCommand::Reset { yes } => commands::reset::run(&config, yes),
        ProjectCommand::Export { output } => commands::transfer::export(&config, &output),
        ProjectCommand::Import { input } => commands::transfer::import(&config, &input, json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn classify_flags_parse_into_feedback() {
        let cli = Cli::try_parse_from(["dyad", "classify", "barks", "big", "--reject"]).unwrap();
        match cli.command {
            Commands::Project(ProjectCommand::Classify {
                features, feedback, ..
            }) => {
                assert_eq!(features, vec!["barks", "big"]);
                assert!(feedback.reject);
                assert!(!feedback.accept);
                assert!(feedback.label.is_none());
            }
            _ => panic!("expected classify"),
        }

        let cli = Cli::try_parse_from(["dyad", "classify", "meows", "-l", "cat"]).unwrap();
        match cli.command {
            Commands::Project(ProjectCommand::Classify { feedback, .. }) => {
                assert_eq!(feedback.label.as_deref(), Some("cat"));
            }
            _ => panic!("expected classify"),
        }
    }

    #[test]
    fn feedback_flags_are_exclusive() {
        assert!(Cli::try_parse_from(["dyad", "classify", "barks", "--accept", "--reject"]).is_err());
        assert!(Cli::try_parse_from(["dyad", "classify", "barks", "--skip", "-l", "dog"]).is_err());
    }

    #[test]
    fn init_is_not_a_project_command() {
        let cli = Cli::try_parse_from(["dyad", "init", "--path", "demo"]).unwrap();
        assert!(matches!(cli.command, Commands::Init { path: Some(_) }));
    }
}
