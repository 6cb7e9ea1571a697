//! Train the knowledge base from scratch.

use anyhow::Result;
use colored::Colorize;

use super::{feature_list, open_session, print_json};
use crate::config::Config;

pub fn run(
    config: &Config,
    name_a: &str,
    name_b: &str,
    raw_a: &str,
    raw_b: &str,
    json: bool,
) -> Result<()> {
    let mut session = open_session(config);
    let report = session.train(name_a, name_b, raw_a, raw_b)?;

    if json {
        return print_json(&report);
    }

    for warning in report.warnings() {
        println!("{} {}", "!".yellow().bold(), warning);
    }

    let view = session.knowledge().view();
    println!("{} Initial training complete.", "✓".green().bold());
    println!();
    println!(
        "  {:<10} {}",
        view.names.a.white().bold(),
        feature_list(&view.features_a, "no unique features")
    );
    println!(
        "  {:<10} {}",
        view.names.b.white().bold(),
        feature_list(&view.features_b, "no unique features")
    );
    println!(
        "  {:<10} {}",
        "common".white().bold(),
        feature_list(&view.common, "none")
    );

    Ok(())
}
