//! Show the knowledge base.

use anyhow::Result;
use colored::Colorize;

use super::{feature_list, open_session, print_json};
use crate::config::Config;

pub fn run(config: &Config, json: bool) -> Result<()> {
    let session = open_session(config);
    let view = session.knowledge().view();

    if json {
        return print_json(&view);
    }

    if !view.trained {
        println!(
            "{} The knowledge base is empty. Run {} first.",
            "•".yellow(),
            "dyad train".cyan()
        );
        return Ok(());
    }

    println!("{}", "Knowledge Base".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();
    println!("{} {}", "Unique to".blue().bold(), view.names.a.blue().bold());
    println!("  {}", feature_list(&view.features_a, "no unique features"));
    println!();
    println!("{} {}", "Unique to".blue().bold(), view.names.b.blue().bold());
    println!("  {}", feature_list(&view.features_b, "no unique features"));
    println!();
    println!("{}", "Common".blue().bold());
    println!("  {}", feature_list(&view.common, "none"));
    println!();
    println!("{}", "═".repeat(40).dimmed());

    Ok(())
}
