//! Export and import knowledge base snapshots.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use super::{open_session, print_json};
use crate::config::Config;

pub fn export(config: &Config, output: &Path) -> Result<()> {
    let session = open_session(config);
    if !session.knowledge().is_trained() {
        println!(
            "{} The knowledge base is empty; exporting an untrained snapshot.",
            "•".yellow()
        );
    }

    session
        .export_to(output)
        .with_context(|| format!("Failed to export to {}", output.display()))?;

    let stats = session.knowledge().stats();
    println!(
        "{} Exported {} features to {}",
        "✓".green().bold(),
        stats.total().to_string().cyan(),
        output.display()
    );
    Ok(())
}

pub fn import(config: &Config, input: &Path, json: bool) -> Result<()> {
    let mut session = open_session(config);
    session
        .import_from(input)
        .with_context(|| format!("Failed to import {}", input.display()))?;

    let kb = session.knowledge();
    if json {
        return print_json(&kb.view());
    }

    if kb.is_trained() {
        println!(
            "{} Imported knowledge base: {} / {}",
            "✓".green().bold(),
            kb.names().a.cyan(),
            kb.names().b.cyan()
        );
        println!("  Features: {}", kb.stats().total().to_string().cyan());
    } else {
        println!(
            "{} Imported an untrained snapshot; the knowledge base is now empty.",
            "•".yellow()
        );
    }
    Ok(())
}
