//! Initialize a new Dyad project.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::config::{Config, CONFIG_FILE, DATA_DIR};

pub fn run(path: Option<PathBuf>) -> Result<()> {
    let base_path = match path {
        Some(p) => p,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    println!("{} Initializing Dyad project...", "→".blue());

    // Create .dyad directory
    let data_dir = base_path.join(DATA_DIR);
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create {}", data_dir.display()))?;
    println!("  {} Created {}", "✓".green(), data_dir.display());

    // Create default config
    let config_path = base_path.join(CONFIG_FILE);
    if !config_path.exists() {
        Config::default().save(&config_path)?;
        println!("  {} Created {}", "✓".green(), config_path.display());
    } else {
        println!("  {} {} already exists", "•".yellow(), config_path.display());
    }

    // Keep the knowledge base out of version control
    let gitignore_path = data_dir.join(".gitignore");
    if !gitignore_path.exists() {
        std::fs::write(&gitignore_path, "knowledge.json\n")?;
        println!("  {} Created {}", "✓".green(), gitignore_path.display());
    }

    println!();
    println!("{} Dyad project initialized!", "✓".green().bold());
    println!();
    println!("Next steps:");
    println!(
        "  {} dyad train --name-a Cat --name-b Dog -a meows -b barks",
        "1.".blue()
    );
    println!("  {} dyad classify barks big", "2.".blue());
    println!("  {} dyad show", "3.".blue());

    Ok(())
}
