//! Forget everything.

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Write;

use super::open_session;
use crate::config::Config;

pub fn run(config: &Config, yes: bool) -> Result<()> {
    if !yes && !confirm()? {
        println!("{} Reset cancelled.", "•".yellow());
        return Ok(());
    }

    let mut session = open_session(config);
    session.reset()?;

    println!("{} System reset to its initial state.", "✓".green().bold());
    Ok(())
}

fn confirm() -> Result<bool> {
    print!(
        "{} This deletes the whole knowledge base. Continue? [y/N]: ",
        "!".yellow().bold()
    );
    std::io::stdout().flush().context("Failed to flush stdout")?;

    let mut reply = String::new();
    std::io::stdin()
        .read_line(&mut reply)
        .context("Failed to read answer")?;
    Ok(matches!(reply.trim().to_lowercase().as_str(), "y" | "yes"))
}
