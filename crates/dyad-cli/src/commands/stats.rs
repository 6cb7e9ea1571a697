//! Show knowledge base statistics.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use super::{open_session, print_json};
use crate::config::Config;

#[derive(Serialize)]
struct StatsOutput<'a> {
    trained: bool,
    name_a: &'a str,
    name_b: &'a str,
    features_a: usize,
    features_b: usize,
    common: usize,
    total: usize,
}

pub fn run(config: &Config, json: bool) -> Result<()> {
    let session = open_session(config);
    let kb = session.knowledge();
    let stats = kb.stats();

    if json {
        return print_json(&StatsOutput {
            trained: kb.is_trained(),
            name_a: &kb.names().a,
            name_b: &kb.names().b,
            features_a: stats.features_a,
            features_b: stats.features_b,
            common: stats.common,
            total: stats.total(),
        });
    }

    println!("{}", "Dyad Statistics".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();

    if !kb.is_trained() {
        println!("  Trained:           {}", "no".yellow());
        println!();
        println!("{}", "═".repeat(40).dimmed());
        return Ok(());
    }

    let share = |n: usize| {
        if stats.total() > 0 {
            n as f64 / stats.total() as f64 * 100.0
        } else {
            0.0
        }
    };

    println!("{}", "Features".blue().bold());
    println!(
        "  {:<18} {} ({:.1}%)",
        format!("{}:", kb.names().a),
        stats.features_a.to_string().cyan(),
        share(stats.features_a)
    );
    println!(
        "  {:<18} {} ({:.1}%)",
        format!("{}:", kb.names().b),
        stats.features_b.to_string().cyan(),
        share(stats.features_b)
    );
    println!(
        "  {:<18} {} ({:.1}%)",
        "Common:",
        stats.common.to_string().cyan(),
        share(stats.common)
    );
    println!("  {:<18} {}", "Total:", stats.total().to_string().cyan());
    println!();
    println!(
        "  Stored at:         {}",
        session.store().path().display().to_string().dimmed()
    );
    println!();
    println!("{}", "═".repeat(40).dimmed());

    Ok(())
}
