//! CLI command implementations.

pub mod classify;
pub mod init;
pub mod reset;
pub mod show;
pub mod stats;
pub mod train;
pub mod transfer;

use anyhow::Result;
use colored::Colorize;
use dyad::prelude::*;
use serde::Serialize;

use crate::config::Config;

/// Open the project's session, reporting a recovered snapshot.
pub fn open_session(config: &Config) -> Session<JsonFileStore> {
    let session = Session::open(JsonFileStore::new(config.store_path()));
    if let SessionOrigin::Recovered(reason) = session.origin() {
        eprintln!(
            "{} Could not read {} ({}); starting with an empty knowledge base.",
            "!".yellow().bold(),
            config.store_path().display(),
            reason
        );
    }
    session
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Comma-separated features, or a placeholder when empty.
pub fn feature_list(features: &[String], empty: &str) -> String {
    if features.is_empty() {
        empty.dimmed().to_string()
    } else {
        features.join(", ")
    }
}
