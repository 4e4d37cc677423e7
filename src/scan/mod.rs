mod document;
mod window;

pub use window::ContextWindow;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use document::Document;
use strum::Display;

/// Outcome of the lookup, printed verbatim on standard output.
#[derive(Display, Copy, Clone, Debug, PartialEq, Eq)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Found,
    NotFound,
}

pub struct ScanConfig {
    pub bundle: PathBuf,
    pub snippet: PathBuf,
    pub needle: String,
    pub window: ContextWindow,
}

/// Runs the whole scan: load the bundle, look for the needle, report the
/// status and, on a hit, persist the surrounding context.
pub fn run(config: &ScanConfig) -> Result<MatchStatus> {
    let document = Document::load(&config.bundle)?;

    match document.find(&config.needle) {
        Some(offset) => {
            report(MatchStatus::Found);
            persist(document.window(offset, config.window), &config.snippet)?;
            Ok(MatchStatus::Found)
        }
        None => {
            report(MatchStatus::NotFound);
            Ok(MatchStatus::NotFound)
        }
    }
}

fn report(status: MatchStatus) {
    println!("{status}");
}

fn persist(snippet: &str, path: &Path) -> Result<()> {
    fs::write(path, snippet)
        .with_context(|| format!("failed to write snippet to {}", path.display()))
}
