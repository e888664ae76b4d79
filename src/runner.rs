// src/runner.rs
use std::path::PathBuf;

use tracing::info;

use crate::{
    config::options::AppOptions,
    error::Result,
    file::export_table,
    progress::Progress,
    scrape::{self, Collected},
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub file_written: PathBuf,
    pub headline: String,
    pub games: usize,
    pub matchups: usize,
    pub skipped: usize,
    pub incomplete: Vec<usize>,
}

/// Top-level runner: scrape, reshape, export.
///
/// A structural failure returns early and writes nothing; per-matchup
/// problems only shorten the table.
pub fn run(opts: &AppOptions, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let result = scrape::collect_lines(opts, progress.as_mut().map(|p| &mut **p as &mut dyn Progress))
        .and_then(|collected| write(opts, collected));

    if let Some(p) = progress.as_deref_mut() {
        if let Ok(summary) = &result {
            p.log(&format!("Wrote {} games to {}", summary.games, summary.file_written.display()));
        }
        p.finish();
    }
    result
}

fn write(opts: &AppOptions, collected: Collected) -> Result<RunSummary> {
    let path = export_table(&opts.export, &collected.table)?;
    info!("Data written to {}", path.display());

    Ok(RunSummary {
        file_written: path,
        headline: collected.headline,
        games: collected.table.len(),
        matchups: collected.matchups,
        skipped: collected.skipped.len(),
        incomplete: collected.table.incomplete,
    })
}
