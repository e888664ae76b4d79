// src/scrape.rs
use std::fs;

use tracing::info;

use crate::{
    config::options::{AppOptions, Source},
    config::selectors::Selectors,
    core::net,
    error::{Error, Result},
    progress::Progress,
    specs::moneylines::{self, MatchupSkipped},
    table::{self, LinesTable},
};

/// In-memory result of one scrape, before export.
#[derive(Debug)]
pub struct Collected {
    pub headline: String,
    pub matchups: usize,
    pub skipped: Vec<MatchupSkipped>,
    pub table: LinesTable,
}

/// Read the page from wherever `source` points.
pub fn load_page(source: &Source, opts: &AppOptions) -> Result<String> {
    match source {
        Source::Url(url) => Ok(net::http_get(url, &opts.fetch)?),
        Source::File(path) => fs::read_to_string(path).map_err(|source| Error::Input {
            path: path.clone(),
            source,
        }),
    }
}

/// Page text → lines table. No IO.
pub fn collect_from_html(
    html_doc: &str,
    opts: &AppOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Collected> {
    let sels = Selectors::compile(&opts.selectors);
    let extraction = moneylines::parse_doc(html_doc, &sels)?;

    if let Some(p) = progress.as_deref_mut() {
        p.extracted(extraction.matchups, extraction.skipped.len());
    }

    let table = table::normalize(extraction.records, opts.policy)?;
    info!(
        games = table.len(),
        matchups = extraction.matchups,
        skipped = extraction.skipped.len(),
        incomplete = table.incomplete.len(),
        "Normalized lines"
    );

    Ok(Collected {
        headline: extraction.headline,
        matchups: extraction.matchups,
        skipped: extraction.skipped,
        table,
    })
}

/// Fetch (or read) the page and turn it into a lines table.
pub fn collect_lines(opts: &AppOptions, mut progress: Option<&mut dyn Progress>) -> Result<Collected> {
    if let Some(p) = progress.as_deref_mut() {
        match &opts.source {
            Source::Url(url) => p.log(&format!("Fetching {url}…")),
            Source::File(path) => p.log(&format!("Reading {}…", path.display())),
        }
    }
    let html_doc = load_page(&opts.source, opts)?;
    collect_from_html(&html_doc, opts, progress)
}
