// src/cli.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::Level;

use crate::config::consts::{DEFAULT_CONFIG_FILE, DEFAULT_LOG_FILE};
use crate::config::options::{AppOptions, ExportFormat, FileConfig, Source};
use crate::error::Result;
use crate::log::LogOptions;
use crate::progress::Progress;
use crate::runner::{self, RunSummary};
use crate::table::IncompletePolicy;

#[derive(Debug, Parser)]
#[command(name = "ml_scrape", version)]
#[command(about = "Scrape sportsbook moneylines into a CSV/TSV table", long_about = None)]
pub struct Args {
    /// Path to config.json (url + selectors)
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Odds page URL; overrides "url" in the config
    #[arg(long, conflicts_with = "input")]
    pub url: Option<String>,

    /// Parse a saved HTML page instead of fetching
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file, or a directory ending in '/'
    #[arg(short, long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Omit the header row
    #[arg(long)]
    pub no_headers: bool,

    /// Fail instead of dropping games that lost a side
    #[arg(long)]
    pub strict: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Warnings and errors only
    #[arg(short, long)]
    pub quiet: bool,

    /// Append log lines to this file
    #[arg(long, value_name = "FILE", default_value = DEFAULT_LOG_FILE, conflicts_with = "no_log_file")]
    pub log_file: PathBuf,

    /// Log to stderr only
    #[arg(long)]
    pub no_log_file: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        }
    }
}

impl Args {
    pub fn log_options(&self) -> LogOptions {
        let level = match (self.quiet, self.verbose) {
            (true, _) => Level::WARN,
            (false, 0) => Level::INFO,
            (false, 1) => Level::DEBUG,
            (false, _) => Level::TRACE,
        };
        let file = (!self.no_log_file).then(|| self.log_file.clone());
        LogOptions { level, file }
    }

    /// Config file first, then flags on top.
    pub fn app_options(&self) -> Result<AppOptions> {
        let mut cfg = FileConfig::load(&self.config)?;
        if let Some(url) = &self.url {
            cfg.url = Some(url.clone());
        }
        let mut opts = AppOptions::from_config(cfg, self.input.clone())?;
        self.apply(&mut opts);
        Ok(opts)
    }

    fn apply(&self, opts: &mut AppOptions) {
        if let Some(out) = &self.out {
            opts.export.out = Some(out.clone());
        }
        opts.export.format = self.format.into();
        opts.export.include_headers = !self.no_headers;
        if self.strict {
            opts.policy = IncompletePolicy::Abort;
        }
    }
}

/// Status lines on stderr.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn extracted(&mut self, matchups: usize, skipped: usize) {
        if skipped > 0 {
            eprintln!("Found {matchups} matchups ({skipped} skipped, see log)");
        } else {
            eprintln!("Found {matchups} matchups");
        }
    }
}

pub fn run(args: &Args) -> Result<RunSummary> {
    let opts = args.app_options()?;
    if let Source::File(path) = &opts.source {
        tracing::debug!("Offline run from {}", path.display());
    }
    let mut progress = ConsoleProgress;
    runner::run(&opts, Some(&mut progress))
}
