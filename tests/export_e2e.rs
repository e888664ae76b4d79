// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use ml_scrape::config::options::{AppOptions, ExportFormat, FileConfig, Source};
use ml_scrape::error::{Error, ExtractError};
use ml_scrape::progress::Progress;
use ml_scrape::runner;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

fn offline_opts(page: PathBuf, out: PathBuf) -> AppOptions {
    let cfg = FileConfig::load(&fixture("config.json")).unwrap();
    let mut opts = AppOptions::from_config(cfg, Some(page)).unwrap();
    opts.export.out = Some(out);
    opts
}

#[derive(Default)]
struct Recorder {
    lines: Vec<String>,
    extracted: Option<(usize, usize)>,
    finished: bool,
}

impl Progress for Recorder {
    fn log(&mut self, msg: &str) { self.lines.push(msg.to_string()); }
    fn extracted(&mut self, matchups: usize, skipped: usize) { self.extracted = Some((matchups, skipped)); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn offline_run_writes_wide_csv() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("lines.csv");
    let opts = offline_opts(fixture("odds_page.html"), out.clone());
    assert!(matches!(opts.source, Source::File(_)));

    let mut rec = Recorder::default();
    let summary = runner::run(&opts, Some(&mut rec)).unwrap();

    assert_eq!(summary.file_written, out);
    assert_eq!(summary.games, 3);
    assert_eq!(summary.matchups, 5);
    assert_eq!(summary.skipped, 2);
    assert_eq!(summary.incomplete, vec![3]);

    let s = fs::read_to_string(&out).unwrap();
    assert_eq!(
        s,
        "Away Team,Money Line Away,Home Team,Money Line Home\n\
         DEN,-110,NYJ,+120\n\
         KC,-200,LV,+170\n\
         SF,-300,DAL,+240\n"
    );

    assert_eq!(rec.extracted, Some((5, 2)));
    assert!(rec.finished);
    assert!(rec.lines.iter().any(|l| l.starts_with("Reading ")));
}

#[test]
fn tsv_into_directory_hint() {
    let tmp = tempfile::tempdir().unwrap();
    let dir_hint = PathBuf::from(format!("{}/nested/", tmp.path().display()));
    let mut opts = offline_opts(fixture("odds_page.html"), dir_hint);
    opts.export.format = ExportFormat::Tsv;
    opts.export.include_headers = false;

    let summary = runner::run(&opts, None).unwrap();
    assert!(summary.file_written.ends_with("nested/lines.tsv"));
    let s = fs::read_to_string(&summary.file_written).unwrap();
    assert_eq!(s.lines().next(), Some("DEN\t-110\tNYJ\t+120"));
}

#[test]
fn structural_failure_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let page = tmp.path().join("blank.html");
    fs::write(&page, "<html><body><p>maintenance</p></body></html>").unwrap();
    let out = tmp.path().join("lines.csv");

    let mut rec = Recorder::default();
    let err = runner::run(&offline_opts(page, out.clone()), Some(&mut rec)).unwrap_err();

    assert!(matches!(err, Error::Extract(ExtractError::StructureNotFound(_))));
    assert!(!out.exists());
    assert!(rec.finished);
}

#[test]
fn missing_input_file_is_reported() {
    let tmp = tempfile::tempdir().unwrap();
    let opts = offline_opts(tmp.path().join("nope.html"), tmp.path().join("lines.csv"));
    let err = runner::run(&opts, None).unwrap_err();
    assert!(matches!(err, Error::Input { .. }));
}
