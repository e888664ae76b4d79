// src/progress.rs
/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once the page has been walked.
    fn extracted(&mut self, _matchups: usize, _skipped: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
