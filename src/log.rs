// src/log.rs
use std::{fs::OpenOptions, io, path::PathBuf};

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone, Debug)]
pub struct LogOptions {
    pub level: Level,
    /// Also append plain-text lines here.
    pub file: Option<PathBuf>,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self { level: Level::INFO, file: None }
    }
}

/// Install the global subscriber. `RUST_LOG` overrides `opts.level`.
///
/// Keep the returned guard alive until exit or buffered file lines are lost.
pub fn init(opts: &LogOptions) -> io::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(opts.level.to_string().to_ascii_lowercase()));

    let (file_layer, guard) = match &opts.file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer().with_ansi(false).with_target(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = fmt::layer().compact().with_target(false).with_writer(io::stderr);

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    Ok(guard)
}
