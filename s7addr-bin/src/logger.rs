use crate::error::{AppError, AppResult};
use std::path::PathBuf;
use tracing::{subscriber::set_global_default, Level};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self},
    layer::SubscriberExt,
    Layer, Registry,
};

/// File name of the daily rolling log inside the configured directory.
const LOG_FILE_NAME: &str = "s7addr.log";

pub struct Logger {
    level: Level,
    dir: Option<PathBuf>,
    _file_guard: Option<WorkerGuard>,
}

impl Logger {
    pub fn new(level: Level, dir: Option<PathBuf>) -> Self {
        Logger {
            level,
            dir,
            _file_guard: None,
        }
    }

    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Installs the global subscriber.
    ///
    /// Console output goes to stderr so stdout only carries rendered addresses. A daily
    /// rolling file layer is added when a log directory is configured; the returned
    /// logger must be kept alive for the file writer to flush.
    pub fn initialize(&mut self) -> AppResult<()> {
        let filter = LevelFilter::from_level(self.level);

        let console_layer = {
            #[cfg(debug_assertions)]
            let layer = fmt::layer()
                .pretty()
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true);

            #[cfg(not(debug_assertions))]
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_file(false)
                .with_line_number(false);

            layer.with_filter(filter)
        };

        let file_layer = match &self.dir {
            Some(dir) => {
                let file_appender = RollingFileAppender::builder()
                    .rotation(Rotation::DAILY)
                    .filename_prefix(LOG_FILE_NAME)
                    .build(dir)
                    .map_err(|e| {
                        AppError::ConfigurationError(format!(
                            "invalid log directory {}: {e}",
                            dir.display()
                        ))
                    })?;
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                self._file_guard = Some(guard);
                Some(
                    fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false)
                        .with_filter(filter),
                )
            }
            None => None,
        };

        let subscriber = Registry::default().with(console_layer).with(file_layer);
        set_global_default(subscriber).map_err(|_| AppError::from("Failed to set logger"))?;
        Ok(())
    }
}
