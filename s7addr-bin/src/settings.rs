use crate::error::{AppError, AppResult};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::{ops::Deref, path::Path, str::FromStr, sync::Arc};
use tracing::Level;

/// Configuration file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "s7addr.toml";

/// Prefix of environment overrides, e.g. `S7ADDR__LOG__LEVEL=debug`.
pub const ENV_PREFIX: &str = "S7ADDR";

#[derive(Debug, Clone)]
pub struct Settings(Arc<Inner>);

impl Deref for Settings {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl Settings {
    /// Load settings from an optional TOML file layered under environment overrides.
    ///
    /// A missing file is not an error; defaults apply.
    pub fn new(config_path: &Path) -> AppResult<Self> {
        let builder = Config::builder()
            .add_source(File::from(config_path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );
        let inner: Inner = builder.build()?.try_deserialize()?;
        inner.log.level()?;
        Ok(Self(Arc::new(inner)))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self(Arc::new(Inner::default()))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Inner {
    #[serde(default)]
    pub log: Log,
    #[serde(default)]
    pub output: Output,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Log {
    /// One of `trace`, `debug`, `info`, `warn`, `error`
    #[serde(default = "Log::level_default")]
    pub level: String,
    /// Directory of the daily rolling log file; console only when unset
    #[serde(default)]
    pub dir: Option<String>,
}

impl Default for Log {
    fn default() -> Self {
        Log {
            level: Log::level_default(),
            dir: None,
        }
    }
}

impl Log {
    fn level_default() -> String {
        "info".into()
    }

    pub fn level(&self) -> AppResult<Level> {
        Level::from_str(self.level.trim()).map_err(|_| {
            AppError::ConfigurationError(format!("invalid log level: {}", self.level))
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<name>\t<address>` per tag
    #[default]
    Table,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Output {
    #[serde(default)]
    pub format: OutputFormat,
    /// Leave out tags whose address is not available
    #[serde(default)]
    pub skip_unavailable: bool,
}
