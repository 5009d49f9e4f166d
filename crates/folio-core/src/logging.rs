#![forbid(unsafe_code)]

//! Subscriber setup for binaries.
//!
//! Library code only talks to the `tracing` facade. A binary calls
//! [`init`] once with a [`LoggingConfig`] to install a `tracing-subscriber`
//! fmt subscriber. When a file sink is configured, nothing is written to the
//! terminal, which keeps full-screen output intact.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive (e.g. `folio_profile=debug`).
pub const ENV_LOG: &str = "FOLIO_LOG";
/// Environment variable selecting the output format (`text` or `json`).
pub const ENV_LOG_FORMAT: &str = "FOLIO_LOG_FORMAT";
/// Environment variable naming a file to append log lines to.
pub const ENV_LOG_FILE: &str = "FOLIO_LOG_FILE";

const DEFAULT_FILTER: &str = "warn";

/// Output format of the installed subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" | "plain" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive. Default: `"warn"`.
    pub filter: String,
    /// Output format. Default: text.
    pub format: LogFormat,
    /// Append to this file instead of stderr.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::Text,
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Read configuration from `FOLIO_LOG`, `FOLIO_LOG_FORMAT` and `FOLIO_LOG_FILE`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Read configuration through a custom lookup (testable).
    #[must_use]
    pub fn from_env_with<F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(filter) = get(ENV_LOG).filter(|v| !v.trim().is_empty()) {
            config.filter = filter.trim().to_string();
        }
        if let Some(format) = get(ENV_LOG_FORMAT).as_deref().and_then(LogFormat::parse) {
            config.format = format;
        }
        config.file = get(ENV_LOG_FILE)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);
        config
    }

    /// Set the filter directive (builder).
    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Set the output format (builder).
    #[must_use]
    pub fn format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Route output to a file (builder).
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }
}

/// Failure to install the global subscriber.
#[derive(Debug)]
pub enum LoggingError {
    /// The filter directive did not parse.
    Filter(String),
    /// The log file could not be opened.
    File(io::Error),
    /// A global subscriber was already installed.
    AlreadyInitialized,
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filter(msg) => write!(f, "invalid log filter: {msg}"),
            Self::File(err) => write!(f, "cannot open log file: {err}"),
            Self::AlreadyInitialized => write!(f, "a global tracing subscriber is already set"),
        }
    }
}

impl std::error::Error for LoggingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::File(err) => Some(err),
            _ => None,
        }
    }
}

/// Install the global subscriber described by `config`.
pub fn init(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_new(&config.filter).map_err(|err| LoggingError::Filter(err.to_string()))?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match (&config.file, config.format) {
        (Some(path), format) => {
            let file = open_log_file(path).map_err(LoggingError::File)?;
            let builder = builder.with_ansi(false).with_writer(Mutex::new(file));
            match format {
                LogFormat::Text => builder.try_init(),
                LogFormat::Json => builder.json().try_init(),
            }
        }
        (None, LogFormat::Text) => builder.with_writer(io::stderr).try_init(),
        (None, LogFormat::Json) => builder.json().with_writer(io::stderr).try_init(),
    };
    result.map_err(|_| LoggingError::AlreadyInitialized)
}

fn open_log_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
