//! Tracing subscriber setup
//!
//! `fetchwire` itself only emits `tracing` events (target `fetchwire::http`).
//! Applications that do not install their own subscriber can use these helpers.
//!
//! ## Example
//!
//! ```rust,ignore
//! use fetchwire::telemetry::{init_subscriber, SubscriberConfig, OutputFormat};
//!
//! let config = SubscriberConfig::builder()
//!     .log_level(tracing::Level::DEBUG)
//!     .output_format(OutputFormat::Json)
//!     .build();
//! let _guard = init_subscriber(config)?;
//! ```

use crate::defaults;
use crate::error::HttpClientError;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

/// Output format for tracing logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON format
    Json,
    /// Compact JSON format
    JsonCompact,
}

impl std::str::FromStr for OutputFormat {
    type Err = HttpClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "json-compact" => Ok(Self::JsonCompact),
            _ => Err(HttpClientError::Telemetry(format!(
                "Invalid log format: {s}. Valid options: text, json, json-compact"
            ))),
        }
    }
}

/// Configuration for tracing subscriber
#[derive(Debug, Clone)]
pub struct SubscriberConfig {
    pub log_level: tracing::Level,
    pub output_format: OutputFormat,
    /// Write to stdout
    pub enable_console: bool,
    /// Also write to this file (non-blocking)
    pub log_file: Option<PathBuf>,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            log_level: tracing::Level::INFO,
            output_format: OutputFormat::Text,
            enable_console: true,
            log_file: None,
        }
    }
}

impl SubscriberConfig {
    /// Create a new builder for SubscriberConfig
    pub fn builder() -> SubscriberConfigBuilder {
        SubscriberConfigBuilder::default()
    }

    /// Create a debug configuration
    pub fn debug() -> Self {
        Self {
            log_level: tracing::Level::DEBUG,
            ..Self::default()
        }
    }
}

/// Builder for SubscriberConfig
#[derive(Debug, Default)]
pub struct SubscriberConfigBuilder {
    log_level: Option<tracing::Level>,
    output_format: Option<OutputFormat>,
    enable_console: Option<bool>,
    log_file: Option<PathBuf>,
}

impl SubscriberConfigBuilder {
    pub fn log_level(mut self, level: tracing::Level) -> Self {
        self.log_level = Some(level);
        self
    }

    /// Set the log level from a string
    pub fn log_level_str(mut self, level: &str) -> Result<Self, HttpClientError> {
        let level = level.parse::<tracing::Level>().map_err(|_| {
            HttpClientError::Telemetry(format!(
                "Invalid log level: {level}. Valid options: trace, debug, info, warn, error"
            ))
        })?;
        self.log_level = Some(level);
        Ok(self)
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn enable_console(mut self, enable: bool) -> Self {
        self.enable_console = Some(enable);
        self
    }

    pub fn log_file(mut self, path: PathBuf) -> Self {
        self.log_file = Some(path);
        self
    }

    pub fn build(self) -> SubscriberConfig {
        SubscriberConfig {
            log_level: self.log_level.unwrap_or(tracing::Level::INFO),
            output_format: self.output_format.unwrap_or_default(),
            enable_console: self.enable_console.unwrap_or(true),
            log_file: self.log_file,
        }
    }
}

/// Initialize a global tracing subscriber.
///
/// Returns the file writer's guard when `log_file` is set; keep it alive for
/// as long as logs should be flushed. A subscriber that is already installed
/// is left in place and reported as `Ok(None)`.
pub fn init_subscriber(
    config: SubscriberConfig,
) -> Result<Option<WorkerGuard>, HttpClientError> {
    if tracing::dispatcher::has_been_set() {
        return Ok(None);
    }

    let filter = format!(
        "fetchwire={}",
        config.log_level.as_str().to_lowercase()
    );

    let (writer, guard) = match &config.log_file {
        Some(path) => {
            let (file_writer, guard) = file_writer(path)?;
            let writer = if config.enable_console {
                BoxMakeWriter::new(std::io::stdout.and(file_writer))
            } else {
                BoxMakeWriter::new(file_writer)
            };
            (writer, Some(guard))
        }
        None if config.enable_console => (BoxMakeWriter::new(std::io::stdout), None),
        None => (BoxMakeWriter::new(std::io::sink), None),
    };

    let init_result = match config.output_format {
        OutputFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(writer)
            .json()
            .try_init(),
        OutputFormat::JsonCompact => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(writer)
            .json()
            .flatten_event(true)
            .try_init(),
        OutputFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(writer)
            .try_init(),
    };

    match init_result {
        Ok(()) => Ok(guard),
        Err(e) => {
            let error_msg = e.to_string();
            if error_msg.contains("already been set") {
                Ok(None)
            } else {
                Err(HttpClientError::Telemetry(format!(
                    "Failed to initialize tracing: {e}"
                )))
            }
        }
    }
}

fn file_writer(
    path: &Path,
) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard), HttpClientError> {
    let file_name = path.file_name().ok_or_else(|| {
        HttpClientError::Telemetry(format!("Invalid log file path: {}", path.display()))
    })?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Ok(tracing_appender::non_blocking(
        tracing_appender::rolling::never(dir, file_name),
    ))
}

/// Initialize tracing subscriber with default configuration
pub fn init_default() -> Result<Option<WorkerGuard>, HttpClientError> {
    init_subscriber(SubscriberConfig::default())
}

/// Initialize tracing subscriber for debugging
pub fn init_debug() -> Result<Option<WorkerGuard>, HttpClientError> {
    init_subscriber(SubscriberConfig::debug())
}

/// Initialize tracing subscriber from environment variables
///
/// Supported environment variables:
/// - `FETCHWIRE_LOG_LEVEL`: Log level (trace, debug, info, warn, error)
/// - `FETCHWIRE_LOG_FORMAT`: Output format (text, json, json-compact)
/// - `FETCHWIRE_LOG_FILE`: Log file path
pub fn init_from_env() -> Result<Option<WorkerGuard>, HttpClientError> {
    init_subscriber(config_from_env()?)
}

fn config_from_env() -> Result<SubscriberConfig, HttpClientError> {
    let mut builder = SubscriberConfig::builder();
    if let Ok(level) = std::env::var(defaults::env::LOG_LEVEL) {
        builder = builder.log_level_str(&level)?;
    }
    if let Ok(format) = std::env::var(defaults::env::LOG_FORMAT) {
        builder = builder.output_format(format.parse()?);
    }
    if let Ok(file_path) = std::env::var(defaults::env::LOG_FILE) {
        builder = builder.log_file(PathBuf::from(file_path));
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let config = SubscriberConfig::builder().build();
        assert_eq!(config.log_level, tracing::Level::INFO);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(config.enable_console);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn level_and_format_parsing() {
        let config = SubscriberConfig::builder()
            .log_level_str("debug")
            .unwrap()
            .output_format("json-compact".parse().unwrap())
            .build();
        assert_eq!(config.log_level, tracing::Level::DEBUG);
        assert_eq!(config.output_format, OutputFormat::JsonCompact);

        assert!(SubscriberConfig::builder().log_level_str("loud").is_err());
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
