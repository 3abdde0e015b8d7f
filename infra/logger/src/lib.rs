//! # Logger
//!
//! Bootstrap for the process-wide tracing subscriber: a console layer, an
//! optional rolling log file with non-blocking writes, and an env filter
//! that combines a programmatic default with `RUST_LOG`.
//!
//! The builder is typestate-driven: a logger name is required before
//! anything else, and the file-specific knobs (rotation, retention, JSON
//! format) only appear once a file path has been supplied.
//!
//! ## Example
//!
//! ```rust
//! # use wsite_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("my-app")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::LoggerError;
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fs;
use std::marker::PhantomData;
use std::path::PathBuf;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

#[derive(Debug)]
struct FileOptions {
    path: PathBuf,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

impl FileOptions {
    fn new(path: PathBuf) -> Self {
        Self { path, rotation: Rotation::DAILY, max_files: DEFAULT_MAX_FILES, json: false }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);
#[derive(Debug)]
pub struct NoFile;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// Builder for the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    name: N,
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    file: Option<FileOptions>,
    file_state: PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Names the logger; the name prefixes rolling log files
    /// (`my-app.2026-08-06.log`).
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder {
            name: WithName(name.into()),
            console: self.console,
            level: self.level,
            env_filter: self.env_filter,
            file: self.file,
            file_state: PhantomData,
        }
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    /// Minimum level emitted when neither `RUST_LOG` nor an explicit filter
    /// says otherwise.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Programmatic filter directives (e.g. `wsite=debug,hyper=info`).
    /// `RUST_LOG` still wins when set; an unparsable filter fails `init`.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Toggles the console layer (on by default).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Enables file logging into the given directory and unlocks the
    /// file-specific options.
    pub fn path(self, path: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        LoggerBuilder {
            name: self.name,
            console: self.console,
            level: self.level,
            env_filter: self.env_filter,
            file: Some(FileOptions::new(path.into())),
            file_state: PhantomData,
        }
    }

    /// Installs the configured subscriber globally.
    ///
    /// The returned [`Logger`] owns the non-blocking worker guard; keep it
    /// alive for the lifetime of the process or buffered lines are lost.
    ///
    /// # Errors
    /// [`LoggerError::Subscriber`] if a global subscriber is already
    /// installed, [`LoggerError::InvalidConfiguration`] for a blank name,
    /// zero retention, a bad filter, or a configuration with no layers.
    pub fn init(self) -> Result<Logger, LoggerError> {
        if self.name.0.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration(
                "logger name cannot be empty".to_owned(),
            ));
        }

        let filter = match &self.env_filter {
            None => EnvFilter::builder()
                .with_default_directive(self.level.into())
                .from_env_lossy(),
            Some(directives) => EnvFilter::builder()
                .with_default_directive(self.level.into())
                .parse(directives)
                .map_err(|e| {
                    LoggerError::InvalidConfiguration(format!(
                        "invalid env filter '{directives}': {e}"
                    ))
                })?,
        };

        let mut layers = Vec::new();
        if self.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let guard = match self.file {
            Some(options) => {
                let json = options.json;
                let (writer, guard) = build_file_appender(&self.name.0, options)?;
                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if json { file_layer.json().boxed() } else { file_layer.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration(
                "no logging layers enabled; enable console or file output".to_owned(),
            ));
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }
}

impl LoggerBuilder<WithName, WithFile> {
    /// How many rotated files to keep before the oldest is deleted.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn max_files(mut self, max: usize) -> Self {
        if let Some(file) = self.file.as_mut() {
            file.max_files = max;
        }
        self
    }

    /// Rotation cadence for the log file (daily by default).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        if let Some(file) = self.file.as_mut() {
            file.rotation = rotation;
        }
        self
    }

    /// Switches the file layer to JSON lines.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn json(mut self) -> Self {
        if let Some(file) = self.file.as_mut() {
            file.json = true;
        }
        self
    }
}

fn build_file_appender(
    name: &str,
    options: FileOptions,
) -> Result<(NonBlocking, WorkerGuard), LoggerError> {
    if options.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration(
            "max_files must be greater than zero".to_owned(),
        ));
    }

    fs::create_dir_all(&options.path)
        .map_err(|source| LoggerError::CreateDir { path: options.path.clone(), source })?;

    let appender = RollingFileAppender::builder()
        .rotation(options.rotation)
        .filename_prefix(name)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(options.max_files)
        .build(&options.path)?;

    Ok(tracing_appender::non_blocking(appender))
}

/// Handle to the installed logging system.
///
/// Dropping it stops the background writer; do so only at shutdown.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts a new [`LoggerBuilder`].
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder {
            name: NoName,
            console: true,
            level: LevelFilter::INFO,
            env_filter: None,
            file: None,
            file_state: PhantomData,
        }
    }

    /// The file-writer guard, if file logging is enabled.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn builder_defaults() {
        let builder = Logger::builder().name("test-app").env_filter("wsite=debug");
        assert!(builder.console);
        assert_eq!(builder.level, LevelFilter::INFO);
        assert_eq!(builder.env_filter.as_deref(), Some("wsite=debug"));
        assert!(builder.file.is_none());
    }

    #[test]
    #[serial]
    fn builder_accumulates_file_settings() {
        let tmp = tempdir().expect("temp dir");
        let log_dir = tmp.path().join("logs");
        let builder = Logger::builder()
            .name("test-app")
            .env_filter("wsite=info")
            .path(log_dir.clone())
            .max_files(5)
            .level(LevelFilter::DEBUG);

        assert_eq!(builder.level, LevelFilter::DEBUG);
        let file = builder.file.as_ref().expect("file options");
        assert_eq!(file.max_files, 5);
        assert_eq!(file.path, log_dir);
    }

    #[test]
    #[serial]
    fn empty_name_is_rejected() {
        let err = Logger::builder().name("   ").init().expect_err("blank name must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration(_)));
    }

    #[test]
    #[serial]
    fn zero_retention_is_rejected() {
        let tmp = tempdir().expect("temp dir");
        let err = Logger::builder()
            .name("test-app")
            .path(tmp.path().join("logs"))
            .max_files(0)
            .init()
            .expect_err("zero max_files must fail");
        assert!(matches!(err, LoggerError::InvalidConfiguration(_)));
    }

    #[test]
    #[serial]
    fn file_logging_creates_log_files() {
        let tmp = tempdir().expect("temp dir");
        let log_dir = tmp.path().join("logs");

        let logger = Logger::builder()
            .name("test-app")
            .path(&log_dir)
            .level(LevelFilter::INFO)
            .init()
            .expect("logger init");

        tracing::info!("hello world");
        // Give the background worker a moment to flush.
        std::thread::sleep(Duration::from_millis(20));
        drop(logger);

        assert!(log_dir.exists(), "log directory should be created by logger init");

        let has_log = fs::read_dir(&log_dir)
            .expect("read log dir")
            .flatten()
            .any(|entry| entry.path().extension().and_then(|e| e.to_str()) == Some("log"));

        assert!(has_log, "at least one log file should be created");
    }
}
