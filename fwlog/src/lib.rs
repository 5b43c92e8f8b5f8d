//! # fwlog
//! Logger writing fixed-width records to stderr, with named scopes.
//!
//! Every record is one line:
//! `timestamp(28) level(10) module(24) line(6) function(28) message`.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! fwlog = "0.1.0"
//! ```
//!
//! ```rust
//! use fwlog::{DEFAULT_LEVEL, setup_logger};
//!
//! let logger = setup_logger(DEFAULT_LEVEL, "");
//! fwlog::info!(logger, "Hello, world!");
//! // records from the log facade land in the same handler
//! log::warn!("Hello from the facade!");
//! ```
//!
//! ## Named scopes
//! Only records from the configured scope and its children (`app::db`, `app.db`)
//! are written. Children inherit the threshold unless they override it.
//!
//! ```rust
//! use fwlog::{LevelFilter, logger_config};
//!
//! let logger = logger_config()
//!     .with_level(LevelFilter::Info)
//!     .with_name("app")
//!     .install();
//! assert_eq!(logger.name(), "app");
//!
//! let db = fwlog::global_logger("app::db");
//! db.set_level(LevelFilter::Warn);
//! fwlog::info!(db, "filtered out");
//! fwlog::warn!(db, "written");
//! fwlog::error!(fwlog::global_logger("other"), "not in scope, dropped");
//! ```
//!
//! ## Explicit providers
//! A [`LoggerProvider`] can be built without touching process-wide state and
//! passed to whatever needs to log.
//!
//! ```rust
//! use fwlog::{LogBuffer, logger_config};
//!
//! let buffer = LogBuffer::new();
//! let provider = logger_config().with_buffer(buffer.clone()).build();
//! let logger = provider.logger("worker");
//! fwlog::debug!(logger, "started");
//! assert!(buffer.lines()[0].ends_with(" started"));
//! ```

mod macros;
mod provider;

pub use fwlog_core::{
    DEFAULT_LEVEL, DEFAULT_TIMESTAMP_FORMAT, LevelParseError, LogBuffer, LogTarget, parse_level,
};
pub use log::{Level, LevelFilter};
pub use provider::{LoggerHandle, LoggerProvider};

use log::Log;
use std::sync::{LazyLock, PoisonError, RwLock};

/// The installed provider. The facade bridge is registered the first time this is touched.
static GLOBAL_PROVIDER: LazyLock<RwLock<Option<LoggerProvider>>> = LazyLock::new(|| {
    // another logger may own the facade already, handles still work then
    if log::set_boxed_logger(Box::new(FwLogger)).is_ok() {
        log::set_max_level(LevelFilter::Trace);
    }
    RwLock::new(None)
});

/// Forwards `log` facade records to the installed provider, using the target as scope name.
struct FwLogger;

impl Log for FwLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        global_provider()
            .is_some_and(|provider| provider.enabled(metadata.target(), metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        if let Some(provider) = global_provider() {
            provider.log(
                record.target(),
                record.level(),
                record.module_path().unwrap_or(record.target()),
                record.line(),
                "",
                *record.args(),
            );
        }
    }

    fn flush(&self) {
        if let Some(provider) = global_provider() {
            provider.flush();
        }
    }
}

/// Configuration of a logger: one handler and one named scope.
#[derive(Debug, Clone)]
pub struct LogConfiguration {
    pub(crate) level: LevelFilter,
    pub(crate) logger_name: String,
    pub(crate) target: LogTarget,
    pub(crate) color: Option<bool>,
    pub(crate) timestamp_format: Option<String>,
}

impl Default for LogConfiguration {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            logger_name: String::new(),
            target: LogTarget::Stderr,
            color: None,
            timestamp_format: None,
        }
    }
}

impl LogConfiguration {
    pub fn level(&self) -> LevelFilter {
        self.level
    }
    /// Name of the configured scope, empty for root.
    pub fn logger_name(&self) -> &str {
        &self.logger_name
    }
    /// Sets the threshold of both the handler and the scope.
    pub fn with_level(self, level: LevelFilter) -> Self {
        Self { level, ..self }
    }
    /// Sets the scope name
    pub fn with_name(self, name: &str) -> Self {
        Self {
            logger_name: name.into(),
            ..self
        }
    }
    /// Maybe sets the scope name, `None` means root.
    pub fn maybe_with_name(self, name: Option<&str>) -> Self {
        Self {
            logger_name: name.unwrap_or_default().into(),
            ..self
        }
    }
    /// Sets where formatted lines go.
    pub fn with_target(self, target: LogTarget) -> Self {
        Self { target, ..self }
    }
    /// Write to stdout instead of stderr.
    pub fn with_stdout(self) -> Self {
        self.with_target(LogTarget::Stdout)
    }
    /// Collect lines in memory.
    pub fn with_buffer(self, buffer: LogBuffer) -> Self {
        self.with_target(LogTarget::Buffer(buffer))
    }
    /// Overrides `FWLOG_COLOR`.
    pub fn with_color(self, yes: bool) -> Self {
        Self {
            color: Some(yes),
            ..self
        }
    }
    /// Overrides `FWLOG_TIMESTAMP_FORMAT`, any chrono format string.
    pub fn with_timestamp_format(self, format: &str) -> Self {
        Self {
            timestamp_format: Some(format.into()),
            ..self
        }
    }
    /// Builds a standalone provider.
    pub fn build(self) -> LoggerProvider {
        LoggerProvider::new(self)
    }
    /// Replaces the process-wide provider and returns a handle to the configured scope.
    /// Handles returned by earlier installs follow the new configuration.
    pub fn install(self) -> LoggerHandle {
        let name = self.logger_name.clone();
        let provider = self.build();
        *GLOBAL_PROVIDER
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(provider);
        LoggerHandle::global(&name)
    }
}

/// Returns a default LogConfiguration: no minimum level, root scope, stderr.
pub fn logger_config() -> LogConfiguration {
    LogConfiguration::default()
}

/// Installs a stderr logger for scope `name` filtered at `level` and returns its handle.
///
/// Calling it again replaces the previous setup.
pub fn setup_logger(level: LevelFilter, name: &str) -> LoggerHandle {
    logger_config().with_level(level).with_name(name).install()
}

/// The provider installed by the last [`setup_logger`] or [`LogConfiguration::install`].
pub fn global_provider() -> Option<LoggerProvider> {
    GLOBAL_PROVIDER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Handle to scope `name` on whichever provider is installed when it logs.
pub fn global_logger(name: &str) -> LoggerHandle {
    LoggerHandle::global(name)
}

#[doc(hidden)]
pub mod __private {
    /// Turns the type name of a probe fn nested in a function into that function's bare name.
    pub fn bare_function_name(probe: &'static str) -> &'static str {
        let mut path = probe.strip_suffix("::__fwlog_probe").unwrap_or(probe);
        while let Some(outer) = path.strip_suffix("::{{closure}}") {
            path = outer;
        }
        fwlog_core::short_module(path)
    }
}

#[test]
fn test_bare_function_name() {
    use __private::bare_function_name;
    assert_eq!(bare_function_name("app::run::__fwlog_probe"), "run");
    assert_eq!(
        bare_function_name("app::tasks::spawn::{{closure}}::{{closure}}::__fwlog_probe"),
        "spawn"
    );
    assert_eq!(bare_function_name("main::__fwlog_probe"), "main");
    assert_eq!(crate::function_name!(), "test_bare_function_name");
}

#[test]
fn test_default_configuration() {
    let config = logger_config();
    assert_eq!(config.level(), LevelFilter::Trace);
    assert_eq!(config.logger_name(), "");
    let config = config.maybe_with_name(Some("svc")).with_level(LevelFilter::Warn);
    assert_eq!(config.logger_name(), "svc");
    assert_eq!(config.level(), LevelFilter::Warn);
    assert_eq!(config.maybe_with_name(None).logger_name(), "");
}
