use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex, PoisonError, RwLock},
};

use fwlog_core::{LogMessage, LogStyle, LogWriter, format_log, short_module};
use log::{Level, LevelFilter};

use crate::{LogConfiguration, global_provider};

/// A named logger scope. Only holds the optional threshold override,
/// routing is decided by the provider.
#[derive(Default)]
struct Scope {
    level: RwLock<Option<LevelFilter>>,
}

impl Scope {
    fn level(&self) -> Option<LevelFilter> {
        *self.level.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_level(&self, level: Option<LevelFilter>) {
        *self.level.write().unwrap_or_else(PoisonError::into_inner) = level;
    }
}

/// The single output handler of a provider.
struct Handler {
    writer: Mutex<Box<dyn LogWriter>>,
    level: LevelFilter,
    style: LogStyle,
}

impl Handler {
    fn emit(&self, log_message: &LogMessage) {
        if log_message.level > self.level {
            return;
        }
        let line = format_log(log_message, &self.style);
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.regular(&line);
        writer.flush();
    }

    fn flush(&self) {
        self.writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush();
    }
}

struct ProviderInner {
    config: LogConfiguration,
    handler: Handler,
    scopes: Mutex<HashMap<String, Arc<Scope>>>,
}

/// Owns one handler and the registry of named scopes built from a [`LogConfiguration`].
///
/// Clones share the same handler and scopes.
#[derive(Clone)]
pub struct LoggerProvider {
    inner: Arc<ProviderInner>,
}

impl fmt::Debug for LoggerProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerProvider")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

/// `a::b` and `a.b` both have parent `a`; top-level names have the root `""` as parent.
fn parent_scope(name: &str) -> Option<&str> {
    if name.is_empty() {
        return None;
    }
    let cut = name.rfind("::").into_iter().chain(name.rfind('.')).max();
    Some(cut.map_or("", |i| &name[..i]))
}

fn in_scope(scope: &str, name: &str) -> bool {
    scope.is_empty()
        || name.strip_prefix(scope).is_some_and(|rest| {
            rest.is_empty() || rest.starts_with('.') || rest.starts_with("::")
        })
}

impl LoggerProvider {
    pub fn new(config: LogConfiguration) -> Self {
        let mut style = LogStyle::default();
        if let Some(color) = config.color {
            style.color = color;
        }
        if let Some(timestamp_format) = &config.timestamp_format {
            style.timestamp_format = timestamp_format.clone();
        }
        let handler = Handler {
            writer: Mutex::new(config.target.clone().into_writer()),
            level: config.level,
            style,
        };
        let provider = Self {
            inner: Arc::new(ProviderInner {
                config,
                handler,
                scopes: Mutex::new(HashMap::new()),
            }),
        };
        // the configured scope starts out at the configured threshold
        provider
            .scope(&provider.inner.config.logger_name)
            .set_level(Some(provider.inner.config.level));
        provider
    }

    /// The configuration this provider was built from.
    pub fn configuration(&self) -> &LogConfiguration {
        &self.inner.config
    }

    /// Looks up a scope by name, creating it on first use.
    pub fn logger(&self, name: &str) -> LoggerHandle {
        self.scope(name);
        LoggerHandle {
            name: name.into(),
            route: Route::Bound(self.clone()),
        }
    }

    /// Handle to the configured scope.
    pub fn root(&self) -> LoggerHandle {
        self.logger(&self.inner.config.logger_name)
    }

    pub fn flush(&self) {
        self.inner.handler.flush();
    }

    fn scope(&self, name: &str) -> Arc<Scope> {
        let mut scopes = self
            .inner
            .scopes
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(scopes.entry(name.into()).or_default())
    }

    fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Own override first, then the closest ancestor's, then the configured level.
    fn effective_level(&self, name: &str) -> LevelFilter {
        let config = &self.inner.config;
        let scopes = self
            .inner
            .scopes
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let mut current = Some(name);
        while let Some(scope_name) = current {
            if let Some(level) = scopes.get(scope_name).and_then(|scope| scope.level()) {
                return level;
            }
            if scope_name == config.logger_name {
                break;
            }
            current = parent_scope(scope_name);
        }
        config.level
    }

    /// Whether a record of `level` from scope `name` would reach the handler.
    pub fn enabled(&self, name: &str, level: Level) -> bool {
        in_scope(&self.inner.config.logger_name, name)
            && level <= self.effective_level(name)
            && level <= self.inner.handler.level
    }

    pub(crate) fn log(
        &self,
        name: &str,
        level: Level,
        module_path: &str,
        line: Option<u32>,
        function: &str,
        args: fmt::Arguments<'_>,
    ) {
        if !self.enabled(name, level) {
            return;
        }
        let log_message = LogMessage {
            message: args.to_string(),
            level,
            module: short_module(module_path).into(),
            line,
            function: function.into(),
        };
        self.inner.handler.emit(&log_message);
    }
}

#[derive(Clone)]
enum Route {
    Bound(LoggerProvider),
    /// Resolved against the installed provider on every call.
    Global,
}

/// Reference to a named logger scope.
///
/// Handles are cheap to clone. Handles with the same name obtained from the
/// same provider point at the same scope.
#[derive(Clone)]
pub struct LoggerHandle {
    name: String,
    route: Route,
}

impl fmt::Debug for LoggerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerHandle")
            .field("name", &self.name)
            .field("global", &matches!(self.route, Route::Global))
            .finish()
    }
}

impl LoggerHandle {
    pub(crate) fn global(name: &str) -> Self {
        Self {
            name: name.into(),
            route: Route::Global,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The provider this handle currently writes through, if any.
    pub fn provider(&self) -> Option<LoggerProvider> {
        match &self.route {
            Route::Bound(provider) => Some(provider.clone()),
            Route::Global => global_provider(),
        }
    }

    /// Overrides the threshold of this scope, for every handle sharing it.
    pub fn set_level(&self, level: LevelFilter) {
        if let Some(provider) = self.provider() {
            provider.scope(&self.name).set_level(Some(level));
        }
    }

    /// Drops the override, the scope inherits from its ancestors again.
    pub fn clear_level(&self) {
        if let Some(provider) = self.provider() {
            provider.scope(&self.name).set_level(None);
        }
    }

    /// The override set on this scope, if any.
    pub fn level(&self) -> Option<LevelFilter> {
        self.provider()
            .and_then(|provider| provider.scope(&self.name).level())
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        self.provider()
            .is_some_and(|provider| provider.enabled(&self.name, level))
    }

    pub fn same_scope(&self, other: &LoggerHandle) -> bool {
        match (self.provider(), other.provider()) {
            (Some(a), Some(b)) => a.ptr_eq(&b) && self.name == other.name,
            _ => false,
        }
    }

    /// Emits one record. Prefer the [`crate::info!`] family which fill in the call site.
    pub fn log(
        &self,
        level: Level,
        module_path: &str,
        line: Option<u32>,
        function: &str,
        args: fmt::Arguments<'_>,
    ) {
        if let Some(provider) = self.provider() {
            provider.log(&self.name, level, module_path, line, function, args);
        }
    }
}

#[cfg(test)]
mod tests {
    use fwlog_core::{DEFAULT_TIMESTAMP_FORMAT, LogBuffer};

    use super::*;
    use crate::logger_config;

    fn buffered(level: LevelFilter, name: &str) -> (LoggerProvider, LogBuffer) {
        let buffer = LogBuffer::new();
        let provider = logger_config()
            .with_level(level)
            .with_name(name)
            .with_buffer(buffer.clone())
            .with_color(false)
            .with_timestamp_format(DEFAULT_TIMESTAMP_FORMAT)
            .build();
        (provider, buffer)
    }

    #[test]
    fn test_parent_scope() {
        assert_eq!(parent_scope("a::b::c"), Some("a::b"));
        assert_eq!(parent_scope("a.b"), Some("a"));
        assert_eq!(parent_scope("a::b.c"), Some("a::b"));
        assert_eq!(parent_scope("a"), Some(""));
        assert_eq!(parent_scope(""), None);
    }

    #[test]
    fn test_in_scope() {
        assert!(in_scope("", "anything"));
        assert!(in_scope("app", "app"));
        assert!(in_scope("app", "app.db"));
        assert!(in_scope("app", "app::db"));
        assert!(!in_scope("app", "application"));
        assert!(!in_scope("app", "other"));
        assert!(!in_scope("app", ""));
    }

    #[test]
    fn test_root_handle_has_configured_name() {
        let (provider, _) = buffered(LevelFilter::Info, "service");
        let root = provider.root();
        assert_eq!(root.name(), "service");
        assert_eq!(root.level(), Some(LevelFilter::Info));
        assert_eq!(provider.configuration().logger_name(), "service");
    }

    #[test]
    fn test_same_name_same_scope() {
        let (provider, _) = buffered(LevelFilter::Trace, "");
        let a = provider.logger("worker");
        let b = provider.logger("worker");
        let c = provider.logger("other");
        assert!(a.same_scope(&b));
        assert!(!a.same_scope(&c));
        a.set_level(LevelFilter::Warn);
        assert_eq!(b.level(), Some(LevelFilter::Warn));

        let (other_provider, _) = buffered(LevelFilter::Trace, "");
        assert!(!a.same_scope(&other_provider.logger("worker")));
    }

    #[test]
    fn test_threshold_filters_records() {
        let (provider, buffer) = buffered(LevelFilter::Info, "");
        let logger = provider.root();
        crate::debug!(logger, "hidden");
        crate::info!(logger, "shown");
        crate::error!(logger, "also shown");
        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" shown"));
        assert!(lines[1].ends_with(" also shown"));
    }

    #[test]
    fn test_records_outside_scope_are_dropped() {
        let (provider, buffer) = buffered(LevelFilter::Trace, "app");
        crate::info!(provider.logger("other"), "dropped");
        crate::info!(provider.logger("app::db"), "kept");
        crate::info!(provider.logger("app.cache"), "kept too");
        assert_eq!(buffer.lines().len(), 2);
    }

    #[test]
    fn test_child_inherits_then_overrides() {
        let (provider, buffer) = buffered(LevelFilter::Trace, "app");
        let parent = provider.logger("app::net");
        let child = provider.logger("app::net::tcp");
        parent.set_level(LevelFilter::Warn);
        assert!(!child.is_enabled(Level::Info));
        child.set_level(LevelFilter::Debug);
        assert!(child.is_enabled(Level::Debug));
        child.clear_level();
        assert!(!child.is_enabled(Level::Info));
        assert!(child.is_enabled(Level::Warn));
        crate::warn!(child, "ok");
        assert_eq!(buffer.lines().len(), 1);
    }

    #[test]
    fn test_override_cannot_bypass_handler_threshold() {
        let (provider, buffer) = buffered(LevelFilter::Warn, "");
        let logger = provider.logger("chatty");
        logger.set_level(LevelFilter::Trace);
        crate::debug!(logger, "still hidden");
        assert!(buffer.lines().is_empty());
    }

    #[test]
    fn test_call_site_is_recorded() {
        let (provider, buffer) = buffered(LevelFilter::Trace, "");
        let logger = provider.root();
        crate::info!(logger, "value is {}", 7);
        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        assert_eq!(&line[29..39], "INFO      ");
        assert_eq!(line[40..64].trim_end(), "tests");
        assert!(line[65..71].trim_end().parse::<u32>().is_ok());
        assert_eq!(line[72..100].trim_end(), "test_call_site_is_recorded");
        assert_eq!(&line[101..], "value is 7");
    }

    #[test]
    fn test_off_disables_everything() {
        let (provider, buffer) = buffered(LevelFilter::Off, "");
        crate::error!(provider.root(), "nope");
        assert!(buffer.lines().is_empty());
    }
}
