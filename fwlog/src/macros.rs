/// Bare name of the enclosing function.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __fwlog_probe() {}
        $crate::__private::bare_function_name(::std::any::type_name_of_val(&__fwlog_probe))
    }};
}

/// Logs through a [`LoggerHandle`](crate::LoggerHandle) at the given level, recording the call site.
///
/// ```rust
/// use fwlog::{Level, logger_config};
///
/// let logger = logger_config().build().root();
/// fwlog::log!(logger, Level::Info, "{} + {} = {}", 1, 2, 1 + 2);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log(
            $level,
            ::std::module_path!(),
            ::std::option::Option::Some(::std::line!()),
            $crate::function_name!(),
            ::std::format_args!($($arg)+),
        )
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Error, $($arg)+) };
}

#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Warn, $($arg)+) };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Info, $($arg)+) };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Debug, $($arg)+) };
}

#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => { $crate::log!($logger, $crate::Level::Trace, $($arg)+) };
}
