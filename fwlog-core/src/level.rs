use log::{Level, LevelFilter};
use thiserror::Error;

/// Threshold that lets every record through.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Trace;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized log level {0:?}")]
pub struct LevelParseError(pub String);

/// Parses a severity threshold from its name or numeric equivalent.
///
/// Names are case-insensitive. `FATAL`/`CRITICAL` collapse onto `Error`
/// and `NOTSET` means no minimum at all.
///
/// ```
/// use fwlog_core::parse_level;
/// use log::LevelFilter;
///
/// assert_eq!(parse_level("warning").unwrap(), LevelFilter::Warn);
/// assert_eq!(parse_level("50").unwrap(), LevelFilter::Error);
/// assert!(parse_level("loud").is_err());
/// ```
pub fn parse_level(input: &str) -> Result<LevelFilter, LevelParseError> {
    let level = match input.trim().to_ascii_uppercase().as_str() {
        "NOTSET" | "TRACE" | "0" => LevelFilter::Trace,
        "DEBUG" | "10" => LevelFilter::Debug,
        "INFO" | "20" => LevelFilter::Info,
        "WARN" | "WARNING" | "30" => LevelFilter::Warn,
        "ERROR" | "FATAL" | "CRITICAL" | "40" | "50" => LevelFilter::Error,
        "OFF" => LevelFilter::Off,
        _ => return Err(LevelParseError(input.into())),
    };
    Ok(level)
}

/// Name printed in the level column.
pub fn level_name(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARNING",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_names() {
        assert_eq!(parse_level("TRACE"), Ok(LevelFilter::Trace));
        assert_eq!(parse_level("debug"), Ok(LevelFilter::Debug));
        assert_eq!(parse_level(" Info "), Ok(LevelFilter::Info));
        assert_eq!(parse_level("WARN"), Ok(LevelFilter::Warn));
        assert_eq!(parse_level("fatal"), Ok(LevelFilter::Error));
        assert_eq!(parse_level("critical"), Ok(LevelFilter::Error));
        assert_eq!(parse_level("notset"), Ok(LevelFilter::Trace));
        assert_eq!(parse_level("off"), Ok(LevelFilter::Off));
    }

    #[test]
    fn test_parse_level_numbers() {
        assert_eq!(parse_level("0"), Ok(LevelFilter::Trace));
        assert_eq!(parse_level("10"), Ok(LevelFilter::Debug));
        assert_eq!(parse_level("20"), Ok(LevelFilter::Info));
        assert_eq!(parse_level("30"), Ok(LevelFilter::Warn));
        assert_eq!(parse_level("40"), Ok(LevelFilter::Error));
        assert_eq!(parse_level("15"), Err(LevelParseError("15".into())));
    }

    #[test]
    fn test_parse_level_error_message() {
        let err = parse_level("verbose").unwrap_err();
        assert_eq!(err.to_string(), "unrecognized log level \"verbose\"");
    }
}
