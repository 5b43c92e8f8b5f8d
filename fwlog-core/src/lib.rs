//! # fwlog-core
//! Core utilities for fwlog - fixed-width record layout, level parsing and output writers.

mod config;
mod level;
mod log_writer;
mod utils;

pub use config::{DEFAULT_TIMESTAMP_FORMAT, FWLOG_CONFIG, FwLogConfig};
pub use level::{DEFAULT_LEVEL, LevelParseError, level_name, parse_level};
pub use log_writer::{LogBuffer, LogStderr, LogStdout, LogTarget, LogWriter};
pub use utils::{LogMessage, LogStyle, format_log, format_log_at, short_module};
