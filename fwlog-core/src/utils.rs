use std::fmt::Write;

use chrono::{DateTime, Local};
use colored::Colorize;
use log::Level;

use crate::{
    config::{DEFAULT_TIMESTAMP_FORMAT, FWLOG_CONFIG},
    level::level_name,
};

const TIME_WIDTH: usize = 28;
const LEVEL_WIDTH: usize = 10;
const MODULE_WIDTH: usize = 24;
const LINE_WIDTH: usize = 6;
const FUNCTION_WIDTH: usize = 28;

#[derive(Debug, Clone)]
pub struct LogMessage {
    pub message: String,
    pub level: Level,
    pub module: String,
    pub line: Option<u32>,
    pub function: String,
}

/// Presentation knobs of the fixed-width layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogStyle {
    pub color: bool,
    pub timestamp_format: String,
}

impl Default for LogStyle {
    fn default() -> Self {
        Self {
            color: FWLOG_CONFIG.COLOR,
            timestamp_format: FWLOG_CONFIG.TIMESTAMP_FORMAT.clone(),
        }
    }
}

/// Last segment of a module path, `a::b::c` gives `c`.
pub fn short_module(module_path: &str) -> &str {
    module_path.rsplit("::").next().unwrap_or(module_path)
}

pub fn format_log(log_message: &LogMessage, style: &LogStyle) -> String {
    format_log_at(log_message, &Local::now(), style)
}

/// Renders `timestamp(28) level(10) module(24) line(6) function(28) message`.
pub fn format_log_at(log_message: &LogMessage, time: &DateTime<Local>, style: &LogStyle) -> String {
    let LogMessage {
        message,
        level,
        module,
        line,
        function,
    } = log_message;
    let mut timestamp = String::new();
    if write!(timestamp, "{}", time.format(&style.timestamp_format)).is_err() {
        timestamp = time.format(DEFAULT_TIMESTAMP_FORMAT).to_string();
    }
    // pad before coloring, escape codes would count towards the width
    let padded = format!("{:<LEVEL_WIDTH$}", level_name(*level));
    let level = if style.color {
        match level {
            Level::Error => padded.red().to_string(),
            Level::Warn => padded.yellow().to_string(),
            Level::Info => padded.green().to_string(),
            Level::Debug => padded.blue().to_string(),
            Level::Trace => padded.purple().to_string(),
        }
    } else {
        padded
    };
    let line = line.map(|l| l.to_string()).unwrap_or_default();
    format!(
        "{timestamp:<TIME_WIDTH$} {level} {module:<MODULE_WIDTH$} {line:<LINE_WIDTH$} {function:<FUNCTION_WIDTH$} {message}"
    )
}
