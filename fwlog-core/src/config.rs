use std::sync::LazyLock;

use derive_from_env::FromEnv;

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

#[derive(FromEnv)]
#[from_env(prefix = "FWLOG")]
#[allow(non_snake_case)]
pub struct FwLogConfig {
    #[from_env(default = "false")]
    pub COLOR: bool,
    #[from_env(default = "%Y-%m-%d %H:%M:%S,%3f")]
    pub TIMESTAMP_FORMAT: String,
}

impl Default for FwLogConfig {
    fn default() -> Self {
        Self {
            COLOR: false,
            TIMESTAMP_FORMAT: DEFAULT_TIMESTAMP_FORMAT.into(),
        }
    }
}

/// Environment settings, read once per process.
/// Malformed variables fall back to the defaults.
pub static FWLOG_CONFIG: LazyLock<FwLogConfig> =
    LazyLock::new(|| FwLogConfig::from_env().unwrap_or_default());
