//! Logging configuration read from the environment.

use std::env;

pub const FILTER_VAR: &str = "RUST_LOG";
pub const FORMAT_VAR: &str = "BRENOERP_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Output encoding of log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

impl LogFormat {
    /// Case-insensitive name lookup; `None` for unknown names.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "pretty" => Some(LogFormat::Pretty),
            "compact" => Some(LogFormat::Compact),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `"info,brenoerp_taxid=trace"`.
    pub filter: String,
    pub format: LogFormat,
    /// Whether `filter` came from `RUST_LOG`.
    pub filter_from_env: bool,
    /// Raw format value that did not parse; reported once logging is up.
    pub rejected_format: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            filter_from_env: false,
            rejected_format: None,
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value source; keeps tests off the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let env_filter = lookup(FILTER_VAR).filter(|f| !f.trim().is_empty());
        let filter_from_env = env_filter.is_some();
        let filter = env_filter.unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let (format, rejected_format) = match lookup(FORMAT_VAR) {
            None => (LogFormat::default(), None),
            Some(raw) => match LogFormat::parse(&raw) {
                Some(format) => (format, None),
                None => (LogFormat::default(), Some(raw)),
            },
        };

        Self {
            filter,
            format,
            filter_from_env,
            rejected_format,
        }
    }

    /// Replace the default filter; a filter taken from `RUST_LOG` wins.
    pub fn with_default_filter(mut self, filter: &str) -> Self {
        if !self.filter_from_env {
            self.filter = filter.to_string();
        }
        self
    }
}
