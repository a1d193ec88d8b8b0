use core::str::FromStr;

use thiserror::Error;

/// Env var holding the filter directives.
pub const FILTER_ENV: &str = "RUST_LOG";
/// Env var selecting the output format (`json` or `pretty`).
pub const FORMAT_ENV: &str = "COFFEESHOP_LOG_FORMAT";

pub const DEFAULT_FILTER: &str = "info";

/// Output format of the fmt subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format '{0}' (expected 'json' or 'pretty')")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            _ => Err(UnknownLogFormat(s.to_string())),
        }
    }
}

/// Subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
    /// Set when the requested format was not understood and JSON was used instead.
    pub rejected_format: Option<UnknownLogFormat>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            rejected_format: None,
        }
    }
}

impl ObservabilityConfig {
    /// Read settings from `RUST_LOG` and `COFFEESHOP_LOG_FORMAT`.
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var(FILTER_ENV).ok(),
            std::env::var(FORMAT_ENV).ok(),
        )
    }

    pub fn from_values(filter: Option<String>, format: Option<String>) -> Self {
        let filter = filter
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let (format, rejected_format) = match format.as_deref().map(LogFormat::from_str) {
            None => (LogFormat::default(), None),
            Some(Ok(format)) => (format, None),
            Some(Err(err)) => (LogFormat::default(), Some(err)),
        };

        Self {
            filter,
            format,
            rejected_format,
        }
    }
}
