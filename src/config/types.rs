//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    MAX_REDIRECT_HOPS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// Every option can also be supplied through the environment variable named
/// in its `env` attribute, which is how the API key is normally provided
/// (directly or through a `.env` file).
///
/// # Examples
///
/// ```bash
/// API_KEY=secret page_extract --port 8080
///
/// page_extract --bind 0.0.0.0 --timeout-seconds 5 --log-format json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "page_extract",
    about = "Fetches a page and extracts values from it with named CSS, XPath and regex selectors."
)]
pub struct Opt {
    /// Pre-shared secret expected in the X-API-Key header
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Address to bind the HTTP server to
    #[arg(long, env = "PAGE_EXTRACT_BIND", default_value = DEFAULT_BIND_ADDRESS)]
    pub bind: String,

    /// Port to listen on
    #[arg(long, env = "PAGE_EXTRACT_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Upstream fetch timeout in seconds
    #[arg(long, env = "PAGE_EXTRACT_TIMEOUT_SECONDS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value sent upstream
    #[arg(long, env = "PAGE_EXTRACT_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Maximum redirect hops followed when a request asks to follow redirects
    #[arg(long, default_value_t = MAX_REDIRECT_HOPS)]
    pub max_redirects: usize,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use page_extract::Config;
///
/// let config = Config {
///     api_key: Some("secret".to_string()),
///     port: 8080,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Pre-shared API key; `None` makes every authenticated request fail with 500
    pub api_key: Option<String>,

    /// Address to bind the HTTP server to
    pub bind: String,

    /// Port to listen on
    pub port: u16,

    /// Upstream fetch timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Maximum redirect hops when following redirects
    pub max_redirects: usize,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            bind: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: MAX_REDIRECT_HOPS,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            // An empty API_KEY= line in .env means "not configured"
            api_key: opt.api_key.filter(|key| !key.is_empty()),
            bind: opt.bind,
            port: opt.port,
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent,
            max_redirects: opt.max_redirects,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_key, None);
        assert_eq!(config.bind, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert_eq!(config.timeout_seconds, 15);
        assert_eq!(config.max_redirects, 10);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_opt_parses_flags() {
        let opt = Opt::try_parse_from([
            "page_extract",
            "--api-key",
            "secret",
            "--port",
            "9000",
            "--timeout-seconds",
            "3",
            "--log-format",
            "json",
        ])
        .expect("flags should parse");

        let config = Config::from(opt);
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.port, 9000);
        assert_eq!(config.timeout_seconds, 3);
        assert!(matches!(config.log_format, LogFormat::Json));
    }

    #[test]
    fn test_empty_api_key_is_not_configured() {
        let opt = Opt::try_parse_from(["page_extract", "--api-key", ""]).expect("should parse");
        assert_eq!(Config::from(opt).api_key, None);
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let result = Opt::try_parse_from(["page_extract", "--log-level", "loud"]);
        assert!(result.is_err());
    }
}
