//! Configuration: constants, CLI options, and validation.

use clap::{Parser, ValueEnum};

// Default remote endpoints. All three are implementation-defined substitutes
// for public IP/geolocation/pass providers and can be overridden on the CLI,
// which is also how the integration tests point the pipeline at a mock server.

/// Default "what is my IP" service. Returns `{"ip": "<ipv4>"}`.
pub const DEFAULT_IP_ENDPOINT: &str = "https://api.ipify.org?format=json";

/// Default geolocation service. The IP address is appended as a path segment;
/// the response carries `latitude` and `longitude` fields.
pub const DEFAULT_GEO_ENDPOINT: &str = "https://freegeoip.app/json";

/// Default ISS pass-prediction service. Takes `lat` and `lon` query
/// parameters; the response carries the pass list under `response`.
pub const DEFAULT_PASS_ENDPOINT: &str = "http://api.open-notify.org/iss-pass.json";

/// Default User-Agent header value for outbound requests.
pub const DEFAULT_USER_AGENT: &str = concat!("iss_spotter/", env!("CARGO_PKG_VERSION"));

/// Default per-request timeout in seconds (transport-level; the pipeline
/// itself implements no timeout policy).
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Upper bound accepted for `--timeout-seconds`.
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings.
    Warn,
    /// Normal operational output (default).
    Info,
    /// Per-request tracing.
    Debug,
    /// Everything.
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
    /// Colored human-readable lines.
    Plain,
    /// One JSON object per line.
    Json,
}

/// Result output format for the CLI binary.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per pass.
    Text,
    /// The pass list as a JSON array.
    Json,
}

/// A configuration validation failure, naming the offending field.
#[derive(Debug, thiserror::Error)]
#[error("invalid value for {field}: {message}")]
pub struct ConfigValidationError {
    /// The `Config` field that failed validation.
    pub field: &'static str,
    /// Human-readable description of the valid range or format.
    pub message: String,
}

/// Command-line options and configuration.
///
/// This struct is automatically generated by `clap` from the field attributes.
/// All options have sensible defaults and can be overridden via command-line
/// flags.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// iss_spotter
///
/// # Machine-readable output with a shorter timeout
/// iss_spotter --output json --timeout-seconds 5
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "iss_spotter",
    about = "Finds the next upcoming ISS flyover times for your current location."
)]
pub struct Config {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Result output format: text|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// IP-lookup service URL (must return `{"ip": "<ipv4>"}`)
    #[arg(long, default_value = DEFAULT_IP_ENDPOINT)]
    pub ip_endpoint: String,

    /// Geolocation service base URL (the IP is appended as a path segment)
    #[arg(long, default_value = DEFAULT_GEO_ENDPOINT)]
    pub geo_endpoint: String,

    /// Pass-prediction service URL (takes `lat`/`lon` query parameters)
    #[arg(long, default_value = DEFAULT_PASS_ENDPOINT)]
    pub pass_endpoint: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output: OutputFormat::Text,
            ip_endpoint: DEFAULT_IP_ENDPOINT.to_string(),
            geo_endpoint: DEFAULT_GEO_ENDPOINT.to_string(),
            pass_endpoint: DEFAULT_PASS_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Validates the configuration, returning a field-specific error on the
    /// first violation found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: "must be greater than 0".to_string(),
            });
        }
        if self.timeout_seconds > MAX_TIMEOUT_SECS {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: format!("must be at most {MAX_TIMEOUT_SECS} seconds"),
            });
        }
        for (field, endpoint) in [
            ("ip_endpoint", &self.ip_endpoint),
            ("geo_endpoint", &self.geo_endpoint),
            ("pass_endpoint", &self.pass_endpoint),
        ] {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(ConfigValidationError {
                    field,
                    message: format!("must be an http:// or https:// URL, got {endpoint:?}"),
                });
            }
        }
        Ok(())
    }
}
