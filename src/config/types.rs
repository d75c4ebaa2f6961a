//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_ACCURACY_RADIUS_THRESHOLD, DEFAULT_PORT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
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
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration.
///
/// Parsed from the command line by the binary; tests construct it with
/// `Config::default()` and override individual fields.
///
/// The geolocation database paths are each optional: an unconfigured database
/// simply contributes nothing to lookups, while a configured path that cannot
/// be opened is fatal at startup.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "request_trust",
    about = "Enriches inbound HTTP requests with a geolocation-derived trust profile"
)]
pub struct Config {
    /// Port to bind the HTTP server on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Path to the MaxMind GeoLite2 Country database (.mmdb)
    #[arg(long)]
    pub geoip_country: Option<PathBuf>,

    /// Path to the MaxMind GeoLite2 City database (.mmdb)
    #[arg(long)]
    pub geoip_city: Option<PathBuf>,

    /// Path to the MaxMind GeoLite2 ASN database (.mmdb)
    #[arg(long)]
    pub geoip_asn: Option<PathBuf>,

    /// Path to a JSON file containing an array of datacenter CIDR blocks.
    /// Falls back to the built-in list when not provided.
    #[arg(long)]
    pub datacenter_blocks: Option<PathBuf>,

    /// Accuracy radius above which a geolocation fix is treated as VPN-like
    #[arg(long, default_value_t = DEFAULT_ACCURACY_RADIUS_THRESHOLD)]
    pub vpn_accuracy_threshold: u16,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            geoip_country: None,
            geoip_city: None,
            geoip_asn: None,
            datacenter_blocks: None,
            vpn_accuracy_threshold: DEFAULT_ACCURACY_RADIUS_THRESHOLD,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
