//! Tracing subscriber setup for the Lambda binaries

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Interpret a `LOG_LEVEL` value, falling back to `info`
pub fn parse_level(level: &str) -> LevelFilter {
    match level.trim().to_ascii_uppercase().as_str() {
        "TRACE" => LevelFilter::TRACE,
        "DEBUG" => LevelFilter::DEBUG,
        "INFO" => LevelFilter::INFO,
        "WARN" | "WARNING" => LevelFilter::WARN,
        "ERROR" | "CRITICAL" => LevelFilter::ERROR,
        "OFF" => LevelFilter::OFF,
        _ => LevelFilter::INFO,
    }
}

/// Install the JSON subscriber; call once from `main`
pub fn init(config: &Config) {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::new(parse_level(&config.log_level).to_string()))
        .with_target(false)
        .without_time()
        .init();
}
