//! Environment configuration
//!
//! Read once at cold start. Every key is optional; empty values count as
//! unset.

use aws_config::{BehaviorVersion, Region, SdkConfig};

pub const TABLE_NAME_ENV: &str = "TABLE_NAME";
pub const REGION_ENV: &str = "AWS_REGION";
pub const DEFAULT_REGION_ENV: &str = "AWS_DEFAULT_REGION";
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
pub const EVENT_BUS_NAME_ENV: &str = "EVENT_BUS_NAME";
pub const EVENT_SOURCE_ENV: &str = "EVENT_SOURCE";
pub const EVENT_DETAIL_TYPE_ENV: &str = "EVENT_DETAIL_TYPE";

const DEFAULT_TABLE_NAME: &str = "customer_ids";
const DEFAULT_REGION: &str = "eu-central-1";
const DEFAULT_LOG_LEVEL: &str = "INFO";
const DEFAULT_EVENT_BUS_NAME: &str = "default";
const DEFAULT_EVENT_SOURCE: &str = "customers.api";
const DEFAULT_EVENT_DETAIL_TYPE: &str = "Customer.Submitted";

/// Settings shared by every Lambda in the workspace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub table_name: String,
    pub region: String,
    pub log_level: String,
    pub event_bus_name: String,
    pub event_source: String,
    pub event_detail_type: String,
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary lookup (for testing)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        Self {
            table_name: or(TABLE_NAME_ENV, DEFAULT_TABLE_NAME),
            region: get(REGION_ENV)
                .or_else(|| get(DEFAULT_REGION_ENV))
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
            log_level: or(LOG_LEVEL_ENV, DEFAULT_LOG_LEVEL),
            event_bus_name: or(EVENT_BUS_NAME_ENV, DEFAULT_EVENT_BUS_NAME),
            event_source: or(EVENT_SOURCE_ENV, DEFAULT_EVENT_SOURCE),
            event_detail_type: or(EVENT_DETAIL_TYPE_ENV, DEFAULT_EVENT_DETAIL_TYPE),
        }
    }

    /// Load the AWS SDK configuration pinned to the configured region
    pub async fn sdk_config(&self) -> SdkConfig {
        aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()))
            .load()
            .await
    }
}
