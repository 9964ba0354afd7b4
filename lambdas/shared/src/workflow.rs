//! Workflow steps invoked with raw JSON events
//!
//! These run inside an orchestrated workflow rather than behind the API, so
//! failures propagate to the caller instead of being mapped onto a status.

use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use tracing::info;

use crate::customer_id::validate;
use crate::errors::{Error, Result};
use crate::extract::{extract, Inbound, Probe};
use crate::handlers::check_exists;
use crate::models::{ExistsOutcome, InsertOutcome, LogOutcome};
use crate::repository::{Attributes, CustomerRepository};

pub const VALIDATE_EXISTS_PROBES: &[Probe] =
    &[Probe::EventRoot, Probe::EventDetail, Probe::Path, Probe::Header];
pub const INSERT_PROBES: &[Probe] = &[Probe::EventRoot];
pub const LOG_PROBES: &[Probe] = &[Probe::EventRoot, Probe::EventDetail];

pub const CREATED_AT_ATTRIBUTE: &str = "created_at";

/// Existence check; invalid ids and store failures are returned as errors
pub async fn validate_exists<R>(repo: &R, event: &Value) -> Result<ExistsOutcome>
where
    R: CustomerRepository + ?Sized,
{
    let raw = extract(Inbound::Event(event), VALIDATE_EXISTS_PROBES);
    let (id, exists) = check_exists(repo, raw.as_deref()).await?;

    info!(customer_id = %id, exists, "validate_exists ok");
    Ok(ExistsOutcome { exists })
}

/// Conditional insert stamped with `created_at`; an existing id is not an error
pub async fn insert_id<R>(repo: &R, event: &Value) -> Result<InsertOutcome>
where
    R: CustomerRepository + ?Sized,
{
    let raw = extract(Inbound::Event(event), INSERT_PROBES);
    let id = validate(raw.as_deref())?;

    let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
    let attrs = Attributes::from([(CREATED_AT_ATTRIBUTE.to_string(), created_at)]);

    match repo.put(&id, Some(attrs)).await {
        Ok(()) => {
            info!(customer_id = %id, "inserted");
            Ok(InsertOutcome { inserted: true })
        }
        Err(Error::AlreadyExists(_)) => {
            info!(customer_id = %id, "already_existed_at_put");
            Ok(InsertOutcome { inserted: false })
        }
        Err(e) => Err(e),
    }
}

/// Emit one structured record summarising the workflow state
pub fn log_event(event: &Value, request_id: Option<&str>) -> LogOutcome {
    let customer_id = extract(Inbound::Event(event), LOG_PROBES);
    let exists = event["validation"]["exists"].as_bool();
    let inserted = event["insert"]["inserted"].as_bool();

    info!(
        customer_id = customer_id.as_deref(),
        exists,
        inserted,
        request_id,
        "workflow_log"
    );

    LogOutcome { logged: true }
}
