//! HTTP handler compositions
//!
//! Each handler extracts the id, validates it, acts, then maps the outcome
//! onto a status code. Store and bus failures become the generic 400 for
//! get, delete and submit. Only create reports them as 500.

use lambda_http::Request;
use tracing::{error, info, warn};

use crate::customer_id::{validate, CustomerId};
use crate::errors::{Error, Result};
use crate::events::EventPublisher;
use crate::extract::{extract, Inbound, Probe};
use crate::http::ApiResponse;
use crate::models::{AcceptedResponse, ExistsResponse, MessageResponse};
use crate::repository::CustomerRepository;

pub const GET_PROBES: &[Probe] = &[Probe::Path, Probe::Header, Probe::Query];
pub const PUT_PROBES: &[Probe] = &[Probe::Path, Probe::Header];
pub const DELETE_PROBES: &[Probe] = &[Probe::Path, Probe::Header];
pub const SUBMIT_PROBES: &[Probe] = &[Probe::Body, Probe::Path, Probe::Header];

const INVALID_OR_MISSING: &str = "invalid or missing id";

/// GET: report whether the id is stored
pub async fn get_customer_id<R>(repo: &R, req: &Request) -> ApiResponse
where
    R: CustomerRepository + ?Sized,
{
    let raw = extract(Inbound::Http(req), GET_PROBES);

    match check_exists(repo, raw.as_deref()).await {
        Ok((id, exists)) => {
            info!(customer_id = %id, exists, "get ok");
            ApiResponse::json(
                200,
                &ExistsResponse {
                    exists,
                    id: id.into_inner(),
                },
            )
        }
        Err(e) if e.is_infrastructure() => {
            error!(error = %e, "get failed");
            ApiResponse::error(400, INVALID_OR_MISSING)
        }
        Err(e) => {
            warn!(error = %e, "get rejected");
            ApiResponse::error(400, INVALID_OR_MISSING)
        }
    }
}

/// PUT: create the id if it is not stored yet
pub async fn put_customer_id<R>(repo: &R, req: &Request) -> ApiResponse
where
    R: CustomerRepository + ?Sized,
{
    let Some(raw) = extract(Inbound::Http(req), PUT_PROBES) else {
        warn!("put rejected: missing id");
        return ApiResponse::error(400, "missing id");
    };

    let id = match validate(Some(raw.as_str())) {
        Ok(id) => id,
        Err(e) => {
            warn!(error = %e, "put rejected");
            return ApiResponse::error(400, e.to_string());
        }
    };

    match repo.put(&id, None).await {
        Ok(()) => {
            info!(customer_id = %id, "put ok");
            ApiResponse::json(
                201,
                &MessageResponse {
                    message: "created".to_string(),
                    id: id.into_inner(),
                },
            )
        }
        Err(e @ Error::AlreadyExists(_)) => {
            info!(customer_id = %id, "put conflict");
            ApiResponse::error(e.status_code(), "id already exists")
        }
        Err(e) => {
            error!(customer_id = %id, error = %e, code = e.code(), "put failed");
            ApiResponse::error(500, "internal")
        }
    }
}

/// DELETE: remove the id, 404 when it is not stored
pub async fn delete_customer_id<R>(repo: &R, req: &Request) -> ApiResponse
where
    R: CustomerRepository + ?Sized,
{
    let raw = extract(Inbound::Http(req), DELETE_PROBES);

    match delete_existing(repo, raw.as_deref()).await {
        Ok(id) => {
            info!(customer_id = %id, "delete ok");
            ApiResponse::json(
                200,
                &MessageResponse {
                    message: format!("Customer {} deleted", id),
                    id: id.into_inner(),
                },
            )
        }
        Err(e @ Error::NotFound(_)) => {
            info!(error = %e, "delete not_found");
            ApiResponse::error(e.status_code(), e.to_string())
        }
        Err(e) if e.is_infrastructure() => {
            error!(error = %e, "delete failed");
            ApiResponse::error(400, INVALID_OR_MISSING)
        }
        Err(e) => {
            warn!(error = %e, "delete rejected");
            ApiResponse::error(400, INVALID_OR_MISSING)
        }
    }
}

/// POST: publish a submission event for the id
pub async fn submit_customer_id<P>(publisher: &P, req: &Request) -> ApiResponse
where
    P: EventPublisher + ?Sized,
{
    let raw = extract(Inbound::Http(req), SUBMIT_PROBES);

    let result = async {
        let id = validate(raw.as_deref())?;
        let receipt = publisher.publish(&id).await?;
        Ok::<_, Error>((id, receipt))
    }
    .await;

    match result {
        Ok((id, receipt)) => {
            info!(customer_id = %id, event_id = ?receipt.event_id, "submitted");
            ApiResponse::json(
                202,
                &AcceptedResponse {
                    status: "accepted".to_string(),
                    id: id.into_inner(),
                },
            )
        }
        Err(e) if e.is_infrastructure() => {
            error!(error = %e, "submit failed");
            ApiResponse::error(400, INVALID_OR_MISSING)
        }
        Err(e) => {
            warn!(error = %e, "submit rejected");
            ApiResponse::error(400, INVALID_OR_MISSING)
        }
    }
}

/// Validate and look up, shared with the workflow existence check
pub(crate) async fn check_exists<R>(repo: &R, raw: Option<&str>) -> Result<(CustomerId, bool)>
where
    R: CustomerRepository + ?Sized,
{
    let id = validate(raw)?;
    let exists = repo.exists(&id).await?;
    Ok((id, exists))
}

/// Consistent pre-check, then the conditional delete; both report NotFound
async fn delete_existing<R>(repo: &R, raw: Option<&str>) -> Result<CustomerId>
where
    R: CustomerRepository + ?Sized,
{
    let id = validate(raw)?;
    if !repo.exists(&id).await? {
        return Err(Error::NotFound(id.into_inner()));
    }
    repo.delete(&id).await?;
    Ok(id)
}
