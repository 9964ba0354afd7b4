//! Locating a candidate customer id in an inbound request or event
//!
//! Each handler names the locations it accepts as an ordered list of
//! [`Probe`]s. The first probe that yields a non-empty string wins; nothing
//! here validates the format.

use base64::{engine::general_purpose::STANDARD, Engine};
use lambda_http::{Body, Request, RequestExt};
use serde_json::Value;

const ID_FIELD: &str = "id";
const HEADER_VARIANTS: [&str; 3] = ["id", "Id", "ID"];

/// The shapes a handler can be invoked with
#[derive(Debug, Clone, Copy)]
pub enum Inbound<'a> {
    /// API Gateway request decoded by `lambda_http`
    Http(&'a Request),
    /// Raw JSON event, either gateway-shaped or a workflow payload
    Event(&'a Value),
}

/// A location that may carry the customer id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// `pathParameters.id`
    Path,
    /// `id` header, any case
    Header,
    /// `queryStringParameters.id`
    Query,
    /// `id` field of the JSON body
    Body,
    /// top-level `id` of an event
    EventRoot,
    /// `detail.id` of an event
    EventDetail,
}

/// Run the probes in order and return the first non-empty candidate
pub fn extract(inbound: Inbound<'_>, probes: &[Probe]) -> Option<String> {
    probes.iter().find_map(|probe| match inbound {
        Inbound::Http(req) => from_request(req, *probe),
        Inbound::Event(event) => from_event(event, *probe),
    })
}

fn from_request(req: &Request, probe: Probe) -> Option<String> {
    match probe {
        Probe::Path => non_empty(req.path_parameters().first(ID_FIELD)),
        // HeaderMap lookups are case-insensitive
        Probe::Header => non_empty(req.headers().get(ID_FIELD).and_then(|v| v.to_str().ok())),
        Probe::Query => non_empty(req.query_string_parameters().first(ID_FIELD)),
        Probe::Body => body_id(req.body()),
        Probe::EventRoot | Probe::EventDetail => None,
    }
}

fn from_event(event: &Value, probe: Probe) -> Option<String> {
    match probe {
        Probe::Path => string_field(&event["pathParameters"][ID_FIELD]),
        Probe::Header => HEADER_VARIANTS
            .iter()
            .find_map(|name| string_field(&event["headers"][*name])),
        Probe::Query => string_field(&event["queryStringParameters"][ID_FIELD]),
        Probe::Body => event_body_id(event),
        Probe::EventRoot => string_field(&event[ID_FIELD]),
        Probe::EventDetail => string_field(&event["detail"][ID_FIELD]),
    }
}

/// Body already decoded by the HTTP adapter
fn body_id(body: &Body) -> Option<String> {
    let bytes: &[u8] = body;
    if bytes.is_empty() {
        return None;
    }
    let parsed: Value = serde_json::from_slice(bytes).ok()?;
    string_field(&parsed[ID_FIELD])
}

fn event_body_id(event: &Value) -> Option<String> {
    match event.get("body")? {
        Value::String(raw) => {
            let parsed: Value = if event["isBase64Encoded"].as_bool().unwrap_or(false) {
                let decoded = STANDARD.decode(raw).ok()?;
                serde_json::from_slice(&decoded).ok()?
            } else {
                serde_json::from_str(raw).ok()?
            };
            string_field(&parsed[ID_FIELD])
        }
        body @ Value::Object(_) => string_field(&body[ID_FIELD]),
        _ => None,
    }
}

fn string_field(value: &Value) -> Option<String> {
    non_empty(value.as_str())
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_string)
}
