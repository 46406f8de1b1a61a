//! Request dispatch
//!
//! Maps `(method, path)` to an endpoint, authorizes the caller's role
//! against the endpoint's route policy, then runs the handler. Every
//! endpoint goes through the same [`RouteTable::authorize`] call.
//!
//! [`RouteTable::authorize`]: crate::core::services::RouteTable::authorize

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::models::Role;

use super::error::ApiError;
use super::handlers::{self, ApiContext};
use super::types::ApiResponse;

/// Header carrying the caller's role
pub const ROLE_HEADER: &str = "X-Role";

/// An HTTP-agnostic reply: status code plus JSON body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    /// HTTP status code
    pub status: u16,
    /// Serialized JSON envelope
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    Keywords,
    Classify,
    Annotate,
    Summary,
    Statistics,
}

impl Endpoint {
    fn resolve(method: &str, path: &str) -> Option<Self> {
        match (method.to_ascii_uppercase().as_str(), path) {
            ("GET", "/keywords") => Some(Self::Keywords),
            ("POST", "/classify") => Some(Self::Classify),
            ("POST", "/annotate") => Some(Self::Annotate),
            ("POST", "/summary") => Some(Self::Summary),
            ("POST", "/statistics") => Some(Self::Statistics),
            _ => None,
        }
    }

    /// Route name whose policy guards this endpoint
    const fn route(self) -> &'static str {
        match self {
            Self::Keywords => "keywords",
            Self::Classify | Self::Annotate => "responses",
            Self::Summary => "reports",
            Self::Statistics => "statistics",
        }
    }
}

/// Handle one API request
///
/// `path` may carry a query string and either the `/api/v1` or `/api`
/// prefix. `role` is the raw `X-Role` header value.
#[must_use]
pub fn dispatch(
    ctx: &ApiContext,
    method: &str,
    path: &str,
    role: Option<&str>,
    body: &str,
) -> ApiReply {
    let path = path.split('?').next().unwrap_or(path);
    let api_path = path
        .strip_prefix("/api/v1")
        .or_else(|| path.strip_prefix("/api"))
        .unwrap_or(path);
    let api_path = if api_path.len() > 1 { api_path.trim_end_matches('/') } else { api_path };

    let Some(endpoint) = Endpoint::resolve(method, api_path) else {
        return error_reply(&ApiError::not_found(format!(
            "API endpoint not found: {method} {api_path}"
        )));
    };

    match run(ctx, endpoint, role, body) {
        Ok(reply) => reply,
        Err(e) => error_reply(&e),
    }
}

fn run(
    ctx: &ApiContext,
    endpoint: Endpoint,
    role: Option<&str>,
    body: &str,
) -> Result<ApiReply, ApiError> {
    let role = parse_role(role)?;
    ctx.routes.authorize(endpoint.route(), role)?;

    match endpoint {
        Endpoint::Keywords => success_reply(handlers::get_keywords(ctx)?),
        Endpoint::Classify => success_reply(handlers::classify_responses(ctx, &parse_body(body)?)?),
        Endpoint::Annotate => success_reply(handlers::annotate_records(ctx, &parse_body(body)?)?),
        Endpoint::Summary => success_reply(handlers::summarize_records(ctx, &parse_body(body)?)?),
        Endpoint::Statistics => {
            success_reply(handlers::record_statistics(ctx, &parse_body(body)?)?)
        },
    }
}

fn parse_role(raw: Option<&str>) -> Result<Option<Role>, ApiError> {
    match raw.map(str::trim).filter(|r| !r.is_empty()) {
        None => Ok(None),
        Some(r) => r.parse().map(Some).map_err(|e| ApiError::bad_request(format!("{e}"))),
    }
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::bad_request(format!("Invalid JSON: {e}")))
}

fn success_reply<T: Serialize>(data: T) -> Result<ApiReply, ApiError> {
    let body = serde_json::to_string(&ApiResponse::success(data))
        .map_err(|e| ApiError::internal(e.to_string()))?;
    Ok(ApiReply { status: 200, body })
}

fn error_reply(error: &ApiError) -> ApiReply {
    let response = ApiResponse::<()>::error(error.code.as_str(), &error.message);
    let body =
        serde_json::to_string(&response).unwrap_or_else(|_| r#"{"success":false}"#.to_string());
    ApiReply {
        status: error.status_code(),
        body,
    }
}
