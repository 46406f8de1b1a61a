//! `tiny_http` server adapter
//!
//! Translates requests into [`ecoinspect::api::dispatch`] calls and the
//! replies back into HTTP responses. Requests are served one at a time.

use std::io::{Cursor, Read as _};

use log::{info, warn};
use tiny_http::{Header, Request, Response, Server, StatusCode};

use ecoinspect::api::{self, ApiContext, ApiReply, ROLE_HEADER};

/// Serve the API until the process is stopped
pub fn serve(ctx: &ApiContext, host: &str, port: u16) -> anyhow::Result<()> {
    let addr = format!("{host}:{port}");
    let server = Server::http(&addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;
    info!("Listening on http://{addr}");

    for mut request in server.incoming_requests() {
        let reply = handle_request(ctx, &mut request);
        if reply.status >= 400 {
            warn!("{} {} -> {}", request.method(), request.url(), reply.status);
        } else {
            info!("{} {} -> {}", request.method(), request.url(), reply.status);
        }
        if let Err(e) = request.respond(to_response(reply)) {
            warn!("Failed to send response: {e}");
        }
    }

    Ok(())
}

/// Dispatch a single request to the API layer
fn handle_request(ctx: &ApiContext, request: &mut Request) -> ApiReply {
    let method = request.method().to_string();
    let url = request.url().to_string();
    let role = request
        .headers()
        .iter()
        .find(|h| h.field.equiv(ROLE_HEADER))
        .map(|h| h.value.as_str().to_string());

    let mut body = String::new();
    if let Err(e) = request.as_reader().read_to_string(&mut body) {
        let err = api::ApiError::bad_request(format!("Failed to read request body: {e}"));
        let response = api::ApiResponse::<()>::error(err.code.as_str(), &err.message);
        return ApiReply {
            status: err.status_code(),
            body: serde_json::to_string(&response)
                .unwrap_or_else(|_| r#"{"success":false}"#.to_string()),
        };
    }

    api::dispatch(ctx, &method, &url, role.as_deref(), &body)
}

/// Convert an API reply to a JSON HTTP response
fn to_response(reply: ApiReply) -> Response<Cursor<Vec<u8>>> {
    let response =
        Response::from_data(reply.body.into_bytes()).with_status_code(StatusCode(reply.status));
    match Header::from_bytes("Content-Type", "application/json") {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}
