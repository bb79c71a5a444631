//! Response Envelope Middleware
//!
//! The single boundary that normalizes every API response:
//! - success: `{success: true, data, timestamp, path}`
//! - error:   `{success: false, statusCode, timestamp, path, message, details?}`
//!
//! Typed errors already arrive in envelope shape (minus `path`, which
//! only this layer knows); framework-generated plain-text rejections
//! are normalized into the same shape so no response bypasses the
//! contract. Non-JSON success bodies (served files) and 204 responses
//! pass through untouched.

use axum::Json;
use axum::body::{Body, to_bytes};
use axum::extract::Request;
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde_json::{Value, json};

/// Upper bound on buffered response bodies (matches the upload cap)
const MAX_BODY: usize = 8 * 1024 * 1024;

pub async fn envelope(req: Request<Body>, next: Next) -> Response {
    // Nested routers see stripped paths; the original URI travels in
    // request extensions
    let path = req
        .extensions()
        .get::<axum::extract::OriginalUri>()
        .map(|uri| uri.path().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());
    let response = next.run(req).await;
    wrap(response, &path).await
}

async fn wrap(response: Response, path: &str) -> Response {
    let status = response.status();

    // Bodiless success: nothing to wrap
    if status == StatusCode::NO_CONTENT {
        return response;
    }

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));

    // Binary/file success responses pass through untouched
    if status.is_success() && !is_json {
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, MAX_BODY).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(error = %e, "Failed to buffer response body");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(error_envelope(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    path,
                    "Internal Server Error",
                )),
            )
                .into_response();
        }
    };

    if status.is_success() {
        let data = serde_json::from_slice::<Value>(&bytes).unwrap_or(Value::Null);
        let body = json!({
            "success": true,
            "data": data,
            "timestamp": Utc::now().to_rfc3339(),
            "path": path,
        });
        return (parts.status, Json(body)).into_response();
    }

    // Typed errors already carry the envelope; fill in the path
    if is_json {
        if let Ok(mut body) = serde_json::from_slice::<Value>(&bytes) {
            if body.get("success").is_some() {
                body["path"] = Value::String(path.to_string());
                return (parts.status, Json(body)).into_response();
            }
        }
    }

    // Framework-generated rejection (plain text or foreign JSON)
    let message = String::from_utf8_lossy(&bytes).trim().to_string();
    let message = if message.is_empty() {
        status.canonical_reason().unwrap_or("Error")
    } else {
        &message
    };

    (parts.status, Json(error_envelope(status, path, message))).into_response()
}

fn error_envelope(status: StatusCode, path: &str, message: &str) -> Value {
    json!({
        "success": false,
        "statusCode": status.as_u16(),
        "timestamp": Utc::now().to_rfc3339(),
        "path": path,
        "message": message,
    })
}
