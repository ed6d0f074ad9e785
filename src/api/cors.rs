//! Origin allow-list enforcement.
//!
//! Requests without an `Origin` header (same-origin, curl, server-to-server)
//! pass through unconditionally. Requests bearing an `Origin` must match the
//! configured allow-list exactly, otherwise they are rejected before any
//! route handler runs.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::api::AppState;

/// Rejection for requests from origins outside the allow-list.
#[derive(Debug)]
pub struct OriginRejection;

impl IntoResponse for OriginRejection {
    fn into_response(self) -> Response {
        (StatusCode::FORBIDDEN, "Not allowed by CORS").into_response()
    }
}

pub async fn enforce_origin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, OriginRejection> {
    let origin = match request.headers().get(header::ORIGIN) {
        Some(value) => value,
        None => return Ok(next.run(request).await),
    };

    match origin.to_str() {
        Ok(origin) if state.config.allowed_origins.iter().any(|o| o.as_str() == origin) => {
            Ok(next.run(request).await)
        }
        Ok(origin) => {
            tracing::warn!("Blocked origin: {}", origin);
            Err(OriginRejection)
        }
        Err(_) => {
            tracing::warn!("Blocked origin: <non-ascii>");
            Err(OriginRejection)
        }
    }
}
