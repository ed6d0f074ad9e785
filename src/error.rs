use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// The only error kind surfaced to clients.
///
/// Every backend failure (connectivity, constraint violation, malformed
/// statement) collapses into HTTP 500 with an opaque `message`. The
/// underlying cause is logged server-side and never reaches the response.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Database {
        message: String,
        #[source]
        source: sqlx::Error,
    },
}

impl AppError {
    pub fn database(message: impl Into<String>, source: sqlx::Error) -> Self {
        AppError::Database {
            message: message.into(),
            source,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Database { message, source } => {
                tracing::error!(error = %source, "{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(json!({ "message": message }));
        (status, body).into_response()
    }
}
