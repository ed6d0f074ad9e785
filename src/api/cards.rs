use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::domain::Card;
use crate::error::AppError;

/// Request body for add and update.
///
/// Both fields are optional so that absent fields still deserialize; they
/// are bound as SQL NULL and rejected by the schema, not by the service.
#[derive(Debug, Deserialize)]
pub struct CardPayload {
    pub card_name: Option<String>,
    pub card_pic: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn all_cards(State(state): State<AppState>) -> Result<Json<Vec<Card>>, AppError> {
    let cards = state
        .repo
        .list_cards()
        .await
        .map_err(|e| AppError::database("Server error for allcards", e))?;

    Ok(Json(cards))
}

pub async fn add_card(
    State(state): State<AppState>,
    Json(payload): Json<CardPayload>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let name = payload.card_name.clone().unwrap_or_default();

    state
        .repo
        .insert_card(payload.card_name.as_deref(), payload.card_pic.as_deref())
        .await
        .map_err(|e| {
            AppError::database(format!("Server error - could not add card {}", name), e)
        })?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("Card {} added Successfully", name),
        }),
    ))
}

/// Overwrites both fields unconditionally. A nonexistent id affects zero
/// rows and still reports success.
pub async fn update_card(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CardPayload>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .repo
        .update_card(id, payload.card_name.as_deref(), payload.card_pic.as_deref())
        .await
        .map_err(|e| AppError::database("Server error - could not update card", e))?;

    Ok(Json(MessageResponse {
        message: "Card updated successfully".to_string(),
    }))
}

/// A nonexistent id affects zero rows and still reports success.
pub async fn delete_card(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .repo
        .delete_card(id)
        .await
        .map_err(|e| AppError::database("Server error - could not delete card", e))?;

    Ok(Json(MessageResponse {
        message: "Card deleted successfully".to_string(),
    }))
}
