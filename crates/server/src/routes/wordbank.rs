use axum::{extract::rejection::JsonRejection, extract::State, Json};
use service::wordbank::WordBank;
use tracing::error;

use crate::errors::ApiError;
use crate::routes::AppState;

/// `GET /api/wordbank`
pub async fn get_word_bank(State(state): State<AppState>) -> Result<Json<WordBank>, ApiError> {
    match state.wordbank.get().await {
        Ok(bank) => Ok(Json(bank)),
        Err(e) => {
            error!(err = %e, "get word bank failed");
            Err(ApiError::internal())
        }
    }
}

/// `POST /api/wordbank`
///
/// Lists missing from the body are stored as empty. A body that is not a JSON
/// object is reported like any other save failure.
pub async fn save_word_bank(
    State(state): State<AppState>,
    body: Result<Json<WordBank>, JsonRejection>,
) -> Result<Json<WordBank>, ApiError> {
    let Json(bank) = body.map_err(|rejection| {
        let detail = rejection.body_text();
        error!(err = %detail, "save word bank: unreadable body");
        ApiError::internal_with(detail)
    })?;

    match state.wordbank.replace(bank).await {
        Ok(stored) => Ok(Json(stored)),
        Err(e) => {
            error!(err = %e, "save word bank failed");
            Err(ApiError::internal_with(e))
        }
    }
}
