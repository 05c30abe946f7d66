use axum::{extract::State, Json};
use mongodb::bson::Document;

use crate::error::AppError;
use crate::startup::AppState;

/// Return every document in the players collection as a JSON array.
///
/// Documents are passed through unmodified: no field is added, renamed, or
/// dropped on the way out.
pub async fn list_players(State(state): State<AppState>) -> Result<Json<Vec<Document>>, AppError> {
    let players = state.db.list_players().await?;

    Ok(Json(players))
}
