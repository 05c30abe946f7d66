use axum::extract::State;

use crate::error::AppError;
use crate::startup::AppState;

/// Report the MongoDB server version from the admin status command.
pub async fn mongo_version(State(state): State<AppState>) -> Result<String, AppError> {
    let version = state.db.server_version().await?;

    Ok(format!(
        "This app is connected with MongoDB version {}",
        version
    ))
}
