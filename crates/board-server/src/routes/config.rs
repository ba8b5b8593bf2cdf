use axum::extract::State;
use axum::Json;
use board_core::config::Config;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/config: the effective board configuration.
pub async fn get_config(State(app): State<AppState>) -> Result<Json<Config>, AppError> {
    Ok(Json(app.config().await?))
}
