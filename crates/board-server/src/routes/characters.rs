use axum::extract::{Path, Query, State};
use axum::Json;
use board_core::dataset::{self, roster};
use board_core::stats::{self, CharacterRow};
use board_core::BoardError;

use super::BoardQuery;
use crate::error::AppError;
use crate::state::AppState;

/// GET /api/characters: filtered and sorted table rows.
pub async fn list_characters(
    State(app): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let config = app.config().await?;
    let filter = query.filter(config.display.default_priority)?;
    let sort = query.sort()?;
    let reverse = query.reverse()?;
    let rows = stats::rows(roster(), filter, sort, reverse);
    Ok(Json(serde_json::json!({
        "filter": filter,
        "sort": sort,
        "reverse": reverse,
        "characters": rows,
    })))
}

/// GET /api/characters/{id}
pub async fn get_character(Path(id): Path<String>) -> Result<Json<serde_json::Value>, AppError> {
    let character = dataset::find(&id).ok_or(BoardError::CharacterNotFound(id))?;
    Ok(Json(serde_json::to_value(CharacterRow::from(character))?))
}
