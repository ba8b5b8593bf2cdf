use axum::extract::{Query, State};
use axum::Json;
use board_core::dataset::roster;
use board_core::stats::{stage_breakdown, status_shares, summarize, StageStats};

use super::BoardQuery;
use crate::error::AppError;
use crate::state::AppState;

/// GET /api/stats: stage-level totals and status shares for the filter.
pub async fn get_stats(
    State(app): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let config = app.config().await?;
    let filter = query.filter(config.display.default_priority)?;
    let stats = summarize(roster(), filter);
    let shares = status_shares(&stats.counts);
    Ok(Json(serde_json::json!({
        "stats": stats,
        "shares": shares,
    })))
}

/// GET /api/stages: per-stage revision and in-progress backlog.
pub async fn get_stages(
    State(app): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Json<Vec<StageStats>>, AppError> {
    let config = app.config().await?;
    let filter = query.filter(config.display.default_priority)?;
    Ok(Json(stage_breakdown(roster(), filter)))
}
