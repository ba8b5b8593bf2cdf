use axum::extract::{Query, State};
use axum::response::Html;
use board_core::dataset::roster;
use board_core::stats::{self, Breakdown};

use super::BoardQuery;
use crate::error::AppError;
use crate::html::{render_page, PageContext};
use crate::state::AppState;

/// GET /: the board rendered as HTML.
pub async fn index(
    State(app): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Html<String>, AppError> {
    let config = app.config().await?;
    let ctx = PageContext {
        view: query.view(config.display.default_view)?,
        filter: query.filter(config.display.default_priority)?,
        sort: query.sort()?,
        reverse: query.reverse()?,
        locale: query.locale(config.display.locale)?,
        config: &config,
    };
    tracing::debug!(view = %ctx.view, filter = %ctx.filter, "rendering board page");

    let breakdown = Breakdown::compute(roster(), ctx.filter);
    let rows = stats::rows(roster(), ctx.filter, ctx.sort, ctx.reverse);
    Ok(Html(render_page(&ctx, &breakdown, &rows)))
}
