use axum::extract::{Path, State};
use axum::Json;
use tracing::info;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::Statistic;

/// `GET /api/statistic/:tag`: graded summary and normalized battle log.
pub async fn statistic(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Json<Statistic>, ApiError> {
    let tag = tag.trim();
    if tag.is_empty() {
        return Err(ApiError::BadRequest("player tag is required".to_string()));
    }

    let items = state.source.battlelog(tag).await?;
    let statistic = state.statistics.build(&items, tag);
    info!(
        player_tag = %tag,
        battles = statistic.battlelogs.len(),
        "Served statistic"
    );

    Ok(Json(statistic))
}
