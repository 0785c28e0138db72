//! Handler for per-owner alias statistics.

use axum::{Extension, Json, extract::State};

use crate::api::dto::stats::LinkStatsResponse;
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Returns click statistics for every alias owned by the caller.
///
/// # Endpoint
///
/// `GET /api/links/stats`
///
/// Expired aliases stay in the projection until physically removed.
pub async fn stats_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<LinkStatsResponse>>, AppError> {
    let rows = state.link_service.stats_for_owner(user.id).await?;

    Ok(Json(rows.into_iter().map(LinkStatsResponse::from).collect()))
}
