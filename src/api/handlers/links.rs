//! Handlers for owner-scoped alias management.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, LinkResponse, ListLinksParams};
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates an alias for the authenticated user.
///
/// # Endpoint
///
/// `POST /api/links/create`
///
/// # Errors
///
/// Returns 422 if the target URL is not a valid absolute HTTP(S) URL,
/// 401 without a valid bearer token.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_alias(&payload.target_url, user.id)
        .await?;

    tracing::info!(user_id = user.id, code = %link.short_code, "alias created");

    Ok((StatusCode::CREATED, Json(LinkResponse::from(link))))
}

/// Lists the authenticated user's aliases.
///
/// # Endpoint
///
/// `GET /api/links/list?is_active=&skip=&limit=`
///
/// Aliases owned by other users are never included. Ordering is stable
/// creation order.
pub async fn list_links_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Query(params): Query<ListLinksParams>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let (skip, limit) = params
        .validate_and_get_range()
        .map_err(|e| AppError::validation(e, json!({})))?;

    let links = state
        .link_service
        .list_for_owner(user.id, params.is_active, skip, limit)
        .await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Deactivates an alias owned by the authenticated user.
///
/// # Endpoint
///
/// `POST /api/links/{code}/deactivate`
///
/// Idempotent: deactivating an already-inactive alias returns 200 with the
/// stored state.
///
/// # Errors
///
/// Returns 404 for unknown codes, 403 when the caller is not the owner.
pub async fn deactivate_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.deactivate(&code, &user).await?;

    tracing::info!(user_id = user.id, code = %link.short_code, "alias deactivated");

    Ok(Json(LinkResponse::from(link)))
}
