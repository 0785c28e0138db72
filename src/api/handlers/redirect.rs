//! Handler for public alias resolution.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`, the only operation reachable without a token.
///
/// A successful resolution counts one click before the redirect is
/// returned; rejected resolutions never count.
///
/// # Errors
///
/// Returns 404 for unknown codes, 410 Gone for codes that exist but are
/// deactivated or past their expiry.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let link = state.link_service.resolve(&code).await?;

    tracing::debug!(code = %link.short_code, clicks = link.click_count, "redirect served");

    Ok(Redirect::temporary(&link.target_url))
}
