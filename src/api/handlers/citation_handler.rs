//! College citations widget.

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};

use crate::api::AppState;
use crate::errors::AppResult;
use crate::types::HtmlFragment;

/// Create college routes
pub fn college_routes() -> Router<AppState> {
    Router::new().route("/:college_id/citations", get(show_college_citations))
}

/// Display faculty publications for a college, newest year first
#[utoipa::path(
    get,
    path = "/colleges/{college_id}/citations",
    tag = "Colleges",
    params(
        ("college_id" = u32, Path, description = "Numeric college identifier", example = 52)
    ),
    responses(
        (status = 200, description = "HTML fragment with per-year citation accordions", body = String, content_type = "text/html"),
        (status = 400, description = "Non-numeric college id"),
        (status = 502, description = "Citations service failed")
    )
)]
pub async fn show_college_citations(
    State(state): State<AppState>,
    Path(college_id): Path<u32>,
) -> AppResult<HtmlFragment> {
    let markup = state.citation_service.college_citations(college_id).await?;
    Ok(HtmlFragment(markup))
}
