//! Center people widget.

use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::AppState;
use crate::errors::AppResult;
use crate::types::HtmlFragment;

/// Query parameters of the center listing
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CenterQuery {
    /// System name of the center. A missing id lists nobody.
    #[serde(default)]
    #[param(example = "metalab")]
    pub center_id: String,
}

/// Create center routes
pub fn center_routes() -> Router<AppState> {
    Router::new().route("/people", get(show_center_people))
}

/// Display the people in a center, grouped into director, staff and affiliate sections
#[utoipa::path(
    get,
    path = "/centers/people",
    tag = "Centers",
    params(CenterQuery),
    responses(
        (status = 200, description = "HTML fragment listing the center's people", body = String, content_type = "text/html")
    )
)]
pub async fn show_center_people(
    State(state): State<AppState>,
    Query(query): Query<CenterQuery>,
) -> AppResult<HtmlFragment> {
    let markup = state.directory_service.center_people(&query.center_id).await?;
    Ok(HtmlFragment(markup))
}
