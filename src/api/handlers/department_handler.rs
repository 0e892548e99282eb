//! Department people widget.

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};

use crate::api::AppState;
use crate::errors::AppResult;
use crate::types::HtmlFragment;

/// Create department routes
pub fn department_routes() -> Router<AppState> {
    Router::new().route("/:department_id/people", get(show_department_people))
}

/// Display the faculty affiliated with a department
#[utoipa::path(
    get,
    path = "/departments/{department_id}/people",
    tag = "Departments",
    params(
        ("department_id" = String, Path, description = "Department identifier", example = "academic_departments:189")
    ),
    responses(
        (status = 200, description = "HTML fragment listing the department's faculty", body = String, content_type = "text/html")
    )
)]
pub async fn show_department_people(
    State(state): State<AppState>,
    Path(department_id): Path<String>,
) -> AppResult<HtmlFragment> {
    let markup = state
        .directory_service
        .department_people(&department_id)
        .await?;
    Ok(HtmlFragment(markup))
}
