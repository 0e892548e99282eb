use axum::response::{Html, IntoResponse, Response};

/// Rendered widget markup, served as `text/html; charset=utf-8`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlFragment(pub String);

impl IntoResponse for HtmlFragment {
    fn into_response(self) -> Response {
        Html(self.0).into_response()
    }
}
