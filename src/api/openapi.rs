//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for exploring the widget endpoints.

use utoipa::OpenApi;

use crate::api::handlers::{center_handler, citation_handler, department_handler};

/// OpenAPI documentation for the faculty widgets
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Faculty Widgets",
        version = "0.1.0",
        description = "Embeddable faculty directory and citation HTML fragments",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        center_handler::show_center_people,
        department_handler::show_department_people,
        citation_handler::show_college_citations,
    ),
    tags(
        (name = "Centers", description = "People listings for research centers"),
        (name = "Departments", description = "Faculty listings for departments"),
        (name = "Colleges", description = "Publication listings for colleges")
    )
)]
pub struct ApiDoc;
