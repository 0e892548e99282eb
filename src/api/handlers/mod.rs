//! HTTP request handlers.

pub mod center_handler;
pub mod citation_handler;
pub mod department_handler;

pub use center_handler::center_routes;
pub use citation_handler::college_routes;
pub use department_handler::department_routes;
