//! API layer - HTTP handlers and routes
//!
//! This module contains all HTTP-related concerns:
//! - Widget handlers
//! - Route definitions and OpenAPI docs

pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
