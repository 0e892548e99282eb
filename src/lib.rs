//! Faculty Widgets - Embeddable faculty directory fragments
//!
//! Renders people listings for centers and departments and publication
//! listings for colleges as HTML fragments that other sites embed.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: People, memberships, citations and their rules
//! - **render**: HTML fragment builders
//! - **services**: Widget use cases
//! - **infra**: Database repositories and the citations web service client
//! - **api**: HTTP handlers and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Print a center listing
//! cargo run -- render center metalab
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod render;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Citation, Person, Role};
pub use errors::{AppError, AppResult};
