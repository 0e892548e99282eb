//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `render` - Print a widget fragment

pub mod args;

pub use args::{Cli, Commands};
