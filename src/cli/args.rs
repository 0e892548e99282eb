//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Faculty Widgets - Embeddable faculty directory and citation fragments
#[derive(Parser, Debug)]
#[command(name = "faculty-widgets")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Render a widget fragment to stdout
    Render(RenderArgs),
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to (defaults to the configured host)
    #[arg(short = 'H', long, env = "SERVER_HOST")]
    pub host: Option<String>,

    /// Port to listen on (defaults to the configured port)
    #[arg(short, long, env = "SERVER_PORT")]
    pub port: Option<u16>,
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    #[command(subcommand)]
    pub widget: RenderWidget,
}

/// Widgets that can be rendered
#[derive(Subcommand, Debug)]
pub enum RenderWidget {
    /// People in a center, grouped by role
    Center {
        /// Center system name (e.g., "metalab")
        center_id: String,
    },
    /// Faculty of a department
    Department {
        /// Department identifier
        department_id: String,
    },
    /// Publications of a college
    Citations {
        /// Numeric college identifier
        college_id: u32,
    },
}
