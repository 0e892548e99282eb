//! Render command - Prints a widget fragment without starting the server.

use crate::cli::args::{RenderArgs, RenderWidget};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;
use crate::services::{ServiceContainer, Services};

/// Execute the render command
pub async fn execute(args: RenderArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;
    let services = Services::from_connection(db.get_connection(), &config)?;

    let markup = match args.widget {
        RenderWidget::Center { center_id } => {
            tracing::info!("Rendering center: {}", center_id);
            services.directory().center_people(&center_id).await?
        }
        RenderWidget::Department { department_id } => {
            tracing::info!("Rendering department: {}", department_id);
            services.directory().department_people(&department_id).await?
        }
        RenderWidget::Citations { college_id } => {
            tracing::info!("Rendering citations for college: {}", college_id);
            services.citations().college_citations(college_id).await?
        }
    };

    println!("{}", markup);
    Ok(())
}
