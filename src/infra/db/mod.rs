//! Database connection and health checks.

use std::sync::Arc;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement,
};

use crate::config::Config;

/// Database wrapper for connection management.
///
/// The directory schema is owned by another system; this service only reads
/// from it, so no migrations are run here.
#[derive(Clone)]
pub struct Database {
    connection: Arc<DatabaseConnection>,
}

impl Database {
    /// Open a connection pool to the directory database.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.database_url.clone());
        options.sqlx_logging(false);

        let connection = SeaDatabase::connect(options).await?;
        tracing::info!("Database connected");

        Ok(Self {
            connection: Arc::new(connection),
        })
    }

    /// Get a shared handle to the connection pool.
    pub fn get_connection(&self) -> Arc<DatabaseConnection> {
        self.connection.clone()
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}
