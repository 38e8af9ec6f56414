use std::sync::Arc;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::{error, info};

use crate::domain::common::{DatabaseConfig, entities::app_errors::CoreError};

#[derive(Clone)]
pub struct Postgres {
    pub db: Arc<DatabaseConnection>,
}

impl Postgres {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, anyhow::Error> {
        let mut options = ConnectOptions::new(config.url());
        options.sqlx_logging(false);

        let db = Database::connect(options).await?;
        info!(host = %config.host, database = %config.name, "connected to postgres");

        if config.run_migrations {
            sqlx::migrate!("./migrations")
                .run(db.get_postgres_connection_pool())
                .await?;
            info!("database migrations applied");
        }

        Ok(Self { db: Arc::new(db) })
    }

    pub fn get_db(&self) -> Arc<DatabaseConnection> {
        self.db.clone()
    }
}

/// Logs a database failure and turns it into a `CoreError`.
pub(crate) fn database_error(context: &'static str) -> impl Fn(DbErr) -> CoreError {
    move |e| {
        error!("Failed to {}: {}", context, e);
        CoreError::DatabaseError(context.to_string())
    }
}
