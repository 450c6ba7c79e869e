use std::time::Duration;

use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::Config;

pub async fn get_db_connection(config: &Config) -> Result<DatabaseConnection> {
    info!(
        max_connections = config.max_connections,
        "Connecting to database via Sea-ORM"
    );
    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.max_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(config.sql_logging);
    let db = Database::connect(options).await?;
    Ok(db)
}
