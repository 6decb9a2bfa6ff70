use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

use crate::config::AppConfig;

// Alias para "Pool<Postgres>"
pub type DbPool = Pool<Postgres>;

pub async fn init_db(config: &AppConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
}
