//! Database connection, schema migrations and initial content.

pub mod migration;
pub mod seed;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;
use tracing::{info, instrument};

/// Connect to the content database and bring the schema up to date.
///
/// `?mode=rwc` in a SQLite URL creates the file on first start. In-memory
/// databases are limited to one pooled connection, since every new
/// connection would otherwise open its own empty database.
#[instrument(name = "init_db", skip_all)]
pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(database_url);
    opts.connect_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(cfg!(debug_assertions));

    if database_url.contains(":memory:") {
        opts.max_connections(1).min_connections(1);
    } else {
        opts.max_connections(8);
    }

    info!("Connecting to database at: {}", database_url);
    let db = Database::connect(opts).await?;

    Migrator::up(&db, None).await?;
    info!("Database schema is up to date");

    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{hero_section, repository};

    #[tokio::test]
    async fn test_init_db_creates_empty_tables() {
        let db = init_db("sqlite::memory:").await.unwrap();
        let heroes = repository::list::<hero_section::Entity, _>(&db).await.unwrap();
        assert!(heroes.is_empty());
    }

    #[tokio::test]
    async fn test_migrations_are_repeatable() {
        let db = init_db("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
    }
}
