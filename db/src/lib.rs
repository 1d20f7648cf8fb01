use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};
use std::{str::FromStr, sync::Arc};

pub mod message;
pub mod payment;
pub mod property;
pub mod tenant;
pub mod user;

pub mod models {
    pub mod message;
    pub mod payment;
    pub mod property;
    pub mod tenant;
    pub mod user;
}

pub mod dtos {
    pub mod message;
    pub mod payment;
    pub mod property;
    pub mod tenant;
    pub mod user;
}

/// Opens (creating if needed) the database file, enables foreign keys and
/// applies pending migrations.
pub async fn setup(database_url: &str) -> Result<Arc<SqlitePool>, Box<dyn std::error::Error>> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    log::info!("Database ready at {}", database_url);

    Ok(Arc::new(pool))
}

/// Private in-memory database with the schema applied. The pool is pinned to
/// a single connection that never idles out, since every new connection to
/// `:memory:` would see an empty database.
pub async fn setup_in_memory() -> Result<Arc<SqlitePool>, Box<dyn std::error::Error>> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(Arc::new(pool))
}
