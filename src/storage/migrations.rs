// storage/migrations.rs
// Database migration management

use sqlx::{Pool, Sqlite};

use crate::error_handling::DatabaseError;

/// Runs the SQLx migrations from the `migrations/` directory.
///
/// The migrations are embedded at compile time, so an installed binary does
/// not need the directory next to it.
pub async fn run_migrations(pool: &Pool<Sqlite>) -> Result<(), DatabaseError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
