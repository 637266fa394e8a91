use sqlx::SqlitePool;

use showcase_backend::db;

pub async fn test_pool() -> SqlitePool {
    db::connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database")
}
