use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::env;

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS profiles (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        bio TEXT,
        profile_picture TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS documents (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT,
        file TEXT NOT NULL,
        uploaded_at TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS gallery_images (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        image TEXT NOT NULL,
        caption TEXT,
        is_featured INTEGER NOT NULL DEFAULT 0,
        uploaded_at TEXT NOT NULL
    )",
];

pub async fn create_pool() -> SqlitePool {
    let database_url = env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://showcase.db?mode=rwc".to_string());
    connect(&database_url)
        .await
        .expect("Failed to connect to the database")
}

pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    // An in-memory database lives in a single connection; a larger pool
    // would hand out empty databases.
    let max_connections = if database_url.contains(":memory:") { 1 } else { 5 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    init_schema(&pool).await?;
    Ok(pool)
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
