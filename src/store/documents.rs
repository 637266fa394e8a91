use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::errors::AppError;
use crate::models::document::Document;

pub struct NewDocument {
    pub title: String,
    pub description: Option<String>,
    pub file: String,
}

#[derive(Default)]
pub struct DocumentChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub file: Option<String>,
}

#[derive(Default)]
pub struct DocumentQuery {
    pub q: Option<String>,
    pub uploaded_from: Option<DateTime<Utc>>,
    pub uploaded_to: Option<DateTime<Utc>>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

pub async fn insert(pool: &SqlitePool, new: NewDocument) -> Result<Document, AppError> {
    super::require_short_text("title", &new.title)?;
    super::require_file_ref("file", &new.file)?;

    let now = Utc::now();
    let id = sqlx::query(
        "INSERT INTO documents (title, description, file, uploaded_at) VALUES (?, ?, ?, ?)",
    )
    .bind(&new.title)
    .bind(&new.description)
    .bind(&new.file)
    .bind(now)
    .execute(pool)
    .await
    .map_err(|err| AppError::Database(err.to_string()))?
    .last_insert_rowid();

    get(pool, id).await
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Document, AppError> {
    sqlx::query_as::<_, Document>("SELECT * FROM documents WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|err| AppError::Database(err.to_string()))?
        .ok_or_else(|| AppError::NotFound("Document not found".to_string()))
}

pub async fn update(pool: &SqlitePool, id: i64, changes: DocumentChanges) -> Result<Document, AppError> {
    let current = get(pool, id).await?;

    if let Some(title) = &changes.title {
        super::require_short_text("title", title)?;
    }
    if let Some(file) = &changes.file {
        super::require_file_ref("file", file)?;
    }

    sqlx::query("UPDATE documents SET title = ?, description = ?, file = ? WHERE id = ?")
        .bind(changes.title.as_ref().unwrap_or(&current.title))
        .bind(changes.description.as_ref().or(current.description.as_ref()))
        .bind(changes.file.as_ref().unwrap_or(&current.file))
        .bind(id)
        .execute(pool)
        .await
        .map_err(|err| AppError::Database(err.to_string()))?;

    get(pool, id).await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM documents WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|err| AppError::Database(err.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Document not found".to_string()));
    }
    Ok(())
}

/// Ordered scan, newest uploaded_at first.
pub async fn list(pool: &SqlitePool, limit: i64, offset: i64) -> Result<Vec<Document>, AppError> {
    sqlx::query_as::<_, Document>(
        "SELECT * FROM documents ORDER BY uploaded_at DESC LIMIT ? OFFSET ?",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
    .map_err(|err| AppError::Database(err.to_string()))
}

pub async fn count(pool: &SqlitePool) -> Result<i64, AppError> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM documents")
        .fetch_one(pool)
        .await
        .map_err(|err| AppError::Database(err.to_string()))
}

pub async fn search(pool: &SqlitePool, query: &DocumentQuery) -> Result<Vec<Document>, AppError> {
    let mut builder: sqlx::QueryBuilder<'_, sqlx::Sqlite> =
        sqlx::QueryBuilder::new("SELECT * FROM documents WHERE 1 = 1");

    if let Some(q) = &query.q {
        let pattern = super::like_pattern(q);
        builder.push(" AND (LOWER(title) LIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" ESCAPE '\\' OR LOWER(description) LIKE ");
        builder.push_bind(pattern);
        builder.push(" ESCAPE '\\')");
    }
    if let Some(from) = query.uploaded_from {
        builder.push(" AND uploaded_at >= ");
        builder.push_bind(from);
    }
    if let Some(to) = query.uploaded_to {
        builder.push(" AND uploaded_at <= ");
        builder.push_bind(to);
    }

    let (limit, offset) = super::scan_window(query.limit, query.offset);
    builder.push(" ORDER BY uploaded_at DESC LIMIT ");
    builder.push_bind(limit);
    builder.push(" OFFSET ");
    builder.push_bind(offset);

    builder
        .build_query_as::<Document>()
        .fetch_all(pool)
        .await
        .map_err(|err| AppError::Database(err.to_string()))
}
