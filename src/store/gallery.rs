use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::errors::AppError;
use crate::models::gallery::GalleryImage;

pub struct NewGalleryImage {
    pub title: String,
    pub image: String,
    pub caption: Option<String>,
    /// None falls back to the schema default (not featured).
    pub is_featured: Option<bool>,
}

#[derive(Default)]
pub struct GalleryImageChanges {
    pub title: Option<String>,
    pub image: Option<String>,
    pub caption: Option<String>,
    pub is_featured: Option<bool>,
}

#[derive(Default)]
pub struct GalleryQuery {
    pub q: Option<String>,
    pub featured: Option<bool>,
    pub uploaded_from: Option<DateTime<Utc>>,
    pub uploaded_to: Option<DateTime<Utc>>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

pub async fn insert(pool: &SqlitePool, new: NewGalleryImage) -> Result<GalleryImage, AppError> {
    super::require_short_text("title", &new.title)?;
    super::require_file_ref("image", &new.image)?;

    let now = Utc::now();
    let id = sqlx::query(
        "INSERT INTO gallery_images (title, image, caption, is_featured, uploaded_at) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&new.title)
    .bind(&new.image)
    .bind(&new.caption)
    .bind(new.is_featured.unwrap_or(false))
    .bind(now)
    .execute(pool)
    .await
    .map_err(|err| AppError::Database(err.to_string()))?
    .last_insert_rowid();

    get(pool, id).await
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<GalleryImage, AppError> {
    sqlx::query_as::<_, GalleryImage>("SELECT * FROM gallery_images WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|err| AppError::Database(err.to_string()))?
        .ok_or_else(|| AppError::NotFound("Gallery image not found".to_string()))
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    changes: GalleryImageChanges,
) -> Result<GalleryImage, AppError> {
    let current = get(pool, id).await?;

    if let Some(title) = &changes.title {
        super::require_short_text("title", title)?;
    }
    if let Some(image) = &changes.image {
        super::require_file_ref("image", image)?;
    }

    sqlx::query(
        "UPDATE gallery_images SET title = ?, image = ?, caption = ?, is_featured = ? WHERE id = ?",
    )
    .bind(changes.title.as_ref().unwrap_or(&current.title))
    .bind(changes.image.as_ref().unwrap_or(&current.image))
    .bind(changes.caption.as_ref().or(current.caption.as_ref()))
    .bind(changes.is_featured.unwrap_or(current.is_featured))
    .bind(id)
    .execute(pool)
    .await
    .map_err(|err| AppError::Database(err.to_string()))?;

    get(pool, id).await
}

/// Inline toggle from the admin listing; touches nothing but the flag.
pub async fn set_featured(pool: &SqlitePool, id: i64, featured: bool) -> Result<GalleryImage, AppError> {
    let result = sqlx::query("UPDATE gallery_images SET is_featured = ? WHERE id = ?")
        .bind(featured)
        .bind(id)
        .execute(pool)
        .await
        .map_err(|err| AppError::Database(err.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Gallery image not found".to_string()));
    }
    get(pool, id).await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM gallery_images WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|err| AppError::Database(err.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Gallery image not found".to_string()));
    }
    Ok(())
}

/// Ordered scan, featured images first, then newest uploaded_at.
pub async fn list(pool: &SqlitePool, limit: i64, offset: i64) -> Result<Vec<GalleryImage>, AppError> {
    sqlx::query_as::<_, GalleryImage>(
        "SELECT * FROM gallery_images ORDER BY is_featured DESC, uploaded_at DESC LIMIT ? OFFSET ?",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
    .map_err(|err| AppError::Database(err.to_string()))
}

pub async fn count(pool: &SqlitePool) -> Result<i64, AppError> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM gallery_images")
        .fetch_one(pool)
        .await
        .map_err(|err| AppError::Database(err.to_string()))
}

pub async fn search(pool: &SqlitePool, query: &GalleryQuery) -> Result<Vec<GalleryImage>, AppError> {
    let mut builder: sqlx::QueryBuilder<'_, sqlx::Sqlite> =
        sqlx::QueryBuilder::new("SELECT * FROM gallery_images WHERE 1 = 1");

    if let Some(q) = &query.q {
        let pattern = super::like_pattern(q);
        builder.push(" AND (LOWER(title) LIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" ESCAPE '\\' OR LOWER(caption) LIKE ");
        builder.push_bind(pattern);
        builder.push(" ESCAPE '\\')");
    }
    if let Some(featured) = query.featured {
        builder.push(" AND is_featured = ");
        builder.push_bind(featured);
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
    builder.push(" ORDER BY is_featured DESC, uploaded_at DESC LIMIT ");
    builder.push_bind(limit);
    builder.push(" OFFSET ");
    builder.push_bind(offset);

    builder
        .build_query_as::<GalleryImage>()
        .fetch_all(pool)
        .await
        .map_err(|err| AppError::Database(err.to_string()))
}
