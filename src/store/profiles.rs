use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::errors::AppError;
use crate::models::profile::Profile;

pub struct NewProfile {
    pub name: String,
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
}

#[derive(Default)]
pub struct ProfileChanges {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
}

/// Admin listing parameters: substring search over name and bio,
/// plus a created_at range.
#[derive(Default)]
pub struct ProfileQuery {
    pub q: Option<String>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

pub async fn insert(pool: &SqlitePool, new: NewProfile) -> Result<Profile, AppError> {
    super::require_short_text("name", &new.name)?;

    let now = Utc::now();
    let id = sqlx::query(
        "INSERT INTO profiles (name, bio, profile_picture, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&new.name)
    .bind(&new.bio)
    .bind(&new.profile_picture)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .map_err(|err| AppError::Database(err.to_string()))?
    .last_insert_rowid();

    get(pool, id).await
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Profile, AppError> {
    sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|err| AppError::Database(err.to_string()))?
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
}

pub async fn update(pool: &SqlitePool, id: i64, changes: ProfileChanges) -> Result<Profile, AppError> {
    let current = get(pool, id).await?;

    if let Some(name) = &changes.name {
        super::require_short_text("name", name)?;
    }

    let now = Utc::now();
    sqlx::query(
        "UPDATE profiles SET name = ?, bio = ?, profile_picture = ?, updated_at = ? WHERE id = ?",
    )
    .bind(changes.name.as_ref().unwrap_or(&current.name))
    .bind(changes.bio.as_ref().or(current.bio.as_ref()))
    .bind(changes.profile_picture.as_ref().or(current.profile_picture.as_ref()))
    .bind(now)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|err| AppError::Database(err.to_string()))?;

    get(pool, id).await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM profiles WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(|err| AppError::Database(err.to_string()))?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Profile not found".to_string()));
    }
    Ok(())
}

/// Ordered scan, newest created_at first.
pub async fn list(pool: &SqlitePool, limit: i64, offset: i64) -> Result<Vec<Profile>, AppError> {
    sqlx::query_as::<_, Profile>(
        "SELECT * FROM profiles ORDER BY created_at DESC LIMIT ? OFFSET ?",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
    .map_err(|err| AppError::Database(err.to_string()))
}

pub async fn count(pool: &SqlitePool) -> Result<i64, AppError> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM profiles")
        .fetch_one(pool)
        .await
        .map_err(|err| AppError::Database(err.to_string()))
}

pub async fn search(pool: &SqlitePool, query: &ProfileQuery) -> Result<Vec<Profile>, AppError> {
    let mut builder: sqlx::QueryBuilder<'_, sqlx::Sqlite> =
        sqlx::QueryBuilder::new("SELECT * FROM profiles WHERE 1 = 1");

    if let Some(q) = &query.q {
        let pattern = super::like_pattern(q);
        builder.push(" AND (LOWER(name) LIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" ESCAPE '\\' OR LOWER(bio) LIKE ");
        builder.push_bind(pattern);
        builder.push(" ESCAPE '\\')");
    }
    if let Some(from) = query.created_from {
        builder.push(" AND created_at >= ");
        builder.push_bind(from);
    }
    if let Some(to) = query.created_to {
        builder.push(" AND created_at <= ");
        builder.push_bind(to);
    }

    let (limit, offset) = super::scan_window(query.limit, query.offset);
    builder.push(" ORDER BY created_at DESC LIMIT ");
    builder.push_bind(limit);
    builder.push(" OFFSET ");
    builder.push_bind(offset);

    builder
        .build_query_as::<Profile>()
        .fetch_all(pool)
        .await
        .map_err(|err| AppError::Database(err.to_string()))
}
