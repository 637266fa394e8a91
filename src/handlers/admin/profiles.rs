use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use log::info;
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use validator::Validate;

use crate::errors::AppError;
use crate::store::profiles::{self, NewProfile, ProfileChanges, ProfileQuery};
use crate::utils::validation::validate_payload;

#[derive(Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateProfile {
    #[validate(length(min = 1, max = 200))]
    name: String,
    bio: Option<String>,
    profile_picture: Option<String>,
}

// Timestamps are read-only; unknown fields (created_at, updated_at) are rejected.
#[derive(Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateProfile {
    #[validate(length(min = 1, max = 200))]
    name: Option<String>,
    bio: Option<String>,
    profile_picture: Option<String>,
}

#[derive(Deserialize)]
pub struct ProfileListParams {
    q: Option<String>,
    created_from: Option<DateTime<Utc>>,
    created_to: Option<DateTime<Utc>>,
    limit: Option<i64>,
    offset: Option<i64>,
}

pub async fn create(
    pool: web::Data<SqlitePool>,
    body: web::Json<CreateProfile>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*body)?;
    let body = body.into_inner();

    let profile = profiles::insert(
        &pool,
        NewProfile {
            name: body.name,
            bio: body.bio,
            profile_picture: body.profile_picture,
        },
    )
    .await?;

    info!("Created profile {}", profile.id);
    Ok(HttpResponse::Created().json(profile))
}

pub async fn list(
    pool: web::Data<SqlitePool>,
    params: web::Query<ProfileListParams>,
) -> Result<HttpResponse, AppError> {
    let params = params.into_inner();
    let results = profiles::search(
        &pool,
        &ProfileQuery {
            q: params.q,
            created_from: params.created_from,
            created_to: params.created_to,
            limit: params.limit,
            offset: params.offset,
        },
    )
    .await?;

    Ok(HttpResponse::Ok().json(results))
}

pub async fn get(
    pool: web::Data<SqlitePool>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let profile = profiles::get(&pool, id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(profile))
}

pub async fn update(
    pool: web::Data<SqlitePool>,
    id: web::Path<i64>,
    body: web::Json<UpdateProfile>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*body)?;
    let body = body.into_inner();

    let profile = profiles::update(
        &pool,
        id.into_inner(),
        ProfileChanges {
            name: body.name,
            bio: body.bio,
            profile_picture: body.profile_picture,
        },
    )
    .await?;

    info!("Updated profile {}", profile.id);
    Ok(HttpResponse::Ok().json(profile))
}

pub async fn delete(
    pool: web::Data<SqlitePool>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    profiles::delete(&pool, id).await?;

    info!("Deleted profile {}", id);
    Ok(HttpResponse::Ok().json(json!({
        "message": "Profile deleted successfully",
    })))
}
