use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use log::info;
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use validator::Validate;

use crate::errors::AppError;
use crate::store::gallery::{self, GalleryImageChanges, GalleryQuery, NewGalleryImage};
use crate::utils::validation::validate_payload;

#[derive(Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateGalleryImage {
    #[validate(length(min = 1, max = 200))]
    title: String,
    #[validate(length(min = 1))]
    image: String,
    caption: Option<String>,
    is_featured: Option<bool>,
}

#[derive(Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateGalleryImage {
    #[validate(length(min = 1, max = 200))]
    title: Option<String>,
    #[validate(length(min = 1))]
    image: Option<String>,
    caption: Option<String>,
    is_featured: Option<bool>,
}

#[derive(Deserialize)]
pub struct GalleryListParams {
    q: Option<String>,
    featured: Option<bool>,
    uploaded_from: Option<DateTime<Utc>>,
    uploaded_to: Option<DateTime<Utc>>,
    limit: Option<i64>,
    offset: Option<i64>,
}

#[derive(Deserialize)]
pub struct FeaturedUpdate {
    is_featured: bool,
}

pub async fn create(
    pool: web::Data<SqlitePool>,
    body: web::Json<CreateGalleryImage>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*body)?;
    let body = body.into_inner();

    let image = gallery::insert(
        &pool,
        NewGalleryImage {
            title: body.title,
            image: body.image,
            caption: body.caption,
            is_featured: body.is_featured,
        },
    )
    .await?;

    info!("Created gallery image {}", image.id);
    Ok(HttpResponse::Created().json(image))
}

pub async fn list(
    pool: web::Data<SqlitePool>,
    params: web::Query<GalleryListParams>,
) -> Result<HttpResponse, AppError> {
    let params = params.into_inner();
    let results = gallery::search(
        &pool,
        &GalleryQuery {
            q: params.q,
            featured: params.featured,
            uploaded_from: params.uploaded_from,
            uploaded_to: params.uploaded_to,
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
    let image = gallery::get(&pool, id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(image))
}

pub async fn update(
    pool: web::Data<SqlitePool>,
    id: web::Path<i64>,
    body: web::Json<UpdateGalleryImage>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*body)?;
    let body = body.into_inner();

    let image = gallery::update(
        &pool,
        id.into_inner(),
        GalleryImageChanges {
            title: body.title,
            image: body.image,
            caption: body.caption,
            is_featured: body.is_featured,
        },
    )
    .await?;

    info!("Updated gallery image {}", image.id);
    Ok(HttpResponse::Ok().json(image))
}

/// Inline is_featured toggle from the admin listing.
pub async fn set_featured(
    pool: web::Data<SqlitePool>,
    id: web::Path<i64>,
    body: web::Json<FeaturedUpdate>,
) -> Result<HttpResponse, AppError> {
    let image = gallery::set_featured(&pool, id.into_inner(), body.is_featured).await?;

    info!("Set gallery image {} featured = {}", image.id, image.is_featured);
    Ok(HttpResponse::Ok().json(image))
}

pub async fn delete(
    pool: web::Data<SqlitePool>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    gallery::delete(&pool, id).await?;

    info!("Deleted gallery image {}", id);
    Ok(HttpResponse::Ok().json(json!({
        "message": "Gallery image deleted successfully",
    })))
}
