use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use log::info;
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use validator::Validate;

use crate::errors::AppError;
use crate::store::documents::{self, DocumentChanges, DocumentQuery, NewDocument};
use crate::utils::validation::validate_payload;

#[derive(Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateDocument {
    #[validate(length(min = 1, max = 200))]
    title: String,
    description: Option<String>,
    /// Relative path returned by the uploads endpoint.
    #[validate(length(min = 1))]
    file: String,
}

#[derive(Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateDocument {
    #[validate(length(min = 1, max = 200))]
    title: Option<String>,
    description: Option<String>,
    #[validate(length(min = 1))]
    file: Option<String>,
}

#[derive(Deserialize)]
pub struct DocumentListParams {
    q: Option<String>,
    uploaded_from: Option<DateTime<Utc>>,
    uploaded_to: Option<DateTime<Utc>>,
    limit: Option<i64>,
    offset: Option<i64>,
}

pub async fn create(
    pool: web::Data<SqlitePool>,
    body: web::Json<CreateDocument>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*body)?;
    let body = body.into_inner();

    let document = documents::insert(
        &pool,
        NewDocument {
            title: body.title,
            description: body.description,
            file: body.file,
        },
    )
    .await?;

    info!("Created document {}", document.id);
    Ok(HttpResponse::Created().json(document))
}

pub async fn list(
    pool: web::Data<SqlitePool>,
    params: web::Query<DocumentListParams>,
) -> Result<HttpResponse, AppError> {
    let params = params.into_inner();
    let results = documents::search(
        &pool,
        &DocumentQuery {
            q: params.q,
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
    let document = documents::get(&pool, id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(document))
}

pub async fn update(
    pool: web::Data<SqlitePool>,
    id: web::Path<i64>,
    body: web::Json<UpdateDocument>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&*body)?;
    let body = body.into_inner();

    let document = documents::update(
        &pool,
        id.into_inner(),
        DocumentChanges {
            title: body.title,
            description: body.description,
            file: body.file,
        },
    )
    .await?;

    info!("Updated document {}", document.id);
    Ok(HttpResponse::Ok().json(document))
}

pub async fn delete(
    pool: web::Data<SqlitePool>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    documents::delete(&pool, id).await?;

    info!("Deleted document {}", id);
    Ok(HttpResponse::Ok().json(json!({
        "message": "Document deleted successfully",
    })))
}
