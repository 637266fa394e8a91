use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::SqlitePool;

use crate::errors::AppError;
use crate::store;

const PROFILE_PAGE_SIZE: i64 = 10;
const GALLERY_PAGE_SIZE: i64 = 12;
const DOCUMENT_PAGE_SIZE: i64 = 20;

#[derive(Deserialize)]
pub struct PageParams {
    page: Option<i64>,
}

#[derive(Serialize)]
struct Page<T> {
    count: i64,
    page: i64,
    num_pages: i64,
    results: Vec<T>,
}

/// 1-based pagination; a page past the end is a not-found, like the
/// paginator this mirrors.
fn page_bounds(count: i64, page_size: i64, requested: Option<i64>) -> Result<(i64, i64), AppError> {
    let page = requested.unwrap_or(1);
    if page < 1 {
        return Err(AppError::NotFound("Invalid page number".to_string()));
    }
    let num_pages = ((count + page_size - 1) / page_size).max(1);
    if page > num_pages {
        return Err(AppError::NotFound("Page out of range".to_string()));
    }
    Ok((page, num_pages))
}

pub async fn home() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "app": "showcase",
        "sections": ["/profiles/", "/gallery/", "/documents/"],
    }))
}

pub async fn profile_list(
    pool: web::Data<SqlitePool>,
    params: web::Query<PageParams>,
) -> Result<HttpResponse, AppError> {
    let count = store::profiles::count(&pool).await?;
    let (page, num_pages) = page_bounds(count, PROFILE_PAGE_SIZE, params.page)?;
    let results =
        store::profiles::list(&pool, PROFILE_PAGE_SIZE, (page - 1) * PROFILE_PAGE_SIZE).await?;
    Ok(HttpResponse::Ok().json(Page { count, page, num_pages, results }))
}

pub async fn profile_detail(
    pool: web::Data<SqlitePool>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let profile = store::profiles::get(&pool, id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(profile))
}

pub async fn gallery_list(
    pool: web::Data<SqlitePool>,
    params: web::Query<PageParams>,
) -> Result<HttpResponse, AppError> {
    let count = store::gallery::count(&pool).await?;
    let (page, num_pages) = page_bounds(count, GALLERY_PAGE_SIZE, params.page)?;
    let results =
        store::gallery::list(&pool, GALLERY_PAGE_SIZE, (page - 1) * GALLERY_PAGE_SIZE).await?;
    Ok(HttpResponse::Ok().json(Page { count, page, num_pages, results }))
}

pub async fn document_list(
    pool: web::Data<SqlitePool>,
    params: web::Query<PageParams>,
) -> Result<HttpResponse, AppError> {
    let count = store::documents::count(&pool).await?;
    let (page, num_pages) = page_bounds(count, DOCUMENT_PAGE_SIZE, params.page)?;
    let results =
        store::documents::list(&pool, DOCUMENT_PAGE_SIZE, (page - 1) * DOCUMENT_PAGE_SIZE).await?;
    Ok(HttpResponse::Ok().json(Page { count, page, num_pages, results }))
}

#[cfg(test)]
mod tests {
    use super::page_bounds;
    use crate::errors::AppError;

    #[test]
    fn empty_listing_still_has_one_page() {
        assert_eq!(page_bounds(0, 10, None).unwrap(), (1, 1));
    }

    #[test]
    fn page_past_the_end_is_not_found() {
        assert_eq!(page_bounds(11, 10, Some(2)).unwrap(), (2, 2));
        assert!(matches!(page_bounds(11, 10, Some(3)), Err(AppError::NotFound(_))));
        assert!(matches!(page_bounds(11, 10, Some(0)), Err(AppError::NotFound(_))));
    }
}
