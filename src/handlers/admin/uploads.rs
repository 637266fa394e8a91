use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures_util::StreamExt as _;
use log::info;
use serde::Serialize;

use crate::errors::AppError;
use crate::storage::{self, MediaArea, MediaRoot};

// 10 MiB upload ceiling
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Serialize)]
struct UploadResponse {
    path: String,
}

/// Accept a multipart upload into one of the media areas and return the
/// stored relative path, to be referenced by a create or update.
pub async fn upload(
    root: web::Data<MediaRoot>,
    area: web::Path<String>,
    mut payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let area_name = area.into_inner();
    let area = MediaArea::from_name(&area_name)
        .ok_or_else(|| AppError::NotFound(format!("Unknown media area: {}", area_name)))?;

    let mut data: Vec<u8> = Vec::new();
    while let Some(field) = payload.next().await {
        let mut field = field.map_err(|err| AppError::Validation(err.to_string()))?;
        // A crafted part may omit the name parameter entirely.
        if field.content_disposition().get_name() != Some("file") {
            continue;
        }
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|err| AppError::Validation(err.to_string()))?;
            if data.len() + chunk.len() > MAX_UPLOAD_BYTES {
                return Err(AppError::Validation("File exceeds upload size limit".to_string()));
            }
            data.extend_from_slice(&chunk);
        }
    }

    let path = storage::save_in(&root.0, area, &data).await?;
    info!("Stored {} byte upload at {}", data.len(), path);

    Ok(HttpResponse::Created().json(UploadResponse { path }))
}
