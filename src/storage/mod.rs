use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::errors::AppError;

/// Media areas managed on behalf of the record types. Documents and gallery
/// images land under date-partitioned directories.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaArea {
    Profiles,
    Documents,
    Gallery,
}

impl MediaArea {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "profiles" => Some(Self::Profiles),
            "documents" => Some(Self::Documents),
            "gallery" => Some(Self::Gallery),
            _ => None,
        }
    }

    fn partition(self, now: DateTime<Utc>) -> String {
        match self {
            Self::Profiles => "profiles".to_string(),
            Self::Documents => format!("documents/{}", now.format("%Y/%m/%d")),
            Self::Gallery => format!("gallery/{}", now.format("%Y/%m")),
        }
    }
}

/// Base directory for stored media, read from MEDIA_ROOT at startup and
/// carried as app data so handlers never touch the environment.
#[derive(Clone, Debug)]
pub struct MediaRoot(pub PathBuf);

impl MediaRoot {
    pub fn from_env() -> Self {
        Self(
            std::env::var("MEDIA_ROOT")
                .unwrap_or_else(|_| "media".to_string())
                .into(),
        )
    }
}

/// Store an uploaded file under the given root and return its relative path.
pub async fn save_in(root: &Path, area: MediaArea, data: &[u8]) -> Result<String, AppError> {
    if data.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    // Unique file name; extension guessed from content, arbitrary types allowed.
    let extension = infer::get(data).map(|t| t.extension()).unwrap_or("bin");
    let relative = format!("{}/{}.{}", area.partition(Utc::now()), Uuid::new_v4(), extension);

    let full = root.join(&relative);
    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|err| AppError::Storage(err.to_string()))?;
    }
    fs::write(&full, data)
        .await
        .map_err(|err| AppError::Storage(err.to_string()))?;

    Ok(relative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn partitions_follow_upload_date() {
        let when = Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap();
        assert_eq!(MediaArea::Profiles.partition(when), "profiles");
        assert_eq!(MediaArea::Documents.partition(when), "documents/2024/03/07");
        assert_eq!(MediaArea::Gallery.partition(when), "gallery/2024/03");
    }

    #[test]
    fn area_names_round_trip() {
        assert_eq!(MediaArea::from_name("gallery"), Some(MediaArea::Gallery));
        assert_eq!(MediaArea::from_name("attachments"), None);
    }
}
