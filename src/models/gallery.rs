use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug)]
pub struct GalleryImage {
    pub id: i64,
    pub title: String,
    pub image: String,
    pub caption: Option<String>,
    pub is_featured: bool,
    pub uploaded_at: DateTime<Utc>,
}

impl fmt::Display for GalleryImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
