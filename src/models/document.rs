use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug)]
pub struct Document {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub file: String,
    pub uploaded_at: DateTime<Utc>,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
