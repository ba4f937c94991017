use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: i32,
    pub novel_id: i32,
    pub title: String,
    pub content: String,
    pub prompt_text: Option<String>,
    pub prompt_genre: Option<String>,
    pub created_at: DateTime<Utc>,
}
