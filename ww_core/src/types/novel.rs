use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Novel {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub genre: Option<String>,
    pub summary: Option<String>,
    pub is_prompt_journal: bool,
    pub created_at: DateTime<Utc>,
}
