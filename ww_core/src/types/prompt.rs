use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored writing prompt. Never mutated once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: i32,
    pub genre: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}
