use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PromptJournalRequest {
    #[serde(default)]
    pub username: Option<String>,
}
