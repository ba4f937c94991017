use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ListPromptsRequest {
    #[serde(default)]
    pub genre: Option<String>,
}
