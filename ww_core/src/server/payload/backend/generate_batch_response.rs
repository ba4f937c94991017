use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateBatchResponse {
    pub genre: String,
    pub prompts: Vec<String>,
    pub count: usize,
    pub generated: bool,
    pub model: String,
}

impl GenerateBatchResponse {
    pub fn new(genre: String, prompts: Vec<String>, model: String) -> Self {
        GenerateBatchResponse {
            genre,
            count: prompts.len(),
            prompts,
            generated: true,
            model,
        }
    }
}
