use crate::types::prompt::Prompt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPromptsResponse {
    pub prompts: Vec<Prompt>,
    pub count: usize,
}

impl From<Vec<Prompt>> for ListPromptsResponse {
    fn from(prompts: Vec<Prompt>) -> Self {
        ListPromptsResponse {
            count: prompts.len(),
            prompts,
        }
    }
}
