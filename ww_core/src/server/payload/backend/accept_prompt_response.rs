use crate::types::{chapter::Chapter, novel::Novel};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptPromptResponse {
    pub journal: Novel,
    pub chapter: Chapter,
}
