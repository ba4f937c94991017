use serde::{Deserialize, Serialize};

/// A generated prompt the user decided to write from.
#[derive(Debug, Deserialize, Serialize)]
pub struct AcceptPromptRequest {
    pub genre: String,
    pub prompt: String,
}
