use crate::server::default_config::DEFAULT_BATCH_COUNT;
use serde::{Deserialize, Serialize};

fn default_count() -> usize {
    DEFAULT_BATCH_COUNT
}

#[derive(Debug, Deserialize, Serialize)]
pub struct GenerateBatchRequest {
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default = "default_count")]
    pub count: usize,
}
