use serde::{Deserialize, Serialize};
use tracing::error;

/// One server-sent event of a streamed generation.
///
/// Serialized untagged so the wire shape is exactly `{"content": ..}`,
/// `{"done": true}` or `{"error": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StreamData {
    Content { content: String },
    Done { done: bool },
    Error { error: String },
}

impl StreamData {
    pub fn for_string(content: String) -> Self {
        StreamData::Content { content }
    }

    pub fn for_done() -> Self {
        StreamData::Done { done: true }
    }

    pub fn for_stream_error(error: String) -> Self {
        StreamData::Error { error }
    }
}

impl From<StreamData> for String {
    fn from(data: StreamData) -> Self {
        serde_json::to_string(&data).unwrap_or_else(|e| {
            error!("Failed to serialize StreamData to JSON: {}", e);
            String::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_shapes_match_the_event_contract() {
        assert_eq!(
            serde_json::to_value(StreamData::for_string("Once ".into())).unwrap(),
            json!({"content": "Once "})
        );
        assert_eq!(
            serde_json::to_value(StreamData::for_done()).unwrap(),
            json!({"done": true})
        );
        assert_eq!(
            serde_json::to_value(StreamData::for_stream_error("boom".into())).unwrap(),
            json!({"error": "boom"})
        );
    }

    #[test]
    fn events_parse_back_from_their_wire_shape() {
        let parsed: StreamData = serde_json::from_str(r#"{"done":true}"#).unwrap();
        assert_eq!(parsed, StreamData::for_done());
        let parsed: StreamData = serde_json::from_str(r#"{"content":"a"}"#).unwrap();
        assert_eq!(parsed, StreamData::for_string("a".into()));
    }
}
