use crate::error::{ErrorBackend, ResultAPIStream};
use axum::body::Body;
use axum::response::{IntoResponse, Response};
use futures::StreamExt;
use http::header::{CACHE_CONTROL, CONTENT_TYPE};
use tokio::sync::mpsc::Receiver;
use tokio_stream::wrappers::ReceiverStream;
use ww_core::types::stream_data::StreamData;

/// A builder for constructing a Server-Sent Events (SSE) HTTP response
/// from `StreamData` received over a channel.
///
/// Each item is encoded as a `data: {...}\n\n` frame. The body ends when the
/// sending side is dropped.
pub struct SseResponseBuilder {
    rx: Receiver<StreamData>,
}

impl SseResponseBuilder {
    pub fn new(rx: Receiver<StreamData>) -> Self {
        Self { rx }
    }

    /// Builds the streaming response with `text/event-stream` content type.
    ///
    /// # Errors
    /// Returns `FailedBuildSSEResponse` if the HTTP response construction fails.
    pub fn build(self) -> ResultAPIStream {
        let stream = ReceiverStream::new(self.rx)
            .map(|data| Ok::<_, ErrorBackend>(format!("data: {}\n\n", String::from(data))));

        let body = Body::from_stream(stream);

        Response::builder()
            .header(CONTENT_TYPE, "text/event-stream")
            .header(CACHE_CONTROL, "no-store")
            .body(body)
            .map(IntoResponse::into_response)
            .map_err(|e| ErrorBackend::FailedBuildSSEResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn frames_every_event_until_the_sender_closes() {
        let (tx, rx) = tokio::sync::mpsc::channel(4);
        tx.send(StreamData::for_string("Hi".into())).await.unwrap();
        tx.send(StreamData::for_done()).await.unwrap();
        drop(tx);

        let response = SseResponseBuilder::new(rx).build().unwrap();
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "text/event-stream"
        );
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(
            String::from_utf8(body.to_vec()).unwrap(),
            "data: {\"content\":\"Hi\"}\n\ndata: {\"done\":true}\n\n"
        );
    }
}
