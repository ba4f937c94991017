use crate::error::{ErrorBackend, Result};
use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use std::fmt::Display;
use tracing::debug;

/// Splits a chunked byte stream into trimmed, non-empty lines.
///
/// Chunks may cut a line (or a multi-byte character) anywhere; bytes are
/// buffered until the next `\n`. A transport error is forwarded once and
/// ends the line stream.
pub fn stream_response_lines<E>(
    stream: impl Stream<Item = std::result::Result<Bytes, E>> + Send + 'static,
) -> tokio::sync::mpsc::Receiver<Result<String>>
where
    E: Display + Send + 'static,
{
    let mut stream = Box::pin(stream);
    let (tx, rx) = tokio::sync::mpsc::channel::<Result<String>>(32);
    tokio::spawn(async move {
        let mut buffer: Vec<u8> = Vec::new();
        while let Some(chunk) = stream.next().await {
            let chunk = match chunk {
                Ok(data) => data,
                Err(e) => {
                    let _ = tx
                        .send(Err(ErrorBackend::UpstreamError(format!(
                            "stream interrupted: {}",
                            e
                        ))))
                        .await;
                    return;
                }
            };
            buffer.extend_from_slice(&chunk);

            while let Some(pos) = buffer.iter().position(|b| *b == b'\n') {
                let line: Vec<u8> = buffer.drain(..=pos).collect();
                let line = String::from_utf8_lossy(&line).trim().to_string();
                if line.is_empty() {
                    continue;
                }
                if tx.send(Ok(line)).await.is_err() {
                    debug!("line receiver dropped, stopping stream reader");
                    return;
                }
            }
        }
        let rest = String::from_utf8_lossy(&buffer).trim().to_string();
        if !rest.is_empty() {
            let _ = tx.send(Ok(rest)).await;
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;

    async fn collect(mut rx: tokio::sync::mpsc::Receiver<Result<String>>) -> Vec<Result<String>> {
        let mut output = vec![];
        while let Some(line) = rx.recv().await {
            output.push(line);
        }
        output
    }

    #[tokio::test]
    async fn test_stream_response_lines() {
        let data_chunks: Vec<std::result::Result<Bytes, String>> = vec![
            Ok(Bytes::from("data: {\"key\": \"value\"}\n\n")),
            // Simulating chunks not being transmitted in one go
            Ok(Bytes::from("data: {\"another_key\":")),
            Ok(Bytes::from("\"another_value\"}\n")),
            Ok(Bytes::from("data: [DONE]")),
        ];

        let rx = stream_response_lines(stream::iter(data_chunks));
        let output: Vec<String> = collect(rx)
            .await
            .into_iter()
            .map(|line| line.unwrap())
            .collect();

        assert_eq!(
            output,
            vec![
                "data: {\"key\": \"value\"}",
                "data: {\"another_key\":\"another_value\"}",
                "data: [DONE]",
            ]
        );
    }

    #[tokio::test]
    async fn multibyte_characters_survive_chunk_boundaries() {
        let text = "Le café\n".as_bytes();
        let (head, tail) = text.split_at(7);
        let chunks: Vec<std::result::Result<Bytes, String>> = vec![
            Ok(Bytes::copy_from_slice(head)),
            Ok(Bytes::copy_from_slice(tail)),
        ];

        let output = collect(stream_response_lines(stream::iter(chunks))).await;
        assert_eq!(output.len(), 1);
        assert_eq!(output[0].as_ref().unwrap(), "Le café");
    }

    #[tokio::test]
    async fn transport_error_ends_the_stream() {
        let chunks: Vec<std::result::Result<Bytes, String>> = vec![
            Ok(Bytes::from("data: one\n")),
            Err("connection reset".to_string()),
            Ok(Bytes::from("data: never\n")),
        ];

        let output = collect(stream_response_lines(stream::iter(chunks))).await;
        assert_eq!(output.len(), 2);
        assert_eq!(output[0].as_ref().unwrap(), "data: one");
        assert!(matches!(output[1], Err(ErrorBackend::UpstreamError(_))));
    }
}
