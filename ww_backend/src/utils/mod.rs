pub mod prompt_text;
pub mod sse_lines;
pub mod sse_response_builder;
pub mod stream_channel;
