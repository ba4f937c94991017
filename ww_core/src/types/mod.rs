pub mod chapter;
pub mod genre;
pub mod novel;
pub mod prompt;
pub mod stream_data;
