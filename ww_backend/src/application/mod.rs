pub mod journal;
pub mod prompt;
