pub mod completion;
pub mod openai;
#[cfg(test)]
pub mod scripted;
