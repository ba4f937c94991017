pub mod accept_prompt_request;
pub mod accept_prompt_response;
pub mod create_chapter_request;
pub mod generate_batch_request;
pub mod generate_batch_response;
pub mod generate_prompt_response;
pub mod list_prompts_request;
pub mod list_prompts_response;
pub mod prompt_journal_request;
