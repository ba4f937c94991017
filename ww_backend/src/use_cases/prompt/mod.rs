pub mod generate_prompt_use_case;
