pub mod user_web_input;
pub mod user_web_output;
