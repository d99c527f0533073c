pub mod config;
pub mod gemini_models;
pub mod openai_models;
