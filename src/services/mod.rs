pub mod answer;
pub mod bot_init;
pub mod listener;
pub mod message_handler;
