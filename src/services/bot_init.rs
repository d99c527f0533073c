use std::sync::Arc;
use serenity::{
    client::Context,
    model::gateway::Ready
};
use tracing::info;

use crate::Error;
use crate::commands::gpt::AnswerFetcher;
use crate::models::config::Config;
use crate::services::listener::{Listener, ASK_COMMAND};

/// State shared by every command and event handler.
pub struct BotData {
    pub listener: Listener,
    pub fetcher: Arc<dyn AnswerFetcher>,
    pub message_limit: usize
}

pub async fn ready(
    ctx: &Context,
    ready: &Ready,
    framework: &poise::Framework<BotData, Error>,
    config: &Config,
    fetcher: Arc<dyn AnswerFetcher>
) -> Result<BotData, Error> {
    info!("Logged in as {}", ready.user.name);

    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
    info!("Slash command /{} registered", ASK_COMMAND);

    let listener = Listener::new(ready.user.id.0, &config.cmd_prefix);
    info!("Listening for messages starting with {}", listener.prefix());

    Ok(BotData {
        listener,
        fetcher,
        message_limit: config.message_limit
    })
}
