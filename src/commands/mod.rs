pub mod gpt;

use tracing::error;

use crate::Error;
use crate::services::{bot_init::BotData, message_handler};

async fn on_error(error: poise::FrameworkError<'_, BotData, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to set up the bot: {}", error);
        }
        poise::FrameworkError::Command { error, ctx } => {
            error!("Error in command /{}: {}", ctx.command().name, error);
        }
        poise::FrameworkError::EventHandler { error, .. } => {
            error!("Error while handling an event: {}", error);
        }
        other => {
            if let Err(ex) = poise::builtins::on_error(other).await {
                error!("Failed to report framework error: {}", ex);
            }
        }
    }
}

pub fn get_framework() -> poise::FrameworkOptions<BotData, Error> {
    poise::FrameworkOptions {
        commands: vec![
            gpt::ask()
        ],
        // The listener owns prefix matching, so poise should not parse text commands.
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: None,
            mention_as_prefix: false,
            ..Default::default()
        },
        event_handler: |ctx, event, _framework, data| {
            Box::pin(message_handler::on_event(ctx, event, data))
        },
        on_error: |error| Box::pin(on_error(error)),
        ..Default::default()
    }
}
