use serenity::{
    client::Context,
    model::channel::Message
};
use tracing::{error, info};

use crate::Error;
use crate::services::answer;
use crate::services::bot_init::BotData;
use crate::services::listener::{Action, ChatEvent};

pub async fn on_event(ctx: &Context, event: &poise::Event<'_>, data: &BotData) -> Result<(), Error> {
    if let poise::Event::Message { new_message } = event {
        on_message(ctx, new_message, data).await?;
    }

    Ok(())
}

async fn on_message(ctx: &Context, msg: &Message, data: &BotData) -> Result<(), Error> {
    let event = ChatEvent::Message {
        author_id: msg.author.id.0,
        content: msg.content.clone()
    };

    match data.listener.handle(&event) {
        Action::Ignore => {}
        Action::Prompt(text) => {
            msg.channel_id.say(&ctx.http, text).await?;
        }
        Action::Ask(question) => {
            info!("Prefix question from {} in {}", msg.author.name, msg.channel_id);

            if let Err(ex) = msg.channel_id.broadcast_typing(&ctx.http).await {
                error!("Failed to send typing indicator: {}", ex);
            }

            let reply = answer::respond(data.fetcher.as_ref(), &question, data.message_limit).await;
            msg.channel_id.say(&ctx.http, reply).await?;
        }
    }

    Ok(())
}
