use serenity::model::application::interaction::application_command::CommandDataOptionValue;
use tracing::info;
use crate::{BotContext, Error};
use crate::services::answer;
use crate::services::listener::{Action, ChatEvent, OptionValue};

fn to_option_value(value: Option<&CommandDataOptionValue>) -> OptionValue {
    match value {
        Some(CommandDataOptionValue::String(s)) => OptionValue::String(s.clone()),
        Some(CommandDataOptionValue::Integer(i)) => OptionValue::Integer(*i),
        Some(CommandDataOptionValue::Number(n)) => OptionValue::Number(*n),
        Some(CommandDataOptionValue::Boolean(b)) => OptionValue::Boolean(*b),
        _ => OptionValue::Other
    }
}

// Slash invocations carry their options as Discord sent them; anything else only has the parsed question.
fn invocation_options(ctx: &BotContext<'_>, question: String) -> Vec<OptionValue> {
    match ctx {
        poise::Context::Application(app) => app.args.iter()
            .map(|o| to_option_value(o.resolved.as_ref()))
            .collect(),
        poise::Context::Prefix(_) => vec![OptionValue::String(question)]
    }
}

/// go ask away any question
#[poise::command(slash_command)]
pub async fn ask(
    ctx: BotContext<'_>,
    #[description = "the question for go ask away to answer"] question: String
) -> Result<(), Error> {
    let data = ctx.data();
    info!("Received interaction: {} from {}", ctx.command().name, ctx.author().name);

    let event = ChatEvent::Command {
        author_id: ctx.author().id.0,
        name: ctx.command().name.to_string(),
        options: invocation_options(&ctx, question)
    };

    match data.listener.handle(&event) {
        Action::Ignore => {}
        Action::Prompt(text) => {
            ctx.send(|m| m.content(text).ephemeral(true)).await?;
        }
        Action::Ask(question) => {
            // Interactions must be acknowledged within three seconds; the answer follows up later.
            ctx.defer().await?;

            let reply = answer::respond(data.fetcher.as_ref(), &question, data.message_limit).await;
            ctx.say(reply).await?;
        }
    }

    Ok(())
}
