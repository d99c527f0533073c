mod models;
mod commands;
mod services;

use std::env;
use std::error;
use std::process;
use std::sync::Arc;
use serenity::model::gateway::GatewayIntents;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, EnvFilter};
use tracing_subscriber::layer::SubscriberExt;

use models::config::Config;
use services::bot_init::{self, BotData};

type Error = Box<dyn error::Error + Send + Sync>;
type BotContext<'a> = poise::Context<'a, BotData, Error>;

fn init_logger() -> Result<WorkerGuard, Box<dyn error::Error>> {
    let file_appender = tracing_appender::rolling::hourly("logs", "askaway.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // RUST_LOG wins; otherwise keep serenity/hyper quiet and ourselves chatty.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,askaway=debug"));

    tracing::subscriber::set_global_default(
        fmt::Subscriber::builder()
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_span_events(fmt::format::FmtSpan::CLOSE)
            .with_ansi(true)
            .with_env_filter(filter)
            .finish()
            .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
    )?;

    const VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");
    info!("Initializing askaway v{}", VERSION.unwrap_or("<unknown>"));
    info!("Reading from {}", env::current_dir()?.display());

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn error::Error>> {
    let guard = match init_logger() {
        Ok(guard) => Some(guard),
        Err(ex) => {
            eprintln!("Failed to initialize logger: {}", ex);
            None
        }
    };

    let config = match Config::from_env() {
        Ok(config) => Arc::new(config),
        Err(ex) => {
            error!("Cannot start: {}", ex);
            // process::exit skips destructors, so flush the file log first.
            drop(guard);
            process::exit(1);
        }
    };

    let fetcher = commands::gpt::build_fetcher(&config.provider, reqwest::Client::new());
    info!("Answering questions with {} ({})", config.provider.kind, config.provider.model);

    let setup_config = config.clone();
    let framework = poise::Framework::builder()
        .token(&config.bot_token)
        .intents(GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT)
        .options(commands::get_framework())
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                bot_init::ready(ctx, ready, framework, &setup_config, fetcher).await
            })
        })
        .build()
        .await?;

    info!("Go ask away is running, press CTRL+C to exit.");

    if let Err(ex) = framework.start().await {
        error!("Discord bot client error: {:?}", ex);
    }

    drop(guard);
    Ok(())
}
