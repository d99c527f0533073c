use tracing::{error, info};

use crate::commands::gpt::AnswerFetcher;
use crate::services::listener::Question;

const ELLIPSIS: &str = "...";

/// Cuts `text` down to `limit` characters, ending in "..." when anything was dropped.
pub fn truncate_response(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let keep = limit.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Asks the provider once and returns the text to post back to the channel.
pub async fn respond(fetcher: &dyn AnswerFetcher, question: &Question, limit: usize) -> String {
    info!("User's question: {}", question);

    match fetcher.fetch(question).await {
        Ok(answer) => truncate_response(&answer, limit),
        Err(ex) => {
            error!("Error getting response from provider: {}", ex);
            fetcher.failure_text().to_string()
        }
    }
}
