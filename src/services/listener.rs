//! Decides what to do with an inbound chat event, without touching Discord.
//!
//! The Discord adapters translate serenity/poise types into [`ChatEvent`]s and
//! carry out the returned [`Action`].

use std::fmt;

pub const ASK_COMMAND: &str = "ask";
pub const EMPTY_QUERY_MESSAGE: &str = "Please provide a query.";

/// A user question, guaranteed non-empty once trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Question(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    String(String),
    Integer(i64),
    Number(f64),
    Boolean(bool),
    Other
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChatEvent {
    Command {
        author_id: u64,
        name: String,
        options: Vec<OptionValue>
    },
    Message {
        author_id: u64,
        content: String
    }
}

impl ChatEvent {
    pub fn author_id(&self) -> u64 {
        match self {
            ChatEvent::Command { author_id, .. } | ChatEvent::Message { author_id, .. } => *author_id
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetch an answer for this question and send it back.
    Ask(Question),
    /// Reply with this text without calling the provider.
    Prompt(&'static str),
    Ignore
}

#[derive(Debug, Clone)]
pub struct Listener {
    bot_id: u64,
    prefix: String
}

impl Listener {
    pub fn new(bot_id: u64, prefix: &str) -> Self {
        Listener {
            bot_id,
            prefix: prefix.trim().to_string()
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn handle(&self, event: &ChatEvent) -> Action {
        if event.author_id() == self.bot_id {
            return Action::Ignore;
        }

        match event {
            ChatEvent::Command { name, options, .. } => self.handle_command(name, options),
            ChatEvent::Message { content, .. } => self.handle_message(content)
        }
    }

    fn handle_command(&self, name: &str, options: &[OptionValue]) -> Action {
        if name != ASK_COMMAND {
            return Action::Ignore;
        }

        match options.first() {
            Some(OptionValue::String(text)) => match Question::new(text) {
                Some(question) => Action::Ask(question),
                None => Action::Prompt(EMPTY_QUERY_MESSAGE)
            },
            _ => Action::Prompt(EMPTY_QUERY_MESSAGE)
        }
    }

    fn handle_message(&self, content: &str) -> Action {
        if self.prefix.is_empty() {
            return Action::Ignore;
        }

        let rest = match content.trim().strip_prefix(self.prefix.as_str()) {
            Some(rest) => rest,
            None => return Action::Ignore
        };

        // "!askme" is a different word, not "!ask" + "me".
        if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
            return Action::Ignore;
        }

        match Question::new(rest) {
            Some(question) => Action::Ask(question),
            None => Action::Prompt(EMPTY_QUERY_MESSAGE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT: u64 = 1000;
    const USER: u64 = 42;

    fn message(author_id: u64, content: &str) -> ChatEvent {
        ChatEvent::Message { author_id, content: content.to_string() }
    }

    fn command(name: &str, options: Vec<OptionValue>) -> ChatEvent {
        ChatEvent::Command { author_id: USER, name: name.to_string(), options }
    }

    fn ask(text: &str) -> Action {
        Action::Ask(Question::new(text).unwrap())
    }

    #[test]
    fn question_rejects_blank_text() {
        assert_eq!(Question::new(""), None);
        assert_eq!(Question::new(" \n\t "), None);
        assert_eq!(Question::new("  hi  ").unwrap().as_str(), "hi");
    }

    #[test]
    fn prefix_message_extracts_question() {
        let listener = Listener::new(BOT, "!ask");
        assert_eq!(listener.handle(&message(USER, "!ask what is 2+2?")), ask("what is 2+2?"));
        assert_eq!(listener.handle(&message(USER, "   !ask   spaced out  \n")), ask("spaced out"));
    }

    #[test]
    fn other_prefixes_work_too() {
        let listener = Listener::new(BOT, "/goaskaway");
        assert_eq!(listener.handle(&message(USER, "/goaskaway why is the sky blue")), ask("why is the sky blue"));
        assert_eq!(listener.handle(&message(USER, "!ask why")), Action::Ignore);
    }

    #[test]
    fn empty_remainder_prompts_for_input() {
        let listener = Listener::new(BOT, "!ask");
        assert_eq!(listener.handle(&message(USER, "!ask")), Action::Prompt(EMPTY_QUERY_MESSAGE));
        assert_eq!(listener.handle(&message(USER, "  !ask    ")), Action::Prompt(EMPTY_QUERY_MESSAGE));
    }

    #[test]
    fn unrelated_messages_are_ignored() {
        let listener = Listener::new(BOT, "!ask");
        assert_eq!(listener.handle(&message(USER, "hello there")), Action::Ignore);
        assert_eq!(listener.handle(&message(USER, "please !ask something")), Action::Ignore);
        assert_eq!(listener.handle(&message(USER, "!askme something")), Action::Ignore);
        assert_eq!(listener.handle(&message(USER, "")), Action::Ignore);
    }

    #[test]
    fn own_messages_never_trigger() {
        let listener = Listener::new(BOT, "!ask");
        assert_eq!(listener.handle(&message(BOT, "!ask what is 2+2?")), Action::Ignore);
        assert_eq!(listener.handle(&message(BOT, "!ask")), Action::Ignore);

        let own_command = ChatEvent::Command {
            author_id: BOT,
            name: "ask".to_string(),
            options: vec![OptionValue::String("hi".to_string())]
        };
        assert_eq!(listener.handle(&own_command), Action::Ignore);
    }

    #[test]
    fn slash_command_needs_ask_and_a_string() {
        let listener = Listener::new(BOT, "!ask");
        assert_eq!(
            listener.handle(&command("ask", vec![OptionValue::String(" what is rust? ".to_string())])),
            ask("what is rust?")
        );
        assert_eq!(
            listener.handle(&command("ping", vec![OptionValue::String("hi".to_string())])),
            Action::Ignore
        );
        assert_eq!(listener.handle(&command("ask", vec![])), Action::Prompt(EMPTY_QUERY_MESSAGE));
        assert_eq!(
            listener.handle(&command("ask", vec![OptionValue::Integer(4)])),
            Action::Prompt(EMPTY_QUERY_MESSAGE)
        );
        assert_eq!(
            listener.handle(&command("ask", vec![OptionValue::String("   ".to_string())])),
            Action::Prompt(EMPTY_QUERY_MESSAGE)
        );
    }

    #[test]
    fn blank_prefix_disables_message_trigger() {
        let listener = Listener::new(BOT, "  ");
        assert_eq!(listener.handle(&message(USER, "anything at all")), Action::Ignore);
    }
}
