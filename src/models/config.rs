use std::env;
use std::fmt;
use tracing::debug;

/// Longest message Discord will accept, in characters.
pub const DISCORD_MESSAGE_LIMIT: usize = 2000;

const DEFAULT_PREFIX: &str = "!ask";
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set in the environment")]
    Missing(&'static str),

    #[error("ASK_PROVIDER must be \"gemini\" or \"openai\", got \"{0}\"")]
    InvalidProvider(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Gemini,
    OpenAi
}

impl Provider {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "gemini" => Ok(Provider::Gemini),
            "openai" => Ok(Provider::OpenAi),
            _ => Err(ConfigError::InvalidProvider(value.to_string()))
        }
    }

    fn key_var(self) -> &'static str {
        match self {
            Provider::Gemini => "GEMINI_API_KEY",
            Provider::OpenAi => "OPENAI_API_KEY"
        }
    }

    fn model_var(self) -> &'static str {
        match self {
            Provider::Gemini => "GEMINI_MODEL",
            Provider::OpenAi => "OPENAI_MODEL"
        }
    }

    fn default_model(self) -> &'static str {
        match self {
            Provider::Gemini => DEFAULT_GEMINI_MODEL,
            Provider::OpenAi => DEFAULT_OPENAI_MODEL
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Gemini => write!(f, "Gemini"),
            Provider::OpenAi => write!(f, "OpenAI")
        }
    }
}

#[derive(Clone)]
pub struct ProviderConfig {
    pub kind: Provider,
    pub api_key: String,
    pub model: String
}

// Keep credentials out of logs.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("kind", &self.kind)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .finish()
    }
}

/// Process-wide settings, read once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct Config {
    pub bot_token: String,
    pub provider: ProviderConfig,
    pub cmd_prefix: String,
    pub message_limit: usize
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"<redacted>")
            .field("provider", &self.provider)
            .field("cmd_prefix", &self.cmd_prefix)
            .field("message_limit", &self.message_limit)
            .finish()
    }
}

impl Config {
    /// Reads the configuration from the process environment, after loading a `.env` file if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(ex) => debug!("No .env file loaded: {}", ex)
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
        where F: Fn(&str) -> Option<String>
    {
        // Blank values are as good as unset.
        let get = |key: &str| lookup(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let bot_token = get("BOT_TOKEN").ok_or(ConfigError::Missing("BOT_TOKEN"))?;

        let kind = match get("ASK_PROVIDER") {
            Some(value) => Provider::parse(&value)?,
            None => Provider::Gemini
        };

        let api_key = get(kind.key_var()).ok_or(ConfigError::Missing(kind.key_var()))?;
        let model = get(kind.model_var()).unwrap_or_else(|| kind.default_model().to_string());

        Ok(Config {
            bot_token,
            provider: ProviderConfig { kind, api_key, model },
            cmd_prefix: get("ASK_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            message_limit: DISCORD_MESSAGE_LIMIT
        })
    }
}
