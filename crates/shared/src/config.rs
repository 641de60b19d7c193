use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_REGION: &str = "us-west-2";

/// Credentials and model settings, loaded once at startup and passed
/// into the clients explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub news_api_key: String,
    pub bedrock_api_key: String,
    pub aws_region: String,
    pub model_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Try to load .env from multiple locations
        Self::try_load_dotenv();

        let news_api_key = env::var("NEWS_API_KEY").context(
            "NEWS_API_KEY not found.\n\n\
            To fix this, create ~/.config/news-brief/.env with:\n  \
            NEWS_API_KEY=your_key_here\n  \
            BEDROCK_API_KEY=your_key_here\n\n\
            Get your NewsAPI key from: https://newsapi.org/account",
        )?;

        let bedrock_api_key = env::var("BEDROCK_API_KEY").context(
            "BEDROCK_API_KEY not found.\n\n\
            To fix this, create ~/.config/news-brief/.env with:\n  \
            NEWS_API_KEY=your_key_here\n  \
            BEDROCK_API_KEY=your_key_here\n\n\
            Generate a Bedrock API key in the AWS console under Amazon Bedrock.",
        )?;

        let aws_region = env::var("AWS_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());

        let model_id = env::var("BEDROCK_MODEL_ID")
            .unwrap_or_else(|_| crate::summarizer::DEFAULT_MODEL_ID.to_string());

        Ok(Self {
            news_api_key,
            bedrock_api_key,
            aws_region,
            model_id,
        })
    }

    fn try_load_dotenv() {
        // Try locations in order of preference:

        // 1. Current directory (for development)
        if dotenvy::dotenv().is_ok() {
            return;
        }

        // 2. ~/.config/news-brief/.env (standard config location)
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("news-brief").join(".env");
            if config_path.exists() && dotenvy::from_path(&config_path).is_ok() {
                return;
            }
        }

        // 3. ~/.env (home directory)
        if let Some(home_dir) = dirs::home_dir() {
            let home_path = home_dir.join(".env");
            if home_path.exists() {
                let _ = dotenvy::from_path(&home_path);
            }
        }

        // If none found, that's okay - environment variables might be set system-wide
    }
}
