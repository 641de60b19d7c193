use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Articles requested per topic from the search service.
pub const PAGE_SIZE: usize = 5;

const DEFAULT_BASE_URL: &str = "https://newsapi.org";

#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Article {
    /// Body text used for summarization: `content` when the service
    /// provides it, falling back to `description`, then to empty.
    pub fn text(&self) -> &str {
        self.content
            .as_deref()
            .or(self.description.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

/// One search call per topic. Implemented by `NewsClient` and by
/// in-memory stubs in the pipeline tests.
#[async_trait]
pub trait FetchArticles: Send + Sync {
    async fn fetch(&self, topic: &str) -> Result<Vec<Article>>;
}

pub struct NewsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }
}

/// Encode a topic for the `q` query parameter. Spaces become `+` so a
/// multi-word topic stays one term when spliced into the URL.
fn encode_term(topic: &str) -> String {
    urlencoding::encode(topic.trim()).replace("%20", "+")
}

#[async_trait]
impl FetchArticles for NewsClient {
    async fn fetch(&self, topic: &str) -> Result<Vec<Article>> {
        let url = format!(
            "{}/v2/everything?q={}&apiKey={}&pageSize={}",
            self.base_url,
            encode_term(topic),
            self.api_key,
            PAGE_SIZE
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send request to the news search service")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("News search returned error status: {}", status);
        }

        let body = response
            .json::<EverythingResponse>()
            .await
            .context("Failed to parse news search response")?;

        Ok(body.articles)
    }
}
