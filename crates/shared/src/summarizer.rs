use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::news::Article;

/// Shown in place of a summary when the model call fails.
pub const PLACEHOLDER_SUMMARY: &str = "Error: Could not generate summary.";

pub const DEFAULT_MODEL_ID: &str = "us.amazon.nova-lite-v1:0";

/// User-facing result for one article. `summary` holds either model
/// output or `PLACEHOLDER_SUMMARY`; title and url pass through from
/// the article untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub title: String,
    pub summary: String,
    pub url: String,
}

#[derive(Serialize)]
struct InvokeRequest {
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: Vec<ContentBlock>,
}

#[derive(Serialize)]
struct ContentBlock {
    text: String,
}

#[derive(Deserialize)]
struct InvokeResponse {
    output: Output,
}

#[derive(Deserialize)]
struct Output {
    message: OutputMessage,
}

#[derive(Deserialize)]
struct OutputMessage {
    content: Vec<OutputContent>,
}

#[derive(Deserialize)]
struct OutputContent {
    text: String,
}

/// One model call per article. Infallible by contract: failures are
/// folded into a placeholder `Summary` rather than propagated, so one
/// bad article never aborts the rest of the batch.
#[async_trait]
pub trait Summarize: Send + Sync {
    async fn summarize(&self, article: &Article) -> Summary;
}

pub struct NovaSummarizer {
    client: Client,
    api_key: String,
    model_id: String,
    endpoint: String,
}

impl NovaSummarizer {
    pub fn new(api_key: String, region: &str, model_id: String) -> Result<Self> {
        let endpoint = format!("https://bedrock-runtime.{}.amazonaws.com", region);
        Self::with_endpoint(api_key, model_id, endpoint)
    }

    pub fn with_endpoint(api_key: String, model_id: String, endpoint: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            model_id,
            endpoint,
        })
    }

    async fn invoke(&self, prompt: String) -> Result<String> {
        let request = InvokeRequest {
            messages: vec![Message {
                role: "user".to_string(),
                content: vec![ContentBlock { text: prompt }],
            }],
        };

        let url = format!("{}/model/{}/invoke", self.endpoint, self.model_id);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .header("accept", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send request to the text-generation service")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("unknown error"));
            anyhow::bail!("Model invocation returned {}: {}", status, error_text);
        }

        let body = response
            .json::<InvokeResponse>()
            .await
            .context("Failed to parse text-generation response")?;

        body.output
            .message
            .content
            .into_iter()
            .next()
            .map(|segment| segment.text)
            .context("Model reply contained no text segments")
    }
}

fn build_prompt(article: &Article) -> String {
    format!("Summarize the following article:\n\n{}", article.text())
}

#[async_trait]
impl Summarize for NovaSummarizer {
    async fn summarize(&self, article: &Article) -> Summary {
        let started = Instant::now();

        let summary = match self.invoke(build_prompt(article)).await {
            Ok(text) => {
                tracing::debug!(
                    model = %self.model_id,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "model invocation finished"
                );
                text
            }
            Err(e) => {
                tracing::error!(
                    model = %self.model_id,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %e,
                    "could not generate summary"
                );
                PLACEHOLDER_SUMMARY.to_string()
            }
        };

        Summary {
            title: article.title.clone(),
            summary,
            url: article.url.clone(),
        }
    }
}
