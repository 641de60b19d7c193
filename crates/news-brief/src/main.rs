use anyhow::Result;
use clap::Parser;
use shared::{Config, ConsolePresenter, NewsClient, NovaSummarizer};
use std::io::{self as stdio, Write};

#[derive(Parser)]
#[command(name = "news-brief")]
#[command(about = "Fetch recent news for your topics and summarize each article with AI")]
struct Args {
    /// Comma-separated topics (e.g. "architecture, finance, sports").
    /// Omit to be prompted interactively.
    #[arg(short, long)]
    topics: Option<String>,
}

/// Returns `None` on EOF or an explicit quit, otherwise one line of
/// topic input (possibly empty - the pipeline handles that case).
fn prompt_topics() -> Result<Option<String>> {
    print!("\nWhat topics are you interested in learning about today? (e.g., architecture, finance, sports)\n> ");
    stdio::stdout().flush()?;

    let mut input = String::new();
    if stdio::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    let input = input.trim().to_string();
    if input == "quit" || input == "exit" {
        return Ok(None);
    }

    Ok(Some(input))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so they never interleave with results.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(stdio::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;

    let news = NewsClient::new(config.news_api_key)?;
    let summarizer =
        NovaSummarizer::new(config.bedrock_api_key, &config.aws_region, config.model_id)?;
    let mut presenter = ConsolePresenter;

    if let Some(topics) = args.topics {
        shared::pipeline::run(&topics, &news, &summarizer, &mut presenter).await;
        return Ok(());
    }

    println!("📰 Personalized news brief - press Ctrl-D or type \"quit\" to leave.");
    while let Some(input) = prompt_topics()? {
        shared::pipeline::run(&input, &news, &summarizer, &mut presenter).await;
    }

    Ok(())
}
