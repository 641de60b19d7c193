use crate::news::FetchArticles;
use crate::presenter::{Notice, Render};
use crate::summarizer::Summarize;
use crate::topics::parse_topics;

/// One end-to-end pass: parse topics, fetch per topic, summarize per
/// article, render.
///
/// A failed fetch becomes a per-topic warning and the run continues
/// with the other topics; a failed summarization surfaces as a
/// placeholder inside its `Summary`. Nothing here aborts the run, so
/// there is no error to return.
pub async fn run(
    input: &str,
    fetcher: &impl FetchArticles,
    summarizer: &impl Summarize,
    presenter: &mut impl Render,
) {
    let topics = parse_topics(input);
    if topics.is_empty() {
        presenter.notice(&Notice::EmptyInput);
        return;
    }

    let mut articles = Vec::new();
    for topic in &topics {
        match fetcher.fetch(topic).await {
            Ok(found) => {
                tracing::info!(topic = %topic, count = found.len(), "fetched articles");
                articles.extend(found);
            }
            Err(e) => {
                tracing::warn!(topic = %topic, error = %e, "fetch failed");
                presenter.notice(&Notice::FetchFailed {
                    topic: topic.clone(),
                });
            }
        }
    }

    if articles.is_empty() {
        presenter.notice(&Notice::NoArticles);
        return;
    }

    let mut summaries = Vec::with_capacity(articles.len());
    for article in &articles {
        summaries.push(summarizer.summarize(article).await);
    }

    presenter.summaries(&summaries);
}
