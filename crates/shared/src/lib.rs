// Public modules
pub mod config;
pub mod news;
pub mod pipeline;
pub mod presenter;
pub mod summarizer;
pub mod topics;

// Re-export commonly used types
pub use config::Config;
pub use news::{Article, FetchArticles, NewsClient};
pub use presenter::{ConsolePresenter, Notice, Render};
pub use summarizer::{NovaSummarizer, Summarize, Summary, PLACEHOLDER_SUMMARY};
pub use topics::parse_topics;
