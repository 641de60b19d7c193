use crate::summarizer::Summary;

/// User-visible warnings, distinct from the operational log.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// Empty topic input; nothing was fetched.
    EmptyInput,
    /// The search service returned a non-success status for one topic.
    FetchFailed { topic: String },
    /// Every topic fetch came back empty or failed.
    NoArticles,
    /// There were articles but nothing to render.
    NoSummaries,
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::EmptyInput => "Please enter a topic to learn about.".to_string(),
            Notice::FetchFailed { topic } => {
                format!("Failed to fetch news articles for \"{}\"!", topic)
            }
            Notice::NoArticles => "No articles found for the given topics.".to_string(),
            Notice::NoSummaries => "Error: Could not generate summaries.".to_string(),
        }
    }
}

/// Rendering seam so the pipeline stays testable without a terminal.
pub trait Render {
    fn summaries(&mut self, summaries: &[Summary]);
    fn notice(&mut self, notice: &Notice);
}

/// Format summaries as markdown-style blocks with a `---` rule between
/// consecutive entries (none after the last).
fn format_summaries(summaries: &[Summary]) -> String {
    let mut out = String::new();

    for (index, summary) in summaries.iter().enumerate() {
        if index > 0 {
            out.push_str("---\n");
        }
        out.push_str(&format!("### {}\n", summary.title));
        out.push_str(&format!("**Summary:** {}\n", summary.summary));
        out.push_str(&format!("[Read more]({})\n", summary.url));
    }

    out
}

/// Writes the rendered blocks and warnings to stdout.
#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl Render for ConsolePresenter {
    fn summaries(&mut self, summaries: &[Summary]) {
        if summaries.is_empty() {
            self.notice(&Notice::NoSummaries);
            return;
        }
        print!("{}", format_summaries(summaries));
    }

    fn notice(&mut self, notice: &Notice) {
        println!("⚠ {}", notice.message());
    }
}
