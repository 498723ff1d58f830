/// One entry of a news feed, as much of it as the poster cares about.
#[derive(Debug, Clone)]
pub struct Article {
    pub title: String,
    pub link: String,
    /// Syndication-origin URL (feedburner origLink), preferred over `link`
    /// when present.
    pub origin_link: Option<String>,
    pub summary: Option<String>,
}

impl Article {
    /// The URL the poster publishes and deduplicates against.
    pub fn posting_link(&self) -> &str {
        self.origin_link.as_deref().unwrap_or(&self.link)
    }

    pub fn has_summary(&self) -> bool {
        self.summary.as_deref().is_some_and(|s| !s.is_empty())
    }
}
