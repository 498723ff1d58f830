pub mod rss;
pub mod types;

use anyhow::Result;
use async_trait::async_trait;
use types::Article;

#[async_trait]
pub trait NewsFeed: Send + Sync {
    /// Fetch and parse one feed source. Entries come back in feed order.
    async fn fetch(&self, source_url: &str) -> Result<Vec<Article>>;
}
