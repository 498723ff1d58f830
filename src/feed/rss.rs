use super::types::Article;
use super::NewsFeed;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Namespace prefix feedburner uses for the syndication-origin link.
const FEEDBURNER_NS: &str = "feedburner";

pub struct RssClient {
    client: Client,
}

impl RssClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for RssClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NewsFeed for RssClient {
    async fn fetch(&self, source_url: &str) -> Result<Vec<Article>> {
        let resp = self
            .client
            .get(source_url)
            .send()
            .await
            .with_context(|| format!("feed request failed: {}", source_url))?;

        let status = resp.status();
        if !status.is_success() {
            anyhow::bail!("feed fetch {} failed ({})", source_url, status);
        }

        let body = resp
            .bytes()
            .await
            .context("failed to read feed body")?;
        let channel = ::rss::Channel::read_from(&body[..])
            .with_context(|| format!("failed to parse feed: {}", source_url))?;

        Ok(channel.items().iter().map(article_from_item).collect())
    }
}

fn article_from_item(item: &::rss::Item) -> Article {
    let origin_link = item
        .extensions()
        .get(FEEDBURNER_NS)
        .and_then(|elements| elements.get("origLink"))
        .and_then(|exts| exts.first())
        .and_then(|ext| ext.value())
        .map(str::to_string);

    Article {
        title: item.title().unwrap_or_default().to_string(),
        link: item.link().unwrap_or_default().to_string(),
        origin_link,
        summary: item.description().map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:feedburner="http://rssnamespace.org/feedburner/ext/1.0">
  <channel>
    <title>example</title>
    <link>http://example.com</link>
    <description>test feed</description>
    <item>
      <title>First</title>
      <link>http://feeds.example.com/a</link>
      <feedburner:origLink>http://example.com/a</feedburner:origLink>
      <description>summary a</description>
    </item>
    <item>
      <title>Second</title>
      <link>http://example.com/b</link>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn maps_items_and_prefers_origin_link() {
        let channel = ::rss::Channel::read_from(FEED.as_bytes()).unwrap();
        let articles: Vec<Article> = channel.items().iter().map(article_from_item).collect();

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "First");
        assert_eq!(articles[0].posting_link(), "http://example.com/a");
        assert!(articles[0].has_summary());

        assert_eq!(articles[1].posting_link(), "http://example.com/b");
        assert!(!articles[1].has_summary());
    }
}
