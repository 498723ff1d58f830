use super::guard::guarded;
use crate::feed::NewsFeed;
use crate::history;
use crate::platform::types::{Post, StatusUpdate};
use crate::platform::Platform;
use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use std::path::Path;

/// Scan the configured feeds in random order and post the first article not
/// seen before. The posting link (origin link when the feed carries one) is
/// both the dedup key and the line appended to the log, so a link can never
/// be posted twice. Returns the posted status, or `None` when every source
/// was exhausted without a postable entry.
pub async fn post_latest_news<P: Platform, F: NewsFeed>(
    platform: &P,
    feed: &F,
    sources: &[String],
    log_path: &Path,
) -> Result<Option<Post>> {
    let mut sources = sources.to_vec();
    sources.shuffle(&mut rand::thread_rng());

    let posted = history::load(log_path)
        .with_context(|| format!("unable to read posted log {}", log_path.display()))?;

    for source in &sources {
        let articles = match feed.fetch(source).await {
            Ok(articles) => articles,
            Err(err) => {
                tracing::warn!(source = source.as_str(), error = %err, "feed fetch failed, skipping");
                continue;
            }
        };

        // First entry in feed order that carries a summary.
        let Some(latest) = articles.iter().find(|a| a.has_summary()) else {
            continue;
        };

        let link = latest.posting_link();
        if posted.contains(link) {
            continue;
        }

        let text = format!("{}. Read more: {}", latest.title, link);
        let update = StatusUpdate::text(text);
        if let Some(status) = guarded("post", link, platform.post_status(&update)).await {
            tracing::info!(link, "posted news");
            history::append(log_path, link)
                .with_context(|| format!("unable to append to posted log {}", log_path.display()))?;
            return Ok(Some(status));
        }
    }

    Ok(None)
}
