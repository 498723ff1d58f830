use super::{guard::guarded, selector};
use crate::platform::types::{Account, Post, ResultType};
use crate::platform::Platform;

/// The engagement actions that run over a candidate batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngageKind {
    Like,
    Repost,
    Follow,
}

impl EngageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EngageKind::Like => "like",
            EngageKind::Repost => "repost",
            EngageKind::Follow => "follow",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Engagement {
    Liked(Post),
    Reposted(Post),
    Followed(Account),
}

/// Apply one engagement action across a freshly selected candidate batch,
/// sequentially, keeping only the successes. Failed single-item calls are
/// already logged by the guard and simply contribute nothing. At most
/// `target_number + 1` external calls are made: one search plus one call
/// per candidate.
pub async fn run_batch<P: Platform>(
    platform: &P,
    topics: &[String],
    kind: EngageKind,
    target_number: usize,
    result_type: ResultType,
    language: Option<&str>,
) -> Vec<Engagement> {
    let candidates =
        selector::select(platform, topics, None, result_type, language, target_number).await;

    let mut done = Vec::new();
    for post in &candidates {
        let outcome = match kind {
            EngageKind::Like => {
                guarded("like", &post.id.to_string(), platform.like(post))
                    .await
                    .map(Engagement::Liked)
            }
            EngageKind::Repost => {
                guarded("repost", &post.id.to_string(), platform.repost(post))
                    .await
                    .map(Engagement::Reposted)
            }
            EngageKind::Follow => {
                guarded(
                    "follow",
                    &post.author.screen_name,
                    platform.follow(&post.author.screen_name),
                )
                .await
                .map(Engagement::Followed)
            }
        };
        if let Some(outcome) = outcome {
            done.push(outcome);
        }
    }

    tracing::info!(
        action = kind.as_str(),
        succeeded = done.len(),
        attempted = candidates.len(),
        "engagement batch complete"
    );
    done
}
