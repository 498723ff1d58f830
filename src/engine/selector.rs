use crate::platform::types::{Post, ResultType, SearchQuery};
use crate::platform::Platform;
use rand::seq::SliceRandom;

/// Hard cap the platform puts on one search query.
pub const MAX_SEARCH_COUNT: usize = 100;

/// Pick a batch of candidate posts for a topic. With no topic given, one is
/// chosen at random from the configured list. The result order is shuffled
/// so repeated partial-failure runs don't keep retrying the platform's
/// head-of-ranking items. A failed query logs an error and yields an empty
/// batch.
pub async fn select<P: Platform>(
    platform: &P,
    topics: &[String],
    topic: Option<&str>,
    result_type: ResultType,
    language: Option<&str>,
    count: usize,
) -> Vec<Post> {
    let topic = match topic {
        Some(t) => t.to_string(),
        None => {
            let Some(t) = topics.choose(&mut rand::thread_rng()) else {
                tracing::error!("no topics configured");
                return Vec::new();
            };
            t.clone()
        }
    };

    let count = count.min(MAX_SEARCH_COUNT);
    let query = SearchQuery {
        topic,
        count,
        result_type,
        language: language.map(str::to_string),
    };

    match platform.search(&query).await {
        Ok(mut posts) => {
            posts.truncate(count);
            posts.shuffle(&mut rand::thread_rng());
            posts
        }
        Err(err) => {
            tracing::error!(topic = %query.topic, error = %err, "unable to retrieve posts");
            Vec::new()
        }
    }
}
