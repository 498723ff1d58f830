use crate::config::{ActionsConfig, Config, EngageConfig};
use crate::engine::batch::{self, EngageKind};
use crate::engine::news;
use crate::engine::unfollow::{self, UnfollowStrategy};
use crate::feed::NewsFeed;
use crate::platform::types::ResultType;
use crate::platform::Platform;
use anyhow::Result;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Poll interval of the scheduler loop. Sub-minute precision is neither
/// needed nor provided.
const TICK: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
struct EngageParams {
    target_number: usize,
    result_type: ResultType,
    language: Option<String>,
}

impl From<&EngageConfig> for EngageParams {
    fn from(config: &EngageConfig) -> Self {
        Self {
            target_number: config.target_number,
            result_type: config.target_tweets,
            language: config.language.clone(),
        }
    }
}

#[derive(Debug, Clone)]
enum TaskKind {
    Engage(EngageKind, EngageParams),
    Unfollow {
        target_number: usize,
        strategy: UnfollowStrategy,
    },
    News {
        sources: Vec<String>,
        log_file: PathBuf,
    },
}

struct Task {
    kind: TaskKind,
    every: Duration,
    next_run: Instant,
}

/// Maps the configuration to recurring tasks and runs them forever on a
/// fixed tick. Tasks run sequentially on this single loop; a long batch
/// delays everything scheduled after it.
pub struct Scheduler<P, F> {
    platform: P,
    feed: F,
    topics: Vec<String>,
    tasks: Vec<Task>,
}

/// One (kind, interval) pair per enabled action.
fn plan(actions: &ActionsConfig) -> Vec<(TaskKind, Duration)> {
    let mut planned = Vec::new();
    if actions.likes.enabled {
        planned.push((
            TaskKind::Engage(EngageKind::Like, EngageParams::from(&actions.likes)),
            Duration::from_secs(actions.likes.every * 60),
        ));
    }
    if actions.retweet.enabled {
        planned.push((
            TaskKind::Engage(EngageKind::Repost, EngageParams::from(&actions.retweet)),
            Duration::from_secs(actions.retweet.every * 60),
        ));
    }
    if actions.follow.enabled {
        planned.push((
            TaskKind::Engage(EngageKind::Follow, EngageParams::from(&actions.follow)),
            Duration::from_secs(actions.follow.every * 60),
        ));
    }
    if actions.unfollow.enabled {
        planned.push((
            TaskKind::Unfollow {
                target_number: actions.unfollow.target_number,
                strategy: actions.unfollow.strategy,
            },
            Duration::from_secs(actions.unfollow.every * 60),
        ));
    }
    if actions.rss.enabled {
        planned.push((
            TaskKind::News {
                sources: actions.rss.sources.clone(),
                log_file: actions.rss.log_file.clone(),
            },
            Duration::from_secs(actions.rss.every * 60),
        ));
    }
    planned
}

impl<P: Platform, F: NewsFeed> Scheduler<P, F> {
    pub fn from_config(platform: P, feed: F, config: &Config) -> Self {
        let now = Instant::now();
        let tasks = plan(&config.actions)
            .into_iter()
            .map(|(kind, every)| Task {
                kind,
                every,
                // First run one interval after startup, like each rerun.
                next_run: now + every,
            })
            .collect();
        Self {
            platform,
            feed,
            topics: config.topics.clone(),
            tasks,
        }
    }

    /// Run all due tasks, then idle for one tick, forever.
    pub async fn run(mut self) -> Result<()> {
        tracing::info!(tasks = self.tasks.len(), "scheduler started");
        loop {
            let now = Instant::now();
            for i in 0..self.tasks.len() {
                if now >= self.tasks[i].next_run {
                    let kind = self.tasks[i].kind.clone();
                    self.execute(&kind).await;
                    self.tasks[i].next_run = Instant::now() + self.tasks[i].every;
                }
            }
            tokio::time::sleep(TICK).await;
        }
    }

    async fn execute(&self, kind: &TaskKind) {
        match kind {
            TaskKind::Engage(engage_kind, params) => {
                batch::run_batch(
                    &self.platform,
                    &self.topics,
                    *engage_kind,
                    params.target_number,
                    params.result_type,
                    params.language.as_deref(),
                )
                .await;
            }
            TaskKind::Unfollow {
                target_number,
                strategy,
            } => {
                unfollow::run_unfollow(&self.platform, *target_number, *strategy).await;
            }
            TaskKind::News { sources, log_file } => {
                match news::post_latest_news(&self.platform, &self.feed, sources, log_file).await {
                    Ok(Some(_)) => {}
                    Ok(None) => tracing::info!("no unseen news to post"),
                    Err(err) => tracing::error!(error = %err, "news posting failed"),
                }
            }
        }
    }
}
