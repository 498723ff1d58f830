pub mod rest;
pub mod types;

use async_trait::async_trait;
use thiserror::Error;
use types::{Account, Post, SearchQuery, StatusUpdate};

/// Failure reported by the platform for a single call. Rate limiting and
/// generic API rejections are distinct variants so callers can match on
/// them, but the action guard treats every variant the same way.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("rate limited")]
    RateLimited,
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("media read failed: {0}")]
    Media(#[from] std::io::Error),
}

pub type PlatformResult<T> = Result<T, PlatformError>;

#[async_trait]
pub trait Platform: Send + Sync {
    /// One search query for posts matching a topic.
    async fn search(&self, query: &SearchQuery) -> PlatformResult<Vec<Post>>;
    async fn like(&self, post: &Post) -> PlatformResult<Post>;
    async fn repost(&self, post: &Post) -> PlatformResult<Post>;
    async fn follow(&self, screen_name: &str) -> PlatformResult<Account>;
    async fn unfollow(&self, user_id: u64) -> PlatformResult<Account>;
    /// Current follow relationships, newest first, at most `limit` of them.
    async fn friends(&self, limit: usize) -> PlatformResult<Vec<Account>>;
    async fn post_status(&self, update: &StatusUpdate) -> PlatformResult<Post>;
    /// Cheap authenticated call to confirm the credentials work.
    async fn verify_credentials(&self) -> PlatformResult<Account>;
}
