use serde::Deserialize;
use std::path::PathBuf;

/// A post returned by a topic search, eligible for an engagement action.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub id: u64,
    pub text: String,
    #[serde(rename = "user")]
    pub author: Account,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub id: u64,
    pub screen_name: String,
    #[serde(default)]
    pub followers_count: u64,
}

/// Search result-type filter understood by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultType {
    #[default]
    Mixed,
    Recent,
    Popular,
}

impl ResultType {
    pub fn as_str(self) -> &'static str {
        match self {
            ResultType::Mixed => "mixed",
            ResultType::Recent => "recent",
            ResultType::Popular => "popular",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub topic: String,
    pub count: usize,
    pub result_type: ResultType,
    pub language: Option<String>,
}

/// Outgoing status. The image and reply reference are optional.
#[derive(Debug, Clone, Default)]
pub struct StatusUpdate {
    pub text: String,
    pub media_path: Option<PathBuf>,
    pub in_reply_to: Option<u64>,
}

impl StatusUpdate {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub statuses: Vec<Post>,
}

/// One page of the cursor-paginated follow list.
#[derive(Debug, Clone, Deserialize)]
pub struct FriendsPage {
    pub users: Vec<Account>,
    #[serde(default)]
    pub next_cursor: i64,
}
