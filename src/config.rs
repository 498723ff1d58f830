use crate::engine::unfollow::UnfollowStrategy;
use crate::platform::types::ResultType;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const ENV_FILE: &str = ".env";
const BEARER_TOKEN_VAR: &str = "PLATFORM_BEARER_TOKEN";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub topics: Vec<String>,
    pub actions: ActionsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

/// One entry per action kind. Disabled actions are parsed but never
/// scheduled.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionsConfig {
    pub likes: EngageConfig,
    pub retweet: EngageConfig,
    pub follow: EngageConfig,
    pub unfollow: UnfollowConfig,
    pub rss: RssConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngageConfig {
    pub enabled: bool,
    pub target_number: usize,
    #[serde(default)]
    pub target_tweets: ResultType,
    #[serde(default)]
    pub language: Option<String>,
    /// Interval between runs, in minutes.
    pub every: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnfollowConfig {
    pub enabled: bool,
    pub target_number: usize,
    pub strategy: UnfollowStrategy,
    pub every: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RssConfig {
    pub enabled: bool,
    pub sources: Vec<String>,
    pub log_file: PathBuf,
    pub every: u64,
}

impl Config {
    /// Read the configuration once at startup. Malformed JSON or missing
    /// keys terminate the process here.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;
        Ok(config)
    }

    /// Load .env into the process environment. Real env vars take precedence.
    pub fn load_env_file() {
        let content = match std::fs::read_to_string(ENV_FILE) {
            Ok(c) => c,
            Err(_) => return,
        };
        let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
        for line in content.lines() {
            let line = line.trim().trim_matches('\r');
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim().trim_matches('"').trim_matches('\'');
                if std::env::var(key).is_err() {
                    std::env::set_var(key, value);
                }
            }
        }
    }

    pub fn bearer_token() -> Result<String> {
        match std::env::var(BEARER_TOKEN_VAR) {
            Ok(token) if !token.is_empty() => Ok(token),
            _ => anyhow::bail!("{} is not set (env var or .env)", BEARER_TOKEN_VAR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "api": { "base_url": "https://api.example.com" },
        "topics": ["rust", "open source"],
        "actions": {
            "likes":    { "enabled": true,  "target_number": 50, "target_tweets": "recent", "language": "en", "every": 30 },
            "retweet":  { "enabled": true,  "target_number": 20, "target_tweets": "popular", "every": 60 },
            "follow":   { "enabled": false, "target_number": 40, "target_tweets": "mixed", "every": 120 },
            "unfollow": { "enabled": true,  "target_number": 300, "strategy": "popularity", "every": 1440 },
            "rss":      { "enabled": true,  "sources": ["http://example.com/feed.xml"], "log_file": "posted.txt", "every": 180 }
        }
    }"#;

    #[test]
    fn sample_config_parses() {
        let config: Config = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(config.topics.len(), 2);
        assert_eq!(config.actions.likes.target_tweets, ResultType::Recent);
        assert_eq!(config.actions.likes.language.as_deref(), Some("en"));
        assert_eq!(config.actions.retweet.language, None);
        assert!(!config.actions.follow.enabled);
        assert_eq!(config.actions.unfollow.strategy, UnfollowStrategy::Popularity);
        assert_eq!(config.actions.rss.every, 180);
    }

    #[test]
    fn missing_keys_are_rejected() {
        assert!(serde_json::from_str::<Config>("{\"topics\": []}").is_err());
    }
}
