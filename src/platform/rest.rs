use super::types::*;
use super::{Platform, PlatformError, PlatformResult};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};

/// Page size for the follow-list endpoint.
const FRIENDS_PAGE_SIZE: usize = 200;

pub struct PlatformRest {
    client: Client,
    base_url: String,
    bearer_token: String,
}

impl PlatformRest {
    pub fn new(base_url: &str, bearer_token: String) -> Self {
        let client = Client::builder()
            .pool_max_idle_per_host(4)
            .build()
            .expect("failed to build HTTP client");
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> PlatformResult<T> {
        let resp = self
            .client
            .get(self.url(path))
            .bearer_auth(&self.bearer_token)
            .query(query)
            .send()
            .await?;
        decode(resp).await
    }

    async fn post<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> PlatformResult<T> {
        let resp = self
            .client
            .post(self.url(path))
            .bearer_auth(&self.bearer_token)
            .form(params)
            .send()
            .await?;
        decode(resp).await
    }
}

#[async_trait]
impl Platform for PlatformRest {
    async fn search(&self, query: &SearchQuery) -> PlatformResult<Vec<Post>> {
        let mut params = vec![
            ("q", query.topic.clone()),
            ("count", query.count.to_string()),
            ("result_type", query.result_type.as_str().to_string()),
        ];
        if let Some(lang) = &query.language {
            params.push(("lang", lang.clone()));
        }
        let resp: SearchResponse = self.get("/1.1/search/tweets.json", &params).await?;
        Ok(resp.statuses)
    }

    async fn like(&self, post: &Post) -> PlatformResult<Post> {
        self.post("/1.1/favorites/create.json", &[("id", post.id.to_string())])
            .await
    }

    async fn repost(&self, post: &Post) -> PlatformResult<Post> {
        let path = format!("/1.1/statuses/retweet/{}.json", post.id);
        self.post(&path, &[]).await
    }

    async fn follow(&self, screen_name: &str) -> PlatformResult<Account> {
        self.post(
            "/1.1/friendships/create.json",
            &[("screen_name", screen_name.to_string())],
        )
        .await
    }

    async fn unfollow(&self, user_id: u64) -> PlatformResult<Account> {
        self.post(
            "/1.1/friendships/destroy.json",
            &[("user_id", user_id.to_string())],
        )
        .await
    }

    /// Walk the follow-list cursor until `limit` accounts are collected or
    /// the platform reports the end of the list.
    async fn friends(&self, limit: usize) -> PlatformResult<Vec<Account>> {
        let mut all = Vec::new();
        let mut cursor: i64 = -1;

        while all.len() < limit {
            let page: FriendsPage = self
                .get(
                    "/1.1/friends/list.json",
                    &[
                        ("cursor", cursor.to_string()),
                        ("count", FRIENDS_PAGE_SIZE.min(limit).to_string()),
                    ],
                )
                .await?;
            let done = page.users.is_empty() || page.next_cursor == 0;
            all.extend(page.users);
            if done {
                break;
            }
            cursor = page.next_cursor;
        }

        all.truncate(limit);
        Ok(all)
    }

    async fn post_status(&self, update: &StatusUpdate) -> PlatformResult<Post> {
        if let Some(media_path) = &update.media_path {
            let bytes = tokio::fs::read(media_path).await?;
            let file_name = media_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "media".to_string());

            let mut form = reqwest::multipart::Form::new()
                .text("status", update.text.clone())
                .part("media[]", reqwest::multipart::Part::bytes(bytes).file_name(file_name));
            if let Some(reply_to) = update.in_reply_to {
                form = form.text("in_reply_to_status_id", reply_to.to_string());
            }

            let resp = self
                .client
                .post(self.url("/1.1/statuses/update_with_media.json"))
                .bearer_auth(&self.bearer_token)
                .multipart(form)
                .send()
                .await?;
            return decode(resp).await;
        }

        let mut params = vec![("status", update.text.clone())];
        if let Some(reply_to) = update.in_reply_to {
            params.push(("in_reply_to_status_id", reply_to.to_string()));
        }
        self.post("/1.1/statuses/update.json", &params).await
    }

    async fn verify_credentials(&self) -> PlatformResult<Account> {
        self.get("/1.1/account/verify_credentials.json", &[]).await
    }
}

/// Map an HTTP response to the tagged platform result. 429 is the rate-limit
/// condition; any other non-success status is a generic API error.
async fn decode<T: serde::de::DeserializeOwned>(resp: Response) -> PlatformResult<T> {
    let status = resp.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(PlatformError::RateLimited);
    }
    if !status.is_success() {
        let message = resp.text().await.unwrap_or_default();
        return Err(PlatformError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp.json().await?)
}
