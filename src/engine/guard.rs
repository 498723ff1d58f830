use crate::platform::PlatformResult;
use rand::Rng;
use std::future::Future;
use std::time::Duration;

/// Upper bound of the random pre-call nap, in seconds.
const MAX_NAP_SECS: f64 = 0.5;

/// Wrap one single-item platform call: nap for a random duration in
/// [0, 0.5) seconds, then run it. Every `PlatformError` is logged as a
/// warning carrying the action and the offending identifier, and converted
/// to `None`. Applied uniformly to post-status, like, repost, follow and
/// unfollow calls.
pub async fn guarded<T>(
    action: &'static str,
    id: &str,
    call: impl Future<Output = PlatformResult<T>>,
) -> Option<T> {
    let nap = rand::thread_rng().gen_range(0.0..MAX_NAP_SECS);
    tokio::time::sleep(Duration::from_secs_f64(nap)).await;

    match call.await {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(action, id, error = %err, "platform call failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::types::Account;
    use crate::platform::PlatformError;
    use std::time::Instant;

    #[tokio::test]
    async fn success_passes_value_through() {
        let account = Account {
            id: 7,
            screen_name: "someone".to_string(),
            followers_count: 0,
        };
        let out = guarded("follow", "someone", async { Ok(account) }).await;
        assert_eq!(out.map(|a| a.id), Some(7));
    }

    #[tokio::test]
    async fn rate_limit_becomes_absence() {
        let out: Option<Account> =
            guarded("follow", "someone", async { Err(PlatformError::RateLimited) }).await;
        assert!(out.is_none());
    }

    #[tokio::test]
    async fn api_error_becomes_absence() {
        let out: Option<Account> = guarded("unfollow", "42", async {
            Err(PlatformError::Api {
                status: 403,
                message: "forbidden".to_string(),
            })
        })
        .await;
        assert!(out.is_none());
    }

    #[tokio::test]
    async fn nap_stays_under_the_bound() {
        let start = Instant::now();
        let _: Option<()> = guarded("like", "1", async { Ok(()) }).await;
        assert!(start.elapsed() < Duration::from_millis(600));
    }
}
