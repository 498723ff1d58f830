use super::guard::guarded;
use crate::platform::types::Account;
use crate::platform::Platform;
use rand::seq::SliceRandom;
use serde::Deserialize;

/// Unfollow batches never exceed this, whatever the configuration says.
pub const MAX_UNFOLLOW: usize = 200;

/// Ordering policy applied to the follow list before truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnfollowStrategy {
    Random,
    Popularity,
    Latest,
}

impl UnfollowStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            UnfollowStrategy::Random => "random",
            UnfollowStrategy::Popularity => "popularity",
            UnfollowStrategy::Latest => "latest",
        }
    }
}

/// Order follow relationships into pruning order. `popularity` puts the
/// least-followed accounts first. `latest` keeps the platform order, which
/// lists the most recently followed accounts first.
pub fn order_for_pruning(mut follows: Vec<Account>, strategy: UnfollowStrategy) -> Vec<Account> {
    match strategy {
        UnfollowStrategy::Popularity => follows.sort_by_key(|a| a.followers_count),
        UnfollowStrategy::Random => follows.shuffle(&mut rand::thread_rng()),
        UnfollowStrategy::Latest => {}
    }
    follows
}

/// Unfollow up to `target_number` accounts (clamped to 200) picked by the
/// given strategy, sequentially through the guard. A failed follow-list
/// fetch logs an error and yields an empty batch, like a failed candidate
/// search does.
pub async fn run_unfollow<P: Platform>(
    platform: &P,
    target_number: usize,
    strategy: UnfollowStrategy,
) -> Vec<Account> {
    let target = target_number.min(MAX_UNFOLLOW);

    let follows = match platform.friends(target).await {
        Ok(follows) => follows,
        Err(err) => {
            tracing::error!(error = %err, "unable to list follows");
            return Vec::new();
        }
    };

    let mut follows = order_for_pruning(follows, strategy);
    follows.truncate(target);

    let mut undone = Vec::new();
    for account in &follows {
        if let Some(account) = guarded(
            "unfollow",
            &account.screen_name,
            platform.unfollow(account.id),
        )
        .await
        {
            undone.push(account);
        }
    }

    tracing::info!(
        strategy = strategy.as_str(),
        succeeded = undone.len(),
        "unfollow batch complete"
    );
    undone
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(id: u64, followers: u64) -> Account {
        Account {
            id,
            screen_name: format!("user{}", id),
            followers_count: followers,
        }
    }

    #[test]
    fn popularity_orders_least_followed_first() {
        let follows = vec![account(1, 500), account(2, 3), account(3, 40)];
        let ordered = order_for_pruning(follows, UnfollowStrategy::Popularity);
        let counts: Vec<u64> = ordered.iter().map(|a| a.followers_count).collect();
        assert!(counts.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn latest_keeps_platform_order() {
        let follows = vec![account(9, 1), account(4, 9), account(6, 5)];
        let ordered = order_for_pruning(follows.clone(), UnfollowStrategy::Latest);
        let ids: Vec<u64> = ordered.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![9, 4, 6]);
    }

    #[test]
    fn random_keeps_the_same_accounts() {
        let follows: Vec<Account> = (0..20).map(|i| account(i, i)).collect();
        let mut ordered = order_for_pruning(follows, UnfollowStrategy::Random);
        ordered.sort_by_key(|a| a.id);
        let ids: Vec<u64> = ordered.iter().map(|a| a.id).collect();
        assert_eq!(ids, (0..20).collect::<Vec<u64>>());
    }

    #[test]
    fn strategy_parses_from_config_values() {
        let s: UnfollowStrategy = serde_json::from_str("\"popularity\"").unwrap();
        assert_eq!(s, UnfollowStrategy::Popularity);
        assert!(serde_json::from_str::<UnfollowStrategy>("\"newest\"").is_err());
    }
}
