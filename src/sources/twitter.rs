use super::TwitterItem;
use chrono::{Duration, Utc};
use rand::distr::Alphanumeric;
use rand::Rng;

const DAY_MS: i64 = 86_400_000;

/// Random lower-case handle suffix, e.g. `user_k3j9xq2a`.
pub(crate) fn random_handle<R: Rng + ?Sized>(rng: &mut R, prefix: &str, len: usize) -> String {
    let suffix: String = (0..len)
        .map(|_| char::from(rng.sample(Alphanumeric)).to_ascii_lowercase())
        .collect();
    format!("{}_{}", prefix, suffix)
}

/// Two fabricated posts about `query`, both from the last 24 hours.
pub fn mock_tweets<R: Rng + ?Sized>(rng: &mut R, query: &str) -> Vec<TwitterItem> {
    let now = Utc::now();

    vec![
        TwitterItem {
            username: random_handle(rng, "user", 8),
            content: format!(
                "Interesting thoughts on {}! This could change everything. #innovation",
                query
            ),
            likes: rng.random_range(0..1000),
            retweets: rng.random_range(0..100),
            timestamp: now - Duration::milliseconds(rng.random_range(0..DAY_MS)),
            url: None,
        },
        TwitterItem {
            username: random_handle(rng, "expert", 6),
            content: format!(
                "Great analysis of {}. The implications are significant for the industry.",
                query
            ),
            likes: rng.random_range(0..500),
            retweets: rng.random_range(0..50),
            timestamp: now - Duration::milliseconds(rng.random_range(0..DAY_MS)),
            url: None,
        },
    ]
}
