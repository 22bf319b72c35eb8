use super::WebItem;
use chrono::{Duration, Utc};
use rand::Rng;

const DAY_MS: i64 = 86_400_000;

/// URL path segment for a query: lower-cased, whitespace runs collapsed to `-`,
/// then percent-encoded.
pub(crate) fn slugify(query: &str) -> String {
    let lower = query.trim().to_lowercase();
    let slug = lower.split_whitespace().collect::<Vec<_>>().join("-");
    urlencoding::encode(&slug).into_owned()
}

pub fn mock_articles<R: Rng + ?Sized>(rng: &mut R, query: &str) -> Vec<WebItem> {
    let now = Utc::now();
    let slug = slugify(query);

    vec![
        WebItem {
            title: format!("Understanding {}: A Comprehensive Overview", query),
            url: format!("https://example.com/articles/{}", slug),
            snippet: format!(
                "This article provides a detailed explanation of {}, covering key concepts, applications, and future implications...",
                query
            ),
            domain: "example.com".to_string(),
            timestamp: now - Duration::milliseconds(rng.random_range(0..DAY_MS * 7)),
        },
        WebItem {
            title: format!("Latest Developments in {}", query),
            url: format!("https://news.example.com/{}-latest", slug),
            snippet: format!(
                "Recent breakthroughs in {} have opened new possibilities. Industry experts discuss the potential impact...",
                query
            ),
            domain: "news.example.com".to_string(),
            timestamp: now - Duration::milliseconds(rng.random_range(0..DAY_MS * 3)),
        },
    ]
}
