use super::YouTubeItem;
use chrono::Utc;
use rand::Rng;

/// Formats a random `M:SS` duration with minutes in `min_minutes..min_minutes + span`.
fn random_duration<R: Rng + ?Sized>(rng: &mut R, min_minutes: u32, span: u32) -> String {
    let minutes = rng.random_range(0..span) + min_minutes;
    let seconds = rng.random_range(0..60u32);
    format!("{}:{:02}", minutes, seconds)
}

pub fn mock_videos<R: Rng + ?Sized>(rng: &mut R, query: &str) -> Vec<YouTubeItem> {
    let now = Utc::now();

    vec![
        YouTubeItem {
            title: format!("Complete Guide to {} - Everything You Need to Know", query),
            channel: "TechExplainer".to_string(),
            views: rng.random_range(0..100_000),
            duration: random_duration(rng, 5, 20),
            thumbnail: None,
            url: None,
            timestamp: now,
        },
        YouTubeItem {
            title: format!("{} Explained in 10 Minutes", query),
            channel: "QuickLearning".to_string(),
            views: rng.random_range(0..50_000),
            duration: random_duration(rng, 5, 15),
            thumbnail: None,
            url: None,
            timestamp: now,
        },
    ]
}
