pub mod ai;
pub mod mock;
pub mod twitter;
pub mod web;
pub mod youtube;

pub use mock::MockSources;

use crate::error::SourceError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Twitter,
    #[serde(rename = "youtube")]
    YouTube,
    Web,
    Ai,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Twitter => "twitter",
            SourceKind::YouTube => "youtube",
            SourceKind::Web => "web",
            SourceKind::Ai => "ai",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwitterItem {
    pub username: String,
    pub content: String,
    pub likes: u32,
    pub retweets: u32,
    pub timestamp: DateTime<Utc>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YouTubeItem {
    pub title: String,
    pub channel: String,
    pub views: u64,
    /// `M:SS`
    pub duration: String,
    pub thumbnail: Option<String>,
    pub url: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebItem {
    pub title: String,
    pub url: String,
    pub snippet: String,
    pub domain: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiResponse {
    pub content: String,
    pub summary: String,
    pub sources: Vec<String>,
    /// Always within `0.0..=1.0`.
    pub confidence: f64,
}

/// Capability interface over the external content integrations.
///
/// The orchestrator only sees this trait, so real clients can replace
/// [`MockSources`] without touching it.
#[async_trait]
pub trait ContentSources: Send + Sync {
    async fn search_twitter(&self, query: &str) -> Result<Vec<TwitterItem>, SourceError>;

    async fn search_youtube(&self, query: &str) -> Result<Vec<YouTubeItem>, SourceError>;

    async fn search_web(&self, query: &str) -> Result<Vec<WebItem>, SourceError>;

    async fn summarize(&self, query: &str) -> Result<AiResponse, SourceError>;
}
