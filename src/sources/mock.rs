use super::{ai, twitter, web, youtube};
use super::{AiResponse, ContentSources, TwitterItem, WebItem, YouTubeItem};
use crate::config::SourcesConfig;
use crate::error::SourceError;
use async_trait::async_trait;
use tokio::time::sleep;

/// Stand-in for the real integrations: sleeps for the configured per-kind
/// latency, then fabricates two plausible items.
#[derive(Debug, Clone, Default)]
pub struct MockSources {
    config: SourcesConfig,
}

impl MockSources {
    pub fn new(config: SourcesConfig) -> Self {
        Self { config }
    }
}

// The thread-local rng is not `Send`, so it is only created after the last
// await point of each call.
#[async_trait]
impl ContentSources for MockSources {
    async fn search_twitter(&self, query: &str) -> Result<Vec<TwitterItem>, SourceError> {
        sleep(self.config.twitter_delay()).await;
        Ok(twitter::mock_tweets(&mut rand::rng(), query))
    }

    async fn search_youtube(&self, query: &str) -> Result<Vec<YouTubeItem>, SourceError> {
        sleep(self.config.youtube_delay()).await;
        Ok(youtube::mock_videos(&mut rand::rng(), query))
    }

    async fn search_web(&self, query: &str) -> Result<Vec<WebItem>, SourceError> {
        sleep(self.config.web_delay()).await;
        Ok(web::mock_articles(&mut rand::rng(), query))
    }

    async fn summarize(&self, query: &str) -> Result<AiResponse, SourceError> {
        sleep(self.config.ai_delay()).await;
        Ok(ai::mock_summary(&mut rand::rng(), query))
    }
}
