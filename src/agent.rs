//! Content orchestration: one prompt in, one aggregate out.

use crate::analyzer::{self, SourceSelection};
use crate::error::{AgentError, SourceError};
use crate::sources::{ai, AiResponse, ContentSources, SourceKind, TwitterItem, WebItem, YouTubeItem};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultMetadata {
    pub query: String,
    pub timestamp: DateTime<Utc>,
    /// Kinds that were invoked, in issue order. `Ai` is always last.
    pub sources: Vec<SourceKind>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub metadata: ResultMetadata,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub twitter: Option<Vec<TwitterItem>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub youtube: Option<Vec<YouTubeItem>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub web: Option<Vec<WebItem>>,
    pub ai_response: AiResponse,
}

/// Fixed issue order for the optional sources.
pub fn selected_kinds(selection: &SourceSelection) -> Vec<SourceKind> {
    let mut kinds = Vec::with_capacity(4);
    if selection.needs_twitter {
        kinds.push(SourceKind::Twitter);
    }
    if selection.needs_youtube {
        kinds.push(SourceKind::YouTube);
    }
    if selection.needs_web {
        kinds.push(SourceKind::Web);
    }
    kinds.push(SourceKind::Ai);
    kinds
}

/// Fans a prompt out to the content sources and assembles the result.
///
/// Cheap to clone; the sources are shared behind an `Arc`.
#[derive(Clone)]
pub struct Agent {
    sources: Arc<dyn ContentSources>,
}

impl Agent {
    pub fn new(sources: Arc<dyn ContentSources>) -> Self {
        Self { sources }
    }

    pub(crate) fn sources(&self) -> &dyn ContentSources {
        self.sources.as_ref()
    }

    /// Queries every selected source plus the AI summary concurrently.
    ///
    /// Each call runs on its own task. A failed AI summary is replaced by
    /// [`ai::degraded_response`] and does not fail the aggregate.
    ///
    /// # Errors
    ///
    /// [`AgentError::EmptyQuery`] for blank input, before any source is
    /// called. [`AgentError::Source`] as soon as any selected source fails; no
    /// partial result is produced. Calls still in flight are detached, not
    /// aborted, and settle on their own.
    pub async fn generate(&self, query: &str) -> Result<AggregateResult, AgentError> {
        if query.trim().is_empty() {
            return Err(AgentError::EmptyQuery);
        }

        let selection = analyzer::classify(query);
        let kinds = selected_kinds(&selection);
        tracing::debug!(
            query,
            category = %selection.category,
            sources = ?kinds,
            "dispatching source fetches"
        );

        // Issued in order: twitter, youtube, web, ai.
        let twitter = selection.needs_twitter.then(|| {
            self.spawn_leg(SourceKind::Twitter, query, |sources, q| async move {
                sources.search_twitter(&q).await
            })
        });
        let youtube = selection.needs_youtube.then(|| {
            self.spawn_leg(SourceKind::YouTube, query, |sources, q| async move {
                sources.search_youtube(&q).await
            })
        });
        let web = selection.needs_web.then(|| {
            self.spawn_leg(SourceKind::Web, query, |sources, q| async move {
                sources.search_web(&q).await
            })
        });
        let summary = self.spawn_leg(SourceKind::Ai, query, |sources, q| async move {
            Ok::<_, SourceError>(summarize_or_degrade(sources.as_ref(), &q).await)
        });

        let joined = futures::try_join!(
            optional(twitter),
            optional(youtube),
            optional(web),
            summary
        );
        let (twitter, youtube, web, ai_response) = match joined {
            Ok(parts) => parts,
            Err(e) => {
                tracing::warn!(query, error = %e, "content generation failed");
                return Err(e);
            }
        };

        let result = AggregateResult {
            metadata: ResultMetadata {
                query: query.to_string(),
                timestamp: Utc::now(),
                sources: kinds,
            },
            twitter,
            youtube,
            web,
            ai_response,
        };
        tracing::info!(
            query,
            sources = result.metadata.sources.len(),
            "generated aggregate content"
        );
        Ok(result)
    }

    /// Starts one source call on its own task and returns a future for its
    /// outcome. Dropping that future detaches the task.
    fn spawn_leg<T, F, Fut>(
        &self,
        kind: SourceKind,
        query: &str,
        call: F,
    ) -> impl Future<Output = Result<T, AgentError>>
    where
        F: FnOnce(Arc<dyn ContentSources>, String) -> Fut,
        Fut: Future<Output = Result<T, SourceError>> + Send + 'static,
        T: Send + 'static,
    {
        let handle = tokio::spawn(call(Arc::clone(&self.sources), query.to_string()));
        async move {
            match handle.await {
                Ok(res) => res.map_err(|source| AgentError::Source { kind, source }),
                Err(source) => Err(AgentError::Task { kind, source }),
            }
        }
    }
}

async fn optional<T>(
    leg: Option<impl Future<Output = Result<T, AgentError>>>,
) -> Result<Option<T>, AgentError> {
    match leg {
        Some(leg) => leg.await.map(Some),
        None => Ok(None),
    }
}

async fn summarize_or_degrade(sources: &dyn ContentSources, query: &str) -> AiResponse {
    match sources.summarize(query).await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(query, error = %e, "AI summary failed, using degraded response");
            ai::degraded_response(query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SourcesConfig;
    use crate::sources::MockSources;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    fn mock_agent() -> Agent {
        Agent::new(Arc::new(MockSources::new(SourcesConfig::instant())))
    }

    /// Wraps the mock sources, counting calls. One kind may be made to fail
    /// and one to take 40ms.
    struct FakeSources {
        inner: MockSources,
        calls: AtomicUsize,
        completed: Mutex<Vec<SourceKind>>,
        fail: Option<SourceKind>,
        slow: Option<SourceKind>,
    }

    impl FakeSources {
        fn new() -> Self {
            Self {
                inner: MockSources::new(SourcesConfig::instant()),
                calls: AtomicUsize::new(0),
                completed: Mutex::new(Vec::new()),
                fail: None,
                slow: None,
            }
        }

        fn failing(kind: SourceKind) -> Self {
            Self {
                fail: Some(kind),
                ..Self::new()
            }
        }

        fn slow(kind: SourceKind) -> Self {
            Self {
                slow: Some(kind),
                ..Self::new()
            }
        }

        async fn enter(&self, kind: SourceKind) -> Result<(), SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.slow == Some(kind) {
                tokio::time::sleep(Duration::from_millis(40)).await;
            }
            if self.fail == Some(kind) {
                return Err(SourceError::Unavailable {
                    kind,
                    reason: "injected".to_string(),
                });
            }
            self.completed.lock().unwrap().push(kind);
            Ok(())
        }
    }

    #[async_trait]
    impl ContentSources for FakeSources {
        async fn search_twitter(&self, query: &str) -> Result<Vec<TwitterItem>, SourceError> {
            self.enter(SourceKind::Twitter).await?;
            self.inner.search_twitter(query).await
        }

        async fn search_youtube(&self, query: &str) -> Result<Vec<YouTubeItem>, SourceError> {
            self.enter(SourceKind::YouTube).await?;
            self.inner.search_youtube(query).await
        }

        async fn search_web(&self, query: &str) -> Result<Vec<WebItem>, SourceError> {
            self.enter(SourceKind::Web).await?;
            self.inner.search_web(query).await
        }

        async fn summarize(&self, query: &str) -> Result<AiResponse, SourceError> {
            self.enter(SourceKind::Ai).await?;
            self.inner.summarize(query).await
        }
    }

    #[tokio::test]
    async fn test_empty_query_calls_nothing() {
        let fake = Arc::new(FakeSources::new());
        let agent = Agent::new(fake.clone());
        for query in ["", "   ", "\n\t"] {
            let err = agent.generate(query).await.unwrap_err();
            assert!(matches!(err, AgentError::EmptyQuery));
        }
        assert_eq!(fake.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_ai_response_always_present() {
        let agent = mock_agent();
        for query in ["gardening", "trending video", "news research article"] {
            let result = agent.generate(query).await.unwrap();
            assert_eq!(result.metadata.sources.last(), Some(&SourceKind::Ai));
            assert!(result.ai_response.confidence >= 0.7);
        }
    }

    #[tokio::test]
    async fn test_sources_match_selection_in_fixed_order() {
        let agent = mock_agent();
        let result = agent
            .generate("trending youtube research on batteries")
            .await
            .unwrap();
        assert_eq!(
            result.metadata.sources,
            vec![
                SourceKind::Twitter,
                SourceKind::YouTube,
                SourceKind::Web,
                SourceKind::Ai
            ]
        );
        assert_eq!(result.twitter.as_ref().map(Vec::len), Some(2));
        assert_eq!(result.youtube.as_ref().map(Vec::len), Some(2));
        assert_eq!(result.web.as_ref().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_default_web_only() {
        let result = mock_agent().generate("sourdough starter").await.unwrap();
        assert_eq!(
            result.metadata.sources,
            vec![SourceKind::Web, SourceKind::Ai]
        );
        assert!(result.twitter.is_none());
        assert!(result.youtube.is_none());
        assert!(result.web.is_some());
        assert_eq!(result.metadata.query, "sourdough starter");
    }

    #[tokio::test]
    async fn test_rust_tutorial_video_scenario() {
        let result = mock_agent()
            .generate("best tutorial video on rust")
            .await
            .unwrap();
        assert_eq!(
            result.metadata.sources,
            vec![SourceKind::YouTube, SourceKind::Ai]
        );
        assert_eq!(result.youtube.as_ref().map(Vec::len), Some(2));
        assert!(result.web.is_none());
        assert!(result.twitter.is_none());
    }

    #[tokio::test]
    async fn test_twitter_failure_fails_aggregate() {
        let fake = Arc::new(FakeSources::failing(SourceKind::Twitter));
        let agent = Agent::new(fake.clone());
        let err = agent
            .generate("social opinion on video research")
            .await
            .unwrap_err();
        match err {
            AgentError::Source { kind, source } => {
                assert_eq!(kind, SourceKind::Twitter);
                assert!(matches!(source, SourceError::Unavailable { .. }));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_ai_failure_degrades_summary() {
        let agent = Agent::new(Arc::new(FakeSources::failing(SourceKind::Ai)));
        let result = agent.generate("tide tables").await.unwrap();
        assert_eq!(result.ai_response.summary, "Error in AI processing");
        assert_eq!(result.ai_response.confidence, 0.0);
        assert!(result.ai_response.sources.is_empty());
        assert!(result.ai_response.content.contains("\"tide tables\""));
        assert_eq!(
            result.metadata.sources,
            vec![SourceKind::Web, SourceKind::Ai]
        );
        assert_eq!(result.web.as_ref().map(Vec::len), Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_inflight_fetches_settle_after_failure() {
        let fake = Arc::new(FakeSources {
            fail: Some(SourceKind::Twitter),
            slow: Some(SourceKind::Web),
            ..FakeSources::new()
        });
        let agent = Agent::new(fake.clone());
        let err = agent.generate("trending research").await.unwrap_err();
        assert!(matches!(
            err,
            AgentError::Source {
                kind: SourceKind::Twitter,
                ..
            }
        ));
        assert!(!fake.completed.lock().unwrap().contains(&SourceKind::Web));

        tokio::time::sleep(Duration::from_millis(150)).await;
        let completed = fake.completed.lock().unwrap().clone();
        assert!(completed.contains(&SourceKind::Web));
        assert!(completed.contains(&SourceKind::Ai));
    }

    struct PanickingWeb(MockSources);

    #[async_trait]
    impl ContentSources for PanickingWeb {
        async fn search_twitter(&self, query: &str) -> Result<Vec<TwitterItem>, SourceError> {
            self.0.search_twitter(query).await
        }

        async fn search_youtube(&self, query: &str) -> Result<Vec<YouTubeItem>, SourceError> {
            self.0.search_youtube(query).await
        }

        async fn search_web(&self, _query: &str) -> Result<Vec<WebItem>, SourceError> {
            panic!("web client crashed");
        }

        async fn summarize(&self, query: &str) -> Result<AiResponse, SourceError> {
            self.0.summarize(query).await
        }
    }

    #[tokio::test]
    async fn test_panicked_call_reports_task_error() {
        let agent = Agent::new(Arc::new(PanickingWeb(MockSources::new(
            SourcesConfig::instant(),
        ))));
        let err = agent.generate("news").await.unwrap_err();
        match err {
            AgentError::Task { kind, source } => {
                assert_eq!(kind, SourceKind::Web);
                assert!(source.is_panic());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_placement_follows_issue_order_not_completion() {
        let fake = Arc::new(FakeSources::slow(SourceKind::Twitter));
        let agent = Agent::new(fake.clone());
        let result = agent.generate("trending research").await.unwrap();

        let completed = fake.completed.lock().unwrap().clone();
        assert_eq!(completed.last(), Some(&SourceKind::Twitter));
        assert_eq!(
            result.metadata.sources,
            vec![SourceKind::Twitter, SourceKind::Web, SourceKind::Ai]
        );
        assert!(result.twitter.unwrap()[0].content.contains("trending research"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetches_run_concurrently() {
        let agent = Agent::new(Arc::new(MockSources::new(SourcesConfig {
            twitter_delay_ms: 60,
            youtube_delay_ms: 60,
            web_delay_ms: 60,
            ai_delay_ms: 60,
        })));
        let start = tokio::time::Instant::now();
        agent
            .generate("trending youtube research")
            .await
            .unwrap();
        // four sequential calls would take 240ms
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(60));
        assert!(elapsed < Duration::from_millis(120));
    }

    #[tokio::test]
    async fn test_identical_queries_refetch() {
        let fake = Arc::new(FakeSources::new());
        let agent = Agent::new(fake.clone());
        agent.generate("plain query").await.unwrap();
        agent.generate("plain query").await.unwrap();
        // web + ai, twice
        assert_eq!(fake.calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_aggregate_serializes_without_absent_sources() {
        let result = mock_agent().generate("best tutorial video").await.unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("web").is_none());
        assert!(json.get("twitter").is_none());
        assert_eq!(json["metadata"]["sources"], serde_json::json!(["youtube", "ai"]));
    }

    #[test]
    fn test_selected_kinds_always_end_with_ai() {
        let sel = analyzer::classify("video");
        assert_eq!(
            selected_kinds(&sel),
            vec![SourceKind::YouTube, SourceKind::Ai]
        );
    }
}
