//! Display blocks: the cards the presentation layer shows for each result.

use crate::agent::{Agent, AggregateResult, ResultMetadata};
use crate::config::CanvasConfig;
use crate::error::AgentError;
use crate::sources::{ai, AiResponse, TwitterItem, WebItem, YouTubeItem};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    Twitter,
    #[serde(rename = "youtube")]
    YouTube,
    Web,
    AiResponse,
    Unified,
}

/// Summary card listing which sources contributed to a generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedSummary {
    pub query: String,
    pub metadata: ResultMetadata,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "kebab-case")]
pub enum BlockContent {
    Twitter(TwitterItem),
    #[serde(rename = "youtube")]
    YouTube(YouTubeItem),
    Web(WebItem),
    AiResponse(AiResponse),
    Unified(UnifiedSummary),
}

impl BlockContent {
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockContent::Twitter(_) => BlockKind::Twitter,
            BlockContent::YouTube(_) => BlockKind::YouTube,
            BlockContent::Web(_) => BlockKind::Web,
            BlockContent::AiResponse(_) => BlockKind::AiResponse,
            BlockContent::Unified(_) => BlockKind::Unified,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub id: Uuid,
    #[serde(flatten)]
    pub content: BlockContent,
    pub source: String,
    pub position: Position,
    pub timestamp: DateTime<Utc>,
}

impl ContentBlock {
    pub fn kind(&self) -> BlockKind {
        self.content.kind()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank prompt; nothing happened.
    Ignored,
    /// Generation succeeded and this many blocks were added.
    Added(usize),
    /// Generation failed and the error placeholder was added.
    Failed,
}

pub fn unified_summary_text(metadata: &ResultMetadata) -> String {
    let names: Vec<&str> = metadata.sources.iter().map(|k| k.as_str()).collect();
    format!(
        "Generated {} types of content from {}",
        names.len(),
        names.join(", ")
    )
}

#[derive(Debug, Clone, Default)]
pub struct Canvas {
    layout: CanvasConfig,
    blocks: Vec<ContentBlock>,
    last_query: Option<String>,
}

impl Canvas {
    pub fn new(layout: CanvasConfig) -> Self {
        Self {
            layout,
            blocks: Vec::new(),
            last_query: None,
        }
    }

    fn random_position(&self) -> Position {
        let mut rng = rand::rng();
        Position {
            x: self.layout.origin_x + rng.random::<f64>() * self.layout.spread_x,
            y: self.layout.origin_y + rng.random::<f64>() * self.layout.spread_y,
        }
    }

    pub fn add_block(&mut self, content: BlockContent, source: &str) -> Uuid {
        let block = ContentBlock {
            id: Uuid::new_v4(),
            content,
            source: source.to_string(),
            position: self.random_position(),
            timestamp: Utc::now(),
        };
        let id = block.id;
        self.blocks.push(block);
        id
    }

    pub fn remove_block(&mut self, id: Uuid) -> bool {
        let before = self.blocks.len();
        self.blocks.retain(|b| b.id != id);
        self.blocks.len() != before
    }

    pub fn move_block(&mut self, id: Uuid, position: Position) -> bool {
        match self.blocks.iter_mut().find(|b| b.id == id) {
            Some(block) => {
                block.position = position;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&ContentBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    pub fn set_last_query(&mut self, query: &str) {
        self.last_query = Some(query.to_string());
    }

    /// Appends one block per item of `result`: the AI response first, then
    /// Twitter, YouTube and Web items, then a unified summary block.
    /// Returns the number of blocks added.
    pub fn apply(&mut self, result: &AggregateResult) -> usize {
        let before = self.blocks.len();

        self.add_block(
            BlockContent::AiResponse(result.ai_response.clone()),
            "AI Agent",
        );
        for tweet in result.twitter.iter().flatten() {
            self.add_block(BlockContent::Twitter(tweet.clone()), "Twitter");
        }
        for video in result.youtube.iter().flatten() {
            self.add_block(BlockContent::YouTube(video.clone()), "YouTube");
        }
        for article in result.web.iter().flatten() {
            self.add_block(BlockContent::Web(article.clone()), "Web Search");
        }
        self.add_block(
            BlockContent::Unified(UnifiedSummary {
                query: result.metadata.query.clone(),
                metadata: result.metadata.clone(),
                summary: unified_summary_text(&result.metadata),
            }),
            "Unified Agent",
        );

        self.blocks.len() - before
    }

    /// Adds the generic failure placeholder.
    pub fn apply_failure(&mut self) -> Uuid {
        self.add_block(BlockContent::AiResponse(ai::failure_response()), "Error")
    }

    /// Routes a finished generation to [`Canvas::apply`] or
    /// [`Canvas::apply_failure`].
    pub fn apply_outcome(
        &mut self,
        outcome: &Result<AggregateResult, AgentError>,
    ) -> SubmitOutcome {
        match outcome {
            Ok(result) => SubmitOutcome::Added(self.apply(result)),
            Err(AgentError::EmptyQuery) => SubmitOutcome::Ignored,
            Err(e) => {
                tracing::error!(error = %e, "error generating content");
                self.apply_failure();
                SubmitOutcome::Failed
            }
        }
    }

    pub async fn submit(&mut self, agent: &Agent, prompt: &str) -> SubmitOutcome {
        if prompt.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }
        self.set_last_query(prompt);
        let outcome = agent.generate(prompt).await;
        self.apply_outcome(&outcome)
    }
}
