//! Prompt-driven content canvas.
//!
//! A prompt is classified by [`analyzer::classify`], fanned out by
//! [`agent::Agent`] to the selected [`sources::ContentSources`] plus an AI
//! summary, and the aggregate is laid out as display blocks on a
//! [`canvas::Canvas`].

pub mod agent;
pub mod analyzer;
pub mod canvas;
pub mod config;
pub mod error;
pub mod logging;
pub mod sources;
pub mod tools;
pub mod ui;

pub use agent::{Agent, AggregateResult};
pub use analyzer::{classify, SourceSelection, TopicCategory};
pub use canvas::Canvas;
pub use config::Config;
pub use error::{AgentError, SourceError, ToolError};
pub use sources::{ContentSources, MockSources, SourceKind};
