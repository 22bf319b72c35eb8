use crate::sources::SourceKind;
use thiserror::Error;

/// Failure reported by a single content source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{kind} source unavailable: {reason}")]
    Unavailable { kind: SourceKind, reason: String },
}

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("query is empty")]
    EmptyQuery,

    #[error("{kind} fetch failed: {source}")]
    Source {
        kind: SourceKind,
        #[source]
        source: SourceError,
    },

    #[error("{kind} fetch task failed: {source}")]
    Task {
        kind: SourceKind,
        #[source]
        source: tokio::task::JoinError,
    },
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("tool {tool} is missing parameter `{param}`")]
    MissingParam { tool: String, param: &'static str },

    #[error("tool {tool} failed: {source}")]
    Source {
        tool: String,
        #[source]
        source: SourceError,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
