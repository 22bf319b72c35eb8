//! Name-based tool dispatch over the content sources.
//!
//! Tool names follow the `<source>.<action>` convention: `twitter.search`,
//! `youtube.search`, `web.search` and `ui.getComponent`.

use crate::agent::Agent;
use crate::error::{SourceError, ToolError};
use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRequest {
    pub name: String,
    #[serde(default)]
    pub params: Value,
}

impl ToolRequest {
    pub fn new(name: impl Into<String>, params: Value) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolBatch {
    pub prompt: String,
    pub results: Vec<Value>,
    pub processed_at: DateTime<Utc>,
}

/// Rendering hint handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDescriptor {
    pub component: String,
    pub props: Value,
    pub styling: String,
    pub responsive: bool,
}

enum Tool {
    TwitterSearch,
    YouTubeSearch,
    WebSearch,
    Component,
}

fn parse_tool(name: &str) -> Option<Tool> {
    match name {
        "twitter.search" => Some(Tool::TwitterSearch),
        "youtube.search" => Some(Tool::YouTubeSearch),
        "web.search" => Some(Tool::WebSearch),
        "ui.getComponent" => Some(Tool::Component),
        _ => None,
    }
}

fn string_param<'a>(name: &str, params: &'a Value, key: &'static str) -> Result<&'a str, ToolError> {
    params
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| ToolError::MissingParam {
            tool: name.to_string(),
            param: key,
        })
}

impl Agent {
    /// Runs a single tool by name.
    pub async fn call_tool(&self, name: &str, params: &Value) -> Result<Value, ToolError> {
        let tool = parse_tool(name).ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        tracing::debug!(tool = name, "calling tool");

        let source_err = |source: SourceError| ToolError::Source {
            tool: name.to_string(),
            source,
        };
        let sources = self.sources();

        match tool {
            Tool::TwitterSearch => {
                let query = string_param(name, params, "query")?;
                let items = sources.search_twitter(query).await.map_err(source_err)?;
                Ok(serde_json::to_value(items)?)
            }
            Tool::YouTubeSearch => {
                let query = string_param(name, params, "query")?;
                let items = sources.search_youtube(query).await.map_err(source_err)?;
                Ok(serde_json::to_value(items)?)
            }
            Tool::WebSearch => {
                let query = string_param(name, params, "query")?;
                let items = sources.search_web(query).await.map_err(source_err)?;
                Ok(serde_json::to_value(items)?)
            }
            Tool::Component => {
                let component = string_param(name, params, "type")?;
                let descriptor = ComponentDescriptor {
                    component: component.to_string(),
                    props: params.get("data").cloned().unwrap_or(Value::Null),
                    styling: "adaptive".to_string(),
                    responsive: true,
                };
                Ok(serde_json::to_value(descriptor)?)
            }
        }
    }

    /// Runs all requests concurrently. Fails as a whole if any request fails;
    /// results keep request order.
    pub async fn process_tool_calls(
        &self,
        prompt: &str,
        requests: &[ToolRequest],
    ) -> Result<ToolBatch, ToolError> {
        let results = try_join_all(
            requests
                .iter()
                .map(|req| self.call_tool(&req.name, &req.params)),
        )
        .await?;

        Ok(ToolBatch {
            prompt: prompt.to_string(),
            results,
            processed_at: Utc::now(),
        })
    }

    /// Shorthand for the `ui.getComponent` tool.
    pub async fn get_ui_component(
        &self,
        content_type: &str,
        data: Value,
    ) -> Result<ComponentDescriptor, ToolError> {
        let params = serde_json::json!({ "type": content_type, "data": data });
        let value = self.call_tool("ui.getComponent", &params).await?;
        Ok(serde_json::from_value(value)?)
    }
}
