//! Tool registration and dispatch.

use crate::context::Context;
use crate::sources::{JobBoard, KnowledgeBase};
use crate::tools::Tool;
use crate::types::{Answer, AppError, Result, ToolCall};
use std::collections::HashMap;
use std::sync::Arc;

/// Name-keyed collection of tools.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Creates a registry with the four default tools (calculator, weather,
    /// knowledge base, job search) over the given data sources.
    pub fn with_default_tools(kb: KnowledgeBase, board: JobBoard) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(crate::tools::calculator::Calculator));
        registry.register(Arc::new(crate::tools::weather::WeatherTool::default()));
        registry.register(Arc::new(crate::tools::knowledge::KnowledgeTool::new(kb)));
        registry.register(Arc::new(crate::tools::jobs::JobSearchTool::new(board)));
        registry
    }

    /// Registers a tool under its own name.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Dispatches a tool call against the query context.
    pub async fn execute(&self, call: &ToolCall, context: &mut Context) -> Result<Answer> {
        let name = call.kind.name();
        if let Some(tool) = self.tools.get(name) {
            tool.execute(&call.args, context).await
        } else {
            Err(AppError::ToolNotFound(name.to_string()))
        }
    }

    /// Get a list of all registered tool names.
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }

    /// Check if a tool is registered.
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }
}
