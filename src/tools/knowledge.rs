//! Knowledge-base lookup tool.

use crate::context::{Context, Value};
use crate::sources::KnowledgeBase;
use crate::tools::Tool;
use crate::types::{Answer, Result, ToolArgs};
use async_trait::async_trait;

/// Text returned when no entry matches the query.
pub const NO_ENTRY_FOUND: &str = "No entry found.";

/// Looks a query up against the knowledge-base file.
///
/// Returns the summary of the first entry whose name contains the query
/// (case-insensitive) and records it in the context under the query string.
/// A read or parse failure is rendered as a `"KB error: "` answer rather
/// than propagated.
pub struct KnowledgeTool {
    kb: KnowledgeBase,
}

impl KnowledgeTool {
    /// Creates the tool over the given knowledge base.
    pub fn new(kb: KnowledgeBase) -> Self {
        Self { kb }
    }
}

#[async_trait]
impl Tool for KnowledgeTool {
    fn name(&self) -> &str {
        "knowledge_base"
    }

    fn description(&self) -> &str {
        "Look up a name or keyword in the knowledge base"
    }

    async fn execute(&self, args: &ToolArgs, context: &mut Context) -> Result<Answer> {
        let query = args
            .get("q")
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default();

        let entries = match self.kb.entries().await {
            Ok(entries) => entries,
            Err(e) => return Ok(Answer::Text(format!("KB error: {}", e))),
        };

        for entry in entries {
            if entry.name.to_lowercase().contains(&query) {
                context.insert(query, Value::Text(entry.summary.clone()));
                return Ok(Answer::Text(entry.summary));
            }
        }
        Ok(Answer::Text(NO_ENTRY_FOUND.to_string()))
    }
}
