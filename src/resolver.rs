//! Query resolution pipeline.
//!
//! The resolver turns one free-text query into one answer: it runs every
//! intent extractor, stable-sorts the detected tool calls by the fixed
//! priority table, executes them sequentially against a fresh per-query
//! [`Context`], and returns the last tool's result (or the fallback text).

use crate::context::Context;
use crate::intent;
use crate::sources::{JobBoard, KnowledgeBase};
use crate::tools::ToolRegistry;
use crate::types::{Answer, ToolCall};
use crate::utils::config::Config;

/// Resolves natural-language queries against the fixed tool set.
pub struct Resolver {
    registry: ToolRegistry,
    kb: KnowledgeBase,
    default_city: String,
}

impl Resolver {
    /// Builds a resolver from configuration: data sources, the default
    /// tool registry, and the fallback city for weather queries.
    pub fn new(config: &Config) -> Self {
        let kb = KnowledgeBase::new(&config.kb_path);
        let board = JobBoard::new(&config.jobs_path);
        let registry = ToolRegistry::with_default_tools(kb.clone(), board);
        Self {
            registry,
            kb,
            default_city: config.default_city.clone(),
        }
    }

    /// Detects tool calls in the normalized query, ordered for execution.
    ///
    /// Extraction order is calc, weather, knowledge base, job search; the
    /// stable sort by priority then moves lookup tools ahead of the
    /// calculator while preserving extraction order within each tier.
    async fn plan(&self, query: &str) -> Vec<ToolCall> {
        let kb_entries = match self.kb.entries().await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, "knowledge base unavailable during extraction");
                Vec::new()
            }
        };

        let mut calls: Vec<ToolCall> = Vec::new();
        calls.extend(intent::calc::extract(query));
        calls.extend(intent::weather::extract(query, &self.default_city));
        calls.extend(intent::knowledge::extract(query, &kb_entries));
        calls.extend(intent::jobs::extract(query));
        calls.sort_by_key(|call| call.kind.priority());
        calls
    }

    /// Answers a single query.
    ///
    /// Never fails: malformed input, absent data, and tool-less queries all
    /// degrade to defaults or the fixed fallback answer.
    pub async fn resolve(&self, query: &str) -> Answer {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Answer::fallback();
        }
        tracing::info!(%query, "resolving query");

        let calls = self.plan(&query).await;
        if calls.is_empty() {
            tracing::info!("no tool matched, returning fallback");
            return Answer::fallback();
        }
        tracing::info!(
            plan = ?calls.iter().map(|c| c.kind.name()).collect::<Vec<_>>(),
            "executing tool plan"
        );

        // One context per query; tools run strictly in order because later
        // calls may read what earlier ones wrote.
        let mut context = Context::new();
        let mut results = Vec::new();
        for call in &calls {
            tracing::debug!(tool = call.kind.name(), args = ?call.args, "dispatching");
            match self.registry.execute(call, &mut context).await {
                Ok(answer) => results.push(answer),
                Err(e) => {
                    tracing::error!(tool = call.kind.name(), error = %e, "tool execution failed");
                }
            }
        }

        let answer = results.pop().unwrap_or_else(Answer::fallback);
        tracing::info!(answer = %answer, "resolved");
        answer
    }
}
