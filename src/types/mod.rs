//! Core types (tool calls, answers, errors).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// ============= Tool Call Types =============

/// The fixed set of tools the resolver can dispatch to.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    /// Arithmetic expression evaluation.
    Calc,
    /// Temperature and sky-condition lookups.
    Weather,
    /// Name → summary knowledge-base lookups.
    KnowledgeBase,
    /// Filtered job-listing search.
    JobSearch,
}

impl ToolKind {
    /// Registry name of the tool implementing this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Calc => "calculator",
            ToolKind::Weather => "weather",
            ToolKind::KnowledgeBase => "knowledge_base",
            ToolKind::JobSearch => "job_search",
        }
    }

    /// Execution priority; lower values run first.
    ///
    /// Lookup tools (weather, knowledge base) run before the calculator so
    /// that expressions can reference values they wrote into the context.
    /// Ties preserve extraction order.
    pub fn priority(&self) -> u8 {
        match self {
            ToolKind::Weather | ToolKind::KnowledgeBase => 1,
            ToolKind::Calc | ToolKind::JobSearch => 2,
        }
    }
}

/// String arguments attached to a [`ToolCall`].
pub type ToolArgs = HashMap<String, String>;

/// A structured tool invocation produced by intent extraction.
///
/// Immutable once created; one is produced per detected intent (weather may
/// yield several, one per mentioned city).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ToolCall {
    /// Which tool to dispatch to.
    pub kind: ToolKind,
    /// Tool-specific arguments.
    pub args: ToolArgs,
}

impl ToolCall {
    /// Creates a tool call for `kind` with the given arguments.
    pub fn new(kind: ToolKind, args: ToolArgs) -> Self {
        Self { kind, args }
    }

    /// Looks up a single argument by key.
    pub fn arg(&self, key: &str) -> Option<&str> {
        self.args.get(key).map(String::as_str)
    }
}

// ============= Answer Types =============

/// Fixed text returned when no tool produced an answer.
pub const FALLBACK_ANSWER: &str = "Sorry, I could not find an answer.";

/// The result of resolving a query: the last executed tool's output.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Answer {
    /// A numeric result (calculator, temperature).
    Number(f64),
    /// A textual result (conditions, summaries, fallback).
    Text(String),
    /// Matching job listings.
    Jobs(Vec<Job>),
}

impl Answer {
    /// The fixed fallback answer.
    pub fn fallback() -> Self {
        Answer::Text(FALLBACK_ANSWER.to_string())
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Number(n) => write!(f, "{}", format_number(*n)),
            Answer::Text(s) => write!(f, "{}", s),
            Answer::Jobs(jobs) => write!(f, "{} matching job(s)", jobs.len()),
        }
    }
}

/// Formats a number the way it is substituted into expressions: integral
/// values print without a decimal point.
pub(crate) fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

// ============= Job Types =============

/// A job listing record, opaque to the core beyond field-equality filtering.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Job {
    /// Job title.
    #[serde(default)]
    pub role: String,
    /// Hiring company.
    #[serde(default)]
    pub company: String,
    /// Listing location.
    #[serde(default)]
    pub location: String,
    /// Posting-age bucket (`24h`, `1w`, `1m`).
    #[serde(default)]
    pub date_posted: String,
    /// Any further fields are carried through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ============= Error Types =============

/// Crate-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No tool is registered under the requested name.
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// An operator outside the fixed lexicon reached an apply step.
    /// Unreachable through normal parsing; hitting it is a defect.
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(char),

    /// A backing data file could not be read or parsed.
    #[error("Data source error: {0}")]
    DataSource(String),

    /// Malformed configuration or arguments.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AppError>;
