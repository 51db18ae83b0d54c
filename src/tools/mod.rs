//! Tool executors and registry.
//!
//! Every tool implements the [`Tool`] trait and executes a typed argument
//! map against the shared per-query [`Context`]. The
//! [`registry`](crate::tools::registry) module manages dispatch by name.
//!
//! Tools execute strictly sequentially: later calls may depend on context
//! written by earlier ones, so calls must never be joined concurrently even
//! within the same priority tier.

/// Arithmetic expression evaluation.
pub mod calculator;
/// Job-listing search.
pub mod jobs;
/// Knowledge-base lookups.
pub mod knowledge;
/// Operator lexicon and normalization.
pub mod lexicon;
/// Tool registration and dispatch.
pub mod registry;
/// Weather lookups.
pub mod weather;

use crate::context::Context;
use crate::types::{Answer, Result, ToolArgs};
use async_trait::async_trait;

pub use registry::ToolRegistry;

/// Base trait for all tools.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Registry name of the tool.
    fn name(&self) -> &str;

    /// One-line description of what the tool does.
    fn description(&self) -> &str;

    /// Execute the tool with the given arguments against the query context.
    async fn execute(&self, args: &ToolArgs, context: &mut Context) -> Result<Answer>;
}
