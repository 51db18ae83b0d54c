//! Intent extraction.
//!
//! Four independent, side-effect-free extractors scan the lowercased query
//! for trigger keywords and produce zero or more [`ToolCall`] descriptors.
//! Extractors never touch the context; only tool execution mutates it.

/// Calculator intent.
pub mod calc;
/// Job-search intent.
pub mod jobs;
/// Knowledge-base intent.
pub mod knowledge;
/// Weather intent.
pub mod weather;
