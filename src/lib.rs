//! # Sibyl - deterministic rule-based query answering
//!
//! Sibyl answers a single natural-language query by deciding which of a
//! fixed set of tools apply (arithmetic, weather, knowledge lookup, job
//! search), running them in a fixed priority order, and letting later tools
//! consume the results of earlier ones through a shared per-query context.
//!
//! There is no language model and no network: intent detection is
//! keyword/pattern matching, and the embedded arithmetic evaluator turns
//! phrases like `"add 10 to the average of paris and london"` into a token
//! stream evaluated with a two-stack shunting-yard algorithm.
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use sibyl::{Config, Resolver};
//!
//! #[tokio::main]
//! async fn main() {
//!     let resolver = Resolver::new(&Config::default());
//!     let answer = resolver.resolve("what is the temperature in paris").await;
//!     println!("{}", answer);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`resolver`] - the query resolution pipeline (extract, order, execute)
//! - [`intent`] - keyword-based intent extractors, one per tool family
//! - [`tools`] - the tool trait, registry, and the four executors
//! - [`context`] - the per-query key/value accumulator
//! - [`sources`] - static data collaborators (weather tables, KB, job board)
//! - [`types`] - tool calls, answers, and error handling
//!
//! ## Pipeline
//!
//! Raw query → intent extraction (independent extractors) →
//! priority-ordered tool-call list → sequential execution with context
//! threading → final answer (the last executed tool's output, or the fixed
//! fallback text).

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// CLI argument parsing and output rendering.
pub mod cli;
/// Per-query context store.
pub mod context;
/// Keyword-based intent extraction.
pub mod intent;
/// The query resolution pipeline.
pub mod resolver;
/// Static data sources (weather tables, knowledge base, job board).
pub mod sources;
/// Tool trait, registry, and executors.
pub mod tools;
/// Core types (tool calls, answers, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use context::{Context, Value};
pub use resolver::Resolver;
pub use tools::registry::ToolRegistry;
pub use tools::Tool;
pub use types::{Answer, AppError, Job, Result, ToolArgs, ToolCall, ToolKind, FALLBACK_ANSWER};
pub use utils::config::Config;
