//! Calculator intent extraction.

use crate::tools::lexicon;
use crate::types::{ToolArgs, ToolCall, ToolKind};

/// Emits a calc call when the query mentions any operator phrase or literal
/// symbol. The argument is the entire query text; context substitution and
/// parsing happen later, inside the evaluator.
pub fn extract(query: &str) -> Option<ToolCall> {
    if !lexicon::mentions_operator(query) {
        return None;
    }
    let mut args = ToolArgs::new();
    args.insert("expr".to_string(), query.to_string());
    Some(ToolCall::new(ToolKind::Calc, args))
}
