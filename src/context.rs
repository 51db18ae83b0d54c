//! Per-query context store.
//!
//! The context is the accumulator that lets later tool calls consume values
//! produced by earlier ones: weather and knowledge-base lookups write their
//! results under lowercase keys, and the expression evaluator substitutes
//! those keys back into expression text before parsing.
//!
//! The store is caller-owned and passed `&mut` into each tool execution; it
//! lives for exactly one query and is never shared between queries.

use crate::types::format_number;
use std::fmt;

/// A value a tool wrote into the context: a number or text.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Numeric result (temperatures, computed expressions).
    Number(f64),
    /// Textual result (conditions, knowledge-base summaries).
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

/// Insertion-ordered key → value map for one query.
///
/// Substitution order across keys is insertion order; when two keys overlap
/// as substrings the earlier-inserted key wins. This is inherited behavior,
/// pinned by tests rather than redesigned. Re-inserting an existing key
/// overwrites the value but keeps the original position.
#[derive(Debug, Clone, Default)]
pub struct Context {
    entries: Vec<(String, Value)>,
}

impl Context {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a value under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Looks up a value by exact key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Replaces every literal occurrence of each key in `text` with the
    /// stringified value, in insertion order.
    ///
    /// Matching is plain substring containment, not word-bounded; the keys
    /// are lowercase city names, expressions, and lookup queries, matched
    /// against lowercase query text.
    pub fn substitute(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (key, value) in &self.entries {
            if out.contains(key.as_str()) {
                out = out.replace(key.as_str(), &value.to_string());
            }
        }
        out
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the context holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut ctx = Context::new();
        ctx.insert("paris", 18.0);
        ctx.insert("london", Value::Text("light rain".to_string()));

        assert_eq!(ctx.get("paris"), Some(&Value::Number(18.0)));
        assert_eq!(ctx.get("london"), Some(&Value::Text("light rain".into())));
        assert_eq!(ctx.get("dhaka"), None);
        assert_eq!(ctx.len(), 2);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut ctx = Context::new();
        ctx.insert("a", 1.0);
        ctx.insert("b", 2.0);
        ctx.insert("a", 3.0);

        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx.get("a"), Some(&Value::Number(3.0)));
        // "a" still substitutes before "b"
        assert_eq!(ctx.substitute("a b"), "3 2");
    }

    #[test]
    fn test_substitute_in_insertion_order() {
        let mut ctx = Context::new();
        ctx.insert("paris", 18.0);
        ctx.insert("london", 17.0);
        assert_eq!(
            ctx.substitute("average of paris and london"),
            "average of 18 and 17"
        );
    }

    #[test]
    fn test_substitute_overlapping_keys_earlier_wins() {
        let mut ctx = Context::new();
        ctx.insert("york", 1.0);
        ctx.insert("new york", 2.0);
        // "york" was inserted first, so it fires first inside "new york".
        assert_eq!(ctx.substitute("new york"), "new 1");
    }

    #[test]
    fn test_substitute_integral_numbers_have_no_decimal_point() {
        let mut ctx = Context::new();
        ctx.insert("x", 17.0);
        ctx.insert("y", 2.5);
        assert_eq!(ctx.substitute("x plus y"), "17 plus 2.5");
    }

    #[test]
    fn test_empty_context_is_noop() {
        let ctx = Context::new();
        assert!(ctx.is_empty());
        assert_eq!(ctx.substitute("2 plus 2"), "2 plus 2");
    }
}
