//! Knowledge-base intent extraction.

use crate::sources::KbEntry;
use crate::types::{ToolArgs, ToolCall, ToolKind};

/// Query tokens too generic to match against summary text.
const STOPWORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "be", "of", "in", "on", "at", "to", "for",
    "and", "or", "what", "whats", "who", "whos", "how", "tell", "me", "about", "does", "do",
];

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
}

/// Emits a knowledge-base call when the query names an entry or shares a
/// significant word with an entry's summary.
///
/// A name-substring match wins over the summary-word fallback and carries
/// the entry name as the argument; the fallback carries the matched query
/// word instead. Both stop at the first match; entry order decides ties.
pub fn extract(query: &str, entries: &[KbEntry]) -> Option<ToolCall> {
    for entry in entries {
        let name = entry.name.to_lowercase();
        if !name.is_empty() && query.contains(&name) {
            return Some(call(name));
        }
    }

    for word in tokens(query) {
        if STOPWORDS.contains(&word) {
            continue;
        }
        for entry in entries {
            let summary = entry.summary.to_lowercase();
            if tokens(&summary).any(|w| w == word) {
                return Some(call(word.to_string()));
            }
        }
    }

    None
}

fn call(query: String) -> ToolCall {
    let mut args = ToolArgs::new();
    args.insert("q".to_string(), query);
    ToolCall::new(ToolKind::KnowledgeBase, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<KbEntry> {
        vec![
            KbEntry {
                name: "Ada Lovelace".to_string(),
                summary: "Regarded as the first computer programmer.".to_string(),
            },
            KbEntry {
                name: "Rust".to_string(),
                summary: "A systems programming language focused on safety.".to_string(),
            },
        ]
    }

    #[test]
    fn test_name_substring_match() {
        let call = extract("who is ada lovelace", &entries()).unwrap();
        assert_eq!(call.kind, ToolKind::KnowledgeBase);
        assert_eq!(call.arg("q"), Some("ada lovelace"));
    }

    #[test]
    fn test_summary_word_fallback_carries_the_word() {
        let call = extract("tell me about a programmer", &entries()).unwrap();
        assert_eq!(call.arg("q"), Some("programmer"));
    }

    #[test]
    fn test_name_match_wins_over_summary_word() {
        // "rust" matches an entry name; "programmer" appears in a summary
        let call = extract("is rust good for a programmer", &entries()).unwrap();
        assert_eq!(call.arg("q"), Some("rust"));
    }

    #[test]
    fn test_stopwords_do_not_match_summaries() {
        // "the" and "first" — only "first" may match, stopwords never
        assert!(extract("what is the a an", &entries()).is_none());
    }

    #[test]
    fn test_no_match_returns_none() {
        assert!(extract("completely unrelated query", &entries()).is_none());
        assert!(extract("who is grace hopper", &[]).is_none());
    }
}
