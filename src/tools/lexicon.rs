//! Operator lexicon and expression normalization.
//!
//! Maps natural-language operator phrases onto one-character symbols so the
//! tokenizer only ever sees `+ - * / % A` and parentheses. Matching is
//! word-bounded and longest-phrase-first: "multiplied by" must map fully
//! before "multiply" could partially fire, and "times of" before "times".

/// Phrase → symbol table, ordered by descending phrase length.
///
/// The ordering is a correctness requirement, not an optimization; a shorter
/// phrase replacing first would leave the tail of a longer one behind.
pub const OPERATOR_PHRASES: &[(&str, char)] = &[
    ("multiplied by", '*'),
    ("divided by", '/'),
    ("average of", 'A'),
    ("percentage", '%'),
    ("times of", '*'),
    ("subtract", '-'),
    ("multiply", '*'),
    ("average", 'A'),
    ("percent", '%'),
    ("divide", '/'),
    ("times", '*'),
    ("minus", '-'),
    ("plus", '+'),
    ("with", '+'),
    ("add", '+'),
];

/// Operator symbols that fire the calc extractor when they appear literally.
/// `A` is excluded: it is an internal token and would match any text
/// containing the letter.
pub const OPERATOR_SYMBOLS: &[char] = &['+', '-', '*', '/', '%'];

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Replaces word-bounded occurrences of `phrase` in `text` with
/// `replacement`. Boundaries follow `\b` semantics: the characters adjacent
/// to the match must not be word characters.
fn replace_word_bounded(text: &str, phrase: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < text.len() {
        if text[i..].starts_with(phrase) {
            let before_ok = i == 0 || !is_word_byte(bytes[i - 1]);
            let end = i + phrase.len();
            let after_ok = end >= text.len() || !is_word_byte(bytes[end]);
            if before_ok && after_ok {
                out.push_str(replacement);
                i = end;
                continue;
            }
        }
        match text[i..].chars().next() {
            Some(ch) => {
                out.push(ch);
                i += ch.len_utf8();
            }
            None => break,
        }
    }
    out
}

/// Whether `text` contains a word-bounded occurrence of `word`.
pub fn contains_word(text: &str, word: &str) -> bool {
    let bytes = text.as_bytes();
    let mut start = 0;
    while let Some(pos) = text[start..].find(word) {
        let i = start + pos;
        let end = i + word.len();
        let before_ok = i == 0 || !is_word_byte(bytes[i - 1]);
        let after_ok = end >= text.len() || !is_word_byte(bytes[end]);
        if before_ok && after_ok {
            return true;
        }
        start = i + 1;
    }
    false
}

/// Rewrites every operator phrase in lowercase `text` to its symbol and
/// deletes the connective word "and".
///
/// Normalizing already-normalized text is a no-op.
pub fn normalize(text: &str) -> String {
    let mut out = text.to_string();
    for (phrase, symbol) in OPERATOR_PHRASES {
        if out.contains(phrase) {
            out = replace_word_bounded(&out, phrase, &symbol.to_string());
        }
    }
    replace_word_bounded(&out, "and", "")
}

/// Whether lowercase `text` mentions any operator phrase or literal symbol.
pub fn mentions_operator(text: &str) -> bool {
    text.chars().any(|c| OPERATOR_SYMBOLS.contains(&c))
        || OPERATOR_PHRASES
            .iter()
            .any(|(phrase, _)| contains_word(text, phrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_table_is_ordered_longest_first() {
        let lengths: Vec<usize> = OPERATOR_PHRASES.iter().map(|(p, _)| p.len()).collect();
        let mut sorted = lengths.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(lengths, sorted);
    }

    #[test]
    fn test_normalize_basic_phrases() {
        assert_eq!(normalize("2 plus 3 times 4"), "2 + 3 * 4");
        assert_eq!(normalize("10 divided by 0"), "10 / 0");
        assert_eq!(normalize("10 percent of 50"), "10 % of 50");
    }

    #[test]
    fn test_normalize_longest_phrase_wins() {
        assert_eq!(normalize("6 multiplied by 7"), "6 * 7");
        assert_eq!(normalize("6 times of 7"), "6 * 7");
        assert_eq!(normalize("average of 4 and 6"), "A 4  6");
    }

    #[test]
    fn test_normalize_deletes_and() {
        assert_eq!(normalize("add 10 to a and b"), "+ 10 to a  b");
    }

    #[test]
    fn test_word_boundaries_prevent_partial_matches() {
        // "add" inside "address" and "with" inside "without" must not fire
        assert_eq!(normalize("address"), "address");
        assert_eq!(normalize("without sand"), "without sand");
        assert_eq!(normalize("sand"), "sand");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("add 10 to the average of 4 and 6");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_mentions_operator() {
        assert!(mentions_operator("2 plus 2"));
        assert!(mentions_operator("50 % 10"));
        assert!(mentions_operator("what is 3*4"));
        assert!(!mentions_operator("what is the weather in paris"));
        // substrings inside words do not count
        assert!(!mentions_operator("my address"));
    }
}
