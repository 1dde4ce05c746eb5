//! Search-string tokenizer.

use std::ops::Range;

/// Characters that separate search tokens.
pub const FILTER_SEPARATORS: [char; 5] = [' ', '\t', ',', '*', '?'];

pub fn is_filter_separator(ch: char) -> bool {
    FILTER_SEPARATORS.contains(&ch)
}

// ---------------------------------------------------------------------------
// Token type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryToken<'a> {
    /// Raw token text, quotes included.
    pub text: &'a str,
    /// Token-relative span between the first two double quotes, if both exist.
    pub quoted: Option<Range<usize>>,
    /// Byte offset of the token in the normalized search string.
    pub position: usize,
}

impl<'a> QueryToken<'a> {
    pub fn quoted_text(&self) -> Option<&'a str> {
        let text = self.text;
        self.quoted.clone().map(|span| &text[span])
    }
}

// ---------------------------------------------------------------------------
// Tokenizer
// ---------------------------------------------------------------------------

/// Drops the stray space users type after a directive colon (`"t: Mesh"`).
pub fn normalize_search_string(raw: &str) -> String {
    raw.replace(": ", ":")
}

/// Splits a normalized search string into tokens.
///
/// Runs of separators yield no tokens. A double-quoted region that starts
/// inside a token and closes at or past the next separator extends the token
/// to the first separator after the closing quote.
pub fn tokenize_search_string(input: &str) -> Vec<QueryToken<'_>> {
    let mut tokens = Vec::new();
    let find_separator = |from: usize| {
        input[from..]
            .find(is_filter_separator)
            .map(|offset| from + offset)
    };

    let mut pos = input
        .find(|ch: char| !is_filter_separator(ch))
        .unwrap_or(0);

    while pos < input.len() {
        let mut end = find_separator(pos).unwrap_or(input.len());

        let mut quoted = None;
        let open = input[pos..].find('"').map(|offset| pos + offset);
        if let Some(open) = open.filter(|&open| open < end) {
            let close = input[open + 1..]
                .find('"')
                .map(|offset| open + 1 + offset);
            if let Some(close) = close {
                if close >= end {
                    end = find_separator(close).unwrap_or(input.len());
                }
                quoted = Some(open + 1 - pos..close - pos);
            }
        }

        if end > pos {
            tokens.push(QueryToken {
                text: &input[pos..end],
                quoted,
                position: pos,
            });
        }

        // Separators and quotes are ASCII, so `end + 1` stays on a char boundary.
        pos = end + 1;
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<&str> {
        tokenize_search_string(input)
            .into_iter()
            .map(|token| token.text)
            .collect()
    }

    #[test]
    fn splits_on_every_separator() {
        assert_eq!(texts("a b\tc,d*e?f"), vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn separator_runs_produce_no_empty_tokens() {
        assert_eq!(texts("  ,,foo  **  bar??"), vec!["foo", "bar"]);
        assert!(texts(" \t,*?").is_empty());
        assert!(texts("").is_empty());
    }

    #[test]
    fn quoted_span_is_atomic() {
        let tokens = tokenize_search_string("glob:\"Assets/**/*.png\" foo");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "glob:\"Assets/**/*.png\"");
        assert_eq!(tokens[0].quoted_text(), Some("Assets/**/*.png"));
        assert_eq!(tokens[1].text, "foo");
        assert_eq!(tokens[1].position, 23);
    }

    #[test]
    fn quoted_span_with_spaces_keeps_trailing_text() {
        let tokens = tokenize_search_string("ref:\"My Folder/a b.prefab\"x y");
        assert_eq!(tokens[0].text, "ref:\"My Folder/a b.prefab\"x");
        assert_eq!(tokens[0].quoted_text(), Some("My Folder/a b.prefab"));
        assert_eq!(tokens[1].text, "y");
    }

    #[test]
    fn quote_inside_a_single_word_is_recorded() {
        let tokens = tokenize_search_string("a\"b\"c");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].quoted, Some(2..3));
    }

    #[test]
    fn unterminated_quote_does_not_extend() {
        let tokens = tokenize_search_string("glob:\"Assets/*.png");
        assert_eq!(tokens[0].text, "glob:\"Assets/");
        assert_eq!(tokens[0].quoted, None);
        assert_eq!(tokens[1].text, ".png");
    }

    #[test]
    fn quote_in_a_later_token_is_not_attached_early() {
        let tokens = tokenize_search_string("foo \"bar\"");
        assert_eq!(tokens[0].text, "foo");
        assert_eq!(tokens[0].quoted, None);
        assert_eq!(tokens[1].text, "\"bar\"");
        assert_eq!(tokens[1].quoted_text(), Some("bar"));
    }

    #[test]
    fn normalization_removes_space_after_colon() {
        assert_eq!(normalize_search_string("t: Mesh l:  x"), "t:Mesh l: x");
    }

    #[test]
    fn handles_multibyte_text() {
        assert_eq!(texts("テクスチャ, 画像"), vec!["テクスチャ", "画像"]);
    }
}
