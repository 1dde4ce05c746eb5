//! Search-string parser.
//!
//! Supported syntax:
//! - `t:Type` / `t=Type`: class name (e.g. `t:Texture2D`)
//! - `l:label` / `l=label`: asset label
//! - `a:all` | `a:assets` | `a:packages`: search area
//! - `b:bundle`: asset bundle name
//! - `ref:<id>:<hint>` or `ref:<path>`: objects referencing an asset
//! - `glob:"pattern"`: path glob (e.g. `glob:"Assets/**/*.png"`)
//! - `<import-token>:<label>`: import-log severity (e.g. `in:errors`)
//!
//! Any other token is free text.

use std::sync::LazyLock;

use crate::filter::SearchFilter;
use crate::lookup::AssetLookup;
use crate::syntax::SearchSyntax;

use super::directive::apply_directives;
use super::tokenizer::{normalize_search_string, tokenize_search_string};

static DEFAULT_SYNTAX: LazyLock<SearchSyntax> = LazyLock::new(SearchSyntax::default);

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

pub struct SearchStringParser<'a, L: ?Sized> {
    syntax: &'a SearchSyntax,
    lookup: &'a L,
}

impl<'a, L> SearchStringParser<'a, L>
where
    L: AssetLookup + ?Sized,
{
    pub fn new(syntax: &'a SearchSyntax, lookup: &'a L) -> Self {
        Self { syntax, lookup }
    }

    /// Parser using the default keywords.
    pub fn with_default_syntax(lookup: &'a L) -> Self {
        Self::new(&DEFAULT_SYNTAX, lookup)
    }

    /// Parses `search_text` into `filter`, replacing its previous contents.
    ///
    /// Returns true if at least one token was a directive. Free-text tokens
    /// land in `name_filter` either way. Parsing never fails: bad directive
    /// values fall back to free text or to a zero id.
    pub fn parse(&self, search_text: &str, filter: &mut SearchFilter) -> bool {
        filter.clear();
        filter.original_text = search_text.to_string();

        if search_text.is_empty() {
            return false;
        }

        let normalized = normalize_search_string(search_text);
        let mut parsed = false;

        for token in tokenize_search_string(&normalized) {
            if apply_directives(&token, filter, self.syntax, self.lookup) {
                parsed = true;
            } else {
                if !filter.name_filter.is_empty() {
                    filter.name_filter.push(' ');
                }
                filter.name_filter.push_str(token.text);
            }
        }

        log::debug!(
            "parsed search {:?}: directives={}, name filter {:?}",
            search_text,
            parsed,
            filter.name_filter
        );
        parsed
    }
}

/// Parses with the default keywords. See [`SearchStringParser::parse`].
pub fn parse_search_string<L>(search_text: &str, filter: &mut SearchFilter, lookup: &L) -> bool
where
    L: AssetLookup + ?Sized,
{
    SearchStringParser::with_default_syntax(lookup).parse(search_text, filter)
}
