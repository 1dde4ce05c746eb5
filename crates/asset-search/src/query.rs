//! Search-string parsing for the asset browser.
//!
//! This module turns free-form search-box text into a [`SearchFilter`]:
//! - Tokenization on whitespace, commas and wildcards, with quoted spans
//! - Directive recognition (`t:`, `l:`, `a:`, `b:`, `ref:`, `glob:`, import log)
//! - Formatting a filter back into search text
//!
//! [`SearchFilter`]: crate::filter::SearchFilter

mod directive;
mod format;
mod parser;
mod tokenizer;

pub use directive::apply_directives;
pub use format::format_search_string;
pub use parser::{parse_search_string, SearchStringParser};
pub use tokenizer::{
    is_filter_separator, normalize_search_string, tokenize_search_string, QueryToken,
    FILTER_SEPARATORS,
};
