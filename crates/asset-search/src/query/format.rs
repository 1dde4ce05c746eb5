//! Renders a filter back into search-box text.

use crate::filter::{SearchArea, SearchFilter};
use crate::syntax::SearchSyntax;

/// Builds the search string that reproduces `filter` when parsed.
///
/// Glob values are always quoted so wildcards survive tokenization. Other
/// values are written as-is.
pub fn format_search_string(filter: &SearchFilter, syntax: &SearchSyntax) -> String {
    let mut parts = Vec::new();

    parts.extend(filter.class_names.iter().map(|name| format!("t:{name}")));
    parts.extend(filter.asset_labels.iter().map(|label| format!("l:{label}")));
    parts.extend(
        filter
            .asset_bundle_names
            .iter()
            .map(|bundle| format!("b:{bundle}")),
    );
    parts.extend(filter.globs.iter().map(|glob| format!("glob:\"{glob}\"")));
    parts.extend(
        filter
            .referencing_instance_ids
            .iter()
            .map(|id| format!("ref:{id}:")),
    );

    if filter.search_area != SearchArea::AllAssets {
        parts.push(format!("a:{}", filter.search_area.as_keyword()));
    }

    if let Some(label) = syntax.import_label_for(filter.import_log_flags) {
        parts.push(format!("{}:{label}", syntax.import_token));
    }

    if !filter.name_filter.is_empty() {
        parts.push(filter.name_filter.clone());
    }

    parts.join(" ")
}
