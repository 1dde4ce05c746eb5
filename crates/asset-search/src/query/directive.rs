//! Directive recognition for single search tokens.
//!
//! Every check runs against every token; a token counts as a directive when
//! at least one check accepts it.

use crate::filter::{InstanceId, SearchArea, SearchFilter};
use crate::lookup::AssetLookup;
use crate::syntax::SearchSyntax;

use super::tokenizer::QueryToken;

const REF_PREFIX: &str = "ref:";
const GLOB_PREFIX: &str = "glob:";

/// Applies every directive the token matches to `filter`.
///
/// Returns false when no directive accepted the token, in which case the
/// caller treats it as free text.
pub fn apply_directives<L>(
    token: &QueryToken<'_>,
    filter: &mut SearchFilter,
    syntax: &SearchSyntax,
    lookup: &L,
) -> bool
where
    L: AssetLookup + ?Sized,
{
    let raw = token.text;
    let mut parsed = false;

    if let Some(class_name) = leading_value(raw, "t:", "t=") {
        filter.class_names.push(class_name.to_string());
        parsed = true;
    }

    if let Some(label) = leading_value(raw, "l:", "l=") {
        filter.asset_labels.push(label.to_string());
        parsed = true;
    }

    // Area is the one directive accepted anywhere in the token.
    if let Some(index) = raw.find("a:") {
        if let Some(area) = SearchArea::from_keyword(&raw[index + 2..]) {
            filter.search_area = area;
            parsed = true;
        }
    }

    if let Some(bundle) = raw.strip_prefix("b:") {
        filter.asset_bundle_names.push(bundle.to_string());
        parsed = true;
    }

    if raw.starts_with(REF_PREFIX) {
        let instance_id = resolve_reference(token, syntax, lookup);
        filter.referencing_instance_ids = vec![instance_id];
        parsed = true;
    }

    if let Some(rest) = raw.strip_prefix(GLOB_PREFIX) {
        let value = token.quoted_text().unwrap_or(rest);
        filter.globs.push(value.to_string());
        parsed = true;
    }

    if let Some(label) = raw
        .strip_prefix(syntax.import_token.as_str())
        .and_then(|rest| rest.strip_prefix(':'))
    {
        if let Some(flags) = syntax.import_flags_for(label) {
            filter.import_log_flags = flags;
            parsed = true;
        }
    }

    log::trace!(
        "token {:?} at byte {} classified as {}",
        raw,
        token.position,
        if parsed { "directive" } else { "text" }
    );
    parsed
}

/// Returns the value after a two-character prefix at position 0.
///
/// The `=` spelling is only probed when the `:` spelling occurs nowhere in the
/// token, so `t=x t:y` style tokens are not directives.
fn leading_value<'a>(raw: &'a str, colon_form: &str, equals_form: &str) -> Option<&'a str> {
    let index = raw.find(colon_form).or_else(|| raw.find(equals_form));
    (index == Some(0)).then(|| &raw[2..])
}

/// Resolves the target of a `ref:` token.
///
/// `ref:<id>:<hint>` supplies the id directly and the trailing path is only a
/// display hint. Otherwise the remainder (or its quoted span) is looked up as
/// an asset path, retrying under the legacy asset root. Anything unresolvable
/// becomes 0.
fn resolve_reference<L>(token: &QueryToken<'_>, syntax: &SearchSyntax, lookup: &L) -> InstanceId
where
    L: AssetLookup + ?Sized,
{
    let rest = &token.text[REF_PREFIX.len()..];

    if let Some(second_colon) = rest.find(':') {
        let id_text = &rest[..second_colon];
        return match id_text.trim().parse::<InstanceId>() {
            Ok(id) => id,
            Err(_) => {
                log::debug!("ref: id {:?} is not an integer, using 0", id_text);
                0
            }
        };
    }

    let asset_path = token.quoted_text().unwrap_or(rest);
    if let Some(id) = lookup.resolve_path_to_id(asset_path) {
        return id;
    }

    let legacy_path = format!("{}{}", syntax.legacy_asset_root, asset_path);
    match lookup.resolve_path_to_id(&legacy_path) {
        Some(id) => {
            log::debug!(
                "ref: path {:?} resolved through legacy root as {:?}",
                asset_path,
                legacy_path
            );
            id
        }
        None => {
            log::debug!("ref: path {:?} did not resolve, using 0", asset_path);
            0
        }
    }
}
