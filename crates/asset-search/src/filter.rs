//! The structured search filter produced by parsing a search-box string.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Engine-side identifier of a loaded asset.
pub type InstanceId = i32;

/// Which part of the project a search covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchArea {
    #[default]
    AllAssets,
    InAssetsOnly,
    InPackagesOnly,
}

impl SearchArea {
    /// Looks up an area by its `a:` keyword, ignoring ASCII case.
    pub fn from_keyword(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("all") {
            Some(Self::AllAssets)
        } else if value.eq_ignore_ascii_case("assets") {
            Some(Self::InAssetsOnly)
        } else if value.eq_ignore_ascii_case("packages") {
            Some(Self::InPackagesOnly)
        } else {
            None
        }
    }

    pub fn as_keyword(self) -> &'static str {
        match self {
            Self::AllAssets => "all",
            Self::InAssetsOnly => "assets",
            Self::InPackagesOnly => "packages",
        }
    }
}

bitflags! {
    /// Import-log severities an asset must have been imported with.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct ImportLogFlags: u8 {
        const ERROR   = 0b01;
        const WARNING = 0b10;
    }
}

/// Filter state accumulated from one search string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilter {
    pub original_text: String,
    /// Free-text terms, joined by single spaces in query order.
    pub name_filter: String,
    pub class_names: Vec<String>,
    pub asset_labels: Vec<String>,
    pub asset_bundle_names: Vec<String>,
    pub globs: Vec<String>,
    /// At most one id; each `ref:` directive replaces it.
    pub referencing_instance_ids: Vec<InstanceId>,
    pub search_area: SearchArea,
    pub import_log_flags: ImportLogFlags,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets every field to its empty or default value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns true if the filter narrows the search in any way.
    ///
    /// The search area alone does not count, since it only scopes other
    /// criteria.
    pub fn is_searching(&self) -> bool {
        !self.name_filter.is_empty()
            || !self.class_names.is_empty()
            || !self.asset_labels.is_empty()
            || !self.asset_bundle_names.is_empty()
            || !self.globs.is_empty()
            || !self.referencing_instance_ids.is_empty()
            || !self.import_log_flags.is_empty()
    }

    /// Compiles the glob list, skipping (and logging) patterns that do not
    /// compile.
    pub fn compiled_globs(&self) -> Vec<glob::Pattern> {
        self.globs
            .iter()
            .filter_map(|raw| match glob::Pattern::new(raw) {
                Ok(pattern) => Some(pattern),
                Err(err) => {
                    log::warn!("skipping invalid glob {:?}: {}", raw, err);
                    None
                }
            })
            .collect()
    }

    /// Checks an asset path against the glob list.
    ///
    /// An empty glob list matches everything. Otherwise any one compiled
    /// pattern must match.
    pub fn matches_globs(&self, path: &str) -> bool {
        if self.globs.is_empty() {
            return true;
        }
        let options = glob::MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };
        self.compiled_globs()
            .iter()
            .any(|pattern| pattern.matches_with(path, options))
    }
}
