//! Configurable parts of the search-string syntax.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::filter::ImportLogFlags;
use crate::query::is_filter_separator;

pub const DEFAULT_IMPORT_TOKEN: &str = "in";
pub const DEFAULT_ALL_ISSUES_LABEL: &str = "all-issues";
pub const DEFAULT_ERRORS_LABEL: &str = "errors";
pub const DEFAULT_WARNINGS_LABEL: &str = "warnings";
pub const DEFAULT_LEGACY_ASSET_ROOT: &str = "Assets/";

/// Keywords the host application may rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchSyntax {
    /// Directive keyword for import-log filtering, without the colon.
    pub import_token: String,
    pub all_issues_label: String,
    pub errors_label: String,
    pub warnings_label: String,
    /// Prepended to a `ref:` path when the raw path does not resolve.
    pub legacy_asset_root: String,
}

impl Default for SearchSyntax {
    fn default() -> Self {
        Self {
            import_token: DEFAULT_IMPORT_TOKEN.to_string(),
            all_issues_label: DEFAULT_ALL_ISSUES_LABEL.to_string(),
            errors_label: DEFAULT_ERRORS_LABEL.to_string(),
            warnings_label: DEFAULT_WARNINGS_LABEL.to_string(),
            legacy_asset_root: DEFAULT_LEGACY_ASSET_ROOT.to_string(),
        }
    }
}

impl SearchSyntax {
    /// Reads a JSON syntax file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SearchError::ConfigNotFound(path.to_path_buf()));
        }
        let data = fs::read_to_string(path)?;
        let syntax: Self = serde_json::from_str(&data)?;
        syntax.validate()?;
        Ok(syntax)
    }

    /// Rejects keywords the tokenizer could never produce as one token.
    pub fn validate(&self) -> Result<()> {
        if self.import_token.is_empty() {
            return Err(SearchError::InvalidInput(
                "importToken must not be empty".to_string(),
            ));
        }
        if self.import_token.chars().any(is_filter_separator) {
            return Err(SearchError::InvalidInput(format!(
                "importToken contains a separator character: {:?}",
                self.import_token
            )));
        }
        Ok(())
    }

    /// Maps an import-log label to its flags. Labels compare case-sensitively.
    pub fn import_flags_for(&self, label: &str) -> Option<ImportLogFlags> {
        if label == self.all_issues_label {
            Some(ImportLogFlags::ERROR | ImportLogFlags::WARNING)
        } else if label == self.errors_label {
            Some(ImportLogFlags::ERROR)
        } else if label == self.warnings_label {
            Some(ImportLogFlags::WARNING)
        } else {
            None
        }
    }

    /// Inverse of [`Self::import_flags_for`].
    pub fn import_label_for(&self, flags: ImportLogFlags) -> Option<&str> {
        if flags == ImportLogFlags::ERROR | ImportLogFlags::WARNING {
            Some(self.all_issues_label.as_str())
        } else if flags == ImportLogFlags::ERROR {
            Some(self.errors_label.as_str())
        } else if flags == ImportLogFlags::WARNING {
            Some(self.warnings_label.as_str())
        } else {
            None
        }
    }
}
