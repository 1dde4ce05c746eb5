//! Asset browser search-string parsing.
//!
//! This crate provides:
//! - The `SearchFilter` model produced from a search-box string
//! - A quote-aware tokenizer and directive parser
//! - Configurable directive keywords (`SearchSyntax`)
//! - The `AssetLookup` seam used to resolve `ref:` asset paths

pub mod error;
pub mod filter;
pub mod lookup;
pub mod query;
pub mod syntax;

// Re-export main types
pub use error::{Result, SearchError};
pub use filter::{ImportLogFlags, InstanceId, SearchArea, SearchFilter};
pub use lookup::{AssetCatalog, AssetLookup, NoAssets};
pub use query::{format_search_string, parse_search_string, SearchStringParser};
pub use syntax::SearchSyntax;
