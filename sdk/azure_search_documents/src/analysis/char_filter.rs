use serde::{Deserialize, Serialize};

use crate::polymorphic::{impl_variant, polymorphic_family, ODATA_TYPE};

polymorphic_family! {
    /// A char filter defined on an index.
    pub enum CharFilter tagged ODATA_TYPE => {
        /// Mapping rules.
        Mapping(MappingCharFilter),
        /// Regex replacement.
        PatternReplace(PatternReplaceCharFilter),
    }
}

/// Applies mappings such as `a=>b` before tokenization; the longest match wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingCharFilter {
    /// Filter name.
    pub name: String,
    /// Mapping rules.
    pub mappings: Vec<String>,
}

impl MappingCharFilter {
    /// Create a mapping filter with `mappings`.
    pub fn new(name: impl Into<String>, mappings: Vec<String>) -> Self {
        Self {
            name: name.into(),
            mappings,
        }
    }
}

impl_variant!(MappingCharFilter => ["#Microsoft.Azure.Search.MappingCharFilter"], named);

/// Replaces characters in the input string matching a pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternReplaceCharFilter {
    /// Filter name.
    pub name: String,
    /// Pattern to match.
    pub pattern: String,
    /// Replacement text.
    pub replacement: String,
}

impl PatternReplaceCharFilter {
    /// Create a pattern replace filter.
    pub fn new(
        name: impl Into<String>,
        pattern: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

impl_variant!(PatternReplaceCharFilter => ["#Microsoft.Azure.Search.PatternReplaceCharFilter"], named);
