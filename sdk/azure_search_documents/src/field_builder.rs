//! Fluent builders for [`SearchField`].
//!
//! Three builders cover the common shapes of a field:
//!
//! - [`SimpleFieldBuilder`] for filterable/sortable values that are not full-text searched
//! - [`SearchableFieldBuilder`] for full-text string fields with analyzer bindings
//! - [`ComplexFieldBuilder`] for nested objects
//!
//! ```rust
//! use azure_search_documents::field::SearchFieldDataType;
//! use azure_search_documents::field_builder::{ComplexFieldBuilder, SimpleFieldBuilder};
//!
//! let id = SimpleFieldBuilder::new("id", SearchFieldDataType::String, false)
//!     .key(true)
//!     .build();
//! assert_eq!(id.key, Some(true));
//! assert_eq!(id.searchable, Some(false));
//!
//! let address = ComplexFieldBuilder::new("address", false)
//!     .field(SimpleFieldBuilder::new("zip", SearchFieldDataType::String, false).build())
//!     .build();
//! assert_eq!(address.fields.len(), 1);
//! assert_eq!(address.filterable, None);
//! ```

use crate::analysis::LexicalAnalyzerName;
use crate::field::{SearchField, SearchFieldDataType};

fn wrap(data_type: SearchFieldDataType, collection: bool) -> SearchFieldDataType {
    if collection {
        SearchFieldDataType::collection(data_type)
    } else {
        data_type
    }
}

/// Builder for a field that is not full-text searchable.
#[derive(Debug, Clone)]
pub struct SimpleFieldBuilder {
    name: String,
    data_type: SearchFieldDataType,
    key: bool,
    hidden: bool,
    filterable: bool,
    sortable: bool,
    facetable: bool,
}

impl SimpleFieldBuilder {
    /// Start a simple field of type `data_type`, or a collection of it.
    pub fn new(name: impl Into<String>, data_type: SearchFieldDataType, collection: bool) -> Self {
        Self {
            name: name.into(),
            data_type: wrap(data_type, collection),
            key: false,
            hidden: false,
            filterable: false,
            sortable: false,
            facetable: false,
        }
    }

    /// Mark the field as the document key.
    pub fn key(mut self, key: bool) -> Self {
        self.key = key;
        self
    }

    /// Exclude the field from search results.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Allow the field in `$filter` expressions.
    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Allow the field in `$orderby` expressions.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Allow the field in facet queries.
    pub fn facetable(mut self, facetable: bool) -> Self {
        self.facetable = facetable;
        self
    }

    /// Project the builder into a [`SearchField`].
    pub fn build(self) -> SearchField {
        let mut field = SearchField::new(self.name, self.data_type);
        field.key = Some(self.key);
        field.hidden = Some(self.hidden);
        field.searchable = Some(false);
        field.filterable = Some(self.filterable);
        field.sortable = Some(self.sortable);
        field.facetable = Some(self.facetable);
        field
    }
}

/// Builder for a full-text searchable `Edm.String` field.
#[derive(Debug, Clone)]
pub struct SearchableFieldBuilder {
    inner: SimpleFieldBuilder,
    analyzer: Option<LexicalAnalyzerName>,
    search_analyzer: Option<LexicalAnalyzerName>,
    index_analyzer: Option<LexicalAnalyzerName>,
    synonym_maps: Vec<String>,
}

impl SearchableFieldBuilder {
    /// Start a searchable string field, or a collection of strings.
    pub fn new(name: impl Into<String>, collection: bool) -> Self {
        Self {
            inner: SimpleFieldBuilder::new(name, SearchFieldDataType::String, collection),
            analyzer: None,
            search_analyzer: None,
            index_analyzer: None,
            synonym_maps: Vec::new(),
        }
    }

    /// Mark the field as the document key.
    pub fn key(mut self, key: bool) -> Self {
        self.inner = self.inner.key(key);
        self
    }

    /// Exclude the field from search results.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.inner = self.inner.hidden(hidden);
        self
    }

    /// Allow the field in `$filter` expressions.
    pub fn filterable(mut self, filterable: bool) -> Self {
        self.inner = self.inner.filterable(filterable);
        self
    }

    /// Allow the field in `$orderby` expressions.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.inner = self.inner.sortable(sortable);
        self
    }

    /// Allow the field in facet queries.
    pub fn facetable(mut self, facetable: bool) -> Self {
        self.inner = self.inner.facetable(facetable);
        self
    }

    /// Analyzer for both indexing and querying.
    pub fn analyzer(mut self, analyzer: impl Into<LexicalAnalyzerName>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    /// Analyzer for querying only.
    pub fn search_analyzer(mut self, analyzer: impl Into<LexicalAnalyzerName>) -> Self {
        self.search_analyzer = Some(analyzer.into());
        self
    }

    /// Analyzer for indexing only.
    pub fn index_analyzer(mut self, analyzer: impl Into<LexicalAnalyzerName>) -> Self {
        self.index_analyzer = Some(analyzer.into());
        self
    }

    /// Attach synonym maps by name.
    pub fn synonym_maps<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonym_maps = names.into_iter().map(Into::into).collect();
        self
    }

    /// Project the builder into a [`SearchField`].
    pub fn build(self) -> SearchField {
        let mut field = self.inner.build();
        field.searchable = Some(true);
        field.analyzer = self.analyzer;
        field.search_analyzer = self.search_analyzer;
        field.index_analyzer = self.index_analyzer;
        field.synonym_maps = self.synonym_maps;
        field
    }
}

/// Builder for an `Edm.ComplexType` field with nested sub-fields.
#[derive(Debug, Clone)]
pub struct ComplexFieldBuilder {
    name: String,
    collection: bool,
    fields: Vec<SearchField>,
}

impl ComplexFieldBuilder {
    /// Start a complex field, or a collection of complex objects.
    pub fn new(name: impl Into<String>, collection: bool) -> Self {
        Self {
            name: name.into(),
            collection,
            fields: Vec::new(),
        }
    }

    /// Append one sub-field.
    pub fn field(mut self, field: SearchField) -> Self {
        self.fields.push(field);
        self
    }

    /// Replace all sub-fields.
    pub fn fields(mut self, fields: Vec<SearchField>) -> Self {
        self.fields = fields;
        self
    }

    /// Project the builder into a [`SearchField`].
    pub fn build(self) -> SearchField {
        let mut field = SearchField::new(
            self.name,
            wrap(SearchFieldDataType::Complex, self.collection),
        );
        field.fields = self.fields;
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_key_field() {
        let field = SimpleFieldBuilder::new("id", SearchFieldDataType::String, false)
            .key(true)
            .build();

        assert_eq!(field.name, "id");
        assert_eq!(field.data_type, SearchFieldDataType::String);
        assert_eq!(field.key, Some(true));
        assert_eq!(field.searchable, Some(false));
        assert_eq!(field.filterable, Some(false));
        assert_eq!(field.hidden, Some(false));
    }

    #[test]
    fn test_simple_collection_field() {
        let field = SimpleFieldBuilder::new("ratings", SearchFieldDataType::Int32, true)
            .filterable(true)
            .facetable(true)
            .build();

        assert_eq!(
            field.data_type,
            SearchFieldDataType::collection(SearchFieldDataType::Int32)
        );
        assert_eq!(field.filterable, Some(true));
        assert_eq!(field.facetable, Some(true));
        assert_eq!(field.sortable, Some(false));
    }

    #[test]
    fn test_searchable_field_with_analyzers() {
        let field = SearchableFieldBuilder::new("description", false)
            .analyzer(LexicalAnalyzerName::EnMicrosoft)
            .synonym_maps(["hotel-synonyms"])
            .build();

        assert_eq!(field.data_type, SearchFieldDataType::String);
        assert_eq!(field.searchable, Some(true));
        assert_eq!(field.analyzer, Some(LexicalAnalyzerName::EnMicrosoft));
        assert_eq!(field.synonym_maps, vec!["hotel-synonyms".to_string()]);

        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["analyzer"], "en.microsoft");
        assert_eq!(json["retrievable"], true);
    }

    #[test]
    fn test_searchable_collection_uses_custom_analyzer_name() {
        let field = SearchableFieldBuilder::new("tags", true)
            .index_analyzer("my_analyzer")
            .search_analyzer(LexicalAnalyzerName::Keyword)
            .build();

        assert_eq!(field.data_type.to_string(), "Collection(Edm.String)");
        assert_eq!(
            field.index_analyzer,
            Some(LexicalAnalyzerName::Other("my_analyzer".into()))
        );
        assert_eq!(field.search_analyzer, Some(LexicalAnalyzerName::Keyword));
    }

    #[test]
    fn test_complex_field_leaves_flags_unset() {
        let field = ComplexFieldBuilder::new("rooms", true)
            .field(SearchableFieldBuilder::new("description", false).build())
            .field(SimpleFieldBuilder::new("baseRate", SearchFieldDataType::Double, false).build())
            .build();

        assert_eq!(field.data_type.to_string(), "Collection(Edm.ComplexType)");
        assert_eq!(field.fields.len(), 2);
        assert!(field.key.is_none());
        assert!(field.searchable.is_none());
        assert!(field.filterable.is_none());
        assert!(field.sortable.is_none());
        assert!(field.facetable.is_none());

        let json = serde_json::to_value(&field).unwrap();
        assert!(json.get("searchable").is_none());
        assert!(json.get("retrievable").is_none());
    }
}
