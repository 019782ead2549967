//! Index fields and their data types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::analysis::LexicalAnalyzerName;

/// The Entity Data Model type of a field.
///
/// Collections nest their element type, e.g. `Collection(Edm.String)`.
/// Types introduced by newer service versions are kept in [`Other`](Self::Other).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SearchFieldDataType {
    /// `Edm.String`.
    String,
    /// `Edm.Int32`.
    Int32,
    /// `Edm.Int64`.
    Int64,
    /// `Edm.Double`.
    Double,
    /// `Edm.Boolean`.
    Boolean,
    /// `Edm.DateTimeOffset`.
    DateTimeOffset,
    /// `Edm.GeographyPoint`.
    GeographyPoint,
    /// `Edm.ComplexType`: a field with nested sub-fields.
    Complex,
    /// `Edm.Single`, used by vector fields.
    Single,
    /// `Edm.Half`.
    Half,
    /// `Edm.Int16`.
    Int16,
    /// `Edm.SByte`.
    SByte,
    /// `Edm.Byte`.
    Byte,
    /// `Collection(<element>)`.
    Collection(Box<SearchFieldDataType>),
    /// A type not known to this version of the SDK.
    Other(String),
}

impl SearchFieldDataType {
    /// A collection of `element`.
    pub fn collection(element: SearchFieldDataType) -> Self {
        Self::Collection(Box::new(element))
    }

    /// Returns `true` for `Collection(...)` types.
    pub fn is_collection(&self) -> bool {
        matches!(self, Self::Collection(_))
    }

    fn primitive_name(&self) -> Option<&'static str> {
        Some(match self {
            Self::String => "Edm.String",
            Self::Int32 => "Edm.Int32",
            Self::Int64 => "Edm.Int64",
            Self::Double => "Edm.Double",
            Self::Boolean => "Edm.Boolean",
            Self::DateTimeOffset => "Edm.DateTimeOffset",
            Self::GeographyPoint => "Edm.GeographyPoint",
            Self::Complex => "Edm.ComplexType",
            Self::Single => "Edm.Single",
            Self::Half => "Edm.Half",
            Self::Int16 => "Edm.Int16",
            Self::SByte => "Edm.SByte",
            Self::Byte => "Edm.Byte",
            Self::Collection(_) | Self::Other(_) => return None,
        })
    }
}

impl fmt::Display for SearchFieldDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collection(element) => write!(f, "Collection({element})"),
            Self::Other(value) => f.write_str(value),
            primitive => f.write_str(primitive.primitive_name().unwrap_or_default()),
        }
    }
}

impl From<&str> for SearchFieldDataType {
    fn from(value: &str) -> Self {
        if let Some(element) = value
            .strip_prefix("Collection(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::collection(Self::from(element));
        }
        match value {
            "Edm.String" => Self::String,
            "Edm.Int32" => Self::Int32,
            "Edm.Int64" => Self::Int64,
            "Edm.Double" => Self::Double,
            "Edm.Boolean" => Self::Boolean,
            "Edm.DateTimeOffset" => Self::DateTimeOffset,
            "Edm.GeographyPoint" => Self::GeographyPoint,
            "Edm.ComplexType" => Self::Complex,
            "Edm.Single" => Self::Single,
            "Edm.Half" => Self::Half,
            "Edm.Int16" => Self::Int16,
            "Edm.SByte" => Self::SByte,
            "Edm.Byte" => Self::Byte,
            other => Self::Other(other.to_string()),
        }
    }
}

impl FromStr for SearchFieldDataType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Serialize for SearchFieldDataType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SearchFieldDataType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from(value.as_str()))
    }
}

/// A field of a [`SearchIndex`](crate::index::SearchIndex).
///
/// Prefer the builders in [`field_builder`](crate::field_builder) over filling
/// this struct by hand. Complex fields leave every attribute flag as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchField {
    /// The field name.
    pub name: String,

    /// The field's data type.
    #[serde(rename = "type")]
    pub data_type: SearchFieldDataType,

    /// Whether the field uniquely identifies documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<bool>,

    /// Whether the field is excluded from search results.
    ///
    /// Sent to the service as the inverse `retrievable` property.
    #[serde(
        rename = "retrievable",
        with = "inverted",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub hidden: Option<bool>,

    /// Whether the field is full-text searchable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub searchable: Option<bool>,

    /// Whether the field can be referenced in `$filter`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filterable: Option<bool>,

    /// Whether the field can be referenced in `$orderby`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sortable: Option<bool>,

    /// Whether the field can be referenced in facet queries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facetable: Option<bool>,

    /// Analyzer used at both indexing and query time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<LexicalAnalyzerName>,

    /// Analyzer used at query time only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_analyzer: Option<LexicalAnalyzerName>,

    /// Analyzer used at indexing time only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_analyzer: Option<LexicalAnalyzerName>,

    /// Names of synonym maps applied to this field.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonym_maps: Vec<String>,

    /// Sub-fields of a complex field.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<SearchField>,
}

impl SearchField {
    /// Create a field with only a name and type set.
    pub fn new(name: impl Into<String>, data_type: SearchFieldDataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            key: None,
            hidden: None,
            searchable: None,
            filterable: None,
            sortable: None,
            facetable: None,
            analyzer: None,
            search_analyzer: None,
            index_analyzer: None,
            synonym_maps: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Returns `true` if this field is marked as the document key.
    pub fn is_key(&self) -> bool {
        self.key == Some(true)
    }
}

/// (De)serialize `hidden` as the service's `retrievable` flag.
mod inverted {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(hidden) => serializer.serialize_bool(!hidden),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
        Ok(Option::<bool>::deserialize(deserializer)?.map(|retrievable| !retrievable))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_wire_names() {
        assert_eq!(SearchFieldDataType::String.to_string(), "Edm.String");
        assert_eq!(SearchFieldDataType::Complex.to_string(), "Edm.ComplexType");
        assert_eq!(
            SearchFieldDataType::collection(SearchFieldDataType::Single).to_string(),
            "Collection(Edm.Single)"
        );
    }

    #[test]
    fn test_data_type_parses_nested_collection() {
        let parsed = SearchFieldDataType::from("Collection(Edm.ComplexType)");
        assert_eq!(
            parsed,
            SearchFieldDataType::collection(SearchFieldDataType::Complex)
        );
        assert!(parsed.is_collection());
    }

    #[test]
    fn test_data_type_unknown_kept_verbatim() {
        let parsed: SearchFieldDataType = serde_json::from_str("\"Edm.Future\"").unwrap();
        assert_eq!(parsed, SearchFieldDataType::Other("Edm.Future".into()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"Edm.Future\"");
    }

    #[test]
    fn test_hidden_serializes_as_retrievable() {
        let mut field = SearchField::new("secret", SearchFieldDataType::String);
        field.hidden = Some(true);

        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["retrievable"], false);
        assert!(json.get("hidden").is_none());
        assert_eq!(json["type"], "Edm.String");
    }

    #[test]
    fn test_retrievable_deserializes_as_hidden() {
        let json = serde_json::json!({"name": "title", "type": "Edm.String", "retrievable": true});
        let field: SearchField = serde_json::from_value(json).unwrap();
        assert_eq!(field.hidden, Some(false));

        let json = serde_json::json!({"name": "title", "type": "Edm.String"});
        let field: SearchField = serde_json::from_value(json).unwrap();
        assert_eq!(field.hidden, None);
    }

    #[test]
    fn test_nested_fields_round_trip() {
        let json = serde_json::json!({
            "name": "address",
            "type": "Edm.ComplexType",
            "fields": [
                {"name": "city", "type": "Edm.String", "searchable": true, "analyzer": "en.lucene"}
            ]
        });
        let field: SearchField = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(field.fields.len(), 1);
        assert_eq!(field.fields[0].analyzer, Some(LexicalAnalyzerName::EnLucene));
        assert_eq!(serde_json::to_value(&field).unwrap(), json);
    }
}
