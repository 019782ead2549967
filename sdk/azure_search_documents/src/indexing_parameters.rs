//! Indexer execution parameters.
//!
//! On the wire, `parameters.configuration` is a free-form JSON object. This
//! module exposes it as [`IndexingParametersConfiguration`], a typed view over
//! the keys the service documents. Keys outside that table, and documented keys
//! whose value has an unexpected JSON type, are kept in
//! [`IndexingParametersConfiguration::additional_properties`] so that a
//! definition read from the service is written back unchanged.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

azure_sdk_core::expandable_enum! {
    /// How blob content is parsed.
    pub enum BlobIndexerParsingMode {
        /// Regular file processing.
        Default => "default",
        /// Plain text.
        Text => "text",
        /// CSV and other delimited text.
        DelimitedText => "delimitedText",
        /// One JSON document per blob.
        Json => "json",
        /// A JSON array per blob, one document per element.
        JsonArray => "jsonArray",
        /// Newline-delimited JSON, one document per line.
        JsonLines => "jsonLines",
    }
}

azure_sdk_core::expandable_enum! {
    /// Which parts of a blob are extracted.
    pub enum BlobIndexerDataToExtract {
        /// Standard blob properties and user-specified metadata only.
        StorageMetadata => "storageMetadata",
        /// Storage metadata plus content-type specific metadata.
        AllMetadata => "allMetadata",
        /// All metadata and textual content.
        ContentAndMetadata => "contentAndMetadata",
    }
}

azure_sdk_core::expandable_enum! {
    /// How embedded images are processed.
    pub enum BlobIndexerImageAction {
        /// Ignore embedded images.
        None => "none",
        /// Extract and normalize embedded images.
        GenerateNormalizedImages => "generateNormalizedImages",
        /// Render each PDF page as an image.
        GenerateNormalizedImagePerPage => "generateNormalizedImagePerPage",
    }
}

azure_sdk_core::expandable_enum! {
    /// Text extraction strategy for rotated PDF text.
    pub enum BlobIndexerPdfTextRotationAlgorithm {
        /// Normal extraction.
        None => "none",
        /// Detect and extract rotated text.
        DetectAngles => "detectAngles",
    }
}

azure_sdk_core::expandable_enum! {
    /// Environment an indexer runs in.
    pub enum IndexerExecutionEnvironment {
        /// Let the service decide.
        Standard => "standard",
        /// Run in the search service's private environment.
        Private => "private",
    }
}

/// Parameters controlling an indexer's execution.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexingParameters {
    /// Items read from the data source and indexed as one batch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<i32>,

    /// Failed items tolerated before the run is considered failed. `-1` for no limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_failed_items: Option<i32>,

    /// Failed items tolerated per batch. `-1` for no limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_failed_items_per_batch: Option<i32>,

    /// Indexer-specific configuration. An empty object reads as `None`.
    #[serde(
        default,
        deserialize_with = "non_empty_configuration",
        skip_serializing_if = "Option::is_none"
    )]
    pub configuration: Option<IndexingParametersConfiguration>,
}

fn non_empty_configuration<'de, D>(
    deserializer: D,
) -> Result<Option<IndexingParametersConfiguration>, D::Error>
where
    D: Deserializer<'de>,
{
    let map = Option::<Map<String, Value>>::deserialize(deserializer)?;
    Ok(map
        .filter(|m| !m.is_empty())
        .map(|m| IndexingParametersConfiguration::from_map(&m)))
}

impl IndexingParameters {
    /// Replace the configuration. An empty configuration is stored as `None`.
    pub fn set_configuration(&mut self, configuration: Option<IndexingParametersConfiguration>) {
        self.configuration = configuration.filter(|c| !c.is_empty());
    }

    /// The configuration as the raw JSON object sent to the service.
    pub fn configuration_map(&self) -> Option<Map<String, Value>> {
        self.configuration.as_ref().map(IndexingParametersConfiguration::to_map)
    }
}

/// Typed view of `parameters.configuration`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IndexingParametersConfiguration {
    /// `parsingMode`.
    pub parsing_mode: Option<BlobIndexerParsingMode>,
    /// `excludedFileNameExtensions`, comma-separated, e.g. `.png,.mp4`.
    pub excluded_file_name_extensions: Option<String>,
    /// `indexedFileNameExtensions`, comma-separated.
    pub indexed_file_name_extensions: Option<String>,
    /// `failOnUnsupportedContentType`.
    pub fail_on_unsupported_content_type: Option<bool>,
    /// `failOnUnprocessableDocument`.
    pub fail_on_unprocessable_document: Option<bool>,
    /// `indexStorageMetadataOnlyForOversizedDocuments`.
    pub index_storage_metadata_only_for_oversized_documents: Option<bool>,
    /// `delimitedTextHeaders`, comma-separated column headers.
    pub delimited_text_headers: Option<String>,
    /// `delimitedTextDelimiter`, a single character.
    pub delimited_text_delimiter: Option<String>,
    /// `firstLineContainsHeaders`.
    pub first_line_contains_headers: Option<bool>,
    /// `documentRoot`, a JSON path within each blob.
    pub document_root: Option<String>,
    /// `dataToExtract`.
    pub data_to_extract: Option<BlobIndexerDataToExtract>,
    /// `imageAction`.
    pub image_action: Option<BlobIndexerImageAction>,
    /// `allowSkillsetToReadFileData`.
    pub allow_skillset_to_read_file_data: Option<bool>,
    /// `pdfTextRotationAlgorithm`.
    pub pdf_text_rotation_algorithm: Option<BlobIndexerPdfTextRotationAlgorithm>,
    /// `executionEnvironment`.
    pub execution_environment: Option<IndexerExecutionEnvironment>,
    /// `queryTimeout`, as `hh:mm:ss`.
    pub query_timeout: Option<String>,
    /// Every other configuration key, kept as received.
    pub additional_properties: Map<String, Value>,
}

const PARSING_MODE: &str = "parsingMode";
const EXCLUDED_FILE_NAME_EXTENSIONS: &str = "excludedFileNameExtensions";
const INDEXED_FILE_NAME_EXTENSIONS: &str = "indexedFileNameExtensions";
const FAIL_ON_UNSUPPORTED_CONTENT_TYPE: &str = "failOnUnsupportedContentType";
const FAIL_ON_UNPROCESSABLE_DOCUMENT: &str = "failOnUnprocessableDocument";
const INDEX_STORAGE_METADATA_ONLY: &str = "indexStorageMetadataOnlyForOversizedDocuments";
const DELIMITED_TEXT_HEADERS: &str = "delimitedTextHeaders";
const DELIMITED_TEXT_DELIMITER: &str = "delimitedTextDelimiter";
const FIRST_LINE_CONTAINS_HEADERS: &str = "firstLineContainsHeaders";
const DOCUMENT_ROOT: &str = "documentRoot";
const DATA_TO_EXTRACT: &str = "dataToExtract";
const IMAGE_ACTION: &str = "imageAction";
const ALLOW_SKILLSET_TO_READ_FILE_DATA: &str = "allowSkillsetToReadFileData";
const PDF_TEXT_ROTATION_ALGORITHM: &str = "pdfTextRotationAlgorithm";
const EXECUTION_ENVIRONMENT: &str = "executionEnvironment";
const QUERY_TIMEOUT: &str = "queryTimeout";

/// Remove `key` from `map` only if `pick` accepts its value.
fn take<T>(map: &mut Map<String, Value>, key: &str, pick: impl Fn(&Value) -> Option<T>) -> Option<T> {
    let picked = map.get(key).and_then(pick)?;
    map.remove(key);
    Some(picked)
}

fn take_string(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    take(map, key, |v| v.as_str().map(str::to_string))
}

fn take_bool(map: &mut Map<String, Value>, key: &str) -> Option<bool> {
    take(map, key, Value::as_bool)
}

fn put(map: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        map.insert(key.to_string(), value);
    }
}

fn string_value(value: &Option<String>) -> Option<Value> {
    value.as_ref().map(|s| Value::String(s.clone()))
}

impl IndexingParametersConfiguration {
    /// Read a raw configuration object.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let mut rest = map.clone();
        Self {
            parsing_mode: take_string(&mut rest, PARSING_MODE).map(Into::into),
            excluded_file_name_extensions: take_string(&mut rest, EXCLUDED_FILE_NAME_EXTENSIONS),
            indexed_file_name_extensions: take_string(&mut rest, INDEXED_FILE_NAME_EXTENSIONS),
            fail_on_unsupported_content_type: take_bool(&mut rest, FAIL_ON_UNSUPPORTED_CONTENT_TYPE),
            fail_on_unprocessable_document: take_bool(&mut rest, FAIL_ON_UNPROCESSABLE_DOCUMENT),
            index_storage_metadata_only_for_oversized_documents: take_bool(
                &mut rest,
                INDEX_STORAGE_METADATA_ONLY,
            ),
            delimited_text_headers: take_string(&mut rest, DELIMITED_TEXT_HEADERS),
            delimited_text_delimiter: take_string(&mut rest, DELIMITED_TEXT_DELIMITER),
            first_line_contains_headers: take_bool(&mut rest, FIRST_LINE_CONTAINS_HEADERS),
            document_root: take_string(&mut rest, DOCUMENT_ROOT),
            data_to_extract: take_string(&mut rest, DATA_TO_EXTRACT).map(Into::into),
            image_action: take_string(&mut rest, IMAGE_ACTION).map(Into::into),
            allow_skillset_to_read_file_data: take_bool(&mut rest, ALLOW_SKILLSET_TO_READ_FILE_DATA),
            pdf_text_rotation_algorithm: take_string(&mut rest, PDF_TEXT_ROTATION_ALGORITHM)
                .map(Into::into),
            execution_environment: take_string(&mut rest, EXECUTION_ENVIRONMENT).map(Into::into),
            query_timeout: take_string(&mut rest, QUERY_TIMEOUT),
            additional_properties: rest,
        }
    }

    /// Write the raw configuration object. Typed fields win over
    /// same-named entries in `additional_properties`.
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = self.additional_properties.clone();
        let text = |v: Option<&str>| v.map(|s| Value::String(s.to_string()));

        put(&mut map, PARSING_MODE, text(self.parsing_mode.as_ref().map(|v| v.as_str())));
        put(&mut map, EXCLUDED_FILE_NAME_EXTENSIONS, string_value(&self.excluded_file_name_extensions));
        put(&mut map, INDEXED_FILE_NAME_EXTENSIONS, string_value(&self.indexed_file_name_extensions));
        put(
            &mut map,
            FAIL_ON_UNSUPPORTED_CONTENT_TYPE,
            self.fail_on_unsupported_content_type.map(Value::Bool),
        );
        put(
            &mut map,
            FAIL_ON_UNPROCESSABLE_DOCUMENT,
            self.fail_on_unprocessable_document.map(Value::Bool),
        );
        put(
            &mut map,
            INDEX_STORAGE_METADATA_ONLY,
            self.index_storage_metadata_only_for_oversized_documents.map(Value::Bool),
        );
        put(&mut map, DELIMITED_TEXT_HEADERS, string_value(&self.delimited_text_headers));
        put(&mut map, DELIMITED_TEXT_DELIMITER, string_value(&self.delimited_text_delimiter));
        put(
            &mut map,
            FIRST_LINE_CONTAINS_HEADERS,
            self.first_line_contains_headers.map(Value::Bool),
        );
        put(&mut map, DOCUMENT_ROOT, string_value(&self.document_root));
        put(&mut map, DATA_TO_EXTRACT, text(self.data_to_extract.as_ref().map(|v| v.as_str())));
        put(&mut map, IMAGE_ACTION, text(self.image_action.as_ref().map(|v| v.as_str())));
        put(
            &mut map,
            ALLOW_SKILLSET_TO_READ_FILE_DATA,
            self.allow_skillset_to_read_file_data.map(Value::Bool),
        );
        put(
            &mut map,
            PDF_TEXT_ROTATION_ALGORITHM,
            text(self.pdf_text_rotation_algorithm.as_ref().map(|v| v.as_str())),
        );
        put(
            &mut map,
            EXECUTION_ENVIRONMENT,
            text(self.execution_environment.as_ref().map(|v| v.as_str())),
        );
        put(&mut map, QUERY_TIMEOUT, string_value(&self.query_timeout));
        map
    }

    /// Returns `true` if no key would be written.
    pub fn is_empty(&self) -> bool {
        self.to_map().is_empty()
    }
}

impl From<&Map<String, Value>> for IndexingParametersConfiguration {
    fn from(map: &Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}

impl From<&IndexingParametersConfiguration> for Map<String, Value> {
    fn from(configuration: &IndexingParametersConfiguration) -> Self {
        configuration.to_map()
    }
}

impl Serialize for IndexingParametersConfiguration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for IndexingParametersConfiguration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_map(&map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn test_parsing_mode_bridges_both_ways() {
        let map = as_map(serde_json::json!({"parsingMode": "json"}));
        let typed = IndexingParametersConfiguration::from_map(&map);
        assert_eq!(typed.parsing_mode, Some(BlobIndexerParsingMode::Json));
        assert!(typed.additional_properties.is_empty());

        let typed = IndexingParametersConfiguration {
            parsing_mode: Some(BlobIndexerParsingMode::Json),
            ..Default::default()
        };
        assert_eq!(typed.to_map(), map);
    }

    #[test]
    fn test_unknown_keys_and_mistyped_values_pass_through() {
        let map = as_map(serde_json::json!({
            "dataToExtract": "contentAndMetadata",
            "firstLineContainsHeaders": "yes",
            "markdownParsingSubmode": "oneToMany",
            "queryTimeout": "00:05:00"
        }));
        let typed = IndexingParametersConfiguration::from_map(&map);

        assert_eq!(typed.data_to_extract, Some(BlobIndexerDataToExtract::ContentAndMetadata));
        assert_eq!(typed.query_timeout.as_deref(), Some("00:05:00"));
        assert_eq!(typed.first_line_contains_headers, None);
        assert_eq!(typed.additional_properties.len(), 2);
        assert_eq!(typed.additional_properties["firstLineContainsHeaders"], "yes");
        assert_eq!(typed.to_map(), map);
    }

    #[test]
    fn test_map_to_typed_to_map_is_idempotent() {
        let map = as_map(serde_json::json!({
            "parsingMode": "delimitedText",
            "delimitedTextHeaders": "id,name",
            "delimitedTextDelimiter": "|",
            "firstLineContainsHeaders": false,
            "excludedFileNameExtensions": ".png,.mp4",
            "imageAction": "generateNormalizedImages",
            "pdfTextRotationAlgorithm": "detectAngles",
            "executionEnvironment": "private",
            "allowSkillsetToReadFileData": true,
            "failOnUnsupportedContentType": false,
            "someFutureFlag": 3
        }));

        let once = IndexingParametersConfiguration::from_map(&map).to_map();
        assert_eq!(once, map);
        let twice = IndexingParametersConfiguration::from_map(&once).to_map();
        assert_eq!(twice, once);
    }

    #[test]
    fn test_empty_configuration_is_none() {
        let params: IndexingParameters =
            serde_json::from_value(serde_json::json!({"batchSize": 10, "configuration": {}})).unwrap();
        assert_eq!(params.batch_size, Some(10));
        assert!(params.configuration.is_none());

        let mut params = IndexingParameters::default();
        params.set_configuration(Some(IndexingParametersConfiguration::default()));
        assert!(params.configuration.is_none());
        assert_eq!(serde_json::to_value(&params).unwrap(), serde_json::json!({}));
    }

    #[test]
    fn test_indexing_parameters_serialization() {
        let mut params = IndexingParameters {
            max_failed_items: Some(-1),
            ..Default::default()
        };
        params.set_configuration(Some(IndexingParametersConfiguration {
            parsing_mode: Some(BlobIndexerParsingMode::JsonLines),
            ..Default::default()
        }));

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"maxFailedItems": -1, "configuration": {"parsingMode": "jsonLines"}})
        );
        assert_eq!(
            params.configuration_map().unwrap()["parsingMode"],
            Value::String("jsonLines".into())
        );

        let back: IndexingParameters = serde_json::from_value(json).unwrap();
        assert_eq!(back, params);
    }
}
