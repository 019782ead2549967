//! Indexer management and execution.
//!
//! An indexer pulls documents from a data source connection, optionally runs
//! them through a skillset, and writes them into a target index.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use azure_sdk_core::client::AzureClient;
//! use azure_search_documents::indexer::{self, IndexingSchedule, SearchIndexer};
//! use azure_search_documents::options::CreateOrUpdateIndexerOptions;
//!
//! # async fn example(client: &AzureClient) -> Result<(), Box<dyn std::error::Error>> {
//! let mut definition = SearchIndexer::new("hotels-indexer", "hotels-ds", "hotels");
//! definition.schedule = Some(IndexingSchedule::new("PT2H"));
//!
//! let options = CreateOrUpdateIndexerOptions::new(definition)?;
//! indexer::create_or_update(client, &options).await?;
//!
//! indexer::run(client, "hotels-indexer").await?;
//! let status =
//!     indexer::poll_until_idle(client, "hotels-indexer", Duration::from_secs(5), 60).await?;
//! println!("last run: {:?}", status.last_result.map(|r| r.status));
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use azure_sdk_core::client::AzureClient;
use azure_sdk_core::error::{AzureError, AzureResult};
use azure_sdk_core::models::MatchConditions;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::indexing_parameters::IndexingParameters;
use crate::models::{resource_path, with_query, ListResponse, SearchResourceEncryptionKey};
use crate::options::CreateOrUpdateIndexerOptions;

// ---------------------------------------------------------------------------
// Definition types
// ---------------------------------------------------------------------------

/// An indexer definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndexer {
    /// Indexer name.
    pub name: String,

    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The data source connection to read from.
    pub data_source_name: String,

    /// The skillset to run over each document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skillset_name: Option<String>,

    /// The index to write into.
    pub target_index_name: String,

    /// Recurring schedule. Without one the indexer runs only on demand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<IndexingSchedule>,

    /// Execution parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<IndexingParameters>,

    /// Mappings from source fields to index fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_mappings: Vec<FieldMapping>,

    /// Mappings from enrichment outputs to index fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output_field_mappings: Vec<FieldMapping>,

    /// Whether the indexer is disabled.
    #[serde(rename = "disabled", skip_serializing_if = "Option::is_none")]
    pub is_disabled: Option<bool>,

    /// Customer-managed encryption key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<SearchResourceEncryptionKey>,

    /// Entity tag for optimistic concurrency.
    #[serde(rename = "@odata.etag", skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

impl SearchIndexer {
    /// Create an indexer reading `data_source_name` into `target_index_name`.
    pub fn new(
        name: impl Into<String>,
        data_source_name: impl Into<String>,
        target_index_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            data_source_name: data_source_name.into(),
            skillset_name: None,
            target_index_name: target_index_name.into(),
            schedule: None,
            parameters: None,
            field_mappings: Vec::new(),
            output_field_mappings: Vec::new(),
            is_disabled: None,
            encryption_key: None,
            etag: None,
        }
    }
}

/// A recurring indexer schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexingSchedule {
    /// ISO 8601 interval between runs, e.g. `PT1H`. Minimum five minutes.
    pub interval: String,

    /// When the schedule starts, as an ISO 8601 timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
}

impl IndexingSchedule {
    /// A schedule with the given interval and no start time.
    pub fn new(interval: impl Into<String>) -> Self {
        Self {
            interval: interval.into(),
            start_time: None,
        }
    }
}

/// Maps a source field to an index field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    /// Source field name, or an enrichment path for output mappings.
    pub source_field_name: String,

    /// Target field name. Defaults to the source name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_field_name: Option<String>,

    /// Function applied to each source value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapping_function: Option<FieldMappingFunction>,
}

impl FieldMapping {
    /// Map `source` to the field of the same name.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source_field_name: source.into(),
            target_field_name: None,
            mapping_function: None,
        }
    }

    /// Set the target field.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target_field_name = Some(target.into());
        self
    }

    /// Set the mapping function.
    pub fn function(mut self, function: FieldMappingFunction) -> Self {
        self.mapping_function = Some(function);
        self
    }
}

/// A function transforming values during field mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMappingFunction {
    /// Function name, e.g. `base64Encode`.
    pub name: String,

    /// Function parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Map<String, Value>>,
}

impl FieldMappingFunction {
    /// A function without parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: None,
        }
    }

    /// `base64Encode`, commonly applied to blob paths used as document keys.
    pub fn base64_encode() -> Self {
        Self::new("base64Encode")
    }

    /// `base64Decode`.
    pub fn base64_decode() -> Self {
        Self::new("base64Decode")
    }

    /// `extractTokenAtPosition`: split on `delimiter` and keep the token at `position`.
    pub fn extract_token_at_position(delimiter: impl Into<String>, position: i32) -> Self {
        let mut parameters = Map::new();
        parameters.insert("delimiter".into(), Value::String(delimiter.into()));
        parameters.insert("position".into(), Value::from(position));
        Self {
            name: "extractTokenAtPosition".into(),
            parameters: Some(parameters),
        }
    }

    /// `jsonArrayToStringCollection`.
    pub fn json_array_to_string_collection() -> Self {
        Self::new("jsonArrayToStringCollection")
    }

    /// `urlEncode`.
    pub fn url_encode() -> Self {
        Self::new("urlEncode")
    }

    /// `urlDecode`.
    pub fn url_decode() -> Self {
        Self::new("urlDecode")
    }
}

// ---------------------------------------------------------------------------
// Status types
// ---------------------------------------------------------------------------

azure_sdk_core::expandable_enum! {
    /// Overall health of an indexer.
    pub enum IndexerStatus {
        /// Unknown or unreported.
        Unknown => "unknown",
        /// The indexer hit an error that requires intervention.
        Error => "error",
        /// The indexer is operational. Individual runs may still be in progress or failing.
        Running => "running",
    }
}

azure_sdk_core::expandable_enum! {
    /// Outcome of a single indexer run.
    pub enum IndexerExecutionStatus {
        /// The run failed transiently and will be retried on schedule.
        TransientFailure => "transientFailure",
        /// The run completed.
        Success => "success",
        /// The run is still going.
        InProgress => "inProgress",
        /// The indexer was reset.
        Reset => "reset",
    }
}

/// Current status and run history of an indexer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndexerStatus {
    /// Overall status.
    pub status: IndexerStatus,

    /// Most recent run, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_result: Option<IndexerExecutionResult>,

    /// Recent runs, newest first.
    #[serde(default)]
    pub execution_history: Vec<IndexerExecutionResult>,

    /// Execution limits of the service tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<SearchIndexerLimits>,
}

impl SearchIndexerStatus {
    /// Returns `true` unless the most recent run is still in progress.
    pub fn is_idle(&self) -> bool {
        !matches!(
            self.last_result.as_ref().map(|r| &r.status),
            Some(IndexerExecutionStatus::InProgress)
        )
    }
}

/// The result of one indexer run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexerExecutionResult {
    /// Outcome.
    pub status: IndexerExecutionStatus,

    /// Error message for failed runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Start time (ISO 8601).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    /// End time (ISO 8601). Absent while in progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    /// Item-level errors.
    #[serde(default)]
    pub errors: Vec<SearchIndexerError>,

    /// Item-level warnings.
    #[serde(default)]
    pub warnings: Vec<SearchIndexerWarning>,

    /// Items processed in this run.
    #[serde(rename = "itemsProcessed", default)]
    pub item_count: i64,

    /// Items that failed in this run.
    #[serde(rename = "itemsFailed", default)]
    pub failed_item_count: i64,

    /// Change tracking state when the run started.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_tracking_state: Option<String>,

    /// Change tracking state when the run ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_tracking_state: Option<String>,
}

/// An item-level indexing error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndexerError {
    /// Key of the failed document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// What went wrong.
    pub error_message: String,
    /// HTTP-like status code for the item.
    pub status_code: i32,
    /// Name of the step or skill that failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Additional details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Troubleshooting link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_link: Option<String>,
}

/// An item-level indexing warning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndexerWarning {
    /// Key of the affected document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Warning text.
    pub message: String,
    /// Name of the step or skill that warned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Additional details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Troubleshooting link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_link: Option<String>,
}

/// Per-run execution limits.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndexerLimits {
    /// Maximum run time (ISO 8601 duration).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_run_time: Option<String>,
    /// Largest file size, in bytes, that is extracted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_document_extraction_size: Option<i64>,
    /// Characters of content extracted per document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_document_content_characters_to_extract: Option<i64>,
}

// ---------------------------------------------------------------------------
// API functions
// ---------------------------------------------------------------------------

/// Create a new indexer.
#[tracing::instrument(
    name = "search::indexers::create",
    skip(client, indexer),
    fields(indexer = %indexer.name, target = %indexer.target_index_name)
)]
pub async fn create(client: &AzureClient, indexer: &SearchIndexer) -> AzureResult<SearchIndexer> {
    tracing::debug!("creating indexer");

    let path = with_query("/indexers", &[]);
    let response = client.post(&path, indexer).await?;
    let created: SearchIndexer = response.json().await?;

    tracing::debug!(etag = ?created.etag, "indexer created");
    Ok(created)
}

/// Create an indexer, or update it if it exists.
#[tracing::instrument(
    name = "search::indexers::create_or_update",
    skip(client, options),
    fields(indexer = %options.indexer.name)
)]
pub async fn create_or_update(
    client: &AzureClient,
    options: &CreateOrUpdateIndexerOptions,
) -> AzureResult<SearchIndexer> {
    tracing::debug!(
        only_if_unchanged = options.only_if_unchanged,
        "creating or updating indexer"
    );

    let path = with_query(
        &resource_path("indexers", &options.indexer.name),
        &options.query(),
    );
    let response = client
        .put(&path, &options.indexer, &options.conditions())
        .await?;
    let stored: SearchIndexer = response.json().await?;

    tracing::debug!(etag = ?stored.etag, "indexer stored");
    Ok(stored)
}

/// Retrieve an indexer by name.
#[tracing::instrument(name = "search::indexers::get", skip(client), fields(indexer = %name))]
pub async fn get(client: &AzureClient, name: &str) -> AzureResult<SearchIndexer> {
    tracing::debug!("getting indexer");

    let path = with_query(&resource_path("indexers", name), &[]);
    let response = client.get(&path).await?;
    let indexer: SearchIndexer = response.json().await?;

    tracing::debug!("indexer retrieved");
    Ok(indexer)
}

/// List all indexers.
#[tracing::instrument(name = "search::indexers::list", skip(client))]
pub async fn list(client: &AzureClient) -> AzureResult<Vec<SearchIndexer>> {
    tracing::debug!("listing indexers");

    let path = with_query("/indexers", &[]);
    let response = client.get(&path).await?;
    let list: ListResponse<SearchIndexer> = response.json().await?;

    tracing::debug!(count = list.value.len(), "indexers listed");
    Ok(list.value)
}

/// Delete an indexer.
#[tracing::instrument(name = "search::indexers::delete", skip(client), fields(indexer = %name))]
pub async fn delete(client: &AzureClient, name: &str) -> AzureResult<()> {
    tracing::debug!("deleting indexer");

    let path = with_query(&resource_path("indexers", name), &[]);
    client.delete(&path, &MatchConditions::none()).await?;

    tracing::debug!("indexer deleted");
    Ok(())
}

/// Delete an indexer only if its server copy still carries `indexer.etag`.
#[tracing::instrument(
    name = "search::indexers::delete_if_unchanged",
    skip(client, indexer),
    fields(indexer = %indexer.name)
)]
pub async fn delete_if_unchanged(client: &AzureClient, indexer: &SearchIndexer) -> AzureResult<()> {
    tracing::debug!("deleting indexer if unchanged");

    let path = with_query(&resource_path("indexers", &indexer.name), &[]);
    let conditions = MatchConditions::only_if_unchanged(true, indexer.etag.as_deref());
    client.delete(&path, &conditions).await?;

    tracing::debug!("indexer deleted");
    Ok(())
}

/// Start an indexer run now. The service answers `202 Accepted`.
#[tracing::instrument(name = "search::indexers::run", skip(client), fields(indexer = %name))]
pub async fn run(client: &AzureClient, name: &str) -> AzureResult<()> {
    tracing::debug!("running indexer");

    let path = with_query(&format!("{}/search.run", resource_path("indexers", name)), &[]);
    client.post_empty(&path).await?;

    tracing::debug!("indexer run accepted");
    Ok(())
}

/// Reset an indexer's change tracking state so the next run re-reads everything.
#[tracing::instrument(name = "search::indexers::reset", skip(client), fields(indexer = %name))]
pub async fn reset(client: &AzureClient, name: &str) -> AzureResult<()> {
    tracing::debug!("resetting indexer");

    let path = with_query(&format!("{}/search.reset", resource_path("indexers", name)), &[]);
    client.post_empty(&path).await?;

    tracing::debug!("indexer reset");
    Ok(())
}

/// Retrieve an indexer's status and run history.
#[tracing::instrument(name = "search::indexers::get_status", skip(client), fields(indexer = %name))]
pub async fn get_status(client: &AzureClient, name: &str) -> AzureResult<SearchIndexerStatus> {
    tracing::debug!("getting indexer status");

    let path = with_query(&format!("{}/search.status", resource_path("indexers", name)), &[]);
    let response = client.get(&path).await?;
    let status: SearchIndexerStatus = response.json().await?;

    tracing::debug!(status = %status.status, "indexer status retrieved");
    Ok(status)
}

/// Poll an indexer's status until its latest run is no longer in progress.
///
/// `max_attempts == 0` polls without limit.
///
/// # Errors
///
/// Returns [`AzureError::PollTimeout`] as soon as `max_attempts` polls have
/// all reported a run in progress.
#[tracing::instrument(name = "search::indexers::poll_until_idle", skip(client), fields(indexer = %name))]
pub async fn poll_until_idle(
    client: &AzureClient,
    name: &str,
    poll_interval: Duration,
    max_attempts: u32,
) -> AzureResult<SearchIndexerStatus> {
    tracing::debug!("polling indexer until idle");

    let mut attempts = 0u32;

    loop {
        attempts = attempts.saturating_add(1);
        let status = get_status(client, name).await?;

        if status.is_idle() {
            tracing::debug!(
                last_result = ?status.last_result.as_ref().map(|r| &r.status),
                "indexer idle"
            );
            return Ok(status);
        }

        if max_attempts > 0 && attempts >= max_attempts {
            return Err(AzureError::PollTimeout(format!(
                "indexer '{name}' still running after {max_attempts} polls"
            )));
        }

        tracing::trace!(attempt = attempts, "indexer run in progress, waiting");
        tokio::time::sleep(poll_interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indexing_parameters::{BlobIndexerParsingMode, IndexingParametersConfiguration};
    use azure_sdk_core::test_support::setup_mock_client;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn status_json(last: &str) -> serde_json::Value {
        serde_json::json!({
            "status": "running",
            "lastResult": {
                "status": last,
                "startTime": "2024-05-01T10:00:00Z",
                "errors": [],
                "warnings": [],
                "itemsProcessed": 12,
                "itemsFailed": 1
            },
            "executionHistory": [],
            "limits": {"maxRunTime": "PT2H", "maxDocumentExtractionSize": 16777216}
        })
    }

    #[test]
    fn test_indexer_serialization() {
        let mut indexer = SearchIndexer::new("blob-indexer", "blob-ds", "docs");
        indexer.skillset_name = Some("enrich".into());
        indexer.is_disabled = Some(false);
        indexer.field_mappings.push(
            FieldMapping::new("metadata_storage_path")
                .target("id")
                .function(FieldMappingFunction::base64_encode()),
        );
        let mut parameters = IndexingParameters::default();
        parameters.set_configuration(Some(IndexingParametersConfiguration {
            parsing_mode: Some(BlobIndexerParsingMode::Json),
            ..Default::default()
        }));
        indexer.parameters = Some(parameters);

        let json = serde_json::to_value(&indexer).unwrap();
        assert_eq!(json["dataSourceName"], "blob-ds");
        assert_eq!(json["targetIndexName"], "docs");
        assert_eq!(json["disabled"], false);
        assert_eq!(json["fieldMappings"][0]["targetFieldName"], "id");
        assert_eq!(json["fieldMappings"][0]["mappingFunction"]["name"], "base64Encode");
        assert_eq!(json["parameters"]["configuration"]["parsingMode"], "json");
        assert!(json.get("outputFieldMappings").is_none());
        assert!(json.get("schedule").is_none());
    }

    #[test]
    fn test_extract_token_mapping_function() {
        let json = serde_json::to_value(FieldMappingFunction::extract_token_at_position("/", 2)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "extractTokenAtPosition",
                "parameters": {"delimiter": "/", "position": 2}
            })
        );
    }

    #[test]
    fn test_status_deserialization() {
        let status: SearchIndexerStatus = serde_json::from_value(status_json("success")).unwrap();
        assert_eq!(status.status, IndexerStatus::Running);
        let last = status.last_result.as_ref().unwrap();
        assert_eq!(last.status, IndexerExecutionStatus::Success);
        assert_eq!(last.item_count, 12);
        assert_eq!(last.failed_item_count, 1);
        assert_eq!(status.limits.unwrap().max_run_time.as_deref(), Some("PT2H"));
        assert!(SearchIndexerStatus {
            status: IndexerStatus::Unknown,
            last_result: None,
            execution_history: vec![],
            limits: None,
        }
        .is_idle());
    }

    #[tokio::test]
    async fn test_create_indexer() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/indexers"))
            .and(query_param("api-version", "2024-07-01"))
            .and(body_json(serde_json::json!({
                "name": "ix", "dataSourceName": "ds", "targetIndexName": "idx"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "name": "ix", "dataSourceName": "ds", "targetIndexName": "idx",
                "@odata.etag": "\"0x1\""
            })))
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let created = create(&client, &SearchIndexer::new("ix", "ds", "idx"))
            .await
            .expect("should succeed");
        assert_eq!(created.etag.as_deref(), Some("\"0x1\""));
    }

    #[tokio::test]
    async fn test_create_or_update_sends_flags_and_if_match() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/indexers('ix')"))
            .and(query_param("disableCacheReprocessingChangeDetection", "true"))
            .and(header("If-Match", "\"0x1\""))
            .and(header("Prefer", "return=representation"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "ix", "dataSourceName": "ds", "targetIndexName": "idx",
                "@odata.etag": "\"0x2\""
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let mut indexer = SearchIndexer::new("ix", "ds", "idx");
        indexer.etag = Some("\"0x1\"".into());
        let options = CreateOrUpdateIndexerOptions::new(indexer)
            .unwrap()
            .only_if_unchanged(true)
            .disable_cache_reprocessing_change_detection(true);

        let stored = create_or_update(&client, &options).await.expect("should succeed");
        assert_eq!(stored.etag.as_deref(), Some("\"0x2\""));
    }

    #[tokio::test]
    async fn test_create_or_update_precondition_failed() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/indexers('ix')"))
            .respond_with(ResponseTemplate::new(412).set_body_json(serde_json::json!({
                "error": {"code": "PreconditionFailed", "message": "The precondition is not met."}
            })))
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let mut indexer = SearchIndexer::new("ix", "ds", "idx");
        indexer.etag = Some("\"stale\"".into());
        let options = CreateOrUpdateIndexerOptions::new(indexer)
            .unwrap()
            .only_if_unchanged(true);

        let err = create_or_update(&client, &options).await.unwrap_err();
        assert!(matches!(err, AzureError::Api { ref code, .. } if code == "PreconditionFailed"));
    }

    #[tokio::test]
    async fn test_run_and_reset() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/indexers('ix')/search.run"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/indexers('ix')/search.reset"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        run(&client, "ix").await.expect("run");
        reset(&client, "ix").await.expect("reset");
    }

    #[tokio::test]
    async fn test_get_list_delete() {
        let server = MockServer::start().await;
        let body = serde_json::json!({"name": "ix", "dataSourceName": "ds", "targetIndexName": "idx"});

        Mock::given(method("GET"))
            .and(path("/indexers('ix')"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/indexers"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"value": [body.clone()]})),
            )
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/indexers('ix')"))
            .and(header("If-Match", "\"0x5\""))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let mut fetched = get(&client, "ix").await.expect("get");
        assert_eq!(fetched.target_index_name, "idx");
        assert_eq!(list(&client).await.expect("list").len(), 1);

        fetched.etag = Some("\"0x5\"".into());
        delete_if_unchanged(&client, &fetched).await.expect("delete");
    }

    #[tokio::test]
    async fn test_poll_until_idle_waits_for_run() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/indexers('ix')/search.status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_json("inProgress")))
            .up_to_n_times(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/indexers('ix')/search.status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_json("success")))
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let status = poll_until_idle(&client, "ix", Duration::from_millis(1), 10)
            .await
            .expect("should succeed");
        assert_eq!(
            status.last_result.map(|r| r.status),
            Some(IndexerExecutionStatus::Success)
        );
    }

    #[tokio::test]
    async fn test_poll_until_idle_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/indexers('ix')/search.status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_json("inProgress")))
            .expect(2)
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let err = poll_until_idle(&client, "ix", Duration::from_millis(1), 2)
            .await
            .unwrap_err();
        assert!(matches!(err, AzureError::PollTimeout(_)));
        assert_eq!(err.status(), None);
    }

    #[tokio::test]
    async fn test_poll_until_idle_does_not_sleep_after_last_attempt() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/indexers('ix')/search.status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(status_json("inProgress")))
            .expect(1)
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let result = tokio::time::timeout(
            Duration::from_secs(5),
            poll_until_idle(&client, "ix", Duration::from_secs(60), 1),
        )
        .await
        .expect("should time out without waiting a poll interval");
        assert!(matches!(result, Err(AzureError::PollTimeout(_))));
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn test_run_emits_span() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/indexers('ix')/search.run"))
            .respond_with(ResponseTemplate::new(202))
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        run(&client, "ix").await.expect("run");

        assert!(logs_contain("search::indexers::run"));
        assert!(logs_contain("indexer run accepted"));
    }
}
