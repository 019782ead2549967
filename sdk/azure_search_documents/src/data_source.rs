//! Data source connection management.
//!
//! A data source connection tells an indexer where to read from, and
//! optionally how to detect changed and deleted rows between runs.
//!
//! ## Example
//!
//! ```rust,no_run
//! use azure_sdk_core::client::AzureClient;
//! use azure_search_documents::data_source::{
//!     self, HighWaterMarkChangeDetectionPolicy, SearchIndexerDataSourceConnection,
//!     SearchIndexerDataSourceType,
//! };
//! use azure_search_documents::options::CreateOrUpdateDataSourceConnectionOptions;
//!
//! # async fn example(client: &AzureClient) -> Result<(), Box<dyn std::error::Error>> {
//! let mut ds = SearchIndexerDataSourceConnection::new(
//!     "hotels-ds",
//!     SearchIndexerDataSourceType::AzureSql,
//!     "Server=...;Database=...",
//!     "Hotels",
//! );
//! ds.data_change_detection_policy =
//!     Some(HighWaterMarkChangeDetectionPolicy::new("rowversion").into());
//!
//! let options = CreateOrUpdateDataSourceConnectionOptions::new(ds)?;
//! let stored = data_source::create_or_update(client, &options).await?;
//! println!("stored {} ({:?})", stored.name, stored.etag);
//! # Ok(())
//! # }
//! ```

use azure_sdk_core::client::AzureClient;
use azure_sdk_core::error::AzureResult;
use azure_sdk_core::models::MatchConditions;
use serde::{Deserialize, Serialize};

use crate::models::{resource_path, with_query, ListResponse, SearchResourceEncryptionKey};
use crate::options::CreateOrUpdateDataSourceConnectionOptions;
use crate::polymorphic::{impl_variant, polymorphic_family, ODATA_TYPE};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

azure_sdk_core::expandable_enum! {
    /// The kind of store a data source connects to.
    pub enum SearchIndexerDataSourceType {
        /// Azure SQL Database.
        AzureSql => "azuresql",
        /// Azure Cosmos DB.
        CosmosDb => "cosmosdb",
        /// Azure Blob Storage.
        AzureBlob => "azureblob",
        /// Azure Table Storage.
        AzureTable => "azuretable",
        /// Azure Database for MySQL.
        MySql => "mysql",
        /// Azure Data Lake Storage Gen2.
        AdlsGen2 => "adlsgen2",
    }
}

/// A connection to the store an indexer reads from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndexerDataSourceConnection {
    /// Data source name.
    pub name: String,

    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Store type.
    #[serde(rename = "type")]
    pub data_source_type: SearchIndexerDataSourceType,

    /// Connection credentials. The service never returns the connection string.
    pub credentials: DataSourceCredentials,

    /// Container, table, collection or view to read.
    pub container: SearchIndexerDataContainer,

    /// How changed rows are detected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_change_detection_policy: Option<DataChangeDetectionPolicy>,

    /// How deleted rows are detected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_deletion_detection_policy: Option<DataDeletionDetectionPolicy>,

    /// Customer-managed encryption key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<SearchResourceEncryptionKey>,

    /// Entity tag for optimistic concurrency.
    #[serde(rename = "@odata.etag", skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

impl SearchIndexerDataSourceConnection {
    /// Create a data source connection.
    pub fn new(
        name: impl Into<String>,
        data_source_type: SearchIndexerDataSourceType,
        connection_string: impl Into<String>,
        container_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            data_source_type,
            credentials: DataSourceCredentials {
                connection_string: Some(connection_string.into()),
            },
            container: SearchIndexerDataContainer::new(container_name),
            data_change_detection_policy: None,
            data_deletion_detection_policy: None,
            encryption_key: None,
            etag: None,
        }
    }

    /// The connection string, if set locally. Always `None` for definitions read from the service.
    pub fn connection_string(&self) -> Option<&str> {
        self.credentials.connection_string.as_deref()
    }
}

/// Credentials of a data source connection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceCredentials {
    /// The connection string. Use `<unchanged>` to keep the stored value on update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<String>,
}

/// The entity within a data source to index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndexerDataContainer {
    /// Table, view, collection or blob container name.
    pub name: String,

    /// Optional query, e.g. a blob virtual directory prefix or Cosmos DB SQL query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl SearchIndexerDataContainer {
    /// Create a container reference without a query.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            query: None,
        }
    }
}

polymorphic_family! {
    /// How an indexer detects changed rows.
    pub enum DataChangeDetectionPolicy tagged ODATA_TYPE => {
        /// Compare a monotonically increasing column.
        HighWaterMark(HighWaterMarkChangeDetectionPolicy),
        /// Use SQL Server integrated change tracking.
        SqlIntegratedChangeTracking(SqlIntegratedChangeTrackingPolicy),
    }
}

/// Captures changes based on the value of a high water mark column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighWaterMarkChangeDetectionPolicy {
    /// The high water mark column.
    pub high_water_mark_column_name: String,
}

impl HighWaterMarkChangeDetectionPolicy {
    /// Track changes through `column`.
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            high_water_mark_column_name: column.into(),
        }
    }
}

impl_variant!(
    HighWaterMarkChangeDetectionPolicy => ["#Microsoft.Azure.Search.HighWaterMarkChangeDetectionPolicy"]
);

/// Captures changes using Azure SQL Database's integrated change tracking.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SqlIntegratedChangeTrackingPolicy {}

impl_variant!(
    SqlIntegratedChangeTrackingPolicy => ["#Microsoft.Azure.Search.SqlIntegratedChangeTrackingPolicy"]
);

polymorphic_family! {
    /// How an indexer detects deleted rows.
    pub enum DataDeletionDetectionPolicy tagged ODATA_TYPE => {
        /// A soft-delete marker column.
        SoftDeleteColumn(SoftDeleteColumnDeletionDetectionPolicy),
    }
}

/// Detects deletions from a soft-delete marker column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftDeleteColumnDeletionDetectionPolicy {
    /// The soft-delete column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soft_delete_column_name: Option<String>,

    /// The value marking a row as deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soft_delete_marker_value: Option<String>,
}

impl SoftDeleteColumnDeletionDetectionPolicy {
    /// Treat rows whose `column` equals `marker` as deleted.
    pub fn new(column: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            soft_delete_column_name: Some(column.into()),
            soft_delete_marker_value: Some(marker.into()),
        }
    }
}

impl_variant!(
    SoftDeleteColumnDeletionDetectionPolicy => ["#Microsoft.Azure.Search.SoftDeleteColumnDeletionDetectionPolicy"]
);

// ---------------------------------------------------------------------------
// API functions
// ---------------------------------------------------------------------------

/// Create a new data source connection.
#[tracing::instrument(
    name = "search::data_sources::create",
    skip(client, data_source),
    fields(data_source = %data_source.name, kind = %data_source.data_source_type)
)]
pub async fn create(
    client: &AzureClient,
    data_source: &SearchIndexerDataSourceConnection,
) -> AzureResult<SearchIndexerDataSourceConnection> {
    tracing::debug!("creating data source connection");

    let path = with_query("/datasources", &[]);
    let response = client.post(&path, data_source).await?;
    let created: SearchIndexerDataSourceConnection = response.json().await?;

    tracing::debug!(etag = ?created.etag, "data source connection created");
    Ok(created)
}

/// Create a data source connection, or update it if it exists.
#[tracing::instrument(
    name = "search::data_sources::create_or_update",
    skip(client, options),
    fields(data_source = %options.data_source.name)
)]
pub async fn create_or_update(
    client: &AzureClient,
    options: &CreateOrUpdateDataSourceConnectionOptions,
) -> AzureResult<SearchIndexerDataSourceConnection> {
    tracing::debug!(
        only_if_unchanged = options.only_if_unchanged,
        "creating or updating data source connection"
    );

    let path = with_query(
        &resource_path("datasources", &options.data_source.name),
        &options.query(),
    );
    let response = client
        .put(&path, &options.data_source, &options.conditions())
        .await?;
    let stored: SearchIndexerDataSourceConnection = response.json().await?;

    tracing::debug!(etag = ?stored.etag, "data source connection stored");
    Ok(stored)
}

/// Retrieve a data source connection by name.
#[tracing::instrument(name = "search::data_sources::get", skip(client), fields(data_source = %name))]
pub async fn get(client: &AzureClient, name: &str) -> AzureResult<SearchIndexerDataSourceConnection> {
    tracing::debug!("getting data source connection");

    let path = with_query(&resource_path("datasources", name), &[]);
    let response = client.get(&path).await?;
    let data_source: SearchIndexerDataSourceConnection = response.json().await?;

    tracing::debug!("data source connection retrieved");
    Ok(data_source)
}

/// List all data source connections.
#[tracing::instrument(name = "search::data_sources::list", skip(client))]
pub async fn list(client: &AzureClient) -> AzureResult<Vec<SearchIndexerDataSourceConnection>> {
    tracing::debug!("listing data source connections");

    let path = with_query("/datasources", &[]);
    let response = client.get(&path).await?;
    let list: ListResponse<SearchIndexerDataSourceConnection> = response.json().await?;

    tracing::debug!(count = list.value.len(), "data source connections listed");
    Ok(list.value)
}

/// Delete a data source connection.
#[tracing::instrument(name = "search::data_sources::delete", skip(client), fields(data_source = %name))]
pub async fn delete(client: &AzureClient, name: &str) -> AzureResult<()> {
    tracing::debug!("deleting data source connection");

    let path = with_query(&resource_path("datasources", name), &[]);
    client.delete(&path, &MatchConditions::none()).await?;

    tracing::debug!("data source connection deleted");
    Ok(())
}

/// Delete a data source connection only if its server copy still carries `data_source.etag`.
#[tracing::instrument(
    name = "search::data_sources::delete_if_unchanged",
    skip(client, data_source),
    fields(data_source = %data_source.name)
)]
pub async fn delete_if_unchanged(
    client: &AzureClient,
    data_source: &SearchIndexerDataSourceConnection,
) -> AzureResult<()> {
    tracing::debug!("deleting data source connection if unchanged");

    let path = with_query(&resource_path("datasources", &data_source.name), &[]);
    let conditions = MatchConditions::only_if_unchanged(true, data_source.etag.as_deref());
    client.delete(&path, &conditions).await?;

    tracing::debug!("data source connection deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polymorphic::assert_round_trips;
    use azure_sdk_core::test_support::setup_mock_client;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_every_detection_policy_round_trips() {
        assert_round_trips!(DataChangeDetectionPolicy, [
            serde_json::json!({
                "@odata.type": "#Microsoft.Azure.Search.HighWaterMarkChangeDetectionPolicy",
                "highWaterMarkColumnName": "_ts"
            }),
            serde_json::json!({"@odata.type": "#Microsoft.Azure.Search.SqlIntegratedChangeTrackingPolicy"}),
        ]);
        assert_round_trips!(DataDeletionDetectionPolicy, [
            serde_json::json!({
                "@odata.type": "#Microsoft.Azure.Search.SoftDeleteColumnDeletionDetectionPolicy",
                "softDeleteColumnName": "isDeleted",
                "softDeleteMarkerValue": "true"
            }),
        ]);
    }

    fn blob_source() -> SearchIndexerDataSourceConnection {
        SearchIndexerDataSourceConnection::new(
            "docs-ds",
            SearchIndexerDataSourceType::AzureBlob,
            "DefaultEndpointsProtocol=https;AccountName=acct",
            "documents",
        )
    }

    #[test]
    fn test_data_source_serialization() {
        let mut ds = blob_source();
        ds.container.query = Some("reports/".into());
        ds.data_deletion_detection_policy =
            Some(SoftDeleteColumnDeletionDetectionPolicy::new("IsDeleted", "true").into());

        let json = serde_json::to_value(&ds).unwrap();
        assert_eq!(json["type"], "azureblob");
        assert_eq!(
            json["credentials"]["connectionString"],
            "DefaultEndpointsProtocol=https;AccountName=acct"
        );
        assert_eq!(json["container"], serde_json::json!({"name": "documents", "query": "reports/"}));
        assert_eq!(
            json["dataDeletionDetectionPolicy"]["@odata.type"],
            "#Microsoft.Azure.Search.SoftDeleteColumnDeletionDetectionPolicy"
        );
        assert_eq!(json["dataDeletionDetectionPolicy"]["softDeleteColumnName"], "IsDeleted");
        assert!(json.get("dataChangeDetectionPolicy").is_none());
    }

    #[test]
    fn test_change_detection_policies_round_trip() {
        let high_water = serde_json::json!({
            "@odata.type": "#Microsoft.Azure.Search.HighWaterMarkChangeDetectionPolicy",
            "highWaterMarkColumnName": "_ts"
        });
        let sql = serde_json::json!({
            "@odata.type": "#Microsoft.Azure.Search.SqlIntegratedChangeTrackingPolicy"
        });

        let parsed: DataChangeDetectionPolicy = serde_json::from_value(high_water.clone()).unwrap();
        assert!(matches!(parsed, DataChangeDetectionPolicy::HighWaterMark(ref p) if p.high_water_mark_column_name == "_ts"));
        assert_eq!(serde_json::to_value(&parsed).unwrap(), high_water);

        let parsed: DataChangeDetectionPolicy = serde_json::from_value(sql.clone()).unwrap();
        assert!(matches!(parsed, DataChangeDetectionPolicy::SqlIntegratedChangeTracking(_)));
        assert_eq!(serde_json::to_value(&parsed).unwrap(), sql);
    }

    #[test]
    fn test_service_response_has_no_connection_string() {
        let json = serde_json::json!({
            "name": "docs-ds",
            "type": "azureblob",
            "credentials": {"connectionString": null},
            "container": {"name": "documents"},
            "@odata.etag": "\"0x1\""
        });
        let ds: SearchIndexerDataSourceConnection = serde_json::from_value(json).unwrap();
        assert_eq!(ds.connection_string(), None);
        assert_eq!(ds.etag.as_deref(), Some("\"0x1\""));
    }

    #[tokio::test]
    async fn test_create_or_update_with_options() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/datasources('docs-ds')"))
            .and(query_param("ignoreResetRequirements", "true"))
            .and(header("If-Match", "\"0x1\""))
            .and(body_partial_json(serde_json::json!({"name": "docs-ds", "type": "azureblob"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "docs-ds",
                "type": "azureblob",
                "credentials": {"connectionString": null},
                "container": {"name": "documents"},
                "@odata.etag": "\"0x2\""
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let mut ds = blob_source();
        ds.etag = Some("\"0x1\"".into());
        let options = CreateOrUpdateDataSourceConnectionOptions::new(ds)
            .unwrap()
            .only_if_unchanged(true)
            .ignore_reset_requirements(true);

        let stored = create_or_update(&client, &options).await.expect("should succeed");
        assert_eq!(stored.etag.as_deref(), Some("\"0x2\""));
    }

    #[tokio::test]
    async fn test_create_get_list_delete() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "name": "docs-ds",
            "type": "azureblob",
            "credentials": {"connectionString": null},
            "container": {"name": "documents"}
        });

        Mock::given(method("POST"))
            .and(path("/datasources"))
            .respond_with(ResponseTemplate::new(201).set_body_json(&body))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/datasources('docs-ds')"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/datasources"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"value": [body.clone()]})),
            )
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/datasources('docs-ds')"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;

        let created = create(&client, &blob_source()).await.expect("create");
        assert_eq!(created.container.name, "documents");

        let fetched = get(&client, "docs-ds").await.expect("get");
        assert_eq!(fetched.data_source_type, SearchIndexerDataSourceType::AzureBlob);

        let all = list(&client).await.expect("list");
        assert_eq!(all.len(), 1);

        delete(&client, "docs-ds").await.expect("delete");
    }
}
