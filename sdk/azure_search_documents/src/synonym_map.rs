//! Synonym map management.
//!
//! A synonym map holds rules in Apache Solr format and is attached to
//! searchable fields by name.

use azure_sdk_core::client::AzureClient;
use azure_sdk_core::error::AzureResult;
use azure_sdk_core::models::MatchConditions;
use serde::{Deserialize, Serialize};

use crate::models::{resource_path, with_query, ListResponse, SearchResourceEncryptionKey};

/// The only synonym format the service accepts.
pub const SOLR_FORMAT: &str = "solr";

/// A named set of synonym rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynonymMap {
    /// Synonym map name.
    pub name: String,

    /// Rule format; always `solr`.
    pub format: String,

    /// Newline-separated rules, e.g. `USA, United States\nWA => Washington`.
    pub synonyms: String,

    /// Customer-managed encryption key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<SearchResourceEncryptionKey>,

    /// Entity tag for optimistic concurrency.
    #[serde(rename = "@odata.etag", skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

impl SynonymMap {
    /// Create a synonym map from newline-separated rules.
    pub fn new(name: impl Into<String>, synonyms: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            format: SOLR_FORMAT.to_string(),
            synonyms: synonyms.into(),
            encryption_key: None,
            etag: None,
        }
    }

    /// Create a synonym map from individual rules.
    pub fn from_rules<I, S>(name: impl Into<String>, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = rules
            .into_iter()
            .map(|r| r.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        Self::new(name, joined)
    }

    /// Iterate over the individual rules.
    pub fn rules(&self) -> impl Iterator<Item = &str> {
        self.synonyms.lines().filter(|l| !l.trim().is_empty())
    }
}

/// Create a new synonym map.
#[tracing::instrument(
    name = "search::synonym_maps::create",
    skip(client, synonym_map),
    fields(synonym_map = %synonym_map.name)
)]
pub async fn create(client: &AzureClient, synonym_map: &SynonymMap) -> AzureResult<SynonymMap> {
    tracing::debug!("creating synonym map");

    let path = with_query("/synonymmaps", &[]);
    let response = client.post(&path, synonym_map).await?;
    let created: SynonymMap = response.json().await?;

    tracing::debug!(etag = ?created.etag, "synonym map created");
    Ok(created)
}

/// Create a synonym map, or replace it if it exists.
///
/// With `only_if_unchanged`, the map's ETag is sent as `If-Match`.
#[tracing::instrument(
    name = "search::synonym_maps::create_or_update",
    skip(client, synonym_map),
    fields(synonym_map = %synonym_map.name)
)]
pub async fn create_or_update(
    client: &AzureClient,
    synonym_map: &SynonymMap,
    only_if_unchanged: bool,
) -> AzureResult<SynonymMap> {
    tracing::debug!("creating or updating synonym map");

    let path = with_query(&resource_path("synonymmaps", &synonym_map.name), &[]);
    let conditions =
        MatchConditions::only_if_unchanged(only_if_unchanged, synonym_map.etag.as_deref());
    let response = client.put(&path, synonym_map, &conditions).await?;
    let stored: SynonymMap = response.json().await?;

    tracing::debug!(etag = ?stored.etag, "synonym map stored");
    Ok(stored)
}

/// Retrieve a synonym map by name.
#[tracing::instrument(name = "search::synonym_maps::get", skip(client), fields(synonym_map = %name))]
pub async fn get(client: &AzureClient, name: &str) -> AzureResult<SynonymMap> {
    tracing::debug!("getting synonym map");

    let path = with_query(&resource_path("synonymmaps", name), &[]);
    let response = client.get(&path).await?;
    let synonym_map: SynonymMap = response.json().await?;

    tracing::debug!("synonym map retrieved");
    Ok(synonym_map)
}

/// List all synonym maps.
#[tracing::instrument(name = "search::synonym_maps::list", skip(client))]
pub async fn list(client: &AzureClient) -> AzureResult<Vec<SynonymMap>> {
    tracing::debug!("listing synonym maps");

    let path = with_query("/synonymmaps", &[]);
    let response = client.get(&path).await?;
    let list: ListResponse<SynonymMap> = response.json().await?;

    tracing::debug!(count = list.value.len(), "synonym maps listed");
    Ok(list.value)
}

/// Delete a synonym map.
#[tracing::instrument(name = "search::synonym_maps::delete", skip(client), fields(synonym_map = %name))]
pub async fn delete(client: &AzureClient, name: &str) -> AzureResult<()> {
    tracing::debug!("deleting synonym map");

    let path = with_query(&resource_path("synonymmaps", name), &[]);
    client.delete(&path, &MatchConditions::none()).await?;

    tracing::debug!("synonym map deleted");
    Ok(())
}

/// Delete a synonym map only if its server copy still carries `synonym_map.etag`.
#[tracing::instrument(
    name = "search::synonym_maps::delete_if_unchanged",
    skip(client, synonym_map),
    fields(synonym_map = %synonym_map.name)
)]
pub async fn delete_if_unchanged(client: &AzureClient, synonym_map: &SynonymMap) -> AzureResult<()> {
    tracing::debug!("deleting synonym map if unchanged");

    let path = with_query(&resource_path("synonymmaps", &synonym_map.name), &[]);
    let conditions = MatchConditions::only_if_unchanged(true, synonym_map.etag.as_deref());
    client.delete(&path, &conditions).await?;

    tracing::debug!("synonym map deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use azure_sdk_core::test_support::setup_mock_client;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_synonym_map_from_rules() {
        let map = SynonymMap::from_rules("geo", ["USA, United States", "WA => Washington"]);
        assert_eq!(map.format, "solr");
        assert_eq!(map.synonyms, "USA, United States\nWA => Washington");
        assert_eq!(map.rules().count(), 2);
    }

    #[test]
    fn test_synonym_map_serialization() {
        let json = serde_json::to_value(SynonymMap::new("geo", "a, b")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "geo", "format": "solr", "synonyms": "a, b"})
        );
    }

    #[tokio::test]
    async fn test_create_synonym_map() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/synonymmaps"))
            .and(body_json(serde_json::json!({
                "name": "geo", "format": "solr", "synonyms": "USA, United States"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "name": "geo", "format": "solr", "synonyms": "USA, United States",
                "@odata.etag": "\"0x1\""
            })))
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let created = create(&client, &SynonymMap::new("geo", "USA, United States"))
            .await
            .expect("should succeed");
        assert_eq!(created.etag.as_deref(), Some("\"0x1\""));
    }

    #[tokio::test]
    async fn test_create_or_update_and_delete_with_etag() {
        let server = MockServer::start().await;

        let stored = serde_json::json!({
            "name": "geo", "format": "solr", "synonyms": "a, b", "@odata.etag": "\"0x2\""
        });

        Mock::given(method("PUT"))
            .and(path("/synonymmaps('geo')"))
            .and(header("If-Match", "\"0x1\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(&stored))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/synonymmaps('geo')"))
            .and(header("If-Match", "\"0x2\""))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let mut map = SynonymMap::new("geo", "a, b");
        map.etag = Some("\"0x1\"".into());

        let updated = create_or_update(&client, &map, true).await.expect("should succeed");
        delete_if_unchanged(&client, &updated).await.expect("should succeed");
    }

    #[tokio::test]
    async fn test_get_and_list_synonym_maps() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/synonymmaps('geo')"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "geo", "format": "solr", "synonyms": "a, b\nc => d"
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/synonymmaps"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "value": [{"name": "geo", "format": "solr", "synonyms": "a, b"}]
            })))
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let map = get(&client, "geo").await.expect("should succeed");
        assert_eq!(map.rules().collect::<Vec<_>>(), vec!["a, b", "c => d"]);

        let maps = list(&client).await.expect("should succeed");
        assert_eq!(maps.len(), 1);
    }
}
