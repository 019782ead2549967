//! Shared types for the Azure Cognitive Search service-configuration API.
//!
//! This module contains constants and types used by several resource modules.

use azure_sdk_core::models::encode_path_segment;
use serde::{Deserialize, Serialize};

/// API version query parameter for all Search service requests.
pub(crate) const API_VERSION: &str = "api-version=2024-07-01";

/// Token scope for Microsoft Entra ID authentication against Search.
pub const SEARCH_SCOPE: &str = "https://search.azure.com/.default";

/// Build the path of a named resource, e.g. `/indexes('hotels')`.
///
/// Single quotes inside the name are doubled, as OData key literals require,
/// and path delimiters are percent-encoded.
pub(crate) fn resource_path(collection: &str, name: &str) -> String {
    format!("/{collection}('{}')", encode_path_segment(&name.replace('\'', "''")))
}

/// Append the API version (and any extra `key=value` pairs) to a path.
pub(crate) fn with_query(path: &str, extra: &[(&str, String)]) -> String {
    let mut query = API_VERSION.to_string();
    for (key, value) in extra {
        let encoded: String = url::form_urlencoded::byte_serialize(value.as_bytes()).collect();
        query.push_str(&format!("&{key}={encoded}"));
    }
    format!("{path}?{query}")
}

/// The `{"value": [...]}` envelope returned by list operations.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    /// The listed resources.
    pub value: Vec<T>,
}

/// A customer-managed key in Azure Key Vault used to encrypt data at rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResourceEncryptionKey {
    /// The name of the Key Vault key.
    pub key_vault_key_name: String,

    /// The version of the Key Vault key.
    pub key_vault_key_version: String,

    /// The URI of the Key Vault, e.g. `https://my-vault.vault.azure.net`.
    #[serde(rename = "keyVaultUri")]
    pub vault_uri: String,

    /// Optional Entra ID application credentials used to reach the vault.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_credentials: Option<AzureActiveDirectoryApplicationCredentials>,
}

impl SearchResourceEncryptionKey {
    /// Create an encryption key reference.
    pub fn new(
        key_name: impl Into<String>,
        key_version: impl Into<String>,
        vault_uri: impl Into<String>,
    ) -> Self {
        Self {
            key_vault_key_name: key_name.into(),
            key_vault_key_version: key_version.into(),
            vault_uri: vault_uri.into(),
            access_credentials: None,
        }
    }
}

/// Credentials of a registered application used to access a Key Vault key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureActiveDirectoryApplicationCredentials {
    /// The application (client) ID.
    pub application_id: String,

    /// The application secret. Never returned by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_secret: Option<String>,
}

/// Service-level resource counters and limits.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchServiceStatistics {
    /// Usage and quota for each resource kind.
    pub counters: SearchServiceCounters,

    /// Service-wide limits.
    pub limits: SearchServiceLimits,
}

/// Usage and quota counters of a search service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchServiceCounters {
    /// Document count.
    #[serde(rename = "documentCount")]
    pub document_counter: ResourceCounter,
    /// Index count.
    #[serde(rename = "indexesCount")]
    pub index_counter: ResourceCounter,
    /// Indexer count.
    #[serde(rename = "indexersCount")]
    pub indexer_counter: ResourceCounter,
    /// Data source count.
    #[serde(rename = "dataSourcesCount")]
    pub data_source_counter: ResourceCounter,
    /// Storage used, in bytes.
    #[serde(rename = "storageSize")]
    pub storage_size_counter: ResourceCounter,
    /// Synonym map count.
    #[serde(rename = "synonymMaps")]
    pub synonym_map_counter: ResourceCounter,
    /// Skillset count.
    #[serde(rename = "skillsetCount")]
    pub skillset_counter: Option<ResourceCounter>,
}

/// A usage/quota pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ResourceCounter {
    /// Current usage.
    pub usage: u64,
    /// Quota, if the resource is limited.
    pub quota: Option<u64>,
}

/// Service-wide limits.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchServiceLimits {
    /// Maximum depth of nested sub-fields in an index.
    pub max_field_nesting_depth_per_index: Option<u32>,
    /// Maximum number of fields per index.
    pub max_fields_per_index: Option<u32>,
    /// Maximum number of complex-collection fields per index.
    pub max_complex_collection_fields_per_index: Option<u32>,
    /// Maximum number of elements across complex collections per document.
    pub max_complex_objects_in_collections_per_document: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_format() {
        assert_eq!(API_VERSION, "api-version=2024-07-01");
    }

    #[test]
    fn test_resource_path_quotes_name() {
        assert_eq!(resource_path("indexes", "hotels"), "/indexes('hotels')");
        assert_eq!(resource_path("indexes", "it's"), "/indexes('it''s')");
    }

    #[test]
    fn test_resource_path_encodes_delimiters() {
        assert_eq!(resource_path("indexes", "a/b"), "/indexes('a%2Fb')");
        assert_eq!(
            resource_path("datasources", "x')?api-version=1#"),
            "/datasources('x'')%3Fapi-version=1%23')"
        );
    }

    #[test]
    fn test_with_query_encodes_values() {
        assert_eq!(
            with_query("/indexes", &[("$select", "name,fields".into())]),
            "/indexes?api-version=2024-07-01&$select=name%2Cfields"
        );
    }

    #[test]
    fn test_encryption_key_serialization() {
        let key = SearchResourceEncryptionKey::new("key", "v1", "https://vault.vault.azure.net");
        let json = serde_json::to_value(&key).unwrap();
        assert_eq!(json["keyVaultKeyName"], "key");
        assert_eq!(json["keyVaultKeyVersion"], "v1");
        assert_eq!(json["keyVaultUri"], "https://vault.vault.azure.net");
        assert!(json.get("accessCredentials").is_none());
    }

    #[test]
    fn test_service_statistics_deserialization() {
        let json = serde_json::json!({
            "counters": {
                "documentCount": {"usage": 10, "quota": null},
                "indexesCount": {"usage": 2, "quota": 15},
                "indexersCount": {"usage": 1, "quota": 15},
                "dataSourcesCount": {"usage": 1, "quota": 15},
                "storageSize": {"usage": 1024, "quota": 2147483648u64},
                "synonymMaps": {"usage": 0, "quota": 3}
            },
            "limits": {"maxFieldsPerIndex": 1000}
        });
        let stats: SearchServiceStatistics = serde_json::from_value(json).unwrap();
        assert_eq!(stats.counters.index_counter.quota, Some(15));
        assert_eq!(stats.counters.document_counter.quota, None);
        assert!(stats.counters.skillset_counter.is_none());
        assert_eq!(stats.limits.max_fields_per_index, Some(1000));
    }
}
