//! Shared types for the Key Vault certificates API.

use azure_sdk_core::client::AzureClient;
use azure_sdk_core::error::{AzureError, AzureResult};
use azure_sdk_core::models::encode_path_segment;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

/// API version query parameter for all Key Vault requests.
pub(crate) const API_VERSION: &str = "api-version=7.5";

/// Token scope for Microsoft Entra ID authentication against Key Vault.
pub const KEYVAULT_SCOPE: &str = "https://vault.azure.net/.default";

/// Append the API version (and any extra `key=value` pairs) to a path.
pub(crate) fn with_query(path: &str, extra: &[(&str, String)]) -> String {
    let mut query = API_VERSION.to_string();
    for (key, value) in extra {
        let encoded: String = url::form_urlencoded::byte_serialize(value.as_bytes()).collect();
        query.push_str(&format!("&{key}={encoded}"));
    }
    format!("{path}?{query}")
}

/// Reject empty object names before any request is sent.
pub(crate) fn require_name<'a>(kind: &str, name: &'a str) -> AzureResult<&'a str> {
    if name.trim().is_empty() {
        return Err(AzureError::invalid_argument(format!("{kind} name is required")));
    }
    Ok(name)
}

/// A required name, percent-encoded for use as one path segment.
pub(crate) fn name_segment(kind: &str, name: &str) -> AzureResult<String> {
    require_name(kind, name).map(encode_path_segment)
}

/// Whether a failed request reported a missing object: a 404, or a Key
/// Vault error code such as `CertificateNotFound`.
pub(crate) fn is_not_found(error: &AzureError) -> bool {
    error.status() == Some(404)
        || matches!(error, AzureError::Api { code, .. } if code.ends_with("NotFound"))
}

/// The path segment at `index` of a Key Vault identifier, after the host.
///
/// For `https://v.vault.azure.net/certificates/web/abc`, index 0 is
/// `certificates`, 1 is `web` and 2 is `abc`.
pub(crate) fn id_segment(id: &str, index: usize) -> Option<&str> {
    id.splitn(4, '/')
        .nth(3)?
        .split('/')
        .filter(|s| !s.is_empty())
        .nth(index)
}

/// One page of a list operation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page.
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,

    /// Absolute URL of the next page, if any.
    #[serde(default)]
    pub next_link: Option<String>,
}

impl<T> Page<T> {
    /// Returns `true` if another page is available.
    pub fn has_next(&self) -> bool {
        self.next_link.as_deref().is_some_and(|l| !l.is_empty())
    }
}

/// Fetch the page after `page`, or `None` on the last page.
#[tracing::instrument(name = "keyvault::pages::next", skip(client, page))]
pub async fn next_page<T: DeserializeOwned>(
    client: &AzureClient,
    page: &Page<T>,
) -> AzureResult<Option<Page<T>>> {
    let Some(link) = page.next_link.as_deref().filter(|l| !l.is_empty()) else {
        return Ok(None);
    };

    let path = AzureClient::relative_path(link)?;
    tracing::debug!(path = %path, "fetching next page");

    let response = client.get(&path).await?;
    let next: Page<T> = response.json().await?;

    tracing::debug!(count = next.value.len(), "page fetched");
    Ok(Some(next))
}

/// A parsed Key Vault object identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyVaultId {
    /// The vault URL, e.g. `https://my-vault.vault.azure.net`.
    pub vault_url: String,
    /// The collection, e.g. `certificates` or `deletedcertificates`.
    pub collection: String,
    /// The object name.
    pub name: String,
    /// The object version, if the identifier is versioned.
    pub version: Option<String>,
}

impl KeyVaultId {
    /// Parse an identifier such as `https://v.vault.azure.net/certificates/web/abc123`.
    pub fn parse(id: &str) -> AzureResult<Self> {
        let url = Url::parse(id)
            .map_err(|e| AzureError::invalid_endpoint_with_source("invalid Key Vault identifier", e))?;

        let mut segments = url
            .path_segments()
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty());

        let (Some(collection), Some(name)) = (segments.next(), segments.next()) else {
            return Err(AzureError::invalid_argument(format!(
                "'{id}' is not a Key Vault object identifier"
            )));
        };
        let version = segments.next().map(str::to_string);

        Ok(Self {
            vault_url: url.origin().ascii_serialization(),
            collection: collection.to_string(),
            name: name.to_string(),
            version,
        })
    }
}

azure_sdk_core::expandable_enum! {
    /// The deletion recovery level of a vault object.
    pub enum DeletionRecoveryLevel {
        /// Deletion is permanent.
        Purgeable => "Purgeable",
        /// Recoverable; purge is allowed.
        RecoverablePurgeable => "Recoverable+Purgeable",
        /// Recoverable; purge is not allowed.
        Recoverable => "Recoverable",
        /// Recoverable; the subscription cannot be cancelled while objects are pending purge.
        RecoverableProtectedSubscription => "Recoverable+ProtectedSubscription",
        /// Customized retention; purge is allowed.
        CustomizedRecoverablePurgeable => "CustomizedRecoverable+Purgeable",
        /// Customized retention; purge is not allowed.
        CustomizedRecoverable => "CustomizedRecoverable",
        /// Customized retention with subscription protection.
        CustomizedRecoverableProtectedSubscription => "CustomizedRecoverable+ProtectedSubscription",
    }
}

/// Management attributes of a certificate. Times are unix seconds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateAttributes {
    /// Whether the certificate is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Not before.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<u64>,

    /// Expiry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,

    /// Creation time. Read-only.
    #[serde(skip_serializing)]
    pub created: Option<u64>,

    /// Last update time. Read-only.
    #[serde(skip_serializing)]
    pub updated: Option<u64>,

    /// Recovery level. Read-only.
    #[serde(skip_serializing)]
    pub recovery_level: Option<DeletionRecoveryLevel>,

    /// Soft-delete retention in days. Read-only.
    #[serde(skip_serializing)]
    pub recoverable_days: Option<u32>,
}
