//! Certificates.
//!
//! Creating a certificate is asynchronous on the service side:
//! [`begin_create`] returns a [`CertificateOperation`] which can be polled
//! with [`operation::poll_until_complete`](crate::operation::poll_until_complete).
//! Deletion and recovery are likewise eventually consistent; use
//! [`poll_until_deleted`] and [`poll_until_recovered`] to wait for them.

use std::collections::HashMap;
use std::ops::Deref;
use std::time::Duration;

use azure_sdk_core::client::AzureClient;
use azure_sdk_core::error::{AzureError, AzureResult};
use azure_sdk_core::models::{encode_path_segment, MatchConditions};
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::models::{id_segment, is_not_found, name_segment, with_query, CertificateAttributes, Page};
use crate::operation::CertificateOperation;
use crate::policy::{CertificateContentType, CertificatePolicy};

pub use crate::models::next_page;

/// A certificate and its management metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyVaultCertificate {
    /// Versioned certificate identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Identifier of the backing key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,

    /// Identifier of the backing secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,

    /// SHA-1 thumbprint, base64url.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x5t: Option<String>,

    /// DER-encoded X.509 certificate, base64url.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cer: Option<String>,

    /// Management attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<CertificateAttributes>,

    /// Application-defined tags.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

impl KeyVaultCertificate {
    /// Certificate name, taken from the identifier.
    pub fn name(&self) -> Option<&str> {
        self.id.as_deref().and_then(|id| id_segment(id, 1))
    }

    /// Certificate version, taken from the identifier.
    pub fn version(&self) -> Option<&str> {
        self.id.as_deref().and_then(|id| id_segment(id, 2))
    }

    /// The DER bytes of the certificate.
    ///
    /// # Errors
    ///
    /// Returns [`AzureError::InvalidArgument`] if `cer` is not valid base64url.
    pub fn cer_bytes(&self) -> AzureResult<Option<Vec<u8>>> {
        self.cer
            .as_deref()
            .map(|cer| {
                URL_SAFE_NO_PAD
                    .decode(cer.trim_end_matches('='))
                    .map_err(|e| AzureError::invalid_argument(format!("invalid certificate encoding: {e}")))
            })
            .transpose()
    }
}

/// A certificate together with its policy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyVaultCertificateWithPolicy {
    /// The certificate.
    #[serde(flatten)]
    pub certificate: KeyVaultCertificate,

    /// The management policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<CertificatePolicy>,
}

impl Deref for KeyVaultCertificateWithPolicy {
    type Target = KeyVaultCertificate;

    fn deref(&self) -> &Self::Target {
        &self.certificate
    }
}

/// Certificate metadata returned by list operations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CertificateProperties {
    /// Certificate identifier.
    pub id: String,

    /// SHA-1 thumbprint, base64url.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x5t: Option<String>,

    /// Management attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<CertificateAttributes>,

    /// Application-defined tags.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

impl CertificateProperties {
    /// Certificate name, taken from the identifier.
    pub fn name(&self) -> Option<&str> {
        id_segment(&self.id, 1)
    }

    /// Certificate version, if the identifier is versioned.
    pub fn version(&self) -> Option<&str> {
        id_segment(&self.id, 2)
    }
}

/// A soft-deleted certificate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedCertificate {
    /// The certificate as it was when deleted.
    #[serde(flatten)]
    pub certificate: KeyVaultCertificateWithPolicy,

    /// Identifier used to recover the certificate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_id: Option<String>,

    /// When the certificate will be purged, unix seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_purge_date: Option<u64>,

    /// When the certificate was deleted, unix seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_date: Option<u64>,
}

impl Deref for DeletedCertificate {
    type Target = KeyVaultCertificate;

    fn deref(&self) -> &Self::Target {
        &self.certificate.certificate
    }
}

/// Body of [`begin_create`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CreateCertificateOptions {
    /// Management policy; defaults to a self-signed policy.
    pub policy: CertificatePolicy,
    /// Initial attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<CertificateAttributes>,
    /// Tags.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

impl CreateCertificateOptions {
    /// Options creating a certificate with `policy`.
    pub fn new(policy: CertificatePolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }
}

/// Body of [`update_properties`]. Unset fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UpdateCertificatePropertiesOptions {
    /// New attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<CertificateAttributes>,
    /// New tags; replaces all existing tags when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

/// Body of [`import`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportCertificateOptions {
    /// PKCS #12 bytes (standard base64) or PEM text.
    pub value: String,
    /// Password protecting a PKCS #12 file.
    #[serde(rename = "pwd", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Policy to store with the certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<CertificatePolicy>,
    /// Initial attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<CertificateAttributes>,
    /// Tags.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

impl ImportCertificateOptions {
    /// Import a PKCS #12 file.
    pub fn pkcs12(bytes: &[u8], password: Option<String>) -> Self {
        let mut policy = CertificatePolicy::default();
        policy.secret_properties = Some(crate::policy::SecretProperties {
            content_type: Some(CertificateContentType::Pkcs12),
        });
        Self {
            value: STANDARD.encode(bytes),
            password,
            policy: Some(policy),
            attributes: None,
            tags: HashMap::new(),
        }
    }

    /// Import a PEM bundle holding the certificate and its private key.
    pub fn pem(pem: impl Into<String>) -> Self {
        let mut policy = CertificatePolicy::default();
        policy.secret_properties = Some(crate::policy::SecretProperties {
            content_type: Some(CertificateContentType::Pem),
        });
        Self {
            value: pem.into(),
            password: None,
            policy: Some(policy),
            attributes: None,
            tags: HashMap::new(),
        }
    }
}

/// Body of [`merge`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MergeCertificateOptions {
    /// Signed certificate chain, leaf first, each entry DER in standard base64.
    pub x5c: Vec<String>,
    /// Attributes to set on the merged certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<CertificateAttributes>,
    /// Tags.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub tags: HashMap<String, String>,
}

impl MergeCertificateOptions {
    /// Merge the given DER certificates.
    pub fn from_der<I, B>(chain: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        Self {
            x5c: chain.into_iter().map(|c| STANDARD.encode(c)).collect(),
            ..Default::default()
        }
    }
}

#[derive(Serialize, Deserialize)]
struct BackupBlob {
    value: String,
}

fn certificate_path(name: &str) -> AzureResult<String> {
    Ok(format!("/certificates/{}", name_segment("certificate", name)?))
}

fn deleted_path(name: &str) -> AzureResult<String> {
    Ok(format!("/deletedcertificates/{}", name_segment("certificate", name)?))
}

// ---------------------------------------------------------------------------
// Certificate operations
// ---------------------------------------------------------------------------

/// Start creating a certificate. The service answers `202 Accepted` with the
/// pending operation.
#[tracing::instrument(name = "keyvault::certificates::begin_create", skip(client, options), fields(certificate = %name))]
pub async fn begin_create(
    client: &AzureClient,
    name: &str,
    options: &CreateCertificateOptions,
) -> AzureResult<CertificateOperation> {
    tracing::debug!(issuer = ?options.policy.issuer_name(), "creating certificate");

    let path = with_query(&format!("{}/create", certificate_path(name)?), &[]);
    let response = client.post(&path, options).await?;
    let operation: CertificateOperation = response.json().await?;

    tracing::debug!(status = ?operation.status, "certificate creation started");
    Ok(operation)
}

/// Retrieve the latest version of a certificate with its policy.
#[tracing::instrument(name = "keyvault::certificates::get", skip(client), fields(certificate = %name))]
pub async fn get(client: &AzureClient, name: &str) -> AzureResult<KeyVaultCertificateWithPolicy> {
    tracing::debug!("getting certificate");

    let path = with_query(&format!("{}/", certificate_path(name)?), &[]);
    let response = client.get(&path).await?;
    let certificate: KeyVaultCertificateWithPolicy = response.json().await?;

    tracing::debug!(version = ?certificate.version(), "certificate retrieved");
    Ok(certificate)
}

/// Retrieve a specific version of a certificate.
#[tracing::instrument(name = "keyvault::certificates::get_version", skip(client), fields(certificate = %name))]
pub async fn get_version(
    client: &AzureClient,
    name: &str,
    version: &str,
) -> AzureResult<KeyVaultCertificate> {
    tracing::debug!("getting certificate version");

    let version = name_segment("certificate version", version)?;
    let path = with_query(&format!("{}/{version}", certificate_path(name)?), &[]);
    let response = client.get(&path).await?;
    let certificate: KeyVaultCertificate = response.json().await?;

    tracing::debug!("certificate version retrieved");
    Ok(certificate)
}

/// Update attributes and tags of a certificate version. `None` targets the
/// latest version.
#[tracing::instrument(
    name = "keyvault::certificates::update_properties",
    skip(client, options),
    fields(certificate = %name)
)]
pub async fn update_properties(
    client: &AzureClient,
    name: &str,
    version: Option<&str>,
    options: &UpdateCertificatePropertiesOptions,
) -> AzureResult<KeyVaultCertificate> {
    tracing::debug!(version = ?version, "updating certificate properties");

    let path = with_query(
        &format!("{}/{}", certificate_path(name)?, encode_path_segment(version.unwrap_or_default())),
        &[],
    );
    let response = client.patch(&path, options, &MatchConditions::none()).await?;
    let certificate: KeyVaultCertificate = response.json().await?;

    tracing::debug!("certificate properties updated");
    Ok(certificate)
}

/// Delete all versions of a certificate.
///
/// On a soft-delete enabled vault the certificate moves to the deleted
/// collection; [`poll_until_deleted`] waits until it is visible there.
#[tracing::instrument(name = "keyvault::certificates::begin_delete", skip(client), fields(certificate = %name))]
pub async fn begin_delete(client: &AzureClient, name: &str) -> AzureResult<DeletedCertificate> {
    tracing::debug!("deleting certificate");

    let path = with_query(&certificate_path(name)?, &[]);
    let response = client.delete(&path, &MatchConditions::none()).await?;
    let deleted: DeletedCertificate = response.json().await?;

    tracing::debug!(recovery_id = ?deleted.recovery_id, "certificate deleted");
    Ok(deleted)
}

/// Retrieve a soft-deleted certificate.
#[tracing::instrument(name = "keyvault::certificates::get_deleted", skip(client), fields(certificate = %name))]
pub async fn get_deleted(client: &AzureClient, name: &str) -> AzureResult<DeletedCertificate> {
    tracing::debug!("getting deleted certificate");

    let path = with_query(&deleted_path(name)?, &[]);
    let response = client.get(&path).await?;
    let deleted: DeletedCertificate = response.json().await?;

    tracing::debug!("deleted certificate retrieved");
    Ok(deleted)
}

/// Permanently remove a soft-deleted certificate.
#[tracing::instrument(name = "keyvault::certificates::purge_deleted", skip(client), fields(certificate = %name))]
pub async fn purge_deleted(client: &AzureClient, name: &str) -> AzureResult<()> {
    tracing::debug!("purging deleted certificate");

    let path = with_query(&deleted_path(name)?, &[]);
    client.delete(&path, &MatchConditions::none()).await?;

    tracing::debug!("certificate purged");
    Ok(())
}

/// Recover a soft-deleted certificate. [`poll_until_recovered`] waits until
/// it is readable again.
#[tracing::instrument(
    name = "keyvault::certificates::begin_recover_deleted",
    skip(client),
    fields(certificate = %name)
)]
pub async fn begin_recover_deleted(
    client: &AzureClient,
    name: &str,
) -> AzureResult<KeyVaultCertificateWithPolicy> {
    tracing::debug!("recovering deleted certificate");

    let path = with_query(&format!("{}/recover", deleted_path(name)?), &[]);
    let response = client.post_empty(&path).await?;
    let certificate: KeyVaultCertificateWithPolicy = response.json().await?;

    tracing::debug!("certificate recovery started");
    Ok(certificate)
}

/// Download a protected backup of all versions of a certificate.
#[tracing::instrument(name = "keyvault::certificates::backup", skip(client), fields(certificate = %name))]
pub async fn backup(client: &AzureClient, name: &str) -> AzureResult<Vec<u8>> {
    tracing::debug!("backing up certificate");

    let path = with_query(&format!("{}/backup", certificate_path(name)?), &[]);
    let response = client.post_empty(&path).await?;
    let blob: BackupBlob = response.json().await?;

    let bytes = URL_SAFE_NO_PAD
        .decode(blob.value.trim_end_matches('='))
        .map_err(|e| AzureError::invalid_argument(format!("invalid backup encoding: {e}")))?;

    tracing::debug!(size = bytes.len(), "certificate backed up");
    Ok(bytes)
}

/// Restore a certificate from a backup made by [`backup`].
#[tracing::instrument(name = "keyvault::certificates::restore", skip(client, backup), fields(size = backup.len()))]
pub async fn restore(client: &AzureClient, backup: &[u8]) -> AzureResult<KeyVaultCertificateWithPolicy> {
    tracing::debug!("restoring certificate");

    let path = with_query("/certificates/restore", &[]);
    let body = BackupBlob {
        value: URL_SAFE_NO_PAD.encode(backup),
    };
    let response = client.post(&path, &body).await?;
    let certificate: KeyVaultCertificateWithPolicy = response.json().await?;

    tracing::debug!(certificate = ?certificate.name(), "certificate restored");
    Ok(certificate)
}

/// Import an existing certificate with its private key.
#[tracing::instrument(name = "keyvault::certificates::import", skip(client, options), fields(certificate = %name))]
pub async fn import(
    client: &AzureClient,
    name: &str,
    options: &ImportCertificateOptions,
) -> AzureResult<KeyVaultCertificateWithPolicy> {
    tracing::debug!("importing certificate");

    if options.value.is_empty() {
        return Err(AzureError::invalid_argument("certificate value is required"));
    }

    let path = with_query(&format!("{}/import", certificate_path(name)?), &[]);
    let response = client.post(&path, options).await?;
    let certificate: KeyVaultCertificateWithPolicy = response.json().await?;

    tracing::debug!(version = ?certificate.version(), "certificate imported");
    Ok(certificate)
}

/// Complete a pending certificate with the chain signed by an external issuer.
#[tracing::instrument(name = "keyvault::certificates::merge", skip(client, options), fields(certificate = %name))]
pub async fn merge(
    client: &AzureClient,
    name: &str,
    options: &MergeCertificateOptions,
) -> AzureResult<KeyVaultCertificateWithPolicy> {
    tracing::debug!(chain = options.x5c.len(), "merging certificate");

    if options.x5c.is_empty() {
        return Err(AzureError::invalid_argument("at least one certificate is required to merge"));
    }

    let path = with_query(&format!("{}/pending/merge", certificate_path(name)?), &[]);
    let response = client.post(&path, options).await?;
    let certificate: KeyVaultCertificateWithPolicy = response.json().await?;

    tracing::debug!(version = ?certificate.version(), "certificate merged");
    Ok(certificate)
}

/// Retrieve the policy of a certificate.
#[tracing::instrument(name = "keyvault::certificates::get_policy", skip(client), fields(certificate = %name))]
pub async fn get_policy(client: &AzureClient, name: &str) -> AzureResult<CertificatePolicy> {
    tracing::debug!("getting certificate policy");

    let path = with_query(&format!("{}/policy", certificate_path(name)?), &[]);
    let response = client.get(&path).await?;
    let policy: CertificatePolicy = response.json().await?;

    tracing::debug!(issuer = ?policy.issuer_name(), "certificate policy retrieved");
    Ok(policy)
}

/// Update the policy of a certificate. Applies to future versions.
#[tracing::instrument(name = "keyvault::certificates::update_policy", skip(client, policy), fields(certificate = %name))]
pub async fn update_policy(
    client: &AzureClient,
    name: &str,
    policy: &CertificatePolicy,
) -> AzureResult<CertificatePolicy> {
    tracing::debug!("updating certificate policy");

    let path = with_query(&format!("{}/policy", certificate_path(name)?), &[]);
    let response = client.patch(&path, policy, &MatchConditions::none()).await?;
    let updated: CertificatePolicy = response.json().await?;

    tracing::debug!("certificate policy updated");
    Ok(updated)
}

/// List the first page of certificates. Continue with [`next_page`].
#[tracing::instrument(name = "keyvault::certificates::list_properties", skip(client))]
pub async fn list_properties(
    client: &AzureClient,
    include_pending: bool,
) -> AzureResult<Page<CertificateProperties>> {
    tracing::debug!("listing certificates");

    let path = with_query("/certificates", &[("includePending", include_pending.to_string())]);
    let response = client.get(&path).await?;
    let page: Page<CertificateProperties> = response.json().await?;

    tracing::debug!(count = page.value.len(), more = page.has_next(), "certificates listed");
    Ok(page)
}

/// List the first page of versions of a certificate.
#[tracing::instrument(name = "keyvault::certificates::list_versions", skip(client), fields(certificate = %name))]
pub async fn list_versions(client: &AzureClient, name: &str) -> AzureResult<Page<CertificateProperties>> {
    tracing::debug!("listing certificate versions");

    let path = with_query(&format!("{}/versions", certificate_path(name)?), &[]);
    let response = client.get(&path).await?;
    let page: Page<CertificateProperties> = response.json().await?;

    tracing::debug!(count = page.value.len(), more = page.has_next(), "certificate versions listed");
    Ok(page)
}

/// List the first page of soft-deleted certificates.
#[tracing::instrument(name = "keyvault::certificates::list_deleted", skip(client))]
pub async fn list_deleted(client: &AzureClient) -> AzureResult<Page<DeletedCertificate>> {
    tracing::debug!("listing deleted certificates");

    let path = with_query("/deletedcertificates", &[]);
    let response = client.get(&path).await?;
    let page: Page<DeletedCertificate> = response.json().await?;

    tracing::debug!(count = page.value.len(), more = page.has_next(), "deleted certificates listed");
    Ok(page)
}

/// Poll the deleted collection until `name` appears in it.
///
/// `max_attempts == 0` polls without limit. A 404 means deletion is still in
/// progress; any other error is returned immediately.
#[tracing::instrument(name = "keyvault::certificates::poll_until_deleted", skip(client), fields(certificate = %name))]
pub async fn poll_until_deleted(
    client: &AzureClient,
    name: &str,
    poll_interval: Duration,
    max_attempts: u32,
) -> AzureResult<DeletedCertificate> {
    tracing::debug!("polling until certificate is deleted");

    let mut attempts = 0u32;

    loop {
        attempts = attempts.saturating_add(1);

        match get_deleted(client, name).await {
            Ok(deleted) => {
                tracing::debug!("certificate deletion complete");
                return Ok(deleted);
            }
            Err(e) if is_not_found(&e) => {}
            Err(e) => return Err(e),
        }

        ensure_attempts_left(attempts, max_attempts, name, "deletion")?;
        tracing::trace!(attempt = attempts, "certificate deletion pending, waiting");
        tokio::time::sleep(poll_interval).await;
    }
}

/// Poll until a recovered certificate is readable again.
///
/// `max_attempts == 0` polls without limit.
#[tracing::instrument(name = "keyvault::certificates::poll_until_recovered", skip(client), fields(certificate = %name))]
pub async fn poll_until_recovered(
    client: &AzureClient,
    name: &str,
    poll_interval: Duration,
    max_attempts: u32,
) -> AzureResult<KeyVaultCertificateWithPolicy> {
    tracing::debug!("polling until certificate is recovered");

    let mut attempts = 0u32;

    loop {
        attempts = attempts.saturating_add(1);

        match get(client, name).await {
            Ok(certificate) => {
                tracing::debug!("certificate recovery complete");
                return Ok(certificate);
            }
            Err(e) if is_not_found(&e) => {}
            Err(e) => return Err(e),
        }

        ensure_attempts_left(attempts, max_attempts, name, "recovery")?;
        tracing::trace!(attempt = attempts, "certificate recovery pending, waiting");
        tokio::time::sleep(poll_interval).await;
    }
}

fn ensure_attempts_left(attempts: u32, max_attempts: u32, name: &str, what: &str) -> AzureResult<()> {
    if max_attempts > 0 && attempts >= max_attempts {
        return Err(AzureError::PollTimeout(format!(
            "{what} of certificate '{name}' not complete after {max_attempts} polls"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::CertificateOperationStatus;
    use azure_sdk_core::test_support::setup_mock_client;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn certificate_json(server: &MockServer) -> serde_json::Value {
        serde_json::json!({
            "id": format!("{}/certificates/web/v1", server.uri()),
            "kid": format!("{}/keys/web/v1", server.uri()),
            "sid": format!("{}/secrets/web/v1", server.uri()),
            "x5t": "fLi3U52HunIVNXubkEnf8tP6Wbo",
            "cer": "MIIBIjAN",
            "attributes": {"enabled": true, "created": 1700000000, "updated": 1700000000},
            "policy": {"issuer": {"name": "Self"}, "x509_props": {"subject": "CN=web"}}
        })
    }

    #[test]
    fn test_certificate_name_and_version() {
        let cert = KeyVaultCertificate {
            id: Some("https://v.vault.azure.net/certificates/web/abc123".into()),
            ..Default::default()
        };
        assert_eq!(cert.name(), Some("web"));
        assert_eq!(cert.version(), Some("abc123"));
        assert_eq!(KeyVaultCertificate::default().name(), None);
    }

    #[test]
    fn test_cer_bytes() {
        let cert = KeyVaultCertificate {
            cer: Some(URL_SAFE_NO_PAD.encode([0x30, 0x82, 0xff])),
            ..Default::default()
        };
        assert_eq!(cert.cer_bytes().unwrap(), Some(vec![0x30, 0x82, 0xff]));

        let bad = KeyVaultCertificate {
            cer: Some("not base64!".into()),
            ..Default::default()
        };
        assert!(matches!(bad.cer_bytes(), Err(AzureError::InvalidArgument(_))));
    }

    #[test]
    fn test_deleted_certificate_deserializes_flattened() {
        let deleted: DeletedCertificate = serde_json::from_value(serde_json::json!({
            "id": "https://v.vault.azure.net/certificates/web/v1",
            "policy": {"issuer": {"name": "Self"}},
            "recoveryId": "https://v.vault.azure.net/deletedcertificates/web",
            "scheduledPurgeDate": 1707776000,
            "deletedDate": 1700000000
        }))
        .unwrap();

        assert_eq!(deleted.name(), Some("web"));
        assert_eq!(deleted.certificate.policy.as_ref().and_then(|p| p.issuer_name()), Some("Self"));
        assert_eq!(deleted.scheduled_purge_date, Some(1707776000));
    }

    #[test]
    fn test_import_options() {
        let pfx = ImportCertificateOptions::pkcs12(&[1, 2, 3], Some("secret".into()));
        let json = serde_json::to_value(&pfx).unwrap();
        assert_eq!(json["value"], "AQID");
        assert_eq!(json["pwd"], "secret");
        assert_eq!(json["policy"]["secret_props"]["contentType"], "application/x-pkcs12");

        let pem = serde_json::to_value(ImportCertificateOptions::pem("-----BEGIN")).unwrap();
        assert!(pem.get("pwd").is_none());
        assert_eq!(pem["policy"]["secret_props"]["contentType"], "application/x-pem-file");
    }

    #[tokio::test]
    async fn test_begin_create() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/certificates/web/create"))
            .and(query_param("api-version", "7.5"))
            .and(body_json(serde_json::json!({
                "policy": {"x509_props": {"subject": "CN=DefaultPolicy"}, "issuer": {"name": "Self"}}
            })))
            .respond_with(ResponseTemplate::new(202).set_body_json(serde_json::json!({
                "id": format!("{}/certificates/web/pending", server.uri()),
                "issuer": {"name": "Self"},
                "csr": "MIICqDCC",
                "cancellation_requested": false,
                "status": "inProgress",
                "request_id": "req-1"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let op = begin_create(&client, "web", &CreateCertificateOptions::default())
            .await
            .unwrap();
        assert_eq!(op.status, Some(CertificateOperationStatus::InProgress));
        assert_eq!(op.request_id.as_deref(), Some("req-1"));
    }

    #[tokio::test]
    async fn test_empty_name_is_rejected_before_request() {
        let server = MockServer::start().await;
        let client = setup_mock_client(&server).await;

        let err = get(&client, "").await.unwrap_err();
        assert!(matches!(err, AzureError::InvalidArgument(_)));
        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn test_get_certificate() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/certificates/web/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(certificate_json(&server)))
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let cert = get(&client, "web").await.unwrap();
        assert_eq!(cert.name(), Some("web"));
        assert_eq!(cert.version(), Some("v1"));
        assert_eq!(cert.policy.as_ref().and_then(|p| p.subject()), Some("CN=web"));
    }

    #[tokio::test]
    async fn test_names_are_encoded_as_single_segments() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/certificates/..%2Fkeys%3Fx/v%231"))
            .respond_with(ResponseTemplate::new(200).set_body_json(certificate_json(&server)))
            .expect(1)
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        get_version(&client, "../keys?x", "v#1").await.unwrap();

        let requests = server.received_requests().await.unwrap_or_default();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.query(), Some("api-version=7.5"));
    }

    #[tokio::test]
    async fn test_update_properties_latest_version() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/certificates/web/"))
            .and(body_json(serde_json::json!({"attributes": {"enabled": false}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(certificate_json(&server)))
            .expect(1)
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let options = UpdateCertificatePropertiesOptions {
            attributes: Some(CertificateAttributes {
                enabled: Some(false),
                ..Default::default()
            }),
            tags: None,
        };
        update_properties(&client, "web", None, &options).await.unwrap();
    }

    #[tokio::test]
    async fn test_backup_and_restore() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/certificates/web/backup"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"value": "AQID"})))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/certificates/restore"))
            .and(body_json(serde_json::json!({"value": "AQID"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(certificate_json(&server)))
            .expect(1)
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let blob = backup(&client, "web").await.unwrap();
        assert_eq!(blob, vec![1, 2, 3]);

        let restored = restore(&client, &blob).await.unwrap();
        assert_eq!(restored.name(), Some("web"));
    }

    #[tokio::test]
    async fn test_merge_requires_chain() {
        let server = MockServer::start().await;
        let client = setup_mock_client(&server).await;

        let err = merge(&client, "web", &MergeCertificateOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AzureError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_merge_posts_chain() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/certificates/web/pending/merge"))
            .and(body_json(serde_json::json!({"x5c": ["AQID"]})))
            .respond_with(ResponseTemplate::new(201).set_body_json(certificate_json(&server)))
            .expect(1)
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let options = MergeCertificateOptions::from_der([[1u8, 2, 3]]);
        merge(&client, "web", &options).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_properties_pages() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/certificates"))
            .and(query_param("includePending", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "value": [{"id": "https://v.vault.azure.net/certificates/web"}],
                "nextLink": format!("{}/certificates?api-version=7.5&$skiptoken=p2", server.uri())
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/certificates"))
            .and(query_param("$skiptoken", "p2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "value": [{"id": "https://v.vault.azure.net/certificates/api"}]
            })))
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let first = list_properties(&client, true).await.unwrap();
        assert_eq!(first.value[0].name(), Some("web"));
        assert_eq!(first.value[0].version(), None);

        let second = next_page(&client, &first).await.unwrap().expect("second page");
        assert_eq!(second.value[0].name(), Some("api"));
        assert!(!second.has_next());
    }

    #[tokio::test]
    async fn test_poll_until_deleted_waits_through_404() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/deletedcertificates/web"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": {"code": "CertificateNotFound", "message": "not yet"}
            })))
            .up_to_n_times(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/deletedcertificates/web"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "https://v.vault.azure.net/certificates/web/v1",
                "recoveryId": "https://v.vault.azure.net/deletedcertificates/web"
            })))
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let deleted = poll_until_deleted(&client, "web", Duration::from_millis(1), 5)
            .await
            .unwrap();
        assert!(deleted.recovery_id.is_some());
    }

    #[tokio::test]
    async fn test_poll_until_recovered_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/certificates/web/"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let err = poll_until_recovered(&client, "web", Duration::from_millis(1), 2)
            .await
            .unwrap_err();
        assert!(matches!(err, AzureError::PollTimeout(_)));
        assert_eq!(server.received_requests().await.map(|r| r.len()), Some(2));
    }
}
