//! Certificate issuers.
//!
//! An issuer records the account a vault uses with an external certificate
//! authority such as DigiCert or GlobalSign. Policies refer to it by name.

use azure_sdk_core::client::AzureClient;
use azure_sdk_core::error::AzureResult;
use azure_sdk_core::models::MatchConditions;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::{id_segment, name_segment, with_query, Page};

/// A certificate issuer and its account details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificateIssuer {
    /// Issuer identifier. Read-only.
    #[serde(default, skip_serializing)]
    pub id: Option<String>,

    /// Provider name, e.g. `DigiCert`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// Account credentials with the provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<IssuerCredentials>,

    /// Organization registered with the provider.
    #[serde(rename = "org_details", default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<OrganizationDetails>,

    /// Issuer attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<IssuerAttributes>,
}

impl CertificateIssuer {
    /// An issuer using `provider`.
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: Some(provider.into()),
            ..Default::default()
        }
    }

    /// Issuer name, taken from the identifier.
    pub fn name(&self) -> Option<&str> {
        self.id.as_deref().and_then(|id| id_segment(id, 2))
    }
}

/// Provider account credentials. The password is never printed.
#[derive(Debug, Serialize, Deserialize)]
pub struct IssuerCredentials {
    /// Account identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    /// Account password or API key.
    #[serde(
        rename = "pwd",
        default,
        serialize_with = "serialize_secret",
        deserialize_with = "deserialize_secret",
        skip_serializing_if = "Option::is_none"
    )]
    pub password: Option<SecretString>,
}

impl IssuerCredentials {
    /// Credentials for `account_id`.
    pub fn new(account_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            account_id: Some(account_id.into()),
            password: Some(SecretString::from(password.into())),
        }
    }
}

impl Clone for IssuerCredentials {
    fn clone(&self) -> Self {
        Self {
            account_id: self.account_id.clone(),
            password: self
                .password
                .as_ref()
                .map(|p| SecretString::from(p.expose_secret().to_string())),
        }
    }
}

fn serialize_secret<S: Serializer>(secret: &Option<SecretString>, serializer: S) -> Result<S::Ok, S::Error> {
    match secret {
        Some(s) => serializer.serialize_str(s.expose_secret()),
        None => serializer.serialize_none(),
    }
}

fn deserialize_secret<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<SecretString>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.map(SecretString::from))
}

/// Organization registered with the provider.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrganizationDetails {
    /// Organization identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Administrators of the organization.
    #[serde(rename = "admin_details", default, skip_serializing_if = "Vec::is_empty")]
    pub admin_contacts: Vec<AdministratorContact>,
}

/// An organization administrator.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdministratorContact {
    /// First name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Issuer attributes. Times are unix seconds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IssuerAttributes {
    /// Whether the issuer is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Creation time. Read-only.
    #[serde(default, skip_serializing)]
    pub created: Option<u64>,
    /// Last update time. Read-only.
    #[serde(default, skip_serializing)]
    pub updated: Option<u64>,
}

/// Issuer summary returned by [`list`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuerProperties {
    /// Issuer identifier.
    pub id: String,
    /// Provider name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl IssuerProperties {
    /// Issuer name, taken from the identifier.
    pub fn name(&self) -> Option<&str> {
        id_segment(&self.id, 2)
    }
}

fn issuer_path(name: &str) -> AzureResult<String> {
    Ok(format!("/certificates/issuers/{}", name_segment("issuer", name)?))
}

/// Create or replace an issuer.
#[tracing::instrument(
    name = "keyvault::issuers::create",
    skip(client, issuer),
    fields(issuer = %name, provider = ?issuer.provider)
)]
pub async fn create(client: &AzureClient, name: &str, issuer: &CertificateIssuer) -> AzureResult<CertificateIssuer> {
    tracing::debug!("creating issuer");

    let path = with_query(&issuer_path(name)?, &[]);
    let response = client.put(&path, issuer, &MatchConditions::none()).await?;
    let created: CertificateIssuer = response.json().await?;

    tracing::debug!("issuer created");
    Ok(created)
}

/// Retrieve an issuer.
#[tracing::instrument(name = "keyvault::issuers::get", skip(client), fields(issuer = %name))]
pub async fn get(client: &AzureClient, name: &str) -> AzureResult<CertificateIssuer> {
    tracing::debug!("getting issuer");

    let path = with_query(&issuer_path(name)?, &[]);
    let response = client.get(&path).await?;
    let issuer: CertificateIssuer = response.json().await?;

    tracing::debug!("issuer retrieved");
    Ok(issuer)
}

/// Update an issuer. Unset fields are left unchanged.
#[tracing::instrument(name = "keyvault::issuers::update", skip(client, issuer), fields(issuer = %name))]
pub async fn update(client: &AzureClient, name: &str, issuer: &CertificateIssuer) -> AzureResult<CertificateIssuer> {
    tracing::debug!("updating issuer");

    let path = with_query(&issuer_path(name)?, &[]);
    let response = client.patch(&path, issuer, &MatchConditions::none()).await?;
    let updated: CertificateIssuer = response.json().await?;

    tracing::debug!("issuer updated");
    Ok(updated)
}

/// Delete an issuer, returning its last state.
#[tracing::instrument(name = "keyvault::issuers::delete", skip(client), fields(issuer = %name))]
pub async fn delete(client: &AzureClient, name: &str) -> AzureResult<CertificateIssuer> {
    tracing::debug!("deleting issuer");

    let path = with_query(&issuer_path(name)?, &[]);
    let response = client.delete(&path, &MatchConditions::none()).await?;
    let deleted: CertificateIssuer = response.json().await?;

    tracing::debug!("issuer deleted");
    Ok(deleted)
}

/// List the first page of issuers. Continue with
/// [`next_page`](crate::models::next_page).
#[tracing::instrument(name = "keyvault::issuers::list", skip(client))]
pub async fn list(client: &AzureClient) -> AzureResult<Page<IssuerProperties>> {
    tracing::debug!("listing issuers");

    let path = with_query("/certificates/issuers", &[]);
    let response = client.get(&path).await?;
    let page: Page<IssuerProperties> = response.json().await?;

    tracing::debug!(count = page.value.len(), more = page.has_next(), "issuers listed");
    Ok(page)
}
