//! Skillset management.
//!
//! A skillset is a named list of [`SearchIndexerSkill`]s run by an indexer,
//! plus the Cognitive Services account billed for built-in skills.

use azure_sdk_core::client::AzureClient;
use azure_sdk_core::error::AzureResult;
use azure_sdk_core::models::MatchConditions;
use serde::{Deserialize, Serialize};

use crate::models::{resource_path, with_query, ListResponse, SearchResourceEncryptionKey};
use crate::options::CreateOrUpdateSkillsetOptions;
use crate::polymorphic::{impl_variant, polymorphic_family, ODATA_TYPE};
use crate::skill::SearchIndexerSkill;

/// A list of skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndexerSkillset {
    /// Skillset name.
    pub name: String,

    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Skills in execution-graph order.
    pub skills: Vec<SearchIndexerSkill>,

    /// Account billed for built-in skills.
    #[serde(rename = "cognitiveServices", skip_serializing_if = "Option::is_none")]
    pub cognitive_services_account: Option<CognitiveServicesAccount>,

    /// Customer-managed encryption key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<SearchResourceEncryptionKey>,

    /// Entity tag for optimistic concurrency.
    #[serde(rename = "@odata.etag", skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

impl SearchIndexerSkillset {
    /// Create a skillset.
    pub fn new(name: impl Into<String>, skills: Vec<SearchIndexerSkill>) -> Self {
        Self {
            name: name.into(),
            description: None,
            skills,
            cognitive_services_account: None,
            encryption_key: None,
            etag: None,
        }
    }

    /// Find a skill by name.
    pub fn skill(&self, name: &str) -> Option<&SearchIndexerSkill> {
        self.skills.iter().find(|s| s.name() == Some(name))
    }
}

polymorphic_family! {
    /// The Cognitive Services account attached to a skillset.
    pub enum CognitiveServicesAccount tagged ODATA_TYPE => {
        /// The free, rate-limited default.
        Default(DefaultCognitiveServicesAccount),
        /// A billable account identified by key.
        Key(CognitiveServicesAccountKey),
    }
}

/// The free account with limited daily enrichments.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DefaultCognitiveServicesAccount {
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl_variant!(DefaultCognitiveServicesAccount => ["#Microsoft.Azure.Search.DefaultCognitiveServices"]);

/// A multi-region account in the skillset's region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CognitiveServicesAccountKey {
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Account key.
    pub key: String,
}

impl CognitiveServicesAccountKey {
    /// Attach the account with `key`.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            description: None,
            key: key.into(),
        }
    }
}

impl_variant!(CognitiveServicesAccountKey => ["#Microsoft.Azure.Search.CognitiveServicesByKey"]);

/// Create a new skillset.
#[tracing::instrument(
    name = "search::skillsets::create",
    skip(client, skillset),
    fields(skillset = %skillset.name, skills = skillset.skills.len())
)]
pub async fn create(
    client: &AzureClient,
    skillset: &SearchIndexerSkillset,
) -> AzureResult<SearchIndexerSkillset> {
    tracing::debug!("creating skillset");

    let path = with_query("/skillsets", &[]);
    let response = client.post(&path, skillset).await?;
    let created: SearchIndexerSkillset = response.json().await?;

    tracing::debug!(etag = ?created.etag, "skillset created");
    Ok(created)
}

/// Create a skillset, or update it if it exists.
#[tracing::instrument(
    name = "search::skillsets::create_or_update",
    skip(client, options),
    fields(skillset = %options.skillset.name)
)]
pub async fn create_or_update(
    client: &AzureClient,
    options: &CreateOrUpdateSkillsetOptions,
) -> AzureResult<SearchIndexerSkillset> {
    tracing::debug!(
        only_if_unchanged = options.only_if_unchanged,
        "creating or updating skillset"
    );

    let path = with_query(
        &resource_path("skillsets", &options.skillset.name),
        &options.query(),
    );
    let response = client
        .put(&path, &options.skillset, &options.conditions())
        .await?;
    let stored: SearchIndexerSkillset = response.json().await?;

    tracing::debug!(etag = ?stored.etag, "skillset stored");
    Ok(stored)
}

/// Retrieve a skillset by name.
#[tracing::instrument(name = "search::skillsets::get", skip(client), fields(skillset = %name))]
pub async fn get(client: &AzureClient, name: &str) -> AzureResult<SearchIndexerSkillset> {
    tracing::debug!("getting skillset");

    let path = with_query(&resource_path("skillsets", name), &[]);
    let response = client.get(&path).await?;
    let skillset: SearchIndexerSkillset = response.json().await?;

    tracing::debug!(skills = skillset.skills.len(), "skillset retrieved");
    Ok(skillset)
}

/// List all skillsets.
#[tracing::instrument(name = "search::skillsets::list", skip(client))]
pub async fn list(client: &AzureClient) -> AzureResult<Vec<SearchIndexerSkillset>> {
    tracing::debug!("listing skillsets");

    let path = with_query("/skillsets", &[]);
    let response = client.get(&path).await?;
    let list: ListResponse<SearchIndexerSkillset> = response.json().await?;

    tracing::debug!(count = list.value.len(), "skillsets listed");
    Ok(list.value)
}

/// Delete a skillset.
#[tracing::instrument(name = "search::skillsets::delete", skip(client), fields(skillset = %name))]
pub async fn delete(client: &AzureClient, name: &str) -> AzureResult<()> {
    tracing::debug!("deleting skillset");

    let path = with_query(&resource_path("skillsets", name), &[]);
    client.delete(&path, &MatchConditions::none()).await?;

    tracing::debug!("skillset deleted");
    Ok(())
}

/// Delete a skillset only if its server copy still carries `skillset.etag`.
#[tracing::instrument(
    name = "search::skillsets::delete_if_unchanged",
    skip(client, skillset),
    fields(skillset = %skillset.name)
)]
pub async fn delete_if_unchanged(
    client: &AzureClient,
    skillset: &SearchIndexerSkillset,
) -> AzureResult<()> {
    tracing::debug!("deleting skillset if unchanged");

    let path = with_query(&resource_path("skillsets", &skillset.name), &[]);
    let conditions = MatchConditions::only_if_unchanged(true, skillset.etag.as_deref());
    client.delete(&path, &conditions).await?;

    tracing::debug!("skillset deleted");
    Ok(())
}
