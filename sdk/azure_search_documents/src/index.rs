//! Index management.
//!
//! This module provides functions to create, retrieve, list, update and delete
//! search indexes, to read index and service statistics, and to run an
//! analyzer against sample text.
//!
//! ## Example
//!
//! ```rust,no_run
//! use azure_sdk_core::client::AzureClient;
//! use azure_sdk_core::auth::AzureCredential;
//! use azure_search_documents::field::SearchFieldDataType;
//! use azure_search_documents::field_builder::{SearchableFieldBuilder, SimpleFieldBuilder};
//! use azure_search_documents::index::{self, SearchIndex};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AzureClient::builder()
//!     .endpoint("https://your-service.search.windows.net")
//!     .credential(AzureCredential::api_key("your-admin-key"))
//!     .build()?;
//!
//! let mut hotels = SearchIndex::new("hotels");
//! hotels.fields = vec![
//!     SimpleFieldBuilder::new("hotelId", SearchFieldDataType::String, false)
//!         .key(true)
//!         .build(),
//!     SearchableFieldBuilder::new("description", false).build(),
//! ];
//!
//! let mut created = index::create(&client, &hotels).await?;
//!
//! // Update only if nobody changed it in between
//! created.fields.push(SimpleFieldBuilder::new("rating", SearchFieldDataType::Double, false).build());
//! let updated = index::create_or_update(&client, &created, false, true).await?;
//!
//! index::delete(&client, &updated.name).await?;
//! # Ok(())
//! # }
//! ```

use azure_sdk_core::client::AzureClient;
use azure_sdk_core::error::AzureResult;
use azure_sdk_core::models::MatchConditions;
use serde::{Deserialize, Serialize};

use crate::analysis::{
    CharFilter, CharFilterName, LexicalAnalyzer, LexicalAnalyzerName, LexicalTokenizer,
    LexicalTokenizerName, TokenFilter, TokenFilterName,
};
use crate::field::SearchField;
use crate::models::{
    resource_path, with_query, ListResponse, SearchResourceEncryptionKey, SearchServiceStatistics,
};
use crate::polymorphic::{impl_variant, polymorphic_family, ODATA_TYPE};
use crate::scoring::ScoringProfile;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The definition of a search index.
///
/// The service requires exactly one key field of type `Edm.String`; this is
/// validated by the service, not the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndex {
    /// Index name.
    pub name: String,

    /// The fields of the index.
    #[serde(default)]
    pub fields: Vec<SearchField>,

    /// Scoring profiles.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scoring_profiles: Vec<ScoringProfile>,

    /// Scoring profile used when a query does not name one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_scoring_profile: Option<String>,

    /// Cross-origin resource sharing options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors_options: Option<CorsOptions>,

    /// Suggesters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggesters: Vec<Suggester>,

    /// Custom analyzers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub analyzers: Vec<LexicalAnalyzer>,

    /// Custom tokenizers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tokenizers: Vec<LexicalTokenizer>,

    /// Custom token filters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub token_filters: Vec<TokenFilter>,

    /// Custom char filters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub char_filters: Vec<CharFilter>,

    /// Customer-managed encryption key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_key: Option<SearchResourceEncryptionKey>,

    /// Similarity algorithm for scoring. Service default BM25.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<SimilarityAlgorithm>,

    /// Entity tag for optimistic concurrency.
    #[serde(rename = "@odata.etag", skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
}

impl SearchIndex {
    /// Create an index with no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            scoring_profiles: Vec::new(),
            default_scoring_profile: None,
            cors_options: None,
            suggesters: Vec::new(),
            analyzers: Vec::new(),
            tokenizers: Vec::new(),
            token_filters: Vec::new(),
            char_filters: Vec::new(),
            encryption_key: None,
            similarity: None,
            etag: None,
        }
    }

    /// The first top-level field marked as key, if any.
    pub fn key_field(&self) -> Option<&SearchField> {
        self.fields.iter().find(|f| f.is_key())
    }
}

/// Cross-origin resource sharing options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorsOptions {
    /// Allowed origins; `*` allows all.
    pub allowed_origins: Vec<String>,

    /// Preflight cache duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age_in_seconds: Option<i64>,
}

/// Enables type-ahead suggestions on a set of fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggester {
    /// Suggester name.
    pub name: String,

    /// Only `analyzingInfixMatching` is supported.
    pub search_mode: String,

    /// Fields the suggester applies to.
    pub source_fields: Vec<String>,
}

impl Suggester {
    /// Create a suggester over `source_fields`.
    pub fn new(name: impl Into<String>, source_fields: Vec<String>) -> Self {
        Self {
            name: name.into(),
            search_mode: "analyzingInfixMatching".into(),
            source_fields,
        }
    }
}

polymorphic_family! {
    /// Scoring similarity algorithm.
    pub enum SimilarityAlgorithm tagged ODATA_TYPE => {
        /// Lucene TF-IDF.
        Classic(ClassicSimilarity),
        /// Okapi BM25.
        Bm25(Bm25Similarity),
    }
}

/// Lucene's TF-IDF similarity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassicSimilarity {}

impl_variant!(ClassicSimilarity => ["#Microsoft.Azure.Search.ClassicSimilarity"]);

/// Okapi BM25 similarity.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Bm25Similarity {
    /// Term frequency saturation. Service default 1.2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub k1: Option<f64>,

    /// Length normalization. Service default 0.75.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
}

impl_variant!(Bm25Similarity => ["#Microsoft.Azure.Search.BM25Similarity"]);

/// Document count and storage usage of one index.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndexStatistics {
    /// Number of documents.
    pub document_count: u64,
    /// Storage used, in bytes.
    pub storage_size: u64,
    /// Vector index storage, in bytes.
    #[serde(default)]
    pub vector_index_size: u64,
}

/// A request to break text into tokens with an index's analysis chain.
///
/// Set either `analyzer`, or `tokenizer` with optional filters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeTextOptions {
    /// Text to analyze.
    pub text: String,

    /// Analyzer to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<LexicalAnalyzerName>,

    /// Tokenizer to apply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokenizer: Option<LexicalTokenizerName>,

    /// Token filters applied after the tokenizer.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub token_filters: Vec<TokenFilterName>,

    /// Char filters applied before the tokenizer.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub char_filters: Vec<CharFilterName>,
}

impl AnalyzeTextOptions {
    /// Analyze `text` with `analyzer`.
    pub fn with_analyzer(text: impl Into<String>, analyzer: impl Into<LexicalAnalyzerName>) -> Self {
        Self {
            text: text.into(),
            analyzer: Some(analyzer.into()),
            tokenizer: None,
            token_filters: Vec::new(),
            char_filters: Vec::new(),
        }
    }

    /// Analyze `text` with `tokenizer`.
    pub fn with_tokenizer(
        text: impl Into<String>,
        tokenizer: impl Into<LexicalTokenizerName>,
    ) -> Self {
        Self {
            text: text.into(),
            analyzer: None,
            tokenizer: Some(tokenizer.into()),
            token_filters: Vec::new(),
            char_filters: Vec::new(),
        }
    }
}

/// A token produced by [`analyze_text`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedTokenInfo {
    /// The token text.
    pub token: String,
    /// Start offset in the input.
    pub start_offset: u32,
    /// End offset in the input.
    pub end_offset: u32,
    /// Position of the token relative to other tokens.
    pub position: u32,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResult {
    tokens: Vec<AnalyzedTokenInfo>,
}

#[derive(Debug, Deserialize)]
struct IndexName {
    name: String,
}

// ---------------------------------------------------------------------------
// API functions
// ---------------------------------------------------------------------------

/// Create a new index.
///
/// Fails with a 409-derived error if an index with the same name exists.
#[tracing::instrument(
    name = "search::indexes::create",
    skip(client, index),
    fields(index = %index.name)
)]
pub async fn create(client: &AzureClient, index: &SearchIndex) -> AzureResult<SearchIndex> {
    tracing::debug!("creating index");

    let path = with_query("/indexes", &[]);
    let response = client.post(&path, index).await?;
    let created: SearchIndex = response.json().await?;

    tracing::debug!(etag = ?created.etag, "index created");
    Ok(created)
}

/// Create an index, or update it if it exists.
///
/// * `allow_index_downtime` - permit updates (such as new analyzers) that take
///   the index offline for a few seconds.
/// * `only_if_unchanged` - send the index's ETag as `If-Match`, so the update
///   fails with 412 if the server copy changed since it was read.
#[tracing::instrument(
    name = "search::indexes::create_or_update",
    skip(client, index),
    fields(index = %index.name)
)]
pub async fn create_or_update(
    client: &AzureClient,
    index: &SearchIndex,
    allow_index_downtime: bool,
    only_if_unchanged: bool,
) -> AzureResult<SearchIndex> {
    tracing::debug!("creating or updating index");

    let mut extra = Vec::new();
    if allow_index_downtime {
        extra.push(("allowIndexDowntime", "true".to_string()));
    }
    let path = with_query(&resource_path("indexes", &index.name), &extra);
    let conditions = MatchConditions::only_if_unchanged(only_if_unchanged, index.etag.as_deref());

    let response = client.put(&path, index, &conditions).await?;
    let stored: SearchIndex = response.json().await?;

    tracing::debug!(etag = ?stored.etag, "index stored");
    Ok(stored)
}

/// Retrieve an index definition by name.
#[tracing::instrument(name = "search::indexes::get", skip(client), fields(index = %name))]
pub async fn get(client: &AzureClient, name: &str) -> AzureResult<SearchIndex> {
    tracing::debug!("getting index");

    let path = with_query(&resource_path("indexes", name), &[]);
    let response = client.get(&path).await?;
    let index: SearchIndex = response.json().await?;

    tracing::debug!(fields = index.fields.len(), "index retrieved");
    Ok(index)
}

/// List all index definitions.
#[tracing::instrument(name = "search::indexes::list", skip(client))]
pub async fn list(client: &AzureClient) -> AzureResult<Vec<SearchIndex>> {
    tracing::debug!("listing indexes");

    let path = with_query("/indexes", &[]);
    let response = client.get(&path).await?;
    let list: ListResponse<SearchIndex> = response.json().await?;

    tracing::debug!(count = list.value.len(), "indexes listed");
    Ok(list.value)
}

/// List only the names of all indexes.
#[tracing::instrument(name = "search::indexes::list_names", skip(client))]
pub async fn list_names(client: &AzureClient) -> AzureResult<Vec<String>> {
    tracing::debug!("listing index names");

    let path = with_query("/indexes", &[("$select", "name".to_string())]);
    let response = client.get(&path).await?;
    let list: ListResponse<IndexName> = response.json().await?;

    Ok(list.value.into_iter().map(|i| i.name).collect())
}

/// Delete an index and all of its documents.
#[tracing::instrument(name = "search::indexes::delete", skip(client), fields(index = %name))]
pub async fn delete(client: &AzureClient, name: &str) -> AzureResult<()> {
    tracing::debug!("deleting index");

    let path = with_query(&resource_path("indexes", name), &[]);
    client.delete(&path, &MatchConditions::none()).await?;

    tracing::debug!("index deleted");
    Ok(())
}

/// Delete an index only if its server copy still carries `index.etag`.
#[tracing::instrument(
    name = "search::indexes::delete_if_unchanged",
    skip(client, index),
    fields(index = %index.name)
)]
pub async fn delete_if_unchanged(client: &AzureClient, index: &SearchIndex) -> AzureResult<()> {
    tracing::debug!("deleting index if unchanged");

    let path = with_query(&resource_path("indexes", &index.name), &[]);
    let conditions = MatchConditions::only_if_unchanged(true, index.etag.as_deref());
    client.delete(&path, &conditions).await?;

    tracing::debug!("index deleted");
    Ok(())
}

/// Get document count and storage usage for an index.
#[tracing::instrument(name = "search::indexes::get_statistics", skip(client), fields(index = %name))]
pub async fn get_statistics(client: &AzureClient, name: &str) -> AzureResult<SearchIndexStatistics> {
    tracing::debug!("getting index statistics");

    let path = with_query(&format!("{}/search.stats", resource_path("indexes", name)), &[]);
    let response = client.get(&path).await?;
    let stats: SearchIndexStatistics = response.json().await?;

    tracing::debug!(documents = stats.document_count, "index statistics retrieved");
    Ok(stats)
}

/// Show how an analyzer or tokenizer breaks text into tokens.
#[tracing::instrument(name = "search::indexes::analyze_text", skip(client, options), fields(index = %name))]
pub async fn analyze_text(
    client: &AzureClient,
    name: &str,
    options: &AnalyzeTextOptions,
) -> AzureResult<Vec<AnalyzedTokenInfo>> {
    tracing::debug!("analyzing text");

    let path = with_query(&format!("{}/search.analyze", resource_path("indexes", name)), &[]);
    let response = client.post(&path, options).await?;
    let result: AnalyzeResult = response.json().await?;

    tracing::debug!(tokens = result.tokens.len(), "text analyzed");
    Ok(result.tokens)
}

/// Get service-level counters and limits.
#[tracing::instrument(name = "search::service::get_statistics", skip(client))]
pub async fn get_service_statistics(client: &AzureClient) -> AzureResult<SearchServiceStatistics> {
    tracing::debug!("getting service statistics");

    let path = with_query("/servicestats", &[]);
    let response = client.get(&path).await?;
    let stats: SearchServiceStatistics = response.json().await?;

    tracing::debug!("service statistics retrieved");
    Ok(stats)
}
