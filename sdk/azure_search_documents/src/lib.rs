//! # Azure Cognitive Search service configuration
//!
//! Index, indexer, data source, synonym map and skillset management for the
//! Azure Cognitive Search REST API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use azure_search_documents::field::SearchFieldDataType;
//! use azure_search_documents::field_builder::{SearchableFieldBuilder, SimpleFieldBuilder};
//! use azure_search_documents::index::{self, SearchIndex};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = azure_search_documents::client_from_env()?;
//!
//!     let mut hotels = SearchIndex::new("hotels");
//!     hotels.fields = vec![
//!         SimpleFieldBuilder::new("hotelId", SearchFieldDataType::String, false)
//!             .key(true)
//!             .build(),
//!         SearchableFieldBuilder::new("description", false).build(),
//!     ];
//!
//!     let created = index::create(&client, &hotels).await?;
//!     println!("Created index {} (etag {:?})", created.name, created.etag);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! - **Index**: the schema of searchable documents, with its analysis chain.
//! - **Data source**: a connection to the store an indexer pulls from.
//! - **Indexer**: a crawler that maps data source rows into index documents.
//! - **Skillset**: an AI enrichment pipeline run by an indexer.
//!
//! Families such as analyzers or skills are polymorphic on the wire. Each is
//! an enum with an `Unknown` variant so that resources created by newer
//! service versions can still be read and written back unchanged.
//!
//! ## Modules
//!
//! - [`index`] - indexes, analysis and service statistics
//! - [`field`] / [`field_builder`] - index fields and their builders
//! - [`analysis`] - analyzers, tokenizers, token filters and char filters
//! - [`scoring`] - scoring profiles and functions
//! - [`synonym_map`] - synonym maps
//! - [`data_source`] - data source connections and change detection policies
//! - [`indexer`] - indexers, schedules and execution status
//! - [`indexing_parameters`] - typed view over indexer configuration
//! - [`skill`] / [`versioned_skill`] / [`skillset`] - enrichment pipelines
//! - [`options`] - create-or-update options with concurrency control

use azure_sdk_core::auth::AzureCredential;
use azure_sdk_core::client::AzureClient;
use azure_sdk_core::error::{AzureError, AzureResult};

mod polymorphic;

pub mod analysis;
pub mod data_source;
pub mod field;
pub mod field_builder;
pub mod index;
pub mod indexer;
pub mod indexing_parameters;
pub mod models;
pub mod options;
pub mod scoring;
pub mod skill;
pub mod skillset;
pub mod synonym_map;
pub mod versioned_skill;

pub use polymorphic::{PolymorphicVariant, UnknownVariant, ODATA_TYPE};

/// Environment variable holding the search service endpoint.
pub const ENDPOINT_ENV: &str = "AZURE_SEARCH_ENDPOINT";

/// Environment variable holding the admin API key.
pub const API_KEY_ENV: &str = "AZURE_SEARCH_API_KEY";

/// Build a client from `AZURE_SEARCH_ENDPOINT` and `AZURE_SEARCH_API_KEY`.
///
/// # Errors
///
/// Returns [`AzureError::MissingConfig`] if either variable is unset.
pub fn client_from_env() -> AzureResult<AzureClient> {
    let endpoint = std::env::var(ENDPOINT_ENV)
        .map_err(|_| AzureError::MissingConfig(format!("{ENDPOINT_ENV} is not set")))?;

    AzureClient::builder()
        .endpoint(endpoint)
        .credential(AzureCredential::api_key_from_env(API_KEY_ENV)?)
        .scope(models::SEARCH_SCOPE)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_client_from_env_missing_endpoint() {
        std::env::remove_var(ENDPOINT_ENV);
        let err = client_from_env().unwrap_err();
        assert!(matches!(err, AzureError::MissingConfig(ref m) if m.contains(ENDPOINT_ENV)));
    }

    #[test]
    #[serial]
    fn test_client_from_env_success() {
        std::env::set_var(ENDPOINT_ENV, "https://contoso.search.windows.net");
        std::env::set_var(API_KEY_ENV, "admin-key");

        let client = client_from_env().expect("should build client");
        assert_eq!(client.endpoint().host_str(), Some("contoso.search.windows.net"));
        assert_eq!(client.scope(), models::SEARCH_SCOPE);

        std::env::remove_var(ENDPOINT_ENV);
        std::env::remove_var(API_KEY_ENV);
    }
}
