//! Options for create-or-update calls on indexer-related resources.
//!
//! Each option type pairs the resource with an "only if unchanged" flag and
//! the cache-related query flags the service accepts for that resource.
//! Constructors reject resources without a name, so invalid calls fail
//! before any request is sent.
//!
//! ```rust
//! use azure_search_documents::indexer::SearchIndexer;
//! use azure_search_documents::options::CreateOrUpdateIndexerOptions;
//!
//! let indexer = SearchIndexer::new("hotels-indexer", "hotels-ds", "hotels");
//! let options = CreateOrUpdateIndexerOptions::new(indexer)
//!     .expect("named indexer")
//!     .only_if_unchanged(true)
//!     .ignore_reset_requirements(true);
//! assert!(options.only_if_unchanged);
//!
//! let unnamed = SearchIndexer::new("", "hotels-ds", "hotels");
//! assert!(CreateOrUpdateIndexerOptions::new(unnamed).is_err());
//! ```

use azure_sdk_core::error::{AzureError, AzureResult};
use azure_sdk_core::models::MatchConditions;

use crate::data_source::SearchIndexerDataSourceConnection;
use crate::indexer::SearchIndexer;
use crate::skillset::SearchIndexerSkillset;

fn require_name(kind: &str, name: &str) -> AzureResult<()> {
    if name.trim().is_empty() {
        return Err(AzureError::invalid_argument(format!("{kind} name is required")));
    }
    Ok(())
}

fn flag_query(flags: &[(&'static str, Option<bool>)]) -> Vec<(&'static str, String)> {
    flags
        .iter()
        .filter_map(|(key, value)| value.map(|v| (*key, v.to_string())))
        .collect()
}

/// Options for [`indexer::create_or_update`](crate::indexer::create_or_update).
#[derive(Debug, Clone)]
pub struct CreateOrUpdateIndexerOptions {
    /// The indexer definition to store.
    pub indexer: SearchIndexer,
    /// Send the indexer's ETag as `If-Match`.
    pub only_if_unchanged: bool,
    /// Skip the reset that some changes would otherwise require.
    pub ignore_reset_requirements: Option<bool>,
    /// Do not reprocess cached enrichments after the change.
    pub disable_cache_reprocessing_change_detection: Option<bool>,
}

impl CreateOrUpdateIndexerOptions {
    /// Wrap an indexer.
    ///
    /// # Errors
    ///
    /// Returns [`AzureError::InvalidArgument`] if the indexer has no name.
    pub fn new(indexer: SearchIndexer) -> AzureResult<Self> {
        require_name("indexer", &indexer.name)?;
        Ok(Self {
            indexer,
            only_if_unchanged: false,
            ignore_reset_requirements: None,
            disable_cache_reprocessing_change_detection: None,
        })
    }

    /// Set the "only if unchanged" flag.
    pub fn only_if_unchanged(mut self, value: bool) -> Self {
        self.only_if_unchanged = value;
        self
    }

    /// Set `ignoreResetRequirements`.
    pub fn ignore_reset_requirements(mut self, value: bool) -> Self {
        self.ignore_reset_requirements = Some(value);
        self
    }

    /// Set `disableCacheReprocessingChangeDetection`.
    pub fn disable_cache_reprocessing_change_detection(mut self, value: bool) -> Self {
        self.disable_cache_reprocessing_change_detection = Some(value);
        self
    }

    pub(crate) fn conditions(&self) -> MatchConditions {
        MatchConditions::only_if_unchanged(self.only_if_unchanged, self.indexer.etag.as_deref())
    }

    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        flag_query(&[
            ("ignoreResetRequirements", self.ignore_reset_requirements),
            (
                "disableCacheReprocessingChangeDetection",
                self.disable_cache_reprocessing_change_detection,
            ),
        ])
    }
}

/// Options for [`data_source::create_or_update`](crate::data_source::create_or_update).
#[derive(Debug, Clone)]
pub struct CreateOrUpdateDataSourceConnectionOptions {
    /// The data source definition to store.
    pub data_source: SearchIndexerDataSourceConnection,
    /// Send the data source's ETag as `If-Match`.
    pub only_if_unchanged: bool,
    /// Skip the indexer reset that some changes would otherwise require.
    pub ignore_reset_requirements: Option<bool>,
}

impl CreateOrUpdateDataSourceConnectionOptions {
    /// Wrap a data source connection.
    ///
    /// # Errors
    ///
    /// Returns [`AzureError::InvalidArgument`] if the data source has no name.
    pub fn new(data_source: SearchIndexerDataSourceConnection) -> AzureResult<Self> {
        require_name("data source connection", &data_source.name)?;
        Ok(Self {
            data_source,
            only_if_unchanged: false,
            ignore_reset_requirements: None,
        })
    }

    /// Set the "only if unchanged" flag.
    pub fn only_if_unchanged(mut self, value: bool) -> Self {
        self.only_if_unchanged = value;
        self
    }

    /// Set `ignoreResetRequirements`.
    pub fn ignore_reset_requirements(mut self, value: bool) -> Self {
        self.ignore_reset_requirements = Some(value);
        self
    }

    pub(crate) fn conditions(&self) -> MatchConditions {
        MatchConditions::only_if_unchanged(self.only_if_unchanged, self.data_source.etag.as_deref())
    }

    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        flag_query(&[("ignoreResetRequirements", self.ignore_reset_requirements)])
    }
}

/// Options for [`skillset::create_or_update`](crate::skillset::create_or_update).
#[derive(Debug, Clone)]
pub struct CreateOrUpdateSkillsetOptions {
    /// The skillset definition to store.
    pub skillset: SearchIndexerSkillset,
    /// Send the skillset's ETag as `If-Match`.
    pub only_if_unchanged: bool,
    /// Skip the indexer reset that some changes would otherwise require.
    pub ignore_reset_requirements: Option<bool>,
    /// Do not reprocess cached enrichments after the change.
    pub disable_cache_reprocessing_change_detection: Option<bool>,
}

impl CreateOrUpdateSkillsetOptions {
    /// Wrap a skillset.
    ///
    /// # Errors
    ///
    /// Returns [`AzureError::InvalidArgument`] if the skillset has no name.
    pub fn new(skillset: SearchIndexerSkillset) -> AzureResult<Self> {
        require_name("skillset", &skillset.name)?;
        Ok(Self {
            skillset,
            only_if_unchanged: false,
            ignore_reset_requirements: None,
            disable_cache_reprocessing_change_detection: None,
        })
    }

    /// Set the "only if unchanged" flag.
    pub fn only_if_unchanged(mut self, value: bool) -> Self {
        self.only_if_unchanged = value;
        self
    }

    /// Set `ignoreResetRequirements`.
    pub fn ignore_reset_requirements(mut self, value: bool) -> Self {
        self.ignore_reset_requirements = Some(value);
        self
    }

    /// Set `disableCacheReprocessingChangeDetection`.
    pub fn disable_cache_reprocessing_change_detection(mut self, value: bool) -> Self {
        self.disable_cache_reprocessing_change_detection = Some(value);
        self
    }

    pub(crate) fn conditions(&self) -> MatchConditions {
        MatchConditions::only_if_unchanged(self.only_if_unchanged, self.skillset.etag.as_deref())
    }

    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        flag_query(&[
            ("ignoreResetRequirements", self.ignore_reset_requirements),
            (
                "disableCacheReprocessingChangeDetection",
                self.disable_cache_reprocessing_change_detection,
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unnamed_indexer_is_rejected() {
        let err = CreateOrUpdateIndexerOptions::new(SearchIndexer::new("", "ds", "idx")).unwrap_err();
        assert!(matches!(err, AzureError::InvalidArgument(ref m) if m.contains("indexer")));
    }

    #[test]
    fn test_unnamed_data_source_and_skillset_are_rejected() {
        let ds = SearchIndexerDataSourceConnection::new(
            " ",
            crate::data_source::SearchIndexerDataSourceType::AzureBlob,
            "conn",
            "container",
        );
        assert!(CreateOrUpdateDataSourceConnectionOptions::new(ds).is_err());
        assert!(CreateOrUpdateSkillsetOptions::new(SearchIndexerSkillset::new("", vec![])).is_err());
    }

    #[test]
    fn test_conditions_require_flag_and_etag() {
        let mut indexer = SearchIndexer::new("ix", "ds", "idx");
        indexer.etag = Some("\"0x1\"".into());

        let options = CreateOrUpdateIndexerOptions::new(indexer.clone()).unwrap();
        assert!(options.conditions().is_empty());

        let options = options.only_if_unchanged(true);
        assert_eq!(options.conditions(), MatchConditions::if_match("\"0x1\""));

        indexer.etag = None;
        let options = CreateOrUpdateIndexerOptions::new(indexer)
            .unwrap()
            .only_if_unchanged(true);
        assert!(options.conditions().is_empty());
    }

    #[test]
    fn test_query_flags_only_include_set_values() {
        let options = CreateOrUpdateSkillsetOptions::new(SearchIndexerSkillset::new("ss", vec![]))
            .unwrap()
            .disable_cache_reprocessing_change_detection(true);
        assert_eq!(
            options.query(),
            vec![("disableCacheReprocessingChangeDetection", "true".to_string())]
        );

        let options = CreateOrUpdateIndexerOptions::new(SearchIndexer::new("ix", "ds", "idx")).unwrap();
        assert!(options.query().is_empty());
    }
}
