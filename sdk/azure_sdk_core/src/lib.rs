//! # Azure SDK core
//!
//! Shared building blocks for the Azure Cognitive Search and Azure Key Vault
//! certificate crates:
//!
//! - [`auth`] - API key and token credentials
//! - [`client`] - the HTTP client with retries and ETag match conditions
//! - [`error`] - the [`AzureError`] taxonomy
//! - [`models`] - types shared by every service crate
//! - [`expandable_enum!`] - open string vocabularies

#[macro_use]
mod macros;

pub mod auth;
pub mod client;
pub mod error;
pub mod models;

#[cfg(feature = "test-support")]
pub mod test_support;

pub use error::{AzureError, AzureResult};
