//! # Azure Key Vault certificates
//!
//! Certificate, policy, issuer and contact management for the Azure Key
//! Vault REST API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use azure_security_keyvault_certificates::certificate::{self, CreateCertificateOptions};
//! use azure_security_keyvault_certificates::operation;
//! use azure_security_keyvault_certificates::policy::CertificatePolicy;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = azure_security_keyvault_certificates::client_from_env()?;
//!
//!     let options = CreateCertificateOptions::new(CertificatePolicy::new("Self", "CN=contoso.com"));
//!     certificate::begin_create(&client, "contoso", &options).await?;
//!
//!     let done = operation::poll_until_complete(&client, "contoso", Duration::from_secs(2), 60).await?;
//!     println!("Operation finished: {:?}", done.status);
//!
//!     let cert = certificate::get(&client, "contoso").await?;
//!     println!("Version {:?}", cert.version());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`certificate`] - certificates, backups, imports and deleted certificates
//! - [`policy`] - certificate policies
//! - [`operation`] - pending create and merge operations
//! - [`issuer`] - certificate issuers
//! - [`contacts`] - certificate contacts
//! - [`models`] - identifiers, attributes and paging

use azure_sdk_core::auth::AzureCredential;
use azure_sdk_core::client::AzureClient;
use azure_sdk_core::error::{AzureError, AzureResult};

pub mod certificate;
pub mod contacts;
pub mod issuer;
pub mod models;
pub mod operation;
pub mod policy;

/// Environment variable holding the vault URL.
pub const VAULT_URL_ENV: &str = "AZURE_KEYVAULT_URL";

/// Build a client for the vault in `AZURE_KEYVAULT_URL`, authenticated with
/// the Azure CLI.
///
/// # Errors
///
/// Returns [`AzureError::MissingConfig`] if the variable is unset.
pub fn client_from_env() -> AzureResult<AzureClient> {
    let vault_url = std::env::var(VAULT_URL_ENV)
        .map_err(|_| AzureError::MissingConfig(format!("{VAULT_URL_ENV} is not set")))?;

    AzureClient::builder()
        .endpoint(vault_url)
        .credential(AzureCredential::azure_cli()?)
        .scope(models::KEYVAULT_SCOPE)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_client_from_env_missing_url() {
        std::env::remove_var(VAULT_URL_ENV);
        let err = client_from_env().unwrap_err();
        assert!(matches!(err, AzureError::MissingConfig(ref m) if m.contains(VAULT_URL_ENV)));
    }

    #[test]
    #[serial]
    fn test_client_from_env_uses_vault_scope() {
        std::env::set_var(VAULT_URL_ENV, "https://contoso.vault.azure.net");

        let client = client_from_env().expect("should build client");
        assert_eq!(client.endpoint().host_str(), Some("contoso.vault.azure.net"));
        assert_eq!(client.scope(), models::KEYVAULT_SCOPE);

        std::env::remove_var(VAULT_URL_ENV);
    }
}
