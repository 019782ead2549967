//! Integration tests for azure_security_keyvault_certificates.
//!
//! These tests require a live Key Vault and a logged-in Azure CLI.
//! Run with: `cargo test --features integration-tests`
//!
//! Required environment variables:
//! - `AZURE_KEYVAULT_URL`: The vault URL, e.g. `https://my-vault.vault.azure.net`

#![cfg(feature = "integration-tests")]

use std::time::Duration;

use azure_security_keyvault_certificates::certificate::{self, CreateCertificateOptions};
use azure_security_keyvault_certificates::operation::{self, CertificateOperationStatus};
use azure_security_keyvault_certificates::policy::CertificatePolicy;
use azure_security_keyvault_certificates::{client_from_env, contacts};

fn unique(prefix: &str) -> String {
    let millis = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("{prefix}-{millis}")
}

#[tokio::test]
async fn test_self_signed_certificate_lifecycle() {
    let client = client_from_env().expect("client from env");
    let name = unique("it-cert");

    certificate::begin_create(&client, &name, &CreateCertificateOptions::default())
        .await
        .expect("begin create");

    let op = operation::poll_until_complete(&client, &name, Duration::from_secs(2), 60)
        .await
        .expect("poll operation");
    assert_eq!(op.status, Some(CertificateOperationStatus::Completed));

    let cert = certificate::get(&client, &name).await.expect("get certificate");
    assert_eq!(cert.name(), Some(name.as_str()));
    assert!(cert.cer_bytes().expect("decode cer").is_some());

    let policy = certificate::get_policy(&client, &name).await.expect("get policy");
    assert_eq!(policy.subject(), CertificatePolicy::default().subject());

    let versions = certificate::list_versions(&client, &name)
        .await
        .expect("list versions");
    assert_eq!(versions.value.len(), 1);

    certificate::begin_delete(&client, &name).await.expect("delete");
    certificate::poll_until_deleted(&client, &name, Duration::from_secs(2), 30)
        .await
        .expect("wait for deletion");
    certificate::purge_deleted(&client, &name).await.expect("purge");
}

#[tokio::test]
async fn test_contacts_round_trip() {
    let client = client_from_env().expect("client from env");

    let stored = contacts::set(
        &client,
        &[contacts::CertificateContact::new("certs@contoso.com")],
    )
    .await
    .expect("set contacts");
    assert_eq!(stored.len(), 1);

    let current = contacts::get(&client).await.expect("get contacts");
    assert_eq!(current, stored);

    contacts::delete(&client).await.expect("delete contacts");
}
