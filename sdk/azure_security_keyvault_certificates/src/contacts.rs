//! Certificate contacts: who the vault emails about expiring certificates.

use azure_sdk_core::client::AzureClient;
use azure_sdk_core::error::AzureResult;
use azure_sdk_core::models::MatchConditions;
use serde::{Deserialize, Serialize};

use crate::models::with_query;

/// A contact notified by `EmailContacts` lifetime actions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CertificateContact {
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl CertificateContact {
    /// A contact reachable at `email`.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Contacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(rename = "contacts", default)]
    contact_list: Vec<CertificateContact>,
}

const CONTACTS_PATH: &str = "/certificates/contacts";

/// Replace the vault's certificate contacts.
#[tracing::instrument(name = "keyvault::contacts::set", skip(client, contacts), fields(count = contacts.len()))]
pub async fn set(client: &AzureClient, contacts: &[CertificateContact]) -> AzureResult<Vec<CertificateContact>> {
    tracing::debug!("setting certificate contacts");

    let body = Contacts {
        id: None,
        contact_list: contacts.to_vec(),
    };
    let path = with_query(CONTACTS_PATH, &[]);
    let response = client.put(&path, &body, &MatchConditions::none()).await?;
    let stored: Contacts = response.json().await?;

    tracing::debug!(count = stored.contact_list.len(), "certificate contacts set");
    Ok(stored.contact_list)
}

/// Retrieve the vault's certificate contacts.
#[tracing::instrument(name = "keyvault::contacts::get", skip(client))]
pub async fn get(client: &AzureClient) -> AzureResult<Vec<CertificateContact>> {
    tracing::debug!("getting certificate contacts");

    let path = with_query(CONTACTS_PATH, &[]);
    let response = client.get(&path).await?;
    let contacts: Contacts = response.json().await?;

    tracing::debug!(count = contacts.contact_list.len(), "certificate contacts retrieved");
    Ok(contacts.contact_list)
}

/// Remove all certificate contacts, returning the removed list.
#[tracing::instrument(name = "keyvault::contacts::delete", skip(client))]
pub async fn delete(client: &AzureClient) -> AzureResult<Vec<CertificateContact>> {
    tracing::debug!("deleting certificate contacts");

    let path = with_query(CONTACTS_PATH, &[]);
    let response = client.delete(&path, &MatchConditions::none()).await?;
    let removed: Contacts = response.json().await?;

    tracing::debug!(count = removed.contact_list.len(), "certificate contacts deleted");
    Ok(removed.contact_list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use azure_sdk_core::test_support::setup_mock_client;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_set_contacts() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/certificates/contacts"))
            .and(body_json(serde_json::json!({
                "contacts": [{"email": "ops@contoso.com", "name": "Ops"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "https://v.vault.azure.net/certificates/contacts",
                "contacts": [{"email": "ops@contoso.com", "name": "Ops"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let mut ops = CertificateContact::new("ops@contoso.com");
        ops.name = Some("Ops".into());

        let stored = set(&client, &[ops.clone()]).await.unwrap();
        assert_eq!(stored, vec![ops]);
    }

    #[tokio::test]
    async fn test_get_and_delete_contacts() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "id": "https://v.vault.azure.net/certificates/contacts",
            "contacts": [{"email": "a@contoso.com"}, {"email": "b@contoso.com", "phone": "555"}]
        });

        Mock::given(method("GET"))
            .and(path("/certificates/contacts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/certificates/contacts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let contacts = get(&client).await.unwrap();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[1].phone.as_deref(), Some("555"));

        let removed = delete(&client).await.unwrap();
        assert_eq!(removed, contacts);
    }
}
