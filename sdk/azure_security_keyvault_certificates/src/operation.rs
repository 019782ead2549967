//! Pending certificate operations.

use std::time::Duration;

use azure_sdk_core::client::AzureClient;
use azure_sdk_core::error::{AzureError, AzureResult};
use azure_sdk_core::models::{ErrorDetail, MatchConditions};
use serde::{Deserialize, Serialize};

use crate::models::{id_segment, name_segment, with_query};
use crate::policy::IssuerParameters;

azure_sdk_core::expandable_enum! {
    /// State of a certificate operation.
    pub enum CertificateOperationStatus {
        /// The issuer has not finished.
        InProgress => "inProgress",
        /// The certificate was issued.
        Completed => "completed",
        /// Issuance failed; see [`CertificateOperation::error`].
        Failed => "failed",
        /// The operation was cancelled.
        Cancelled => "cancelled",
    }
}

impl CertificateOperationStatus {
    /// Returns `true` once the operation will not change again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Cancelled)
    }
}

/// A pending create or merge operation on a certificate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CertificateOperation {
    /// Operation identifier, `.../certificates/{name}/pending`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Issuer handling the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<IssuerParameters>,

    /// Certificate signing request, standard base64 DER.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csr: Option<String>,

    /// Whether cancellation was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_requested: Option<bool>,

    /// Current state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CertificateOperationStatus>,

    /// Issuer-provided detail about the state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_details: Option<String>,

    /// Error, when the operation failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,

    /// Location of the issued certificate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Identifier of the request sent to the issuer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl CertificateOperation {
    /// Certificate name, taken from the identifier.
    pub fn name(&self) -> Option<&str> {
        self.id.as_deref().and_then(|id| id_segment(id, 1))
    }

    /// Returns `true` once the operation has completed, failed or been cancelled.
    pub fn is_done(&self) -> bool {
        self.status.as_ref().is_some_and(CertificateOperationStatus::is_terminal)
    }
}

#[derive(Serialize)]
struct CancelRequest {
    cancellation_requested: bool,
}

fn pending_path(name: &str) -> AzureResult<String> {
    Ok(format!("/certificates/{}/pending", name_segment("certificate", name)?))
}

/// Retrieve the pending operation of a certificate.
#[tracing::instrument(name = "keyvault::operations::get", skip(client), fields(certificate = %name))]
pub async fn get(client: &AzureClient, name: &str) -> AzureResult<CertificateOperation> {
    tracing::debug!("getting certificate operation");

    let path = with_query(&pending_path(name)?, &[]);
    let response = client.get(&path).await?;
    let operation: CertificateOperation = response.json().await?;

    tracing::debug!(status = ?operation.status, "certificate operation retrieved");
    Ok(operation)
}

/// Ask the issuer to cancel a pending operation.
#[tracing::instrument(name = "keyvault::operations::cancel", skip(client), fields(certificate = %name))]
pub async fn cancel(client: &AzureClient, name: &str) -> AzureResult<CertificateOperation> {
    tracing::debug!("cancelling certificate operation");

    let path = with_query(&pending_path(name)?, &[]);
    let body = CancelRequest {
        cancellation_requested: true,
    };
    let response = client.patch(&path, &body, &MatchConditions::none()).await?;
    let operation: CertificateOperation = response.json().await?;

    tracing::debug!(status = ?operation.status, "certificate operation cancellation requested");
    Ok(operation)
}

/// Delete a pending operation. The certificate itself is not affected.
#[tracing::instrument(name = "keyvault::operations::delete", skip(client), fields(certificate = %name))]
pub async fn delete(client: &AzureClient, name: &str) -> AzureResult<CertificateOperation> {
    tracing::debug!("deleting certificate operation");

    let path = with_query(&pending_path(name)?, &[]);
    let response = client.delete(&path, &MatchConditions::none()).await?;
    let operation: CertificateOperation = response.json().await?;

    tracing::debug!("certificate operation deleted");
    Ok(operation)
}

/// Poll a certificate operation until it completes, fails or is cancelled.
///
/// `max_attempts == 0` polls without limit. A failed or cancelled operation
/// is returned as `Ok`; inspect [`CertificateOperation::status`].
///
/// # Errors
///
/// Returns [`AzureError::PollTimeout`] as soon as `max_attempts` polls have
/// all reported the operation in progress.
#[tracing::instrument(name = "keyvault::operations::poll_until_complete", skip(client), fields(certificate = %name))]
pub async fn poll_until_complete(
    client: &AzureClient,
    name: &str,
    poll_interval: Duration,
    max_attempts: u32,
) -> AzureResult<CertificateOperation> {
    tracing::debug!("polling certificate operation");

    let mut attempts = 0u32;

    loop {
        attempts = attempts.saturating_add(1);
        let operation = get(client, name).await?;

        if operation.is_done() {
            tracing::debug!(status = ?operation.status, "certificate operation finished");
            return Ok(operation);
        }

        if max_attempts > 0 && attempts >= max_attempts {
            return Err(AzureError::PollTimeout(format!(
                "certificate operation for '{name}' did not complete after {max_attempts} polls"
            )));
        }

        tracing::trace!(attempt = attempts, "certificate operation in progress, waiting");
        tokio::time::sleep(poll_interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use azure_sdk_core::test_support::setup_mock_client;
    use tracing_test::traced_test;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn operation_json(status: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "https://v.vault.azure.net/certificates/web/pending",
            "issuer": {"name": "Self"},
            "csr": "MIICqDCC",
            "cancellation_requested": false,
            "status": status,
            "status_details": "",
            "target": "https://v.vault.azure.net/certificates/web",
            "request_id": "req-1"
        })
    }

    #[test]
    fn test_terminal_states() {
        assert!(!CertificateOperationStatus::InProgress.is_terminal());
        assert!(CertificateOperationStatus::Completed.is_terminal());
        assert!(CertificateOperationStatus::Failed.is_terminal());
        assert!(CertificateOperationStatus::Cancelled.is_terminal());
        assert!(!CertificateOperationStatus::Other("queued".into()).is_terminal());
        assert!(!CertificateOperation::default().is_done());
    }

    #[test]
    fn test_failed_operation_carries_error() {
        let mut json = operation_json("failed");
        json["error"] = serde_json::json!({"code": "CertificateIssuerError", "message": "denied"});

        let op: CertificateOperation = serde_json::from_value(json).unwrap();
        assert!(op.is_done());
        assert_eq!(op.name(), Some("web"));
        assert_eq!(
            op.error.as_ref().and_then(|e| e.code.as_deref()),
            Some("CertificateIssuerError")
        );
    }

    #[tokio::test]
    async fn test_cancel_sends_flag() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/certificates/web/pending"))
            .and(body_json(serde_json::json!({"cancellation_requested": true})))
            .respond_with(ResponseTemplate::new(200).set_body_json(operation_json("inProgress")))
            .expect(1)
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let op = cancel(&client, "web").await.unwrap();
        assert_eq!(op.status, Some(CertificateOperationStatus::InProgress));
    }

    #[tokio::test]
    async fn test_delete_operation() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/certificates/web/pending"))
            .respond_with(ResponseTemplate::new(200).set_body_json(operation_json("cancelled")))
            .expect(1)
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let op = delete(&client, "web").await.unwrap();
        assert_eq!(op.status, Some(CertificateOperationStatus::Cancelled));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_poll_until_complete() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/certificates/web/pending"))
            .respond_with(ResponseTemplate::new(200).set_body_json(operation_json("inProgress")))
            .up_to_n_times(2)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/certificates/web/pending"))
            .respond_with(ResponseTemplate::new(200).set_body_json(operation_json("completed")))
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let op = poll_until_complete(&client, "web", Duration::from_millis(1), 10)
            .await
            .unwrap();

        assert_eq!(op.status, Some(CertificateOperationStatus::Completed));
        assert!(logs_contain("keyvault::operations::poll_until_complete"));
        assert!(logs_contain("certificate operation finished"));
    }

    #[tokio::test]
    async fn test_poll_until_complete_timeout() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/certificates/web/pending"))
            .respond_with(ResponseTemplate::new(200).set_body_json(operation_json("inProgress")))
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let err = poll_until_complete(&client, "web", Duration::from_millis(1), 3)
            .await
            .unwrap_err();
        assert!(matches!(err, AzureError::PollTimeout(_)));
        assert_eq!(server.received_requests().await.map(|r| r.len()), Some(3));
    }

    #[tokio::test]
    async fn test_poll_until_complete_returns_without_final_sleep() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/certificates/web/pending"))
            .respond_with(ResponseTemplate::new(200).set_body_json(operation_json("inProgress")))
            .mount(&server)
            .await;

        let client = setup_mock_client(&server).await;
        let result = tokio::time::timeout(
            Duration::from_secs(5),
            poll_until_complete(&client, "web", Duration::from_secs(60), 1),
        )
        .await
        .expect("should give up without waiting a poll interval");
        assert!(matches!(result, Err(AzureError::PollTimeout(_))));
    }
}
