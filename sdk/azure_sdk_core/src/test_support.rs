//! Helpers for testing the service crates against a `wiremock` server.

use wiremock::MockServer;

use crate::auth::AzureCredential;
use crate::client::{AzureClient, RetryPolicy};

/// Test API key (not a real key).
pub const TEST_API_KEY: &str = "test-api-key";

/// Create a test client connected to a mock server.
///
/// Retries are disabled so error-path tests see the first response.
pub async fn setup_mock_client(server: &MockServer) -> AzureClient {
    AzureClient::builder()
        .endpoint(server.uri())
        .credential(AzureCredential::api_key(TEST_API_KEY))
        .retry_policy(RetryPolicy::none())
        .build()
        .expect("should build client")
}
