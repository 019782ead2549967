//! Credentials accepted by the SDK clients.
//!
//! Search accepts admin/query API keys in an `api-key` header. Key Vault (and
//! Search, when role-based access is enabled) accepts Microsoft Entra ID bearer
//! tokens obtained from any [`TokenCredential`].

use std::sync::Arc;

use azure_core::credentials::TokenCredential;
use secrecy::{ExposeSecret, SecretString};

use crate::error::{AzureError, AzureResult};

/// Header name used for API key authentication.
pub const API_KEY_HEADER: &str = "api-key";

/// Header name used for bearer token authentication.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Credential types supported by the SDK.
#[derive(Clone)]
pub enum AzureCredential {
    /// API key authentication, sent in the `api-key` header.
    ApiKey(SecretString),

    /// Microsoft Entra ID token authentication via any `azure_core` token credential.
    TokenCredential(Arc<dyn TokenCredential>),
}

/// A resolved authentication header.
pub struct AuthHeader {
    /// The header name (`api-key` or `Authorization`).
    pub name: &'static str,
    /// The header value.
    pub value: SecretString,
}

impl AzureCredential {
    /// Create an API key credential.
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::ApiKey(SecretString::from(key.into()))
    }

    /// Create an API key credential from an environment variable.
    ///
    /// Returns [`AzureError::MissingConfig`] if the variable is unset or empty.
    pub fn api_key_from_env(var: &str) -> AzureResult<Self> {
        match std::env::var(var) {
            Ok(key) if !key.is_empty() => Ok(Self::api_key(key)),
            _ => Err(AzureError::MissingConfig(format!(
                "{var} is not set or is empty"
            ))),
        }
    }

    /// Wrap an existing `azure_core` token credential.
    pub fn token_credential(credential: Arc<dyn TokenCredential>) -> Self {
        Self::TokenCredential(credential)
    }

    /// Create a credential backed by the Azure CLI (`az login`).
    pub fn azure_cli() -> AzureResult<Self> {
        let credential = azure_identity::AzureCliCredential::new(None)
            .map_err(|e| AzureError::Auth(format!("failed to create Azure CLI credential: {e}")))?;
        Ok(Self::TokenCredential(credential))
    }

    /// Resolve the credential to an authentication header.
    ///
    /// `scope` is only used for token credentials (for example
    /// `https://vault.azure.net/.default`).
    pub async fn resolve(&self, scope: &str) -> AzureResult<AuthHeader> {
        match self {
            Self::ApiKey(key) => Ok(AuthHeader {
                name: API_KEY_HEADER,
                value: key.clone(),
            }),
            Self::TokenCredential(credential) => {
                let token = credential
                    .get_token(&[scope], None)
                    .await
                    .map_err(|e| AzureError::Auth(format!("failed to acquire token: {e}")))?;
                Ok(AuthHeader {
                    name: AUTHORIZATION_HEADER,
                    value: SecretString::from(format!("Bearer {}", token.token.secret())),
                })
            }
        }
    }
}

impl AuthHeader {
    /// Expose the header value for sending on the wire.
    pub(crate) fn expose(&self) -> &str {
        self.value.expose_secret()
    }
}

impl std::fmt::Debug for AzureCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApiKey(_) => write!(f, "AzureCredential::ApiKey(****)"),
            Self::TokenCredential(_) => write!(f, "AzureCredential::TokenCredential"),
        }
    }
}
