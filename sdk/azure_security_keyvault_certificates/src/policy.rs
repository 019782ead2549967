//! Certificate policies.
//!
//! A policy describes how a certificate's key is generated, which issuer
//! signs it, the X.509 subject and extensions, and what happens as it nears
//! expiry.
//!
//! ```rust
//! use azure_security_keyvault_certificates::policy::{CertificatePolicy, KeyType};
//!
//! let mut policy = CertificatePolicy::default();
//! assert_eq!(policy.issuer_name(), Some("Self"));
//! assert_eq!(policy.subject(), Some("CN=DefaultPolicy"));
//!
//! policy.key_properties.get_or_insert_with(Default::default).key_type = Some(KeyType::Ec);
//! ```

use serde::{Deserialize, Serialize};

use crate::models::CertificateAttributes;

/// Issuer name for self-signed certificates.
pub const SELF_ISSUER: &str = "Self";

/// Issuer name for certificates signed by an issuer the vault does not know;
/// complete them with [`merge`](crate::certificate::merge).
pub const UNKNOWN_ISSUER: &str = "Unknown";

/// Subject used by the default policy.
pub const DEFAULT_SUBJECT: &str = "CN=DefaultPolicy";

azure_sdk_core::expandable_enum! {
    /// Key type of the certificate's key pair.
    pub enum KeyType {
        /// Elliptic curve.
        Ec => "EC",
        /// Elliptic curve in an HSM.
        EcHsm => "EC-HSM",
        /// RSA.
        Rsa => "RSA",
        /// RSA in an HSM.
        RsaHsm => "RSA-HSM",
    }
}

azure_sdk_core::expandable_enum! {
    /// Elliptic curve name.
    pub enum KeyCurveName {
        /// NIST P-256.
        P256 => "P-256",
        /// NIST P-384.
        P384 => "P-384",
        /// NIST P-521.
        P521 => "P-521",
        /// SECG secp256k1.
        P256K => "P-256K",
    }
}

azure_sdk_core::expandable_enum! {
    /// Format of the secret backing the certificate.
    pub enum CertificateContentType {
        /// PKCS #12.
        Pkcs12 => "application/x-pkcs12",
        /// PEM.
        Pem => "application/x-pem-file",
    }
}

azure_sdk_core::expandable_enum! {
    /// X.509 key usage flags.
    pub enum KeyUsage {
        /// Digital signature.
        DigitalSignature => "digitalSignature",
        /// Non-repudiation.
        NonRepudiation => "nonRepudiation",
        /// Key encipherment.
        KeyEncipherment => "keyEncipherment",
        /// Data encipherment.
        DataEncipherment => "dataEncipherment",
        /// Key agreement.
        KeyAgreement => "keyAgreement",
        /// Certificate signing.
        KeyCertSign => "keyCertSign",
        /// CRL signing.
        CrlSign => "cRLSign",
        /// Encipher only.
        EncipherOnly => "encipherOnly",
        /// Decipher only.
        DecipherOnly => "decipherOnly",
    }
}

azure_sdk_core::expandable_enum! {
    /// What a lifetime action does.
    pub enum CertificatePolicyAction {
        /// Notify the certificate contacts.
        EmailContacts => "EmailContacts",
        /// Renew the certificate.
        AutoRenew => "AutoRenew",
    }
}

/// Management policy of a certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificatePolicy {
    /// Policy identifier. Read-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Key pair properties.
    #[serde(rename = "key_props", skip_serializing_if = "Option::is_none")]
    pub key_properties: Option<KeyProperties>,

    /// Secret properties.
    #[serde(rename = "secret_props", skip_serializing_if = "Option::is_none")]
    pub secret_properties: Option<SecretProperties>,

    /// X.509 properties.
    #[serde(rename = "x509_props", skip_serializing_if = "Option::is_none")]
    pub x509_properties: Option<X509CertificateProperties>,

    /// Actions taken as the certificate ages.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lifetime_actions: Vec<LifetimeAction>,

    /// Issuer parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer: Option<IssuerParameters>,

    /// Policy attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<CertificateAttributes>,
}

impl Default for CertificatePolicy {
    /// A self-signed policy with subject `CN=DefaultPolicy`.
    fn default() -> Self {
        Self::new(SELF_ISSUER, DEFAULT_SUBJECT)
    }
}

impl CertificatePolicy {
    /// A policy for `subject` signed by `issuer_name`.
    pub fn new(issuer_name: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            id: None,
            key_properties: None,
            secret_properties: None,
            x509_properties: Some(X509CertificateProperties {
                subject: Some(subject.into()),
                ..Default::default()
            }),
            lifetime_actions: Vec::new(),
            issuer: Some(IssuerParameters::new(issuer_name)),
            attributes: None,
        }
    }

    /// The issuer name, if set.
    pub fn issuer_name(&self) -> Option<&str> {
        self.issuer.as_ref().and_then(|i| i.name.as_deref())
    }

    /// The X.509 subject, if set.
    pub fn subject(&self) -> Option<&str> {
        self.x509_properties.as_ref().and_then(|x| x.subject.as_deref())
    }
}

/// Properties of the certificate's key pair.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyProperties {
    /// Whether the private key can be exported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exportable: Option<bool>,
    /// Key type.
    #[serde(rename = "kty", skip_serializing_if = "Option::is_none")]
    pub key_type: Option<KeyType>,
    /// RSA key size in bits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_size: Option<u32>,
    /// Whether renewal reuses the key pair.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reuse_key: Option<bool>,
    /// Curve for EC keys.
    #[serde(rename = "crv", skip_serializing_if = "Option::is_none")]
    pub curve: Option<KeyCurveName>,
}

/// Properties of the secret backing the certificate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SecretProperties {
    /// Media type of the secret.
    #[serde(rename = "contentType", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<CertificateContentType>,
}

/// X.509 properties of the certificate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct X509CertificateProperties {
    /// Subject distinguished name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Extended key usage OIDs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ekus: Vec<String>,
    /// Subject alternative names.
    #[serde(rename = "sans", skip_serializing_if = "Option::is_none")]
    pub subject_alternative_names: Option<SubjectAlternativeNames>,
    /// Key usage flags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_usage: Vec<KeyUsage>,
    /// Validity in months.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_months: Option<u32>,
}

/// Subject alternative names.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SubjectAlternativeNames {
    /// Email addresses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,
    /// DNS names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dns_names: Vec<String>,
    /// User principal names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub upns: Vec<String>,
}

/// An action and the condition that triggers it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifetimeAction {
    /// When to act.
    pub trigger: LifetimeActionTrigger,
    /// What to do.
    pub action: LifetimeActionType,
}

impl LifetimeAction {
    /// Act once `percentage` of the lifetime has elapsed.
    pub fn at_lifetime_percentage(action: CertificatePolicyAction, percentage: u32) -> Self {
        Self {
            trigger: LifetimeActionTrigger {
                lifetime_percentage: Some(percentage),
                days_before_expiry: None,
            },
            action: LifetimeActionType { action_type: action },
        }
    }

    /// Act `days` days before expiry.
    pub fn days_before_expiry(action: CertificatePolicyAction, days: u32) -> Self {
        Self {
            trigger: LifetimeActionTrigger {
                lifetime_percentage: None,
                days_before_expiry: Some(days),
            },
            action: LifetimeActionType { action_type: action },
        }
    }
}

/// Trigger of a [`LifetimeAction`]. Set exactly one field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LifetimeActionTrigger {
    /// Percentage of the lifetime, 1 to 99.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifetime_percentage: Option<u32>,
    /// Days before expiry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_before_expiry: Option<u32>,
}

/// Action of a [`LifetimeAction`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifetimeActionType {
    /// The action.
    pub action_type: CertificatePolicyAction,
}

/// Issuer parameters of a policy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IssuerParameters {
    /// Issuer name: `Self`, `Unknown`, or a configured issuer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Certificate type requested from the issuer, e.g. `OV-SSL`.
    #[serde(rename = "cty", skip_serializing_if = "Option::is_none")]
    pub certificate_type: Option<String>,
    /// Whether the certificate is published to transparency logs.
    #[serde(rename = "cert_transparency", skip_serializing_if = "Option::is_none")]
    pub certificate_transparency: Option<bool>,
}

impl IssuerParameters {
    /// Parameters naming `issuer`.
    pub fn new(issuer: impl Into<String>) -> Self {
        Self {
            name: Some(issuer.into()),
            certificate_type: None,
            certificate_transparency: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let json = serde_json::to_value(CertificatePolicy::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "x509_props": {"subject": "CN=DefaultPolicy"},
                "issuer": {"name": "Self"}
            })
        );
    }

    #[test]
    fn test_full_policy_round_trip() {
        let json = serde_json::json!({
            "id": "https://v.vault.azure.net/certificates/web/policy",
            "key_props": {"exportable": true, "kty": "EC", "reuse_key": false, "crv": "P-256"},
            "secret_props": {"contentType": "application/x-pem-file"},
            "x509_props": {
                "subject": "CN=www.contoso.com",
                "ekus": ["1.3.6.1.5.5.7.3.1"],
                "sans": {"dns_names": ["www.contoso.com", "contoso.com"]},
                "key_usage": ["digitalSignature", "keyEncipherment"],
                "validity_months": 12
            },
            "lifetime_actions": [
                {"trigger": {"lifetime_percentage": 80}, "action": {"action_type": "AutoRenew"}},
                {"trigger": {"days_before_expiry": 30}, "action": {"action_type": "EmailContacts"}}
            ],
            "issuer": {"name": "DigiCert", "cty": "OV-SSL", "cert_transparency": true},
            "attributes": {"enabled": true}
        });

        let policy: CertificatePolicy = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(policy.issuer_name(), Some("DigiCert"));
        assert_eq!(policy.subject(), Some("CN=www.contoso.com"));
        assert_eq!(
            policy.key_properties.as_ref().and_then(|k| k.curve.clone()),
            Some(KeyCurveName::P256)
        );
        assert_eq!(
            policy.lifetime_actions[0],
            LifetimeAction::at_lifetime_percentage(CertificatePolicyAction::AutoRenew, 80)
        );
        assert_eq!(
            policy.lifetime_actions[1],
            LifetimeAction::days_before_expiry(CertificatePolicyAction::EmailContacts, 30)
        );
        assert_eq!(serde_json::to_value(&policy).unwrap(), json);
    }

    #[test]
    fn test_unknown_key_usage_is_preserved() {
        let props: X509CertificateProperties =
            serde_json::from_value(serde_json::json!({"key_usage": ["futureUsage"]})).unwrap();
        assert_eq!(props.key_usage, vec![KeyUsage::Other("futureUsage".into())]);
    }
}
