//! Credential domain models.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Logical grouping of secrets, usually a service or application identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Namespace(String);

impl Namespace {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::MissingField("namespace"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Namespace {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Namespace> for String {
    fn from(namespace: Namespace) -> Self {
        namespace.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key of a secret within its namespace (e.g. an account name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::MissingField("identifier"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Identifier {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Identifier> for String {
    fn from(identifier: Identifier) -> Self {
        identifier.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque secret bytes. Never printed by `Debug`.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct SecretPayload(Vec<u8>);

impl SecretPayload {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lossy UTF-8 view of the secret, for presentation only.
    pub fn to_text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }
}

impl fmt::Debug for SecretPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretPayload(<{} bytes redacted>)", self.0.len())
    }
}

impl From<Vec<u8>> for SecretPayload {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for SecretPayload {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<&str> for SecretPayload {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

impl From<String> for SecretPayload {
    fn from(text: String) -> Self {
        Self(text.into_bytes())
    }
}

/// Input for creating a new secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteRequest {
    pub namespace: Namespace,
    pub identifier: Identifier,
    pub secret: SecretPayload,
}

impl WriteRequest {
    pub fn new(
        namespace: impl Into<String>,
        identifier: impl Into<String>,
        secret: impl Into<SecretPayload>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            namespace: Namespace::new(namespace)?,
            identifier: Identifier::new(identifier)?,
            secret: secret.into(),
        })
    }
}

/// Input for fetching a single secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadRequest {
    pub namespace: Namespace,
    pub identifier: Identifier,
}

impl ReadRequest {
    pub fn new(
        namespace: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            namespace: Namespace::new(namespace)?,
            identifier: Identifier::new(identifier)?,
        })
    }
}

/// Secret returned by a read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadResult {
    pub secret: SecretPayload,
}

/// Input for replacing the payload of an existing secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    pub namespace: Namespace,
    pub identifier: Identifier,
    pub secret: SecretPayload,
}

impl UpdateRequest {
    pub fn new(
        namespace: impl Into<String>,
        identifier: impl Into<String>,
        secret: impl Into<SecretPayload>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            namespace: Namespace::new(namespace)?,
            identifier: Identifier::new(identifier)?,
            secret: secret.into(),
        })
    }
}

/// Input for removing a secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub namespace: Namespace,
    pub identifier: Identifier,
}

impl DeleteRequest {
    pub fn new(
        namespace: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            namespace: Namespace::new(namespace)?,
            identifier: Identifier::new(identifier)?,
        })
    }
}

/// Input for enumerating the secrets of a namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub namespace: Namespace,
}

impl ListRequest {
    pub fn new(namespace: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            namespace: Namespace::new(namespace)?,
        })
    }
}

/// One row of a list result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntry {
    pub namespace: String,
    pub identifier: String,
    pub secret: String,
}

/// Entries in the order the store returned them.
pub type ListResult = Vec<ListEntry>;
