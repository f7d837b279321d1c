//! Credential capability traits.
//!
//! Each trait is one capability of a secure credential store. Adapters
//! implement exactly one of them; the client facade implements all five.

use super::credentials_model::{
    DeleteRequest, ListRequest, ListResult, ReadRequest, ReadResult, UpdateRequest, WriteRequest,
};
use crate::errors::Result;

/// Creates secrets. Writing an identifier that already exists is an error.
pub trait CredentialWriter: Send + Sync {
    fn write(&self, request: &WriteRequest) -> Result<()>;
}

/// Fetches the secret stored under a namespace and identifier.
pub trait CredentialReader: Send + Sync {
    fn read(&self, request: &ReadRequest) -> Result<ReadResult>;
}

/// Replaces the payload of an existing secret in place.
pub trait CredentialUpdater: Send + Sync {
    fn update(&self, request: &UpdateRequest) -> Result<()>;
}

/// Removes a secret.
pub trait CredentialDeleter: Send + Sync {
    fn delete(&self, request: &DeleteRequest) -> Result<()>;
}

/// Enumerates the secrets of a namespace.
pub trait CredentialLister: Send + Sync {
    /// Lists up to the configured match limit of entries, in store order.
    fn list(&self, request: &ListRequest) -> Result<ListResult>;
}

/// Every capability behind a single dependency.
pub trait CredentialClient:
    CredentialWriter + CredentialReader + CredentialUpdater + CredentialDeleter + CredentialLister
{
}

impl<T> CredentialClient for T where
    T: CredentialWriter
        + CredentialReader
        + CredentialUpdater
        + CredentialDeleter
        + CredentialLister
{
}
