//! Credentials module - domain models and capability traits.

mod credentials_model;
mod credentials_traits;

#[cfg(test)]
mod credentials_model_tests;

pub use credentials_model::{
    DeleteRequest, Identifier, ListEntry, ListRequest, ListResult, Namespace, ReadRequest,
    ReadResult, SecretPayload, UpdateRequest, WriteRequest,
};
pub use credentials_traits::{
    CredentialClient, CredentialDeleter, CredentialLister, CredentialReader, CredentialUpdater,
    CredentialWriter,
};
