use std::sync::Arc;

use log::debug;

use super::keychain_operations::DeleteOperation;
use super::keychain_query::build_identity_query;
use super::keychain_status::check_status;
use super::keyring_store::KeyringKeychain;
use crate::credentials::{CredentialDeleter, DeleteRequest};
use crate::errors::Result;

/// Removes keychain items through a [`DeleteOperation`].
pub struct KeychainDeleter {
    operation: Arc<dyn DeleteOperation>,
}

impl KeychainDeleter {
    /// Deleter bound to the platform keyring.
    pub fn new() -> Self {
        Self::with_operation(Arc::new(KeyringKeychain::new()))
    }

    pub fn with_operation(operation: Arc<dyn DeleteOperation>) -> Self {
        Self { operation }
    }
}

impl Default for KeychainDeleter {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialDeleter for KeychainDeleter {
    fn delete(&self, request: &DeleteRequest) -> Result<()> {
        let query = build_identity_query(&request.namespace, &request.identifier);
        debug!(
            "Deleting keychain item service={} account={}",
            query.service, query.account
        );

        let status = self.operation.delete(&query);
        check_status(status)
    }
}
