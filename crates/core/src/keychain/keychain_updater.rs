use std::sync::Arc;

use log::debug;

use super::keychain_operations::UpdateOperation;
use super::keychain_query::{build_identity_query, build_update_attributes};
use super::keychain_status::check_status;
use super::keyring_store::KeyringKeychain;
use crate::credentials::{CredentialUpdater, UpdateRequest};
use crate::errors::Result;

/// Replaces the secret of an existing keychain item through an
/// [`UpdateOperation`].
pub struct KeychainUpdater {
    operation: Arc<dyn UpdateOperation>,
}

impl KeychainUpdater {
    /// Updater bound to the platform keyring.
    pub fn new() -> Self {
        Self::with_operation(Arc::new(KeyringKeychain::new()))
    }

    pub fn with_operation(operation: Arc<dyn UpdateOperation>) -> Self {
        Self { operation }
    }
}

impl Default for KeychainUpdater {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialUpdater for KeychainUpdater {
    fn update(&self, request: &UpdateRequest) -> Result<()> {
        let query = build_identity_query(&request.namespace, &request.identifier);
        let attributes = build_update_attributes(&request.secret);
        debug!(
            "Updating keychain item service={} account={}",
            query.service, query.account
        );

        let status = self.operation.update(&query, &attributes);
        check_status(status)
    }
}
