use std::sync::Arc;

use log::debug;

use super::keychain_operations::WriteOperation;
use super::keychain_query::build_write_query;
use super::keychain_status::check_status;
use super::keyring_store::KeyringKeychain;
use crate::credentials::{CredentialWriter, WriteRequest};
use crate::errors::Result;

/// Creates keychain items through a [`WriteOperation`].
///
/// Writing an identifier that already exists fails with the store's
/// duplicate status; there is no upsert.
pub struct KeychainWriter {
    operation: Arc<dyn WriteOperation>,
}

impl KeychainWriter {
    /// Writer bound to the platform keyring.
    pub fn new() -> Self {
        Self::with_operation(Arc::new(KeyringKeychain::new()))
    }

    pub fn with_operation(operation: Arc<dyn WriteOperation>) -> Self {
        Self { operation }
    }
}

impl Default for KeychainWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialWriter for KeychainWriter {
    fn write(&self, request: &WriteRequest) -> Result<()> {
        let query = build_write_query(&request.namespace, &request.identifier, &request.secret);
        debug!(
            "Adding keychain item service={} account={}",
            query.item.service, query.item.account
        );

        let status = self.operation.add(&query);
        check_status(status)
    }
}
