use std::sync::Arc;

use log::debug;

use super::keychain_operations::ReadOperation;
use super::keychain_query::build_read_query;
use super::keychain_status::check_status;
use super::keychain_value::decode_secret;
use super::keyring_store::KeyringKeychain;
use crate::credentials::{CredentialReader, ReadRequest, ReadResult};
use crate::errors::Result;

/// Reads the secret of a single keychain item through a [`ReadOperation`].
pub struct KeychainReader {
    operation: Arc<dyn ReadOperation>,
}

impl KeychainReader {
    /// Reader bound to the platform keyring.
    pub fn new() -> Self {
        Self::with_operation(Arc::new(KeyringKeychain::new()))
    }

    pub fn with_operation(operation: Arc<dyn ReadOperation>) -> Self {
        Self { operation }
    }
}

impl Default for KeychainReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialReader for KeychainReader {
    fn read(&self, request: &ReadRequest) -> Result<ReadResult> {
        let query = build_read_query(&request.namespace, &request.identifier);
        debug!(
            "Copying keychain item service={} account={}",
            query.item.service, query.item.account
        );

        let mut item = None;
        let status = self.operation.copy_matching(&query, &mut item);
        check_status(status)?;

        let secret = decode_secret(item)?;
        Ok(ReadResult { secret })
    }
}
