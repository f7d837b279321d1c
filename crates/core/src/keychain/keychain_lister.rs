use std::sync::Arc;

use log::debug;

use super::keychain_operations::ListOperation;
use super::keychain_query::build_list_query;
use super::keychain_status::check_status;
use super::keychain_value::decode_entries;
use super::keyring_store::KeyringKeychain;
use crate::constants::DEFAULT_LIST_MATCH_LIMIT;
use crate::credentials::{CredentialLister, ListRequest, ListResult};
use crate::errors::Result;

/// Enumerates the items of a namespace through a [`ListOperation`].
pub struct KeychainLister {
    operation: Arc<dyn ListOperation>,
    match_limit: usize,
}

impl KeychainLister {
    /// Lister bound to the platform keyring, using the default match limit.
    pub fn new() -> Self {
        Self::with_operation(Arc::new(KeyringKeychain::new()))
    }

    pub fn with_operation(operation: Arc<dyn ListOperation>) -> Self {
        Self {
            operation,
            match_limit: DEFAULT_LIST_MATCH_LIMIT,
        }
    }

    /// Sets the match limit. A lister always asks for at least one entry.
    pub fn with_match_limit(mut self, match_limit: usize) -> Self {
        self.match_limit = match_limit.max(1);
        self
    }

    pub fn match_limit(&self) -> usize {
        self.match_limit
    }
}

impl Default for KeychainLister {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialLister for KeychainLister {
    fn list(&self, request: &ListRequest) -> Result<ListResult> {
        let query = build_list_query(&request.namespace, self.match_limit);
        debug!(
            "Listing keychain items service={} limit={}",
            query.service, self.match_limit
        );

        let mut items = None;
        let status = self.operation.copy_all_matching(&query, &mut items);
        check_status(status)?;

        decode_entries(items, self.match_limit)
    }
}
