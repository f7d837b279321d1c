use std::sync::Arc;

use super::keychain_deleter::KeychainDeleter;
use super::keychain_lister::KeychainLister;
use super::keychain_operations::KeychainStore;
use super::keychain_reader::KeychainReader;
use super::keychain_updater::KeychainUpdater;
use super::keychain_writer::KeychainWriter;
use super::keyring_store::KeyringKeychain;
use crate::config::KeychainConfig;
use crate::credentials::{
    CredentialDeleter, CredentialLister, CredentialReader, CredentialUpdater, CredentialWriter,
    DeleteRequest, ListRequest, ListResult, ReadRequest, ReadResult, UpdateRequest, WriteRequest,
};
use crate::errors::Result;

/// Single entry point over the five credential capabilities.
///
/// Every call is forwarded as-is to the capability it belongs to.
#[derive(Clone)]
pub struct KeychainClient {
    writer: Arc<dyn CredentialWriter>,
    reader: Arc<dyn CredentialReader>,
    updater: Arc<dyn CredentialUpdater>,
    deleter: Arc<dyn CredentialDeleter>,
    lister: Arc<dyn CredentialLister>,
}

impl KeychainClient {
    pub fn new(
        writer: Arc<dyn CredentialWriter>,
        reader: Arc<dyn CredentialReader>,
        updater: Arc<dyn CredentialUpdater>,
        deleter: Arc<dyn CredentialDeleter>,
        lister: Arc<dyn CredentialLister>,
    ) -> Self {
        Self {
            writer,
            reader,
            updater,
            deleter,
            lister,
        }
    }

    /// Client backed by the platform keyring.
    pub fn from_config(config: &KeychainConfig) -> Self {
        Self::with_store(Arc::new(KeyringKeychain::new()), config)
    }

    /// Client whose adapters all share `store`.
    pub fn with_store<S>(store: Arc<S>, config: &KeychainConfig) -> Self
    where
        S: KeychainStore + 'static,
    {
        Self::new(
            Arc::new(KeychainWriter::with_operation(store.clone())),
            Arc::new(KeychainReader::with_operation(store.clone())),
            Arc::new(KeychainUpdater::with_operation(store.clone())),
            Arc::new(KeychainDeleter::with_operation(store.clone())),
            Arc::new(
                KeychainLister::with_operation(store).with_match_limit(config.list_match_limit),
            ),
        )
    }
}

impl CredentialWriter for KeychainClient {
    fn write(&self, request: &WriteRequest) -> Result<()> {
        self.writer.write(request)
    }
}

impl CredentialReader for KeychainClient {
    fn read(&self, request: &ReadRequest) -> Result<ReadResult> {
        self.reader.read(request)
    }
}

impl CredentialUpdater for KeychainClient {
    fn update(&self, request: &UpdateRequest) -> Result<()> {
        self.updater.update(request)
    }
}

impl CredentialDeleter for KeychainClient {
    fn delete(&self, request: &DeleteRequest) -> Result<()> {
        self.deleter.delete(request)
    }
}

impl CredentialLister for KeychainClient {
    fn list(&self, request: &ListRequest) -> Result<ListResult> {
        self.lister.list(request)
    }
}
