//! Keychain module - query building, status translation, store operations
//! and the credential adapters built on them.

mod keychain_client;
mod keychain_deleter;
mod keychain_lister;
mod keychain_operations;
mod keychain_query;
mod keychain_reader;
mod keychain_status;
mod keychain_updater;
mod keychain_value;
mod keychain_writer;
mod keyring_store;
mod memory_store;



pub use keychain_client::KeychainClient;
pub use keychain_deleter::KeychainDeleter;
pub use keychain_lister::KeychainLister;
pub use keychain_operations::{
    DeleteOperation, KeychainStore, ListOperation, ReadOperation, UpdateOperation, WriteOperation,
};
pub use keychain_query::{
    build_identity_query, build_list_query, build_read_query, build_update_attributes,
    build_write_query, AddQuery, ItemClass, ItemQuery, ListQuery, MatchLimit, Query, ReadQuery,
    UpdateAttributes,
};
pub use keychain_reader::KeychainReader;
pub use keychain_status::{check_status, StatusCode};
pub use keychain_updater::KeychainUpdater;
pub use keychain_value::{
    decode_entries, decode_secret, AttributeKey, Attributes, Record, StoreValue,
};
pub use keychain_writer::KeychainWriter;
pub use keyring_store::KeyringKeychain;
pub use memory_store::InMemoryKeychain;
