//! Keystash Core - keychain-backed credential store adapters.
//!
//! This crate turns typed credential requests (namespace, identifier, secret)
//! into keychain attribute queries, hands them to an injectable low-level
//! store operation and maps the store's status codes into [`KeychainError`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use keystash_core::{
//!     config::KeychainConfig,
//!     credentials::{CredentialReader, CredentialWriter, ReadRequest, WriteRequest},
//!     keychain::KeychainClient,
//! };
//!
//! let client = KeychainClient::from_config(&KeychainConfig::from_env()?);
//! client.write(&WriteRequest::new("example.application.com", "alice", "hunter2")?)?;
//! let result = client.read(&ReadRequest::new("example.application.com", "alice")?)?;
//! ```

pub mod config;
pub mod constants;
pub mod credentials;
pub mod errors;
pub mod keychain;

// Re-export error types
pub use errors::KeychainError;
pub use errors::Result;
