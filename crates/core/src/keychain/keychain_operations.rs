//! Low-level store operations.
//!
//! These traits are the only place where the adapters touch the secret
//! store. Each adapter receives one operation at construction time; the
//! platform keyring is the default, and any closure with the matching
//! signature can stand in for it.

use super::keychain_query::{AddQuery, ItemQuery, ListQuery, ReadQuery, UpdateAttributes};
use super::keychain_status::StatusCode;
use super::keychain_value::StoreValue;

/// Adds a new item.
pub trait WriteOperation: Send + Sync {
    fn add(&self, query: &AddQuery) -> StatusCode;
}

/// Copies the data of the single item matching `query` into `result`.
pub trait ReadOperation: Send + Sync {
    fn copy_matching(&self, query: &ReadQuery, result: &mut Option<StoreValue>) -> StatusCode;
}

/// Copies the attribute records of every item matching `query` into
/// `result`, as a [`StoreValue::Array`] in store order.
pub trait ListOperation: Send + Sync {
    fn copy_all_matching(&self, query: &ListQuery, result: &mut Option<StoreValue>)
        -> StatusCode;
}

/// Replaces the attributes of the item matching `query`.
pub trait UpdateOperation: Send + Sync {
    fn update(&self, query: &ItemQuery, attributes: &UpdateAttributes) -> StatusCode;
}

/// Removes the item matching `query`.
pub trait DeleteOperation: Send + Sync {
    fn delete(&self, query: &ItemQuery) -> StatusCode;
}

impl<F> WriteOperation for F
where
    F: Fn(&AddQuery) -> StatusCode + Send + Sync,
{
    fn add(&self, query: &AddQuery) -> StatusCode {
        self(query)
    }
}

impl<F> ReadOperation for F
where
    F: Fn(&ReadQuery, &mut Option<StoreValue>) -> StatusCode + Send + Sync,
{
    fn copy_matching(&self, query: &ReadQuery, result: &mut Option<StoreValue>) -> StatusCode {
        self(query, result)
    }
}

impl<F> ListOperation for F
where
    F: Fn(&ListQuery, &mut Option<StoreValue>) -> StatusCode + Send + Sync,
{
    fn copy_all_matching(
        &self,
        query: &ListQuery,
        result: &mut Option<StoreValue>,
    ) -> StatusCode {
        self(query, result)
    }
}

impl<F> UpdateOperation for F
where
    F: Fn(&ItemQuery, &UpdateAttributes) -> StatusCode + Send + Sync,
{
    fn update(&self, query: &ItemQuery, attributes: &UpdateAttributes) -> StatusCode {
        self(query, attributes)
    }
}

impl<F> DeleteOperation for F
where
    F: Fn(&ItemQuery) -> StatusCode + Send + Sync,
{
    fn delete(&self, query: &ItemQuery) -> StatusCode {
        self(query)
    }
}

/// A store that supports every operation.
pub trait KeychainStore:
    WriteOperation + ReadOperation + ListOperation + UpdateOperation + DeleteOperation
{
}

impl<T> KeychainStore for T where
    T: WriteOperation + ReadOperation + ListOperation + UpdateOperation + DeleteOperation
{
}
