//! Platform keychain backed by the operating system keyring.
//!
//! Items map to keyring entries with the namespace as service and the
//! identifier as user. The keyring cannot enumerate entries, so every
//! namespace also keeps an index entry (JSON array of identifiers, in
//! insertion order) under a reserved identifier; listing walks that index.
//!
//! Item writes and the index edit that goes with them run under one
//! process-wide lock. Processes sharing the same keyring are not
//! coordinated: two of them adding to one namespace at the same time can
//! still drop an identifier from the index.

use std::sync::{Mutex, PoisonError};

use keyring::Entry;
use log::{debug, warn};

use super::keychain_operations::{
    DeleteOperation, ListOperation, ReadOperation, UpdateOperation, WriteOperation,
};
use super::keychain_query::{AddQuery, ItemQuery, ListQuery, ReadQuery, UpdateAttributes};
use super::keychain_status::StatusCode;
use super::keychain_value::{AttributeKey, Record, StoreValue};
use crate::constants::NAMESPACE_INDEX_IDENTIFIER;

type StoreResult<T> = std::result::Result<T, StatusCode>;

static INDEX_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` while holding the index lock. The guarded data is `()`, so a
/// poisoned lock is still safe to take.
fn with_index_lock<T>(f: impl FnOnce() -> T) -> T {
    let _guard = INDEX_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    f()
}

impl From<keyring::Error> for StatusCode {
    fn from(err: keyring::Error) -> Self {
        match err {
            keyring::Error::NoEntry => StatusCode::ITEM_NOT_FOUND,
            keyring::Error::NoStorageAccess(_) => StatusCode::NOT_AVAILABLE,
            keyring::Error::BadEncoding(_) => StatusCode::DECODE,
            keyring::Error::TooLong(_, _) | keyring::Error::Invalid(_, _) => StatusCode::PARAM,
            keyring::Error::Ambiguous(_) => StatusCode::DUPLICATE_ITEM,
            other => {
                warn!("Keyring platform failure: {}", other);
                StatusCode::INTERNAL_ERROR
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct KeyringKeychain;

impl KeyringKeychain {
    pub fn new() -> Self {
        Self
    }

    fn add_item(&self, query: &AddQuery) -> StoreResult<()> {
        let entry = item_entry(&query.item)?;
        let password = password_text(&query.value)?;

        with_index_lock(|| -> StoreResult<()> {
            match entry.get_password() {
                Ok(_) => return Err(StatusCode::DUPLICATE_ITEM),
                Err(keyring::Error::NoEntry) => {}
                Err(err) => return Err(err.into()),
            }
            entry.set_password(password)?;

            let indexed = update_index(&query.item.service, |accounts| {
                if !accounts.iter().any(|a| a == &query.item.account) {
                    accounts.push(query.item.account.clone());
                }
            });
            if let Err(status) = indexed {
                // An unindexed item could never be listed; undo the write.
                warn!(
                    "Failed to index new item, removing it (service={} status={})",
                    query.item.service, status
                );
                if let Err(err) = entry.delete_password() {
                    warn!("Failed to remove unindexed item: {}", err);
                }
                return Err(status);
            }
            Ok(())
        })
    }

    fn copy_item(&self, query: &ReadQuery) -> StoreResult<Option<StoreValue>> {
        let entry = item_entry(&query.item)?;
        let password = entry.get_password()?;

        Ok(query
            .return_data
            .then(|| StoreValue::Data(password.into_bytes())))
    }

    fn copy_items(&self, query: &ListQuery) -> StoreResult<StoreValue> {
        let accounts = load_index(&query.service)?;
        let limit = query.match_limit.as_count();
        let mut records = Vec::new();

        for account in accounts {
            if records.len() >= limit {
                break;
            }

            let entry = Entry::new(&query.service, &account)?;
            let password = match entry.get_password() {
                Ok(password) => password,
                Err(keyring::Error::NoEntry) => {
                    debug!(
                        "Skipping stale index entry service={} account={}",
                        query.service, account
                    );
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            let mut record = Record::new();
            if query.return_attributes {
                record.insert(
                    AttributeKey::Class,
                    StoreValue::Text(query.class.as_str().to_string()),
                );
                record.insert(AttributeKey::Service, StoreValue::Text(query.service.clone()));
                record.insert(AttributeKey::Account, StoreValue::Text(account));
            }
            if query.return_data {
                record.insert(AttributeKey::Value, StoreValue::Data(password.into_bytes()));
            }
            records.push(StoreValue::Record(record));
        }

        if records.is_empty() {
            return Err(StatusCode::ITEM_NOT_FOUND);
        }
        Ok(StoreValue::Array(records))
    }

    fn update_item(&self, query: &ItemQuery, attributes: &UpdateAttributes) -> StoreResult<()> {
        let entry = item_entry(query)?;
        let password = password_text(&attributes.value)?;

        entry.get_password()?;
        entry.set_password(password)?;
        Ok(())
    }

    fn delete_item(&self, query: &ItemQuery) -> StoreResult<()> {
        let entry = item_entry(query)?;

        with_index_lock(|| -> StoreResult<()> {
            entry.delete_password()?;

            // Stale index entries are skipped when listing.
            if let Err(status) = update_index(&query.service, |accounts| {
                accounts.retain(|a| a != &query.account);
            }) {
                warn!(
                    "Deleted item but failed to unindex it (service={} status={})",
                    query.service, status
                );
            }
            Ok(())
        })
    }
}

impl WriteOperation for KeyringKeychain {
    fn add(&self, query: &AddQuery) -> StatusCode {
        into_status(self.add_item(query))
    }
}

impl ReadOperation for KeyringKeychain {
    fn copy_matching(&self, query: &ReadQuery, result: &mut Option<StoreValue>) -> StatusCode {
        match self.copy_item(query) {
            Ok(value) => {
                *result = value;
                StatusCode::SUCCESS
            }
            Err(status) => status,
        }
    }
}

impl ListOperation for KeyringKeychain {
    fn copy_all_matching(
        &self,
        query: &ListQuery,
        result: &mut Option<StoreValue>,
    ) -> StatusCode {
        match self.copy_items(query) {
            Ok(value) => {
                *result = Some(value);
                StatusCode::SUCCESS
            }
            Err(status) => status,
        }
    }
}

impl UpdateOperation for KeyringKeychain {
    fn update(&self, query: &ItemQuery, attributes: &UpdateAttributes) -> StatusCode {
        into_status(self.update_item(query, attributes))
    }
}

impl DeleteOperation for KeyringKeychain {
    fn delete(&self, query: &ItemQuery) -> StatusCode {
        into_status(self.delete_item(query))
    }
}

fn into_status(result: StoreResult<()>) -> StatusCode {
    result.err().unwrap_or(StatusCode::SUCCESS)
}

fn item_entry(query: &ItemQuery) -> StoreResult<Entry> {
    if query.account == NAMESPACE_INDEX_IDENTIFIER {
        return Err(StatusCode::PARAM);
    }
    Ok(Entry::new(&query.service, &query.account)?)
}

/// The keyring stores text passwords only.
fn password_text(value: &[u8]) -> StoreResult<&str> {
    std::str::from_utf8(value).map_err(|_| StatusCode::PARAM)
}

fn load_index(service: &str) -> StoreResult<Vec<String>> {
    let entry = Entry::new(service, NAMESPACE_INDEX_IDENTIFIER)?;
    match entry.get_password() {
        Ok(raw) => serde_json::from_str(&raw).map_err(|err| {
            warn!("Corrupt keychain index for service={}: {}", service, err);
            StatusCode::DECODE
        }),
        Err(keyring::Error::NoEntry) => Ok(Vec::new()),
        Err(err) => Err(err.into()),
    }
}

fn update_index<F>(service: &str, edit: F) -> StoreResult<()>
where
    F: FnOnce(&mut Vec<String>),
{
    let mut accounts = load_index(service)?;
    edit(&mut accounts);

    let entry = Entry::new(service, NAMESPACE_INDEX_IDENTIFIER)?;
    if accounts.is_empty() {
        return match entry.delete_password() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(err.into()),
        };
    }

    let raw = serde_json::to_string(&accounts).map_err(|_| StatusCode::INTERNAL_ERROR)?;
    entry.set_password(&raw)?;
    Ok(())
}
