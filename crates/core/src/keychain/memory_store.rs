//! In-process keychain.
//!
//! Mirrors the status semantics of the platform store without touching the
//! operating system, and journals every call it receives. Used by tests and
//! by embedders that only need a process-lifetime store.

use std::sync::{Mutex, RwLock};

use log::warn;

use super::keychain_operations::{
    DeleteOperation, ListOperation, ReadOperation, UpdateOperation, WriteOperation,
};
use super::keychain_query::{AddQuery, ItemQuery, ListQuery, Query, ReadQuery, UpdateAttributes};
use super::keychain_status::StatusCode;
use super::keychain_value::{AttributeKey, Record, StoreValue};

#[derive(Debug, Clone)]
struct StoredItem {
    service: String,
    account: String,
    value: Vec<u8>,
}

impl StoredItem {
    fn matches(&self, query: &ItemQuery) -> bool {
        self.service == query.service && self.account == query.account
    }
}

#[derive(Debug, Default)]
pub struct InMemoryKeychain {
    items: RwLock<Vec<StoredItem>>,
    calls: Mutex<Vec<Query>>,
}

impl InMemoryKeychain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call received so far, oldest first.
    pub fn calls(&self) -> Vec<Query> {
        match self.calls.lock() {
            Ok(calls) => calls.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn call_count(&self) -> usize {
        match self.calls.lock() {
            Ok(calls) => calls.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// Number of stored items across all services.
    pub fn len(&self) -> usize {
        match self.items.read() {
            Ok(items) => items.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn record(&self, query: Query) {
        match self.calls.lock() {
            Ok(mut calls) => calls.push(query),
            Err(poisoned) => poisoned.into_inner().push(query),
        }
    }
}

impl WriteOperation for InMemoryKeychain {
    fn add(&self, query: &AddQuery) -> StatusCode {
        self.record(Query::Add(query.clone()));

        let Ok(mut items) = self.items.write() else {
            warn!("In-memory keychain lock poisoned");
            return StatusCode::INTERNAL_ERROR;
        };

        if items.iter().any(|item| item.matches(&query.item)) {
            return StatusCode::DUPLICATE_ITEM;
        }

        items.push(StoredItem {
            service: query.item.service.clone(),
            account: query.item.account.clone(),
            value: query.value.clone(),
        });
        StatusCode::SUCCESS
    }
}

impl ReadOperation for InMemoryKeychain {
    fn copy_matching(&self, query: &ReadQuery, result: &mut Option<StoreValue>) -> StatusCode {
        self.record(Query::CopyMatching(query.clone()));

        let Ok(items) = self.items.read() else {
            warn!("In-memory keychain lock poisoned");
            return StatusCode::INTERNAL_ERROR;
        };

        match items.iter().find(|item| item.matches(&query.item)) {
            Some(item) => {
                if query.return_data {
                    *result = Some(StoreValue::Data(item.value.clone()));
                }
                StatusCode::SUCCESS
            }
            None => StatusCode::ITEM_NOT_FOUND,
        }
    }
}

impl ListOperation for InMemoryKeychain {
    fn copy_all_matching(
        &self,
        query: &ListQuery,
        result: &mut Option<StoreValue>,
    ) -> StatusCode {
        self.record(Query::CopyAllMatching(query.clone()));

        let Ok(items) = self.items.read() else {
            warn!("In-memory keychain lock poisoned");
            return StatusCode::INTERNAL_ERROR;
        };

        let records: Vec<StoreValue> = items
            .iter()
            .filter(|item| item.service == query.service)
            .take(query.match_limit.as_count())
            .map(|item| StoreValue::Record(item_record(item, query)))
            .collect();

        if records.is_empty() {
            return StatusCode::ITEM_NOT_FOUND;
        }

        *result = Some(StoreValue::Array(records));
        StatusCode::SUCCESS
    }
}

impl UpdateOperation for InMemoryKeychain {
    fn update(&self, query: &ItemQuery, attributes: &UpdateAttributes) -> StatusCode {
        self.record(Query::Update(query.clone(), attributes.clone()));

        let Ok(mut items) = self.items.write() else {
            warn!("In-memory keychain lock poisoned");
            return StatusCode::INTERNAL_ERROR;
        };

        match items.iter_mut().find(|item| item.matches(query)) {
            Some(item) => {
                item.value = attributes.value.clone();
                StatusCode::SUCCESS
            }
            None => StatusCode::ITEM_NOT_FOUND,
        }
    }
}

impl DeleteOperation for InMemoryKeychain {
    fn delete(&self, query: &ItemQuery) -> StatusCode {
        self.record(Query::Delete(query.clone()));

        let Ok(mut items) = self.items.write() else {
            warn!("In-memory keychain lock poisoned");
            return StatusCode::INTERNAL_ERROR;
        };

        match items.iter().position(|item| item.matches(query)) {
            Some(index) => {
                items.remove(index);
                StatusCode::SUCCESS
            }
            None => StatusCode::ITEM_NOT_FOUND,
        }
    }
}

fn item_record(item: &StoredItem, query: &ListQuery) -> Record {
    let mut record = Record::new();
    if query.return_attributes {
        record.insert(
            AttributeKey::Class,
            StoreValue::Text(query.class.as_str().to_string()),
        );
        record.insert(AttributeKey::Service, StoreValue::Text(item.service.clone()));
        record.insert(AttributeKey::Account, StoreValue::Text(item.account.clone()));
    }
    if query.return_data {
        record.insert(AttributeKey::Value, StoreValue::Data(item.value.clone()));
    }
    record
}
