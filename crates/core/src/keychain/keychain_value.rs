//! Untyped values exchanged with the store, and their fallible decoding.

use std::collections::BTreeMap;
use std::fmt;

use crate::credentials::{ListEntry, ListResult, SecretPayload};
use crate::errors::{KeychainError, Result};

/// Attribute keys understood by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeKey {
    Class,
    Service,
    Account,
    Value,
    MatchLimit,
    ReturnData,
    ReturnAttributes,
}

impl AttributeKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKey::Class => "class",
            AttributeKey::Service => "service",
            AttributeKey::Account => "account",
            AttributeKey::Value => "value",
            AttributeKey::MatchLimit => "match_limit",
            AttributeKey::ReturnData => "return_data",
            AttributeKey::ReturnAttributes => "return_attributes",
        }
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value as the store hands it over: nothing about its shape is
/// guaranteed until it has been decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreValue {
    Data(Vec<u8>),
    Text(String),
    Bool(bool),
    Integer(i64),
    Record(Record),
    Array(Vec<StoreValue>),
}

impl StoreValue {
    pub fn as_data(&self) -> Option<&[u8]> {
        match self {
            StoreValue::Data(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StoreValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StoreValue::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            StoreValue::Integer(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            StoreValue::Record(record) => Some(record),
            _ => None,
        }
    }
}

/// Attribute record of a single stored item.
pub type Record = BTreeMap<AttributeKey, StoreValue>;

/// Generic attribute mapping of a query.
pub type Attributes = BTreeMap<AttributeKey, StoreValue>;

/// Decodes the payload of a successful read into secret bytes.
pub fn decode_secret(slot: Option<StoreValue>) -> Result<SecretPayload> {
    match slot {
        Some(StoreValue::Data(bytes)) => Ok(SecretPayload::new(bytes)),
        _ => Err(KeychainError::InvalidItemFormat),
    }
}

/// Decodes the payload of a successful list into at most `limit` entries,
/// failing the whole batch on the first malformed record within the limit.
pub fn decode_entries(slot: Option<StoreValue>, limit: usize) -> Result<ListResult> {
    let items = match slot {
        Some(StoreValue::Array(items)) => items,
        _ => return Err(KeychainError::InvalidItemFormat),
    };

    items
        .iter()
        .take(limit)
        .map(|item| {
            item.as_record()
                .ok_or(KeychainError::InvalidItemFormat)
                .and_then(decode_entry)
        })
        .collect()
}

fn decode_entry(record: &Record) -> Result<ListEntry> {
    let text = |key: AttributeKey| {
        record
            .get(&key)
            .and_then(StoreValue::as_text)
            .map(str::to_string)
            .ok_or(KeychainError::InvalidItemFormat)
    };

    let namespace = text(AttributeKey::Service)?;
    let identifier = text(AttributeKey::Account)?;
    let secret = record
        .get(&AttributeKey::Value)
        .and_then(StoreValue::as_data)
        .ok_or(KeychainError::InvalidItemFormat)
        .and_then(|bytes| {
            String::from_utf8(bytes.to_vec()).map_err(|_| KeychainError::InvalidItemFormat)
        })?;

    Ok(ListEntry {
        namespace,
        identifier,
        secret,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(service: &str, account: &str, value: &[u8]) -> StoreValue {
        StoreValue::Record(Record::from([
            (AttributeKey::Service, StoreValue::Text(service.to_string())),
            (AttributeKey::Account, StoreValue::Text(account.to_string())),
            (AttributeKey::Value, StoreValue::Data(value.to_vec())),
        ]))
    }

    #[test]
    fn decode_secret_accepts_data() {
        let secret = decode_secret(Some(StoreValue::Data(b"pw".to_vec()))).unwrap();
        assert_eq!(secret.as_bytes(), b"pw");
    }

    #[test]
    fn decode_secret_rejects_other_shapes() {
        for slot in [
            None,
            Some(StoreValue::Text("pw".to_string())),
            Some(StoreValue::Integer(1)),
            Some(StoreValue::Array(vec![])),
        ] {
            assert_eq!(decode_secret(slot), Err(KeychainError::InvalidItemFormat));
        }
    }

    #[test]
    fn decode_entries_keeps_order() {
        let slot = StoreValue::Array(vec![
            record("svc", "b", b"2"),
            record("svc", "a", b"1"),
        ]);
        let entries = decode_entries(Some(slot), 10).unwrap();
        let identifiers: Vec<_> = entries.iter().map(|e| e.identifier.as_str()).collect();
        assert_eq!(identifiers, vec!["b", "a"]);
        assert_eq!(entries[0].secret, "2");
    }

    #[test]
    fn decode_entries_stops_at_limit() {
        let slot = StoreValue::Array(vec![
            record("svc", "a", b"1"),
            record("svc", "b", b"2"),
            record("svc", "c", &[0xff]),
        ]);
        let entries = decode_entries(Some(slot), 2).unwrap();
        let identifiers: Vec<_> = entries.iter().map(|e| e.identifier.as_str()).collect();
        assert_eq!(identifiers, vec!["a", "b"]);
    }

    #[test]
    fn decode_entries_accepts_empty_array() {
        assert_eq!(decode_entries(Some(StoreValue::Array(vec![])), 5), Ok(vec![]));
    }

    #[test]
    fn decode_entries_fails_fast_on_bad_record() {
        let slot = StoreValue::Array(vec![
            record("svc", "a", b"1"),
            record("svc", "b", &[0xff, 0xfe]),
        ]);
        assert_eq!(
            decode_entries(Some(slot), 5),
            Err(KeychainError::InvalidItemFormat)
        );
    }

    #[test]
    fn decode_entries_rejects_missing_fields_and_non_records() {
        let missing_account = StoreValue::Record(Record::from([
            (AttributeKey::Service, StoreValue::Text("svc".to_string())),
            (AttributeKey::Value, StoreValue::Data(b"1".to_vec())),
        ]));
        assert_eq!(
            decode_entries(Some(StoreValue::Array(vec![missing_account])), 5),
            Err(KeychainError::InvalidItemFormat)
        );
        assert_eq!(
            decode_entries(Some(StoreValue::Array(vec![StoreValue::Bool(true)])), 5),
            Err(KeychainError::InvalidItemFormat)
        );
        assert_eq!(
            decode_entries(Some(record("svc", "a", b"1")), 5),
            Err(KeychainError::InvalidItemFormat)
        );
    }
}
