//! Query builder.
//!
//! Every store call gets its own typed query so only the attributes legal
//! for that call can be set. Each query can still be rendered as the flat
//! attribute mapping the store contract is written in terms of.

use std::fmt;

use super::keychain_value::{AttributeKey, Attributes, StoreValue};
use crate::constants::GENERIC_PASSWORD_CLASS;
use crate::credentials::{Identifier, Namespace, SecretPayload};

/// Item class marker. Every item handled here is a generic password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ItemClass {
    #[default]
    GenericPassword,
}

impl ItemClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemClass::GenericPassword => GENERIC_PASSWORD_CLASS,
        }
    }
}

/// How many items a copy call may return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchLimit {
    One,
    Count(usize),
}

impl MatchLimit {
    pub fn as_count(&self) -> usize {
        match self {
            MatchLimit::One => 1,
            MatchLimit::Count(count) => *count,
        }
    }
}

/// Identity query: addresses exactly one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemQuery {
    pub class: ItemClass,
    pub service: String,
    pub account: String,
}

impl ItemQuery {
    pub fn attributes(&self) -> Attributes {
        Attributes::from([
            (
                AttributeKey::Class,
                StoreValue::Text(self.class.as_str().to_string()),
            ),
            (AttributeKey::Service, StoreValue::Text(self.service.clone())),
            (AttributeKey::Account, StoreValue::Text(self.account.clone())),
        ])
    }
}

/// Query for adding a new item.
#[derive(Clone, PartialEq, Eq)]
pub struct AddQuery {
    pub item: ItemQuery,
    pub value: Vec<u8>,
}

impl AddQuery {
    pub fn attributes(&self) -> Attributes {
        let mut attributes = self.item.attributes();
        attributes.insert(AttributeKey::Value, StoreValue::Data(self.value.clone()));
        attributes
    }
}

impl fmt::Debug for AddQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddQuery")
            .field("item", &self.item)
            .field("value", &format_args!("<{} bytes redacted>", self.value.len()))
            .finish()
    }
}

/// Query for copying the data of a single item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadQuery {
    pub item: ItemQuery,
    pub match_limit: MatchLimit,
    pub return_data: bool,
}

impl ReadQuery {
    pub fn attributes(&self) -> Attributes {
        let mut attributes = self.item.attributes();
        attributes.insert(
            AttributeKey::MatchLimit,
            StoreValue::Integer(self.match_limit.as_count() as i64),
        );
        attributes.insert(AttributeKey::ReturnData, StoreValue::Bool(self.return_data));
        attributes
    }
}

/// Query for copying every item of a service, up to a limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub class: ItemClass,
    pub service: String,
    pub match_limit: MatchLimit,
    pub return_attributes: bool,
    pub return_data: bool,
}

impl ListQuery {
    pub fn attributes(&self) -> Attributes {
        Attributes::from([
            (
                AttributeKey::Class,
                StoreValue::Text(self.class.as_str().to_string()),
            ),
            (AttributeKey::Service, StoreValue::Text(self.service.clone())),
            (
                AttributeKey::MatchLimit,
                StoreValue::Integer(self.match_limit.as_count() as i64),
            ),
            (
                AttributeKey::ReturnAttributes,
                StoreValue::Bool(self.return_attributes),
            ),
            (AttributeKey::ReturnData, StoreValue::Bool(self.return_data)),
        ])
    }
}

/// Replacement attributes for an update.
#[derive(Clone, PartialEq, Eq)]
pub struct UpdateAttributes {
    pub value: Vec<u8>,
}

impl UpdateAttributes {
    pub fn attributes(&self) -> Attributes {
        Attributes::from([(AttributeKey::Value, StoreValue::Data(self.value.clone()))])
    }
}

impl fmt::Debug for UpdateAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateAttributes")
            .field("value", &format_args!("<{} bytes redacted>", self.value.len()))
            .finish()
    }
}

/// One store call with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Add(AddQuery),
    CopyMatching(ReadQuery),
    CopyAllMatching(ListQuery),
    Update(ItemQuery, UpdateAttributes),
    Delete(ItemQuery),
}

impl Query {
    /// Attribute mapping of the (match) query.
    pub fn attributes(&self) -> Attributes {
        match self {
            Query::Add(query) => query.attributes(),
            Query::CopyMatching(query) => query.attributes(),
            Query::CopyAllMatching(query) => query.attributes(),
            Query::Update(query, _) => query.attributes(),
            Query::Delete(query) => query.attributes(),
        }
    }
}

pub fn build_identity_query(namespace: &Namespace, identifier: &Identifier) -> ItemQuery {
    ItemQuery {
        class: ItemClass::GenericPassword,
        service: namespace.as_str().to_string(),
        account: identifier.as_str().to_string(),
    }
}

pub fn build_write_query(
    namespace: &Namespace,
    identifier: &Identifier,
    secret: &SecretPayload,
) -> AddQuery {
    AddQuery {
        item: build_identity_query(namespace, identifier),
        value: secret.as_bytes().to_vec(),
    }
}

pub fn build_read_query(namespace: &Namespace, identifier: &Identifier) -> ReadQuery {
    ReadQuery {
        item: build_identity_query(namespace, identifier),
        match_limit: MatchLimit::One,
        return_data: true,
    }
}

pub fn build_list_query(namespace: &Namespace, match_limit: usize) -> ListQuery {
    ListQuery {
        class: ItemClass::GenericPassword,
        service: namespace.as_str().to_string(),
        match_limit: MatchLimit::Count(match_limit),
        return_attributes: true,
        return_data: true,
    }
}

pub fn build_update_attributes(secret: &SecretPayload) -> UpdateAttributes {
    UpdateAttributes {
        value: secret.as_bytes().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn namespace() -> Namespace {
        Namespace::new("svc").unwrap()
    }

    fn identifier() -> Identifier {
        Identifier::new("acct").unwrap()
    }

    fn text(value: &str) -> StoreValue {
        StoreValue::Text(value.to_string())
    }

    #[test]
    fn identity_query_has_class_service_and_account() {
        let attributes = build_identity_query(&namespace(), &identifier()).attributes();
        assert_eq!(
            attributes,
            Attributes::from([
                (AttributeKey::Class, text(GENERIC_PASSWORD_CLASS)),
                (AttributeKey::Service, text("svc")),
                (AttributeKey::Account, text("acct")),
            ])
        );
    }

    #[test]
    fn write_query_adds_the_value() {
        let secret = SecretPayload::from("pw");
        let attributes = build_write_query(&namespace(), &identifier(), &secret).attributes();
        assert_eq!(attributes.len(), 4);
        assert_eq!(
            attributes.get(&AttributeKey::Value),
            Some(&StoreValue::Data(b"pw".to_vec()))
        );
    }

    #[test]
    fn read_query_asks_for_one_item_with_data() {
        let query = build_read_query(&namespace(), &identifier());
        assert_eq!(query.match_limit, MatchLimit::One);
        let attributes = query.attributes();
        assert_eq!(
            attributes.get(&AttributeKey::MatchLimit),
            Some(&StoreValue::Integer(1))
        );
        assert_eq!(
            attributes.get(&AttributeKey::ReturnData),
            Some(&StoreValue::Bool(true))
        );
        assert!(!attributes.contains_key(&AttributeKey::Value));
    }

    #[test]
    fn list_query_is_namespace_scoped() {
        let attributes = build_list_query(&namespace(), 5).attributes();
        assert!(!attributes.contains_key(&AttributeKey::Account));
        assert_eq!(attributes.get(&AttributeKey::Service), Some(&text("svc")));
        assert_eq!(
            attributes.get(&AttributeKey::MatchLimit),
            Some(&StoreValue::Integer(5))
        );
        assert_eq!(
            attributes.get(&AttributeKey::ReturnAttributes),
            Some(&StoreValue::Bool(true))
        );
        assert_eq!(
            attributes.get(&AttributeKey::ReturnData),
            Some(&StoreValue::Bool(true))
        );
    }

    #[test]
    fn update_attributes_only_carry_the_value() {
        let attributes = build_update_attributes(&SecretPayload::from("new")).attributes();
        assert_eq!(
            attributes,
            Attributes::from([(AttributeKey::Value, StoreValue::Data(b"new".to_vec()))])
        );
    }

    #[test]
    fn debug_output_redacts_values() {
        let secret = SecretPayload::from("hunter2");
        let query = build_write_query(&namespace(), &identifier(), &secret);
        assert!(!format!("{:?}", query).contains("hunter2"));
        assert!(!format!("{:?}", build_update_attributes(&secret)).contains("hunter2"));
    }
}
