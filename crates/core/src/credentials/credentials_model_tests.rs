//! Tests for credential domain models.

#[cfg(test)]
mod tests {
    use crate::credentials::{
        DeleteRequest, Identifier, ListEntry, ListRequest, Namespace, ReadRequest, SecretPayload,
        UpdateRequest, WriteRequest,
    };
    use crate::errors::ValidationError;

    // ==================== Namespace / Identifier ====================

    #[test]
    fn test_namespace_rejects_empty() {
        assert_eq!(
            Namespace::new("").unwrap_err(),
            ValidationError::MissingField("namespace")
        );
    }

    #[test]
    fn test_identifier_rejects_empty() {
        assert_eq!(
            Identifier::new(String::new()).unwrap_err(),
            ValidationError::MissingField("identifier")
        );
    }

    #[test]
    fn test_values_are_kept_verbatim() {
        let namespace = Namespace::new("  svc.example.com ").unwrap();
        let identifier = Identifier::new("tester 0").unwrap();
        assert_eq!(namespace.as_str(), "  svc.example.com ");
        assert_eq!(identifier.to_string(), "tester 0");
    }

    #[test]
    fn test_namespace_deserialization_validates() {
        assert!(serde_json::from_str::<Namespace>("\"\"").is_err());
        let namespace: Namespace = serde_json::from_str("\"svc\"").unwrap();
        assert_eq!(namespace.as_str(), "svc");
    }

    // ==================== SecretPayload ====================

    #[test]
    fn test_secret_debug_is_redacted() {
        let secret = SecretPayload::from("hunter2");
        let rendered = format!("{:?}", secret);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("7 bytes"));
    }

    #[test]
    fn test_secret_keeps_raw_bytes() {
        let secret = SecretPayload::new(vec![0xff, 0x00, 0x61]);
        assert_eq!(secret.as_bytes(), &[0xff, 0x00, 0x61]);
        assert_eq!(secret.len(), 3);
        assert_eq!(secret.to_text_lossy(), "\u{fffd}\u{0}a");
    }

    // ==================== Requests ====================

    #[test]
    fn test_requests_validate_every_field() {
        assert!(WriteRequest::new("svc", "", "pw").is_err());
        assert!(WriteRequest::new("", "acct", "pw").is_err());
        assert!(ReadRequest::new("svc", "").is_err());
        assert!(UpdateRequest::new("", "acct", "pw").is_err());
        assert!(DeleteRequest::new("svc", "").is_err());
        assert!(ListRequest::new("").is_err());
    }

    #[test]
    fn test_write_request_allows_empty_secret() {
        let request = WriteRequest::new("svc", "acct", "").unwrap();
        assert!(request.secret.is_empty());
    }

    #[test]
    fn test_list_entry_serialization() {
        let entry = ListEntry {
            namespace: "svc".to_string(),
            identifier: "acct".to_string(),
            secret: "pw".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"namespace":"svc","identifier":"acct","secret":"pw"}"#
        );
    }
}
