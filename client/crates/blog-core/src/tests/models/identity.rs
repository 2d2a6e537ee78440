use crate::{Identity, is_credential_key};

#[test]
fn test_identity_ignores_unknown_fields() {
    let json = r#"{"id":1,"username":"alice","email":"a@example.com","created_at":"x"}"#;
    let identity: Identity = serde_json::from_str(json).unwrap();

    assert_eq!(identity.username, "alice");
    assert_eq!(identity.email.as_deref(), Some("a@example.com"));
}

#[test]
fn test_identity_email_optional() {
    let identity: Identity = serde_json::from_str(r#"{"id":1,"username":"bob"}"#).unwrap();
    assert!(identity.email.is_none());
}

#[test]
fn test_credential_keys() {
    assert!(is_credential_key("token"));
    assert!(is_credential_key("access_token"));
    assert!(!is_credential_key("theme"));
}
