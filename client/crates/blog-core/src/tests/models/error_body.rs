use crate::ErrorBody;

#[test]
fn test_string_detail_is_message() {
    let body = ErrorBody::from_slice(br#"{"detail":"Email exists"}"#);
    assert_eq!(body.message(), Some("Email exists"));
}

#[test]
fn test_structured_detail_is_not_a_message() {
    let body = ErrorBody::from_slice(
        br#"{"detail":[{"loc":["query","email"],"msg":"field required"}]}"#,
    );
    assert!(body.detail.is_some());
    assert_eq!(body.message(), None);
}

#[test]
fn test_empty_detail_is_not_a_message() {
    let body = ErrorBody::from_slice(br#"{"detail":""}"#);
    assert_eq!(body.message(), None);
}

#[test]
fn test_non_json_body_is_empty() {
    let body = ErrorBody::from_slice(b"Internal Server Error");
    assert!(body.detail.is_none());
}

#[test]
fn test_empty_body_is_empty() {
    let body = ErrorBody::from_slice(b"");
    assert_eq!(body.message(), None);
}
