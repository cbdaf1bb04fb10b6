use super::*;

#[test]
fn endpoints_join_base_and_path() {
    assert_eq!(endpoint("/api", "/auth/login"), "/api/auth/login");
    assert_eq!(notification_read_endpoint("/api", "17"), "/api/notifications/17/read");
    assert_eq!(user_endpoint("https://x.test", "5"), "https://x.test/auth/users/5");
    assert_eq!(user_approve_endpoint("/api", "5"), "/api/auth/users/5/approve");
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("abc"), "Bearer abc");
}

#[test]
fn request_failed_message_prefers_backend_message() {
    assert_eq!(request_failed_message(400, r#"{"message":"Invalid code"}"#), "Invalid code");
    assert_eq!(request_failed_message(502, "<html>"), "Request failed with status code 502");
}

#[test]
fn parse_session_reads_token_and_user() {
    let body = r#"{"token":"T1","user":{"id":7,"name":"Ann","email":"a@x.test","role":"admin","approved":1}}"#;
    let session = parse_session(body).unwrap();
    assert_eq!(session.token, "T1");
    assert_eq!(session.user.id, "7");
    assert!(session.user.approved);
}

#[test]
fn parse_session_rejects_missing_user() {
    assert!(matches!(parse_session(r#"{"token":"T1"}"#), Err(ExchangeError::Malformed(_))));
}

#[test]
fn parse_session_rejects_empty_token() {
    let body = r#"{"token":"  ","user":{"id":"1"}}"#;
    assert!(matches!(parse_session(body), Err(ExchangeError::Malformed(_))));
}

#[test]
fn rejected_exchange_keeps_backend_message() {
    let err = rejected_exchange(403, r#"{"message":"Account disabled"}"#);
    assert_eq!(err, ExchangeError::Rejected { status: 403, message: Some("Account disabled".to_owned()) });
    assert_eq!(err.user_message("fallback"), "Account disabled");
}

#[test]
fn rejected_exchange_without_message_uses_status_line() {
    let err = rejected_exchange(500, "");
    assert_eq!(err.user_message("fallback"), "Request failed with status code 500");
}

#[tokio::test]
async fn native_exchange_fails_as_transport_error() {
    let backend = HttpExchange::new("/api");
    assert!(matches!(backend.exchange("id-token").await, Err(ExchangeError::Transport(_))));
}
