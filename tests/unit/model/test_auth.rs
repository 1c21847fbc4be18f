use chrono::{Duration, Utc};
use skills_client::error::AppError;
use skills_client::model::auth::{AccessToken, TokenResponse};

#[test]
fn test_token_response_into_token() {
    let response: TokenResponse = serde_json::from_str(
        r#"{"access_token":"abc","expires_in":3600,"token_type":"Bearer","scope":"emsi_open"}"#,
    )
    .unwrap();

    let token = response.into_token().unwrap();
    assert_eq!(token.access_token, "abc");
    assert_eq!(token.expires_in, 3600);
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.scope.as_deref(), Some("emsi_open"));
    assert!(!token.is_nominally_expired());
}

#[test]
fn test_token_response_defaults() {
    let response: TokenResponse = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
    let token = response.into_token().unwrap();
    assert_eq!(token.expires_in, 3600);
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.scope, None);
}

#[test]
fn test_token_response_missing_token() {
    let response: TokenResponse = serde_json::from_str(r#"{"access_token":""}"#).unwrap();
    assert!(matches!(response.into_token(), Err(AppError::TokenResponse(_))));
}

#[test]
fn test_access_token_nominal_expiry() {
    let token = AccessToken {
        access_token: "abc".to_string(),
        token_type: "Bearer".to_string(),
        expires_in: 60,
        scope: None,
        issued_at: Utc::now() - Duration::seconds(120),
    };
    assert!(token.is_nominally_expired());
    assert!(token.age() >= Duration::seconds(120));
}

#[test]
fn test_access_token_huge_lifetime_does_not_expire() {
    let response: TokenResponse = serde_json::from_str(&format!(
        r#"{{"access_token":"abc","expires_in":{}}}"#,
        u64::MAX
    ))
    .unwrap();
    let mut token = response.into_token().unwrap();
    assert_eq!(token.expires_in, u64::MAX);
    assert!(!token.is_nominally_expired());

    token.expires_in = i64::MAX as u64;
    token.issued_at = Utc::now() - Duration::days(365);
    assert!(!token.is_nominally_expired());
}
