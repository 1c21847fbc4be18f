use reqwest::StatusCode;
use skills_client::error::AppError;

#[test]
fn test_app_error_display_unauthorized() {
    let error = AppError::Unauthorized;
    assert_eq!(error.to_string(), "unauthorized");
}

#[test]
fn test_app_error_display_unexpected() {
    let error = AppError::Unexpected(StatusCode::BAD_REQUEST);
    assert!(error.to_string().contains("400"));
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("missing filter".to_string());
    assert_eq!(error.to_string(), "invalid input: missing filter");
}

#[test]
fn test_app_error_display_token_response() {
    let error = AppError::TokenResponse("missing access_token".to_string());
    assert_eq!(error.to_string(), "invalid token response: missing access_token");
}

#[test]
fn test_app_error_display_export() {
    let error = AppError::Export("bad record".to_string());
    assert_eq!(error.to_string(), "export error: bad record");
}

#[test]
fn test_app_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
    let app_error: AppError = serde_error.into();
    assert!(matches!(app_error, AppError::Json(_)));
    assert!(std::error::Error::source(&app_error).is_some());
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();
    assert!(matches!(app_error, AppError::Io(_)));
}

#[test]
fn test_is_auth_error() {
    assert!(AppError::Unauthorized.is_auth_error());
    assert!(AppError::TokenResponse(String::new()).is_auth_error());
    assert!(!AppError::InvalidInput(String::new()).is_auth_error());
    assert!(!AppError::Unexpected(StatusCode::NOT_FOUND).is_auth_error());
}
