use super::*;

#[test]
fn field_error_display_is_user_facing_text() {
    assert_eq!(FieldError::FirstNameRequired.to_string(), "Please provide your first name");
    assert_eq!(FieldError::PasswordMismatch.to_string(), "Password inputs don't match");
}

#[test]
fn email_taken_message_differs_from_format_errors() {
    let taken = FieldError::EmailTaken.to_string();
    assert_ne!(taken, FieldError::EmailInvalid.to_string());
    assert_ne!(taken, FieldError::EmailRequired.to_string());
    assert!(taken.contains("already exists"));
}

#[test]
fn api_error_wraps_decode_failures() {
    let err = serde_json::from_str::<u32>("nope").unwrap_err();
    let api: ApiError = err.into();
    assert!(matches!(api, ApiError::Decode(_)));
    assert!(api.to_string().starts_with("failed to decode response"));
}

#[test]
fn config_error_names_origin() {
    let err = ConfigError::UnknownOrigin("https://evil.example".to_owned());
    assert_eq!(
        err.to_string(),
        "client running in an unknown environment https://evil.example"
    );
}
