use super::*;

#[test]
fn user_deserializes_from_camel_case() {
    let user: User = serde_json::from_str(
        r#"{"id":"u1","email":"test@test.com","firstName":"Test","lastName":"Testerson"}"#,
    )
    .unwrap();
    assert_eq!(user.first_name, "Test");
    assert_eq!(user.last_name, "Testerson");
    assert_eq!(user.display_name(), "Test Testerson");
}

#[test]
fn registration_input_serializes_without_confirmation() {
    let input = RegistrationInput {
        first_name: "Test".to_owned(),
        last_name: "Testerson".to_owned(),
        email: "test@test.com".to_owned(),
        password: "1A!2B@3C#".to_owned(),
    };
    let value = serde_json::to_value(&input).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "firstName": "Test",
            "lastName": "Testerson",
            "email": "test@test.com",
            "password": "1A!2B@3C#",
        })
    );
    assert!(value.get("confirmPassword").is_none());
}

#[test]
fn display_name_tolerates_missing_last_name() {
    let user = User {
        id: "u1".to_owned(),
        email: "a@b.co".to_owned(),
        first_name: "Solo".to_owned(),
        last_name: String::new(),
    };
    assert_eq!(user.display_name(), "Solo");
}
