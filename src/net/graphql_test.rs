use super::*;
use crate::net::types::LoginInput;

#[test]
fn request_serializes_operation_and_input() {
    let input = LoginInput { email: "a@b.co".to_owned(), password: "secret".to_owned() };
    let request = GraphQlRequest {
        query: LOG_IN,
        operation_name: "login",
        variables: Some(InputVariables { input: &input }),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["operationName"], "login");
    assert_eq!(value["variables"]["input"]["email"], "a@b.co");
    assert_eq!(value["variables"]["input"]["password"], "secret");
}

#[test]
fn request_without_variables_omits_the_key() {
    let request: GraphQlRequest<'_, ()> =
        GraphQlRequest { query: CURRENT_USER, operation_name: "currentUser", variables: None };
    let value = serde_json::to_value(&request).unwrap();
    assert!(value.get("variables").is_none());
}

#[test]
fn decode_current_user_null_is_ok_none() {
    let data: CurrentUserData = decode(r#"{"data":{"currentUser":null}}"#).unwrap();
    assert!(data.current_user.is_none());
}

#[test]
fn decode_current_user_identity() {
    let data: CurrentUserData = decode(
        r#"{"data":{"currentUser":{"id":"fake","email":"test@test.com","firstName":"Current","lastName":"User"}}}"#,
    )
    .unwrap();
    assert_eq!(data.current_user.unwrap().id, "fake");
}

#[test]
fn decode_user_exists_flag() {
    let data: UserExistsData = decode(r#"{"data":{"userExists":true}}"#).unwrap();
    assert!(data.user_exists);
}

#[test]
fn decode_login_null_means_no_match() {
    let data: LogInData = decode(r#"{"data":{"login":null}}"#).unwrap();
    assert!(data.login.is_none());
}

#[test]
fn decode_errors_take_precedence() {
    let err = decode::<RegisterData>(
        r#"{"data":null,"errors":[{"message":"boom"},{"message":"bang"}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::GraphQl(ref m) if m == "boom; bang"));
}

#[test]
fn decode_missing_data_is_an_error() {
    let err = decode::<RegisterData>(r"{}").unwrap_err();
    assert!(matches!(err, ApiError::MissingData));
}

#[test]
fn decode_malformed_body_is_decode_error() {
    let err = decode::<RegisterData>("<html>").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
