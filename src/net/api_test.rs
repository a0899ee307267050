use super::*;

#[test]
fn user_exists_input_trims_email() {
    assert_eq!(user_exists_input("  t@t.co "), UserExistsInput { email: "t@t.co".to_owned() });
}

#[test]
fn graphql_api_keeps_endpoint() {
    let api = GraphQlApi::new("http://localhost:4000/graphql");
    assert_eq!(api.endpoint(), "http://localhost:4000/graphql");
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_build_reports_unavailable() {
    let api = GraphQlApi::new("http://localhost:4000/graphql");
    let result = futures::executor::block_on(api.current_user());
    assert!(matches!(result, Err(ApiError::Unavailable)));
}
