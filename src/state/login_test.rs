use futures::executor::block_on;

use super::*;
use crate::net::api::AuthApi;
use crate::net::mock_api::{MockApi, user};

fn api_with_account() -> MockApi {
    MockApi {
        accounts: vec![(
            "test@test.com".to_owned(),
            "supersecretpassword".to_owned(),
            user("u1", "test@test.com"),
        )],
        ..MockApi::default()
    }
}

fn attempt(form: &mut LoginForm, api: &MockApi, email: &str, password: &str) -> Option<LoginOutcome> {
    form.set_email(email.to_owned());
    form.set_password(password.to_owned());
    let input = form.submit()?;
    Some(form.finish(block_on(api.log_in(&input))))
}

#[test]
fn mismatched_credentials_show_message_without_login() {
    let api = api_with_account();
    let mut form = LoginForm::default();
    let outcome = attempt(&mut form, &api, "wrong@wrong.com", "ah-ah-ahhhh");

    assert_eq!(outcome, Some(LoginOutcome::NotFound));
    assert_eq!(form.invalid_credentials(), Some(INVALID_CREDENTIALS));
    assert!(INVALID_CREDENTIALS.contains("could not be found"));
    assert!(!form.is_submitting());
}

#[test]
fn editing_clears_invalid_credentials_message() {
    let api = api_with_account();
    let mut form = LoginForm::default();
    attempt(&mut form, &api, "wrong@wrong.com", "nope");
    form.set_password("again".to_owned());
    assert_eq!(form.invalid_credentials(), None);
}

#[test]
fn matching_credentials_log_in_exactly_once() {
    let api = api_with_account();
    let mut form = LoginForm::default();
    let outcome = attempt(&mut form, &api, " test@test.com ", "supersecretpassword");

    assert_eq!(outcome, Some(LoginOutcome::LoggedIn(user("u1", "test@test.com"))));
    assert!(form.submit().is_none());
    assert_eq!(api.log_in_calls.borrow().len(), 1);
    assert_eq!(api.log_in_calls.borrow()[0].email, "test@test.com");
}

#[test]
fn retry_allowed_after_not_found() {
    let api = api_with_account();
    let mut form = LoginForm::default();
    attempt(&mut form, &api, "wrong@wrong.com", "nope");
    let outcome = attempt(&mut form, &api, "test@test.com", "supersecretpassword");
    assert!(matches!(outcome, Some(LoginOutcome::LoggedIn(_))));
}

#[test]
fn transport_failure_is_not_shown_as_bad_credentials() {
    let mut form = LoginForm::default();
    form.set_email("a@b.co".to_owned());
    form.submit();
    let outcome = form.finish(Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(outcome, LoginOutcome::Failed);
    assert_eq!(form.invalid_credentials(), None);
    assert!(form.submit().is_some());
}
