#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for the submit flow of the login form.

mod common;

use common::{valid_token, CountingNavigator, MockTokenValidator, GITHUB_HOST};
use pat_login_core::{
    submit_login, FieldError, FormField, LoginForm, LoginScreen, SubmitOutcome,
};

fn filled_form() -> LoginForm {
    let mut form = LoginForm::new(GITHUB_HOST);
    form.set_value(FormField::Token, valid_token());
    form
}

#[tokio::test]
async fn test_successful_submit_navigates_back_once() {
    let mut form = filled_form();
    let validator = MockTokenValidator::accepting();
    let mut navigator = CountingNavigator::default();

    let outcome = submit_login(&mut form, &validator, &mut navigator).await;

    assert!(matches!(outcome, Some(SubmitOutcome::NavigateBack(ref account)) if account.login == "octocat"));
    assert_eq!(navigator.back_calls(), 1);
    assert_eq!(LoginScreen::from_form(&form).error_banner, None);

    let calls = validator.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].token, valid_token());
    assert_eq!(calls[0].hostname, GITHUB_HOST);
}

#[tokio::test]
async fn test_rejected_submit_shows_banner_and_reenables_submit() {
    let mut form = filled_form();
    let validator = MockTokenValidator::rejecting();
    let mut navigator = CountingNavigator::default();

    let outcome = submit_login(&mut form, &validator, &mut navigator).await;

    assert_eq!(outcome, Some(SubmitOutcome::Rejected));
    assert_eq!(navigator.back_calls(), 0);

    let screen = LoginScreen::from_form(&form);
    let banner = screen.error_banner.expect("banner should be shown");
    assert!(banner.contains("github.com"));
    assert!(screen.submit.enabled);
    assert!(!screen.submitting);
    assert!(!form.is_pristine());
    assert_eq!(screen.token.value, valid_token());
}

#[tokio::test]
async fn test_retry_after_rejection() {
    let mut form = filled_form();
    let mut navigator = CountingNavigator::default();

    submit_login(&mut form, &MockTokenValidator::rejecting(), &mut navigator).await;
    assert!(!form.last_attempt_valid());

    let outcome = submit_login(&mut form, &MockTokenValidator::accepting(), &mut navigator).await;
    assert!(matches!(outcome, Some(SubmitOutcome::NavigateBack(_))));
    assert!(form.last_attempt_valid());
    assert_eq!(navigator.back_calls(), 1);
}

#[tokio::test]
async fn test_pristine_form_never_calls_validator() {
    let mut form = LoginForm::new(GITHUB_HOST);
    let validator = MockTokenValidator::accepting();
    let mut navigator = CountingNavigator::default();

    let outcome = submit_login(&mut form, &validator, &mut navigator).await;

    assert_eq!(outcome, None);
    assert!(validator.calls().is_empty());
    assert_eq!(navigator.back_calls(), 0);
}

#[tokio::test]
async fn test_invalid_values_never_call_validator() {
    let mut form = LoginForm::new(GITHUB_HOST);
    form.set_value(FormField::Token, "too-short");
    form.set_value(FormField::Hostname, "not a host");
    let validator = MockTokenValidator::accepting();
    let mut navigator = CountingNavigator::default();

    let outcome = submit_login(&mut form, &validator, &mut navigator).await;

    assert_eq!(outcome, None);
    assert!(validator.calls().is_empty());
    let screen = LoginScreen::from_form(&form);
    assert_eq!(screen.token.error, Some(FieldError::InvalidToken));
    assert_eq!(screen.hostname.error, Some(FieldError::InvalidHostname));
}

#[test]
fn test_empty_hostname_disables_generate_pat() {
    let mut form = LoginForm::new(GITHUB_HOST);
    form.clear(FormField::Hostname);
    assert!(!LoginScreen::from_form(&form).generate_pat.enabled);
}
