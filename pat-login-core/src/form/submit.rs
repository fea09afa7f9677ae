//! Validate → submit → navigate-or-show-error flow.

use crate::traits::{Navigator, TokenValidator};

use super::state::{LoginForm, SubmitOutcome};

/// Run one submission of `form` against `validator`.
///
/// On success `navigator.go_back()` is called exactly once. A validator failure
/// only flips the form's `last_attempt_valid`; it is never returned as an error.
/// Returns `None` when the form refused to submit.
pub async fn submit_login(
    form: &mut LoginForm,
    validator: &dyn TokenValidator,
    navigator: &mut dyn Navigator,
) -> Option<SubmitOutcome> {
    let options = form.begin_submit()?;
    let result = validator.validate_token(&options).await;
    let outcome = form.complete_submit(&result)?;

    if let SubmitOutcome::NavigateBack(_) = outcome {
        navigator.go_back();
    }

    Some(outcome)
}
