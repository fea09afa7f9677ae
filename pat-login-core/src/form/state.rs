//! Login form state record and its transitions.

use crate::error::AuthResult;
use crate::services::{new_token_url, validate};
use crate::types::{
    AuthTokenOptions, AuthenticatedAccount, FieldError, FormErrors, FormField, FormValues,
};

/// Submission phase of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SubmitPhase {
    #[default]
    Idle,
    /// A validation call is in flight.
    Submitting,
}

/// What the caller should do after a submission finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Token accepted; leave the screen.
    NavigateBack(AuthenticatedAccount),
    /// Token rejected; stay on the screen with values kept.
    Rejected,
}

/// State of one mounted login form.
///
/// `errors` is recomputed from `values` on every edit and never set any other way.
/// `last_attempt_valid` is only written by the submit transitions.
#[derive(Debug, Clone)]
pub struct LoginForm {
    initial: FormValues,
    values: FormValues,
    errors: FormErrors,
    phase: SubmitPhase,
    last_attempt_valid: bool,
    touched_token: bool,
    touched_hostname: bool,
}

impl LoginForm {
    /// Empty token, hostname prefilled with `default_hostname`.
    pub fn new(default_hostname: &str) -> Self {
        let initial = FormValues::new("", default_hostname);
        let errors = validate(&initial);
        Self {
            values: initial.clone(),
            initial,
            errors,
            phase: SubmitPhase::Idle,
            last_attempt_valid: true,
            touched_token: false,
            touched_hostname: false,
        }
    }

    // ============ 查询 ============

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: FormField) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> FormErrors {
        self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// No field differs from its initial value.
    pub fn is_pristine(&self) -> bool {
        self.values == self.initial
    }

    pub fn last_attempt_valid(&self) -> bool {
        self.last_attempt_valid
    }

    pub fn is_touched(&self, field: FormField) -> bool {
        match field {
            FormField::Token => self.touched_token,
            FormField::Hostname => self.touched_hostname,
        }
    }

    /// Error to show under a field: only once the field has been touched.
    pub fn visible_error(&self, field: FormField) -> Option<FieldError> {
        self.errors.get(field).filter(|_| self.is_touched(field))
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && !self.is_pristine()
    }

    /// Fields accept edits unless a submission is in flight.
    pub fn is_editable(&self) -> bool {
        !self.is_submitting()
    }

    /// Token creation URL for the current hostname, `None` while the hostname is empty.
    pub fn token_generation_url(&self) -> Option<AuthResult<String>> {
        let hostname = self.value(FormField::Hostname);
        if hostname.is_empty() {
            None
        } else {
            Some(new_token_url(hostname))
        }
    }

    // ============ 编辑 ============

    /// Replace a field value. Returns `false` when edits are locked.
    pub fn set_value(&mut self, field: FormField, value: impl Into<String>) -> bool {
        self.edit(field, |current| *current = value.into())
    }

    pub fn push_char(&mut self, field: FormField, ch: char) -> bool {
        self.edit(field, |current| current.push(ch))
    }

    pub fn pop_char(&mut self, field: FormField) -> bool {
        self.edit(field, |current| {
            current.pop();
        })
    }

    pub fn clear(&mut self, field: FormField) -> bool {
        self.edit(field, String::clear)
    }

    /// The field lost focus.
    pub fn touch(&mut self, field: FormField) {
        match field {
            FormField::Token => self.touched_token = true,
            FormField::Hostname => self.touched_hostname = true,
        }
    }

    fn edit(&mut self, field: FormField, apply: impl FnOnce(&mut String)) -> bool {
        if !self.is_editable() {
            return false;
        }
        apply(self.values.get_mut(field));
        self.errors = validate(&self.values);
        true
    }

    // ============ 提交 ============

    /// Start a submission.
    ///
    /// Returns the arguments for the validation call, or `None` when the submit
    /// control is disabled or the values do not validate. In the latter case every
    /// field is marked touched so its error shows.
    pub fn begin_submit(&mut self) -> Option<AuthTokenOptions> {
        if !self.can_submit() {
            return None;
        }

        if !self.errors.is_empty() {
            for field in FormField::all() {
                self.touch(*field);
            }
            return None;
        }

        self.phase = SubmitPhase::Submitting;
        self.last_attempt_valid = true;

        Some(AuthTokenOptions {
            token: self.value(FormField::Token).to_string(),
            hostname: self.value(FormField::Hostname).to_string(),
        })
    }

    /// Finish the in-flight submission with the validator's result.
    ///
    /// Returns `None` when nothing was in flight.
    pub fn complete_submit(
        &mut self,
        result: &AuthResult<AuthenticatedAccount>,
    ) -> Option<SubmitOutcome> {
        if !self.is_submitting() {
            return None;
        }
        self.phase = SubmitPhase::Idle;

        match result {
            Ok(account) => {
                log::info!("Authenticated as {} on {}", account.login, account.hostname);
                Some(SubmitOutcome::NavigateBack(account.clone()))
            }
            Err(e) => {
                log::warn!(
                    "Token could not be validated with {}: {e}",
                    self.value(FormField::Hostname)
                );
                self.last_attempt_valid = false;
                Some(SubmitOutcome::Rejected)
            }
        }
    }
}
