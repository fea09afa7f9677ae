//! Screen view-model: what the login screen shows, derived only from the form.

use crate::constants::DOCS_URL;
use crate::types::{FieldError, FormField};

use super::state::LoginForm;

/// An input field as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub value: String,
    pub error: Option<FieldError>,
    pub editable: bool,
}

/// A button-like control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub enabled: bool,
}

/// Everything the login screen renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginScreen {
    /// "Go Back"; always enabled.
    pub back: Control,
    pub token: FieldView,
    /// "Generate a PAT"; disabled while the hostname is empty.
    pub generate_pat: Control,
    pub hostname: FieldView,
    /// Hostname named by the "could not be validated" banner, shown after a rejected attempt.
    pub error_banner: Option<String>,
    /// Documentation link; always enabled.
    pub docs: Control,
    pub docs_url: &'static str,
    /// "Login"; disabled while submitting or pristine.
    pub submit: Control,
    pub submitting: bool,
}

impl LoginScreen {
    pub fn from_form(form: &LoginForm) -> Self {
        let field = |field: FormField| FieldView {
            value: form.value(field).to_string(),
            error: form.visible_error(field),
            editable: form.is_editable(),
        };
        let hostname = form.value(FormField::Hostname);

        Self {
            back: Control { enabled: true },
            token: field(FormField::Token),
            generate_pat: Control {
                enabled: !hostname.is_empty(),
            },
            hostname: field(FormField::Hostname),
            error_banner: (!form.last_attempt_valid()).then(|| hostname.to_string()),
            docs: Control { enabled: true },
            docs_url: DOCS_URL,
            submit: Control {
                enabled: form.can_submit(),
            },
            submitting: form.is_submitting(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::error::AuthError;

    #[test]
    fn test_initial_screen() {
        let screen = LoginScreen::from_form(&LoginForm::new("github.com"));
        assert!(screen.back.enabled);
        assert!(screen.docs.enabled);
        assert!(screen.generate_pat.enabled);
        assert!(!screen.submit.enabled);
        assert_eq!(screen.hostname.value, "github.com");
        assert_eq!(screen.token.error, None);
        assert_eq!(screen.error_banner, None);
        assert_eq!(screen.docs_url, DOCS_URL);
    }

    #[test]
    fn test_generate_pat_disabled_without_hostname() {
        let mut form = LoginForm::new("github.com");
        form.clear(FormField::Hostname);
        let screen = LoginScreen::from_form(&form);
        assert!(!screen.generate_pat.enabled);
        assert!(screen.back.enabled);
    }

    #[test]
    fn test_banner_names_current_hostname() {
        let mut form = LoginForm::new("github.com");
        form.set_value(FormField::Token, "A".repeat(40));
        form.begin_submit().unwrap();
        form.complete_submit(&Err(AuthError::Unauthorized(401)));

        let screen = LoginScreen::from_form(&form);
        assert_eq!(screen.error_banner.as_deref(), Some("github.com"));

        form.set_value(FormField::Hostname, "github.company.com");
        let screen = LoginScreen::from_form(&form);
        assert_eq!(screen.error_banner.as_deref(), Some("github.company.com"));
    }

    #[test]
    fn test_submitting_disables_submit_and_fields() {
        let mut form = LoginForm::new("github.com");
        form.set_value(FormField::Token, "A".repeat(40));
        form.begin_submit().unwrap();

        let screen = LoginScreen::from_form(&form);
        assert!(screen.submitting);
        assert!(!screen.submit.enabled);
        assert!(!screen.token.editable);
        assert!(!screen.hostname.editable);
    }
}
