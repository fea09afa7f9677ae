//! PAT Login Core Library
//!
//! UI-independent logic behind the "Login with Personal Access Token" screen:
//! - Field validation (token shape, hostname shape)
//! - The login form state machine (values, errors, submission phase)
//! - A screen view-model derived purely from the form
//! - Token-generation URL and the default GitHub token validator
//!
//! Side effects (token validation, navigation, opening links) are injected
//! through the traits in [`traits`], so every flow can run against fakes.

pub mod constants;
pub mod error;
pub mod form;
pub mod services;
pub mod traits;
pub mod types;

// Re-export common types
pub use error::{AuthError, AuthResult};
pub use form::{submit_login, Control, FieldView, LoginForm, LoginScreen, SubmitOutcome};
pub use services::{
    is_valid_hostname, is_valid_token, new_token_url, new_token_url_at, validate,
    GitHubTokenValidator,
};
pub use traits::{LinkOpener, Navigator, TokenValidator};
pub use types::{AuthTokenOptions, AuthenticatedAccount, FieldError, FormErrors, FormField, FormValues};
