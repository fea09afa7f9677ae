//! Fixed values shared by the login screen.

/// Application name used in generated token descriptions.
pub const APP_NAME: &str = "PAT Login";

/// Hostname the form starts with unless configuration says otherwise.
pub const DEFAULT_HOSTNAME: &str = "github.com";

/// Documentation for creating and managing personal access tokens.
pub const DOCS_URL: &str = "https://docs.github.com/en/enterprise-server@3.13/authentication/keeping-your-account-and-data-secure/managing-your-personal-access-tokens";

/// Scopes pre-selected on the token creation page.
pub const AUTH_SCOPES: &[&str] = &["read:user", "notifications", "repo"];
