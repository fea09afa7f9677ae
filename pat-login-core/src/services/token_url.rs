//! Token creation page URL.

use chrono::{Local, NaiveDateTime};
use url::Url;

use crate::constants::{APP_NAME, AUTH_SCOPES};
use crate::error::{AuthError, AuthResult};

/// URL of the "new personal access token" page on `hostname`, stamped with the current local time.
pub fn new_token_url(hostname: &str) -> AuthResult<String> {
    new_token_url_at(hostname, Local::now().naive_local())
}

/// Same as [`new_token_url`] with an explicit creation time.
///
/// The description reads like `PAT Login (Created on Apr 29, 2024 3:04 PM)`.
pub fn new_token_url_at(hostname: &str, created_at: NaiveDateTime) -> AuthResult<String> {
    if hostname.is_empty() {
        return Err(AuthError::ValidationError("Hostname is required".to_string()));
    }

    let mut url = Url::parse(&format!("https://{hostname}/settings/tokens/new"))
        .map_err(|e| AuthError::ValidationError(format!("Invalid hostname {hostname}: {e}")))?;

    let date = created_at.format("%b %-d, %Y %-I:%M %p");
    url.query_pairs_mut()
        .append_pair("description", &format!("{APP_NAME} (Created on {date})"))
        .append_pair("scopes", &AUTH_SCOPES.join(","));

    Ok(url.to_string())
}
