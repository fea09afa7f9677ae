//! GitHub personal access token validation.

use std::sync::LazyLock;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;

use crate::constants::DEFAULT_HOSTNAME;
use crate::error::{AuthError, AuthResult};
use crate::traits::TokenValidator;
use crate::types::{AuthTokenOptions, AuthenticatedAccount};

/// Shared HTTP client for GitHub API calls.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

const USER_AGENT_VALUE: &str = concat!("pat-login/", env!("CARGO_PKG_VERSION"));

/// Response structure from `GET /user`.
#[derive(Deserialize)]
struct UserResponse {
    login: Option<String>,
}

/// REST API root for a hostname.
///
/// `github.com` is served from `api.github.com`; Enterprise Server instances
/// expose the API under `/api/v3` on their own host.
pub fn api_base_url(hostname: &str) -> String {
    if hostname.eq_ignore_ascii_case(DEFAULT_HOSTNAME) {
        "https://api.github.com".to_string()
    } else {
        format!("https://{hostname}/api/v3")
    }
}

/// Validates tokens by fetching the authenticated user.
#[derive(Debug, Clone)]
pub struct GitHubTokenValidator {
    client: reqwest::Client,
    /// Fixed API root; `None` derives it from the hostname being validated.
    api_base: Option<String>,
}

impl GitHubTokenValidator {
    pub fn new() -> Self {
        Self {
            client: HTTP_CLIENT.clone(),
            api_base: None,
        }
    }

    /// Send every request to `api_base` regardless of hostname.
    pub fn with_api_base(client: reqwest::Client, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: Some(api_base.into().trim_end_matches('/').to_string()),
        }
    }

    fn user_url(&self, hostname: &str) -> String {
        match &self.api_base {
            Some(base) => format!("{base}/user"),
            None => format!("{}/user", api_base_url(hostname)),
        }
    }
}

impl Default for GitHubTokenValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// 401 / 403 mean the token itself was refused; anything else is a server-side status.
fn status_error(status: reqwest::StatusCode) -> AuthError {
    match status.as_u16() {
        code @ (401 | 403) => AuthError::Unauthorized(code),
        code => AuthError::HttpStatus(code),
    }
}

#[async_trait]
impl TokenValidator for GitHubTokenValidator {
    async fn validate_token(&self, options: &AuthTokenOptions) -> AuthResult<AuthenticatedAccount> {
        let url = self.user_url(&options.hostname);
        log::info!("Validating token against {url}");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("token {}", options.token))
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, USER_AGENT_VALUE)
            .send()
            .await
            .map_err(|e| AuthError::NetworkError(format!("Request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Token check on {} failed: HTTP {}", options.hostname, status.as_u16());
            return Err(status_error(status));
        }

        let user: UserResponse = response
            .json()
            .await
            .map_err(|e| AuthError::InvalidResponse(format!("Failed to parse response: {e}")))?;

        let login = user
            .login
            .filter(|login| !login.is_empty())
            .ok_or_else(|| AuthError::InvalidResponse("Missing login in user response".to_string()))?;

        Ok(AuthenticatedAccount {
            hostname: options.hostname.clone(),
            login,
        })
    }
}
