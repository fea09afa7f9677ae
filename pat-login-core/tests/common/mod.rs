//! Shared fakes for login flow tests.

#![allow(dead_code, clippy::unwrap_used)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use pat_login_core::{
    AuthError, AuthResult, AuthTokenOptions, AuthenticatedAccount, Navigator, TokenValidator,
};

pub const GITHUB_HOST: &str = "github.com";

pub fn valid_token() -> String {
    "A".repeat(40)
}

/// `TokenValidator` returning a fixed answer and recording its calls.
pub struct MockTokenValidator {
    accept: bool,
    calls: Mutex<Vec<AuthTokenOptions>>,
}

impl MockTokenValidator {
    pub fn accepting() -> Self {
        Self {
            accept: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            accept: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<AuthTokenOptions> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TokenValidator for MockTokenValidator {
    async fn validate_token(&self, options: &AuthTokenOptions) -> AuthResult<AuthenticatedAccount> {
        self.calls.lock().unwrap().push(options.clone());
        if self.accept {
            Ok(AuthenticatedAccount {
                hostname: options.hostname.clone(),
                login: "octocat".to_string(),
            })
        } else {
            Err(AuthError::Unauthorized(401))
        }
    }
}

/// `Navigator` counting back navigations.
#[derive(Default)]
pub struct CountingNavigator {
    back_calls: AtomicUsize,
}

impl CountingNavigator {
    pub fn back_calls(&self) -> usize {
        self.back_calls.load(Ordering::SeqCst)
    }
}

impl Navigator for CountingNavigator {
    fn go_back(&mut self) {
        self.back_calls.fetch_add(1, Ordering::SeqCst);
    }
}
