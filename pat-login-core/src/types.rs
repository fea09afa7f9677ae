//! Public types shared by the validator, the form and the validators.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which input of the login form a value or error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Personal access token.
    Token,
    /// Hostname of the hosting service instance.
    Hostname,
}

impl FormField {
    /// All fields in display order.
    pub fn all() -> &'static [FormField] {
        &[FormField::Token, FormField::Hostname]
    }
}

/// Raw values of the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub token: Option<String>,
    pub hostname: Option<String>,
}

impl FormValues {
    pub fn new(token: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            hostname: Some(hostname.into()),
        }
    }

    /// Value of a field, `""` when absent.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Token => self.token.as_deref().unwrap_or(""),
            FormField::Hostname => self.hostname.as_deref().unwrap_or(""),
        }
    }

    pub(crate) fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Token => self.token.get_or_insert_with(String::new),
            FormField::Hostname => self.hostname.get_or_insert_with(String::new),
        }
    }
}

/// A single field validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldError {
    /// Field is absent or empty.
    Required,
    /// Token does not have the expected shape.
    InvalidToken,
    /// Hostname is not a domain name.
    InvalidHostname,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "Required"),
            Self::InvalidToken => write!(f, "Invalid token."),
            Self::InvalidHostname => write!(f, "Invalid hostname."),
        }
    }
}

/// Validation result for the whole form. Empty means the form may be submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormErrors {
    pub token: Option<FieldError>,
    pub hostname: Option<FieldError>,
}

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<FieldError> {
        match field {
            FormField::Token => self.token,
            FormField::Hostname => self.hostname,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.hostname.is_none()
    }
}

/// Arguments of the external token validation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokenOptions {
    pub token: String,
    pub hostname: String,
}

/// Account confirmed by a successful token validation.
///
/// Only identifies who logged in where; the token itself is not kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedAccount {
    pub hostname: String,
    pub login: String,
}
