//! Stateless services used by the login form.

mod github;
mod token_url;
mod validation;

pub use github::{api_base_url, GitHubTokenValidator};
pub use token_url::{new_token_url, new_token_url_at};
pub use validation::{is_valid_hostname, is_valid_token, validate};
