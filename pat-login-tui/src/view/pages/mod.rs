//! 页面视图

pub mod accounts;
pub mod login_with_token;
