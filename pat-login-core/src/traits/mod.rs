//! 外部能力抽象
//!
//! 登录表单本身不做网络请求、不做页面跳转、不打开浏览器，
//! 这些副作用全部通过 trait 注入，测试时可替换为确定性的 fake。

mod navigator;
mod token_validator;

pub use navigator::{LinkOpener, Navigator};
pub use token_validator::TokenValidator;
