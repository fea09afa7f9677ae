//! 页面状态定义

use crate::i18n::t;

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 账号列表（根页面）
    #[default]
    Accounts,
    /// 使用 PAT 登录
    LoginWithToken,
}

impl Page {
    /// 获取页面标题
    pub fn title(self) -> &'static str {
        let texts = t();
        match self {
            Page::Accounts => texts.accounts.title,
            Page::LoginWithToken => texts.login.title,
        }
    }
}
