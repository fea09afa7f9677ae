//! 应用主消息枚举

use super::{AccountsMessage, LoginMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 返回上一页
    GoBack,

    /// 打开 PAT 登录页
    OpenLogin,

    /// 登录页相关消息
    Login(LoginMessage),

    /// 账号页相关消息
    Accounts(AccountsMessage),

    /// 显示状态消息
    ShowStatus(String),

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
