//! 副作用命令

use pat_login_core::AuthTokenOptions;

/// Update 层返回给主循环的副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 在后台校验 token，结果以 `LoginMessage::ValidationFinished` 送回
    ValidateToken {
        form_id: u64,
        options: AuthTokenOptions,
    },
    /// 用系统浏览器打开链接
    OpenLink(String),
}
