//! 登录页消息类型

use pat_login_core::{AuthResult, AuthenticatedAccount};

/// 登录页相关消息
#[derive(Debug, Clone)]
pub enum LoginMessage {
    /// 下一个控件
    NextFocus,

    /// 上一个控件
    PrevFocus,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 清空当前输入框
    ClearField,

    /// 激活当前焦点控件（按钮按下 / 在输入框中提交）
    Activate,

    /// 切换 Token 可见性
    ToggleSecrets,

    /// 打开 token 创建页面
    GenerateToken,

    /// 打开文档
    OpenDocs,

    /// 提交
    Submit,

    /// 异步校验完成
    ValidationFinished {
        /// 发起校验的登录页实例
        form_id: u64,
        result: AuthResult<AuthenticatedAccount>,
    },
}
