//! 登录页焦点定义

use pat_login_core::FormField;

/// 登录页中可获得焦点的控件（按显示顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginFocus {
    /// Token 输入框
    #[default]
    Token,
    /// "Generate a PAT" 按钮
    GeneratePat,
    /// Hostname 输入框
    Hostname,
    /// 文档按钮
    Docs,
    /// 登录按钮
    Submit,
}

impl LoginFocus {
    const ORDER: [LoginFocus; 5] = [
        LoginFocus::Token,
        LoginFocus::GeneratePat,
        LoginFocus::Hostname,
        LoginFocus::Docs,
        LoginFocus::Submit,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// 下一个控件（循环）
    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// 上一个控件（循环）
    #[must_use]
    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    /// 如果是输入框，返回对应的表单字段
    pub fn field(self) -> Option<FormField> {
        match self {
            LoginFocus::Token => Some(FormField::Token),
            LoginFocus::Hostname => Some(FormField::Hostname),
            _ => None,
        }
    }
}
