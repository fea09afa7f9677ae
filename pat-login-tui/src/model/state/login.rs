//! PAT 登录页面状态

use pat_login_core::{LoginForm, LoginScreen};

use crate::model::focus::LoginFocus;

/// 一次挂载的登录页
///
/// 每次进入登录页都会创建新的实例并分配新的 `id`，
/// 离开页面即销毁。异步校验结果带着 `id` 回来，对不上就丢弃。
#[derive(Debug, Clone)]
pub struct LoginState {
    /// 实例 ID
    pub id: u64,
    /// 表单状态
    pub form: LoginForm,
    /// 当前焦点
    pub focus: LoginFocus,
    /// Token 是否明文显示
    pub show_token: bool,
}

impl LoginState {
    /// 创建新的登录页状态
    pub fn new(id: u64, default_hostname: &str) -> Self {
        Self {
            id,
            form: LoginForm::new(default_hostname),
            focus: LoginFocus::default(),
            show_token: false,
        }
    }

    /// 界面模型
    pub fn screen(&self) -> LoginScreen {
        LoginScreen::from_form(&self.form)
    }

    /// 移动焦点；离开输入框时标记该字段为 touched
    pub fn move_focus(&mut self, to: LoginFocus) {
        if let Some(field) = self.focus.field() {
            self.form.touch(field);
        }
        self.focus = to;
    }
}
