//! 快捷键配置
//!
//! 定义快捷键映射

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 账号页
    pub const OPEN_LOGIN: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));
    pub const REMOVE_ACCOUNT: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));

    // 登录页
    pub const TOGGLE_SECRETS: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));
    pub const GENERATE_TOKEN: KeyBinding = KeyBinding::alt(KeyCode::Char('g'));
    pub const OPEN_DOCS: KeyBinding = KeyBinding::alt(KeyCode::Char('o'));
    pub const CLEAR_FIELD: KeyBinding = KeyBinding::ctrl(KeyCode::Char('u'));
}
