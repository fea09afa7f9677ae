//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AccountsMessage, AppMessage, LoginMessage};
use crate::model::{App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    match app.current_page() {
        Page::Accounts => handle_accounts_keys(key),
        Page::LoginWithToken => handle_login_keys(key),
    }
}

/// 账号页按键
fn handle_accounts_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::OPEN_LOGIN.matches(&key) {
        return AppMessage::OpenLogin;
    }
    if DefaultKeymap::REMOVE_ACCOUNT.matches(&key) {
        return AppMessage::Accounts(AccountsMessage::Remove);
    }

    match key.code {
        KeyCode::Enter => AppMessage::OpenLogin,
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Accounts(AccountsMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Accounts(AccountsMessage::SelectNext),
        _ => AppMessage::Noop,
    }
}

/// 登录页按键
fn handle_login_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if DefaultKeymap::TOGGLE_SECRETS.matches(&key) {
        return AppMessage::Login(LoginMessage::ToggleSecrets);
    }
    if DefaultKeymap::GENERATE_TOKEN.matches(&key) {
        return AppMessage::Login(LoginMessage::GenerateToken);
    }
    if DefaultKeymap::OPEN_DOCS.matches(&key) {
        return AppMessage::Login(LoginMessage::OpenDocs);
    }
    if DefaultKeymap::CLEAR_FIELD.matches(&key) {
        return AppMessage::Login(LoginMessage::ClearField);
    }

    let msg = match (key.modifiers, key.code) {
        (_, KeyCode::Tab | KeyCode::Down) => LoginMessage::NextFocus,
        (_, KeyCode::BackTab | KeyCode::Up) => LoginMessage::PrevFocus,
        (KeyModifiers::ALT, KeyCode::Enter) => LoginMessage::Submit,
        (_, KeyCode::Enter) => LoginMessage::Activate,
        (_, KeyCode::Backspace) => LoginMessage::Backspace,
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => LoginMessage::Input(c),
        _ => return AppMessage::Noop,
    };
    AppMessage::Login(msg)
}
