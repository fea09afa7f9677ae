//! 应用主状态结构

use pat_login_core::constants::DEFAULT_HOSTNAME;
use pat_login_core::Navigator;

use super::{AccountsState, LoginState, NavigationState, Page};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 导航历史
    pub navigation: NavigationState,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 各页面状态 ===
    /// 账号页面状态
    pub accounts: AccountsState,
    /// 登录页状态（仅在登录页挂载期间存在）
    pub login: Option<LoginState>,

    /// 登录表单的默认主机名（来自配置）
    pub default_hostname: String,

    /// 下一个登录页实例 ID
    next_login_id: u64,
}

impl App {
    /// 创建新的应用实例
    pub fn new(default_hostname: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            navigation: NavigationState::new(),
            status_message: None,
            accounts: AccountsState::new(),
            login: None,
            default_hostname: default_hostname.into(),
            next_login_id: 1,
        }
    }

    /// 当前页面
    pub fn current_page(&self) -> Page {
        self.navigation.current()
    }

    /// 进入登录页，挂载一个全新的表单实例
    pub fn open_login(&mut self) {
        let id = self.next_login_id;
        self.next_login_id += 1;
        self.login = Some(LoginState::new(id, &self.default_hostname));
        self.navigation.push(Page::LoginWithToken);
        self.clear_status();
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Navigator for App {
    fn go_back(&mut self) {
        if let Some(left) = self.navigation.go_back() {
            // 离开登录页即卸载表单，未完成的校验结果随之作废
            if left == Page::LoginWithToken {
                self.login = None;
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(DEFAULT_HOSTNAME)
    }
}
