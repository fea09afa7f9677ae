//! 账号页面状态

use pat_login_core::AuthenticatedAccount;

/// 账号页面状态
///
/// 只记录本次运行中登录成功的主机与用户名，不保存 token。
#[derive(Debug, Default)]
pub struct AccountsState {
    /// 账号列表
    pub accounts: Vec<AuthenticatedAccount>,
    /// 当前选中的索引
    pub selected: usize,
}

impl AccountsState {
    /// 创建新的账号状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if !self.accounts.is_empty() && self.selected < self.accounts.len() - 1 {
            self.selected += 1;
        }
    }

    /// 获取当前选中的账号
    pub fn selected_account(&self) -> Option<&AuthenticatedAccount> {
        self.accounts.get(self.selected)
    }

    /// 添加账号；同一主机上的同一用户只保留一条，并选中它
    pub fn add(&mut self, account: AuthenticatedAccount) {
        if let Some(index) = self.accounts.iter().position(|a| {
            a.login == account.login && a.hostname.eq_ignore_ascii_case(&account.hostname)
        }) {
            self.selected = index;
            return;
        }
        self.accounts.push(account);
        self.selected = self.accounts.len() - 1;
    }

    /// 移除当前选中的账号
    pub fn remove_selected(&mut self) -> Option<AuthenticatedAccount> {
        if self.selected >= self.accounts.len() {
            return None;
        }
        let removed = self.accounts.remove(self.selected);
        if self.selected > 0 && self.selected >= self.accounts.len() {
            self.selected -= 1;
        }
        Some(removed)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn account(hostname: &str, login: &str) -> AuthenticatedAccount {
        AuthenticatedAccount {
            hostname: hostname.to_string(),
            login: login.to_string(),
        }
    }

    #[test]
    fn test_add_deduplicates() {
        let mut state = AccountsState::new();
        state.add(account("github.com", "octocat"));
        state.add(account("github.company.com", "octocat"));
        state.add(account("GitHub.com", "octocat"));
        assert_eq!(state.accounts.len(), 2);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_remove_selected_clamps_selection() {
        let mut state = AccountsState::new();
        state.add(account("github.com", "a"));
        state.add(account("github.com", "b"));
        assert_eq!(state.selected, 1);
        assert_eq!(state.remove_selected().unwrap().login, "b");
        assert_eq!(state.selected, 0);
        assert_eq!(state.remove_selected().unwrap().login, "a");
        assert!(state.remove_selected().is_none());
    }

    #[test]
    fn test_selection_bounds() {
        let mut state = AccountsState::new();
        state.select_next();
        state.select_previous();
        assert_eq!(state.selected, 0);
        state.add(account("github.com", "a"));
        state.add(account("github.com", "b"));
        state.select_next();
        assert_eq!(state.selected, 1);
        state.select_previous();
        assert_eq!(state.selected_account().unwrap().login, "a");
    }
}
