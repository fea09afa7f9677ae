//! 导航历史
//!
//! 页面以栈的形式保存，"返回" 即弹出栈顶。根页面永远不会被弹出。

use super::Page;

/// 导航状态
#[derive(Debug)]
pub struct NavigationState {
    /// 历史栈，最后一项为当前页面
    history: Vec<Page>,
}

impl NavigationState {
    /// 创建默认导航状态（位于根页面）
    pub fn new() -> Self {
        Self {
            history: vec![Page::default()],
        }
    }

    /// 当前页面
    pub fn current(&self) -> Page {
        self.history.last().copied().unwrap_or_default()
    }

    /// 进入新页面
    pub fn push(&mut self, page: Page) {
        self.history.push(page);
    }

    /// 是否可以返回
    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    /// 后退一步，返回被离开的页面；已在根页面时返回 None
    pub fn go_back(&mut self) -> Option<Page> {
        if self.can_go_back() {
            self.history.pop()
        } else {
            None
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_root() {
        let nav = NavigationState::new();
        assert_eq!(nav.current(), Page::Accounts);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_push_and_go_back() {
        let mut nav = NavigationState::new();
        nav.push(Page::LoginWithToken);
        assert_eq!(nav.current(), Page::LoginWithToken);
        assert_eq!(nav.go_back(), Some(Page::LoginWithToken));
        assert_eq!(nav.current(), Page::Accounts);
    }

    #[test]
    fn test_go_back_at_root_is_noop() {
        let mut nav = NavigationState::new();
        assert_eq!(nav.go_back(), None);
        assert_eq!(nav.current(), Page::Accounts);
    }
}
