//! 导航与外部链接抽象

use crate::error::AuthResult;

/// 页面历史导航
pub trait Navigator {
    /// 返回上一页（历史记录后退一步）
    fn go_back(&mut self);
}

/// 外部链接打开器
pub trait LinkOpener: Send + Sync {
    /// 在系统浏览器中打开 URL
    fn open_external(&self, url: &str) -> AuthResult<()>;
}
