//! 外部链接服务

use pat_login_core::{AuthError, AuthResult, LinkOpener};

/// 使用系统默认浏览器打开链接
#[derive(Debug, Default)]
pub struct BrowserLinkOpener;

impl BrowserLinkOpener {
    pub fn new() -> Self {
        Self
    }
}

impl LinkOpener for BrowserLinkOpener {
    fn open_external(&self, url: &str) -> AuthResult<()> {
        log::info!("Opening {url} in browser");
        webbrowser::open(url).map_err(|e| AuthError::LinkError(format!("{url}: {e}")))
    }
}
