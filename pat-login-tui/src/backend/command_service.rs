//! 命令执行服务
//!
//! 执行 Update 层返回的 Command。
//! 结果一律通过 channel 以 AppMessage 的形式送回主循环，这里不直接修改 App。

use std::sync::Arc;

use pat_login_core::{LinkOpener, TokenValidator};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::i18n::t;
use crate::message::{AppMessage, Command, LoginMessage};

/// 命令执行服务
pub struct CommandService {
    runtime: Handle,
    validator: Arc<dyn TokenValidator>,
    links: Arc<dyn LinkOpener>,
    tx: UnboundedSender<AppMessage>,
}

impl CommandService {
    pub fn new(
        runtime: Handle,
        validator: Arc<dyn TokenValidator>,
        links: Arc<dyn LinkOpener>,
        tx: UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            runtime,
            validator,
            links,
            tx,
        }
    }

    /// 执行命令
    pub fn execute(&self, command: Command) {
        match command {
            Command::ValidateToken { form_id, options } => {
                let validator = Arc::clone(&self.validator);
                let tx = self.tx.clone();
                self.runtime.spawn(async move {
                    let result = validator.validate_token(&options).await;
                    let msg = AppMessage::Login(LoginMessage::ValidationFinished { form_id, result });
                    if tx.send(msg).is_err() {
                        log::debug!("Main loop gone, dropping validation result for form {form_id}");
                    }
                });
            }

            Command::OpenLink(url) => {
                if let Err(e) = self.links.open_external(&url) {
                    log::warn!("Failed to open link: {e}");
                    let status = format!("{}: {url}", t().status.link_failed);
                    // 接收端只会在退出时关闭
                    let _ = self.tx.send(AppMessage::ShowStatus(status));
                }
            }
        }
    }
}
