//! PAT Login TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 外部服务 (`backend/`)
//!
//! 表单校验、提交状态机与 token 校验都在 `pat-login-core` 中，这里只负责终端交互。
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 日志写入文件，终端留给界面
//!     load_config()           // 读取 config.toml，失败时回退到默认值
//!     Runtime::new()          // tokio 运行时，用于后台校验 token
//!     init_terminal()         // 初始化终端
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use pat_login_core::GitHubTokenValidator;
use tokio::sync::mpsc;

use backend::{load_or_default, AppConfig, BrowserLinkOpener, CommandService, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 日志（guard 需要活到 main 结束）
    let _log_guard = init_logging();
    tracing::info!("Starting PAT Login v{}", env!("CARGO_PKG_VERSION"));

    // 2. 配置
    let (config, config_ok) = load_config();
    i18n::set_language(config.language());
    view::theme::set_theme(config.theme());
    tracing::info!(
        "Language {}, default hostname {}",
        i18n::current_language().code(),
        config.default_hostname
    );

    // 3. 异步运行时与后台服务
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let commands = CommandService::new(
        runtime.handle().clone(),
        Arc::new(GitHubTokenValidator::new()),
        Arc::new(BrowserLinkOpener::new()),
        tx,
    );

    // 4. 创建应用实例
    let mut app = model::App::new(config.default_hostname);
    if !config_ok {
        app.set_status(i18n::t().status.config_fallback);
    }

    // 5. 运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &commands, &mut rx);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        tracing::error!("Main loop failed: {e:#}");
    }
    tracing::info!("Exiting");

    result
}

/// 加载配置；缺失时使用默认值，从不写文件
///
/// 返回配置以及是否成功读取。
fn load_config() -> (AppConfig, bool) {
    match LocalConfigService::from_default_location() {
        Ok(service) => load_or_default(&service),
        Err(e) => {
            log::warn!("{e}, using defaults");
            (AppConfig::default(), true)
        }
    }
}
