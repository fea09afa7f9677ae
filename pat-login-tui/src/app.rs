//!
//! app.rs
//! 应用主循环
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!     should_quit: false,                             // 决定应用是否应该退出
//!     navigation: [Accounts],                         // 导航历史，根页面为账号页
//!     status_message: None,                           // 状态栏消息
//!     accounts: [],                                   // 本次运行中登录成功的账号
//!     login: None,                                    // 登录页状态，进入登录页时才创建
//!     default_hostname: "github.com",                 // 来自 config.toml
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     while let Ok(msg) = rx.try_recv() {             // 取出后台任务送回的消息（校验结果等）
//!         dispatch(msg)
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         dispatch(msg)
//!     }
//! }
//!
//! dispatch(msg):
//!     update::update(&mut app , msg)                  // 更新状态
//!         → Some(command) 时交给 CommandService 执行
//!

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::CommandService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    commands: &CommandService,
    rx: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 处理后台任务送回的消息
        while let Ok(msg) = rx.try_recv() {
            dispatch(app, commands, msg);
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            dispatch(app, commands, msg);
        }
    }

    Ok(())
}

/// 更新状态，并执行返回的命令
fn dispatch(app: &mut App, commands: &CommandService, msg: AppMessage) {
    if let Some(command) = update::update(app, msg) {
        commands.execute(command);
    }
}
