//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod accounts;           // 账号页子消息处理
//!         mod login;              // 登录页子消息处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {...}
//!
//!
//!     与纯同步的状态修改不同，部分消息需要副作用（校验 token、打开浏览器）。
//!     update 不直接执行它们，而是返回一个 Command：
//!
//!         AppMessage::Login(Submit)
//!             ↓  form.begin_submit()
//!         Some(Command::ValidateToken { form_id, options })
//!             ↓  backend 在 tokio 运行时里调用 TokenValidator
//!         AppMessage::Login(ValidationFinished { form_id, result })
//!             ↓  form.complete_submit()
//!         成功 → 记录账号并返回上一页；失败 → 留在本页显示错误横幅
//!
//!     这样 Update 层可以在没有运行时的单元测试中完整验证。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod accounts;
mod login;

use pat_login_core::Navigator;

use crate::message::{AppMessage, Command};
use crate::model::App;

/// 处理应用消息，更新状态；需要执行副作用时返回 Command
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::GoBack => {
            app.go_back();
            None
        }

        AppMessage::OpenLogin => {
            app.open_login();
            None
        }

        AppMessage::Login(login_msg) => login::update(app, login_msg),

        AppMessage::Accounts(accounts_msg) => {
            accounts::update(app, accounts_msg);
            None
        }

        AppMessage::ShowStatus(message) => {
            app.set_status(message);
            None
        }

        AppMessage::ClearStatus => {
            app.clear_status();
            None
        }

        AppMessage::Noop => None,
    }
}
