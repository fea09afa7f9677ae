//!
//! src/event/mod.rs
//! Event 层：终端事件到消息的翻译
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件轮询与按键分发
//!         mod keymap;         // 快捷键定义
//!
//!
//!     主循环（app.rs）每一轮：
//!         poll_event(100ms)
//!             ↓ Some(event)
//!         handle_event(event, &app) -> AppMessage
//!             ↓
//!         update::update(&mut app, msg)
//!
//!     handler 只读取 App（当前页面、焦点），从不修改它。
//!
//!     按键分发：
//!         Ctrl+C              任何页面都直接退出
//!         账号页              q 退出，Enter / Alt+l 打开登录页，↑↓ 选择，Alt+d 移除
//!         登录页              Esc 返回，Tab/↑↓ 移动焦点，Enter 激活，
//!                             Alt+Enter 直接提交，Alt+s 显示/隐藏 token，Alt+g 生成 PAT，Alt+o 文档，
//!                             其余可打印字符写入当前输入框
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
