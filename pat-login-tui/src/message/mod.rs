//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁。
//! 键盘事件被翻译成 AppMessage，异步校验完成后的结果也以 AppMessage 的形式回到主循环，
//! Update 层只认 Message。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod accounts;       // 账号页子消息
//!         mod app;            // 主消息
//!         mod command;        // Update 层交给 Backend 执行的副作用
//!         mod login;          // 登录页子消息
//!
//!
//!     Message 与 Command 的方向相反：
//!         Message：外界 → Update（"发生了什么"）
//!         Command：Update → Backend（"需要去做什么"）
//!
//!     Update 层本身不做 I/O，所以校验 token、打开浏览器这类操作
//!     都以 Command 的形式返回给主循环，由 backend 执行。
//!

mod accounts;
mod app;
mod command;
mod login;

pub use accounts::AccountsMessage;
pub use app::AppMessage;
pub use command::Command;
pub use login::LoginMessage;
