//!
//! src/backend/mod.rs
//! Backend 层：与外界打交道的服务
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod command_service;    // 执行 Update 层返回的 Command
//!         mod config_service;     // 读取 config.toml（只读）
//!         mod link_service;       // 用系统浏览器打开链接
//!
//!
//!     数据流：
//!         Update 返回 Command::ValidateToken
//!             ↓
//!         CommandService::execute() 在 tokio 运行时中调用 TokenValidator
//!             ↓ （异步）
//!         mpsc channel 送回 AppMessage::Login(ValidationFinished)
//!             ↓
//!         主循环取出消息交给 Update
//!             ↓
//!         View 层重新渲染
//!

mod command_service;
mod config_service;
mod link_service;

pub use command_service::CommandService;
pub use config_service::{load_or_default, AppConfig, LocalConfigService};
pub use link_service::BrowserLinkOpener;
