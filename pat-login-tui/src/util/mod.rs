//!
//! src/util/mod.rs
//! Util 层：终端与日志
//!
//!     terminal.rs
//!         init_terminal()     开启 raw mode，切换到备用屏幕
//!         restore_terminal()  恢复终端，无论主循环成功与否都要执行
//!
//!     logging.rs
//!         init_logging()      日志写入文件，避免破坏界面
//!
//! Util 层在应用启动时初始化终端，在应用退出时恢复终端。
//! 主循环在初始化后的终端中运行。
//!     —— 去往 src/app.rs 主循环吧
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
