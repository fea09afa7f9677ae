//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 "唯一真相来源"。
//! 这一层只包含数据结构和最基本的状态操作，
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 登录页焦点（Token / Generate a PAT / Hostname / Docs / Login）
//!         mod navigation;     // 导航历史栈
//!         mod page;           // 页面枚举
//!
//!         pub mod state;      // 页面数据状态
//!
//!     值得一提的是，虽说 page.rs 与 state/ 都表示页面状态，但两者有不同：
//!         - Page 是一个简单的枚举，表示当前应用处于哪个"页面"，
//!             只负责标识位置，不存储任何业务数据；
//!         - State 是各个页面的业务数据容器，存储着列表、表单、焦点等。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub navigation: NavigationState,    // 导航历史
//!             pub status_message: Option<String>, // 状态栏消息
//!             pub accounts: AccountsState,        // 账号页面状态
//!             pub login: Option<LoginState>,      // 登录页状态（挂载期间存在）
//!             pub default_hostname: String,       // 默认主机名
//!         }
//!
//!     App 实现了 pat_login_core::Navigator：
//!         go_back() 弹出历史栈；离开登录页时卸载 LoginState。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、登录页状态（LoginState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         LoginState {
//!             id: u64,                // 实例 ID，用于丢弃过期的异步结果
//!             form: LoginForm,        // pat-login-core 中的表单状态机
//!             focus: LoginFocus,      // 当前焦点
//!             show_token: bool,       // Token 是否明文显示
//!         }
//!
//!     数据流：
//!         用户输入字符
//!             ↓
//!         event/handler.rs 返回 Login(Input(c))
//!             ↓
//!         update/login.rs 调用 form.push_char(field, c)
//!             ↓
//!         view/pages/login_with_token.rs 根据 LoginScreen 渲染
//!

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::App;
pub use focus::LoginFocus;
pub use navigation::NavigationState;
pub use page::Page;
pub use state::{AccountsState, LoginState};
