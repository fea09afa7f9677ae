//!
//! src/view/mod.rs
//! View 层：界面渲染
//!
//! View 层只读取 Model，从不修改它。每一轮主循环都会完整重绘一次。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 标题栏 + 内容区 + 状态栏
//!         pub mod theme;          // 深色 / 浅色配色
//!         mod components;         // 状态栏、输入框等复用组件
//!         mod pages;              // 各页面
//!
//!     登录页的渲染完全由 pat_login_core::LoginScreen 驱动：
//!         LoginState::screen() -> LoginScreen
//!             ↓
//!         pages::login_with_token::render()
//!     按钮是否可用、错误横幅、提交中状态都来自 LoginScreen，View 不做判断。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
