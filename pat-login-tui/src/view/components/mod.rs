//! 复用组件

pub mod input;
pub mod statusbar;
