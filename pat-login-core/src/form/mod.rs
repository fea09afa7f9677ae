//! 登录表单
//!
//! - `state`：表单状态记录与状态转换（Idle / Submitting + LastAttemptValid）
//! - `screen`：由表单纯函数派生的界面模型
//! - `submit`：校验 → 提交 → 返回或显示错误 的完整流程

mod screen;
mod state;
mod submit;

pub use screen::{Control, FieldView, LoginScreen};
pub use state::{LoginForm, SubmitOutcome};
pub use submit::submit_login;
