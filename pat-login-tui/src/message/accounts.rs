//! 账号页消息类型

/// 账号页相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountsMessage {
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 移除选中账号
    Remove,
}
