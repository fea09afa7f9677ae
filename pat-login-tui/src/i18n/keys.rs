//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **页面内容归对应页面**：如 `accounts.*`, `login.*`
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 账号页面文本
    pub accounts: AccountsTexts,
    /// PAT 登录页面文本
    pub login: LoginTexts,
    /// 状态栏消息
    pub status: StatusTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub quit: &'static str,
    pub back: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab_arrows: &'static str, // "Tab/↑↓"
    pub arrows_ud: &'static str,  // "↑↓"
    pub alt_s: &'static str,
    pub alt_g: &'static str,
    pub alt_o: &'static str,
    pub alt_l: &'static str,
    pub alt_d: &'static str,
    pub ctrl_c: &'static str,
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub move_focus: &'static str,
    pub select: &'static str,
    pub activate: &'static str,
    pub show_hide_token: &'static str,
    pub generate_pat: &'static str,
    pub open_docs: &'static str,
    pub login: &'static str,
    pub remove: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// 账号页面文本
pub struct AccountsTexts {
    pub title: &'static str,
    pub no_accounts: &'static str,
    pub login_with_token: &'static str,
    pub session_only: &'static str,
}

/// PAT 登录页面文本
pub struct LoginTexts {
    pub title: &'static str,
    pub go_back: &'static str,
    // Token 字段
    pub token_label: &'static str,
    pub token_placeholder: &'static str,
    pub generate_pat: &'static str,
    pub generate_pat_suffix: &'static str,
    pub scopes_hint: &'static str,
    // Hostname 字段
    pub hostname_label: &'static str,
    pub hostname_placeholder: &'static str,
    pub hostname_default_hint: &'static str,
    pub hostname_enterprise_hint: &'static str,
    // 校验失败横幅："{prefix}{hostname}{suffix}"
    pub validation_failed_prefix: &'static str,
    pub validation_failed_suffix: &'static str,
    // 按钮
    pub docs: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    // 字段错误
    pub errors: FieldErrorTexts,
}

/// 字段校验错误文本
pub struct FieldErrorTexts {
    pub required: &'static str,
    pub invalid_token: &'static str,
    pub invalid_hostname: &'static str,
}

/// 状态栏消息
pub struct StatusTexts {
    pub logged_in_as: &'static str,
    pub opening_link: &'static str,
    pub link_failed: &'static str,
    pub token_url_failed: &'static str,
    pub account_removed: &'static str,
    pub config_fallback: &'static str,
}
