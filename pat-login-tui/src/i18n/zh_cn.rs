//! 简体中文翻译 (zh-CN)

use super::keys::{
    AccountsTexts, ActionTexts, CommonTexts, FieldErrorTexts, HintTexts, KeyNames, LoginTexts,
    StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "PAT 登录",
        quit: "退出",
        back: "返回",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab_arrows: "Tab/↑↓",
            arrows_ud: "↑↓",
            alt_s: "Alt+s",
            alt_g: "Alt+g",
            alt_o: "Alt+o",
            alt_l: "Alt+l",
            alt_d: "Alt+d",
            ctrl_c: "Ctrl+c",
        },
        actions: ActionTexts {
            move_focus: "移动",
            select: "选择",
            activate: "确认",
            show_hide_token: "显示/隐藏 Token",
            generate_pat: "生成 PAT",
            open_docs: "文档",
            login: "登录",
            remove: "移除",
        },
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    accounts: AccountsTexts {
        title: "账号",
        no_accounts: "暂无已登录账号",
        login_with_token: "使用个人访问令牌登录",
        session_only: "账号仅在本次运行期间保留，Token 不会被保存。",
    },

    login: LoginTexts {
        title: "使用个人访问令牌登录",
        go_back: "返回",
        token_label: "Token",
        token_placeholder: "在 GitHub 上生成的 40 位 Token",
        generate_pat: "生成 PAT",
        generate_pat_suffix: "后粘贴到上方。",
        scopes_hint: "所需权限范围会自动勾选。",
        hostname_label: "主机名",
        hostname_placeholder: "github.company.com",
        hostname_default_hint: "默认为 github.com。",
        hostname_enterprise_hint: "仅在使用 GitHub Enterprise Server 时修改。",
        validation_failed_prefix: "此 Token 无法通过 ",
        validation_failed_suffix: " 验证。",
        docs: "文档",
        submit: "登录",
        submitting: "登录中...",
        errors: FieldErrorTexts {
            required: "必填",
            invalid_token: "Token 格式无效。",
            invalid_hostname: "主机名无效。",
        },
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status: StatusTexts {
        logged_in_as: "已登录：",
        opening_link: "正在浏览器中打开：",
        link_failed: "打开链接失败",
        token_url_failed: "无法为该主机名生成 Token 链接",
        account_removed: "账号已移除",
        config_fallback: "配置加载失败，已使用默认配置",
    },
};
