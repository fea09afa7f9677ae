//! 英文翻译 (en-US)

use super::keys::{
    AccountsTexts, ActionTexts, CommonTexts, FieldErrorTexts, HintTexts, KeyNames, LoginTexts,
    StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "PAT Login",
        quit: "Quit",
        back: "Back",
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
            move_focus: "Move",
            select: "Select",
            activate: "Activate",
            show_hide_token: "Show/Hide token",
            generate_pat: "Generate PAT",
            open_docs: "Docs",
            login: "Login",
            remove: "Remove",
        },
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    accounts: AccountsTexts {
        title: "Accounts",
        no_accounts: "No accounts logged in yet",
        login_with_token: "Login with Personal Access Token",
        session_only: "Accounts are kept for this session only; tokens are never stored.",
    },

    login: LoginTexts {
        title: "Login with Personal Access Token",
        go_back: "Go Back",
        token_label: "Token",
        token_placeholder: "The 40 characters token generated on GitHub",
        generate_pat: "Generate a PAT",
        generate_pat_suffix: "on GitHub and paste above.",
        scopes_hint: "The required scopes will be selected for you.",
        hostname_label: "Hostname",
        hostname_placeholder: "github.company.com",
        hostname_default_hint: "Defaults to github.com.",
        hostname_enterprise_hint: "Change only if you are using GitHub Enterprise Server.",
        validation_failed_prefix: "This token could not be validated with ",
        validation_failed_suffix: ".",
        docs: "Docs",
        submit: "Login",
        submitting: "Logging in...",
        errors: FieldErrorTexts {
            required: "Required",
            invalid_token: "Invalid token.",
            invalid_hostname: "Invalid hostname.",
        },
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status: StatusTexts {
        logged_in_as: "Logged in as",
        opening_link: "Opening in browser:",
        link_failed: "Failed to open link",
        token_url_failed: "Cannot build token URL for this hostname",
        account_removed: "Account removed",
        config_fallback: "Config could not be loaded, using defaults",
    },
};
