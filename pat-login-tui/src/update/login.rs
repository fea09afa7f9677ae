//! 登录页更新逻辑

use pat_login_core::constants::DOCS_URL;
use pat_login_core::{AuthResult, AuthenticatedAccount, Navigator, SubmitOutcome};

use crate::i18n::t;
use crate::message::{Command, LoginMessage};
use crate::model::{App, LoginFocus};

/// 处理登录页消息
pub fn update(app: &mut App, msg: LoginMessage) -> Option<Command> {
    // 异步结果可能在页面卸载后才回来，单独处理
    if let LoginMessage::ValidationFinished { form_id, result } = msg {
        return handle_validation_finished(app, form_id, &result);
    }

    let state = app.login.as_mut()?;

    match msg {
        LoginMessage::NextFocus => {
            let next = state.focus.next();
            state.move_focus(next);
            None
        }

        LoginMessage::PrevFocus => {
            let prev = state.focus.prev();
            state.move_focus(prev);
            None
        }

        LoginMessage::Input(c) => {
            if let Some(field) = state.focus.field() {
                state.form.push_char(field, c);
            }
            None
        }

        LoginMessage::Backspace => {
            if let Some(field) = state.focus.field() {
                state.form.pop_char(field);
            }
            None
        }

        LoginMessage::ClearField => {
            if let Some(field) = state.focus.field() {
                state.form.clear(field);
            }
            None
        }

        LoginMessage::ToggleSecrets => {
            state.show_token = !state.show_token;
            None
        }

        LoginMessage::Activate => match state.focus {
            LoginFocus::GeneratePat => generate_token(app),
            LoginFocus::Docs => open_docs(app),
            LoginFocus::Token | LoginFocus::Hostname | LoginFocus::Submit => submit(app),
        },

        LoginMessage::GenerateToken => generate_token(app),

        LoginMessage::OpenDocs => open_docs(app),

        LoginMessage::Submit => submit(app),

        LoginMessage::ValidationFinished { .. } => None,
    }
}

/// 开始提交；表单未通过校验或按钮不可用时什么都不做
fn submit(app: &mut App) -> Option<Command> {
    let state = app.login.as_mut()?;
    let options = state.form.begin_submit()?;
    log::info!("Submitting token for {}", options.hostname);
    Some(Command::ValidateToken {
        form_id: state.id,
        options,
    })
}

/// 打开 token 创建页面；主机名为空时按钮不可用
fn generate_token(app: &mut App) -> Option<Command> {
    let url = app.login.as_ref()?.form.token_generation_url()?;
    match url {
        Ok(url) => {
            app.set_status(format!("{} {url}", t().status.opening_link));
            Some(Command::OpenLink(url))
        }
        Err(e) => {
            log::warn!("Failed to build token URL: {e}");
            app.set_status(t().status.token_url_failed);
            None
        }
    }
}

fn open_docs(app: &mut App) -> Option<Command> {
    app.set_status(format!("{} {DOCS_URL}", t().status.opening_link));
    Some(Command::OpenLink(DOCS_URL.to_string()))
}

fn handle_validation_finished(
    app: &mut App,
    form_id: u64,
    result: &AuthResult<AuthenticatedAccount>,
) -> Option<Command> {
    let Some(state) = app.login.as_mut().filter(|s| s.id == form_id) else {
        log::debug!("Discarding validation result for unmounted form {form_id}");
        return None;
    };

    match state.form.complete_submit(result)? {
        SubmitOutcome::NavigateBack(account) => {
            app.set_status(format!(
                "{} {} ({})",
                t().status.logged_in_as,
                account.login,
                account.hostname
            ));
            app.accounts.add(account);
            app.go_back();
        }
        SubmitOutcome::Rejected => {}
    }
    None
}
