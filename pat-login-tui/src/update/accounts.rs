//! 账号页更新逻辑

use crate::i18n::t;
use crate::message::AccountsMessage;
use crate::model::App;

/// 处理账号页消息
pub fn update(app: &mut App, msg: AccountsMessage) {
    match msg {
        AccountsMessage::SelectPrevious => app.accounts.select_previous(),
        AccountsMessage::SelectNext => app.accounts.select_next(),
        AccountsMessage::Remove => {
            if let Some(account) = app.accounts.remove_selected() {
                log::info!("Removed account {} on {}", account.login, account.hostname);
                app.set_status(format!(
                    "{}: {} ({})",
                    t().status.account_removed,
                    account.login,
                    account.hostname
                ));
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use pat_login_core::AuthenticatedAccount;

    use super::*;

    #[test]
    fn test_remove_sets_status() {
        let mut app = App::default();
        app.accounts.add(AuthenticatedAccount {
            hostname: "github.com".to_string(),
            login: "octocat".to_string(),
        });
        update(&mut app, AccountsMessage::Remove);
        assert!(app.accounts.accounts.is_empty());
        assert!(app.status_message.as_deref().unwrap().contains("octocat"));
    }

    #[test]
    fn test_remove_on_empty_list_is_noop() {
        let mut app = App::default();
        update(&mut app, AccountsMessage::Remove);
        assert!(app.status_message.is_none());
    }
}
