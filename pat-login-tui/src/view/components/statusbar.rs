//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息显示在提示之后
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前页面生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;

    let mut hints = Vec::new();

    match app.current_page() {
        Page::Accounts => {
            hints.push((keys.arrows_ud, actions.select));
            hints.push((keys.alt_l, actions.login));
            if app.accounts.selected_account().is_some() {
                hints.push((keys.alt_d, actions.remove));
            }
            hints.push(("q", texts.common.quit));
        }
        Page::LoginWithToken => {
            hints.push((keys.tab_arrows, actions.move_focus));
            hints.push((keys.enter, actions.activate));
            hints.push((keys.alt_s, actions.show_hide_token));
            hints.push((keys.alt_g, actions.generate_pat));
            hints.push((keys.alt_o, actions.open_docs));
            hints.push((keys.esc, texts.common.back));
        }
    }

    hints.push((keys.ctrl_c, texts.common.quit));

    hints
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::view::layout::tests::render_to_lines;

    #[test]
    fn test_status_message_shown() {
        let mut app = App::default();
        app.set_status("Logged in as octocat");
        let lines = render_to_lines(&app, 160, 10);
        assert!(lines[9].contains("Logged in as octocat"));
    }

    #[test]
    fn test_login_page_hints() {
        let mut app = App::default();
        app.open_login();
        let hints = get_hints(&app);
        assert!(hints.iter().any(|(key, _)| *key == t().hints.keys.alt_s));
    }
}
