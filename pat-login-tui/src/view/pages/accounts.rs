//! 账号页面视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染账号页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(area);

    if app.accounts.accounts.is_empty() {
        render_empty(frame, chunks[0]);
    } else {
        render_list(app, frame, chunks[0]);
    }
    render_footer(frame, chunks[1]);
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", t().accounts.no_accounts),
            Style::default().fg(colors().muted),
        ),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染账号列表
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let items: Vec<ListItem> = app
        .accounts
        .accounts
        .iter()
        .enumerate()
        .map(|(i, account)| {
            let is_selected = i == app.accounts.selected;
            let (name_style, host_style) = if is_selected {
                (Styles::selected(), Styles::selected())
            } else {
                (Style::default().fg(c.success), Style::default().fg(c.muted))
            };

            ListItem::new(Line::from(vec![
                Span::raw("  "),
                Span::styled(account.login.as_str(), name_style),
                Span::raw(" "),
                Span::styled(format!("@ {}", account.hostname), host_style),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.accounts.selected));

    frame.render_stateful_widget(List::new(items), area, &mut state);
}

/// 渲染底部入口提示
fn render_footer(frame: &mut Frame, area: Rect) {
    let texts = t();
    let content = vec![
        Line::from(vec![
            Span::styled(
                format!("  {} / {}", texts.hints.keys.enter, texts.hints.keys.alt_l),
                Styles::hint_key(),
            ),
            Span::raw(": "),
            Span::styled(texts.accounts.login_with_token, Style::default().fg(colors().fg)),
        ]),
        Line::styled(
            format!("  {}", texts.accounts.session_only),
            Style::default().fg(colors().muted),
        ),
    ];
    frame.render_widget(Paragraph::new(content), area);
}
