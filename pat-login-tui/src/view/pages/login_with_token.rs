//! PAT 登录页面视图

use pat_login_core::{Control, FieldError, FieldView};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{LoginFocus, LoginState};
use crate::view::components::input::{display_value, fit_tail, CURSOR};
use crate::view::theme::{colors, Styles};

/// 渲染登录页面
pub fn render(state: &LoginState, frame: &mut Frame, area: Rect) {
    let screen = state.screen();
    let texts = &t().login;
    let c = colors();
    // 左侧缩进 + 光标
    let value_width = usize::from(area.width).saturating_sub(4);

    let mut lines = Vec::new();

    // === 返回 ===
    lines.push(Line::from(vec![
        Span::styled(format!("  {}", t().hints.keys.esc), Styles::hint_key()),
        Span::styled(format!(" ← {}", texts.go_back), control_style(screen.back, false)),
    ]));
    lines.push(Line::from(""));

    // === 校验失败横幅 ===
    if let Some(hostname) = &screen.error_banner {
        lines.push(Line::styled(
            format!(
                "  ⚠ {}{}{}",
                texts.validation_failed_prefix, hostname, texts.validation_failed_suffix
            ),
            Style::default().fg(c.error).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(""));
    }

    // === Token ===
    let token_focused = state.focus == LoginFocus::Token;
    lines.push(label_line(texts.token_label, token_focused));
    lines.push(value_line(
        &screen.token,
        &display_value(&screen.token.value, !state.show_token),
        texts.token_placeholder,
        token_focused,
        value_width,
    ));
    if let Some(err) = screen.token.error {
        lines.push(error_line(err));
    }
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!("[ {} ]", texts.generate_pat),
            control_style(screen.generate_pat, state.focus == LoginFocus::GeneratePat),
        ),
        Span::styled(format!(" {}", texts.generate_pat_suffix), Style::default().fg(c.fg)),
    ]));
    lines.push(Line::styled(
        format!("  {}", texts.scopes_hint),
        Style::default().fg(c.muted),
    ));
    lines.push(Line::from(""));

    // === Hostname ===
    let hostname_focused = state.focus == LoginFocus::Hostname;
    lines.push(label_line(texts.hostname_label, hostname_focused));
    lines.push(value_line(
        &screen.hostname,
        &screen.hostname.value,
        texts.hostname_placeholder,
        hostname_focused,
        value_width,
    ));
    if let Some(err) = screen.hostname.error {
        lines.push(error_line(err));
    }
    lines.push(Line::styled(
        format!(
            "  {} {}",
            texts.hostname_default_hint, texts.hostname_enterprise_hint
        ),
        Style::default().fg(c.muted),
    ));
    lines.push(Line::from(""));

    // === 按钮 ===
    let submit_label = if screen.submitting {
        texts.submitting
    } else {
        texts.submit
    };
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!("[ {} ]", texts.docs),
            control_style(screen.docs, state.focus == LoginFocus::Docs),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[ {submit_label} ]"),
            control_style(screen.submit, state.focus == LoginFocus::Submit),
        ),
    ]));
    lines.push(Line::styled(
        format!("  {}", screen.docs_url),
        Style::default().fg(c.border),
    ));

    frame.render_widget(Paragraph::new(lines), area);
}

/// 按钮样式：焦点优先，其次是否可用
fn control_style(control: Control, focused: bool) -> Style {
    if !control.enabled {
        Styles::disabled()
    } else if focused {
        Styles::selected()
    } else {
        Style::default().fg(colors().highlight)
    }
}

fn label_line(label: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(colors().border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Styles::title()
    };
    Line::styled(format!("  {label}"), style)
}

/// 输入框一行：空且未聚焦时显示占位符，聚焦时在末尾显示光标
fn value_line(
    field: &FieldView,
    shown: &str,
    placeholder: &str,
    focused: bool,
    width: usize,
) -> Line<'static> {
    let c = colors();

    if field.value.is_empty() && !focused {
        return Line::styled(format!("  {placeholder}"), Style::default().fg(c.muted));
    }

    let visible = fit_tail(shown, width);
    let text = if focused && field.editable {
        format!("  {visible}{CURSOR}")
    } else {
        format!("  {visible}")
    };

    let style = if !field.editable {
        Styles::disabled()
    } else if field.error.is_some() {
        Style::default().fg(c.warning)
    } else {
        Style::default().fg(c.fg)
    };
    Line::styled(text, style)
}

fn error_line(err: FieldError) -> Line<'static> {
    Line::styled(
        format!("  ✗ {}", field_error_text(err)),
        Style::default().fg(colors().error),
    )
}

/// 字段错误的本地化文本
fn field_error_text(err: FieldError) -> &'static str {
    let errors = &t().login.errors;
    match err {
        FieldError::Required => errors.required,
        FieldError::InvalidToken => errors.invalid_token,
        FieldError::InvalidHostname => errors.invalid_hostname,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use pat_login_core::{AuthError, FormField};

    use crate::model::{App, LoginFocus};
    use crate::view::layout::tests::render_to_lines;

    fn token() -> String {
        "ghp_".to_string() + &"Z".repeat(36)
    }

    fn app_with_token() -> App {
        let mut app = App::default();
        app.open_login();
        let state = app.login.as_mut().unwrap();
        state.form.set_value(FormField::Token, token());
        app
    }

    fn screen_text(app: &App) -> String {
        render_to_lines(app, 100, 30).join("\n")
    }

    #[test]
    fn test_initial_render() {
        let mut app = App::default();
        app.open_login();
        let screen = screen_text(&app);
        assert!(screen.contains("Login with Personal Access Token"));
        assert!(screen.contains("Go Back"));
        assert!(screen.contains("▎"));
        assert!(screen.contains("github.com"));
        assert!(screen.contains("[ Generate a PAT ]"));
        assert!(screen.contains("[ Login ]"));
        assert!(!screen.contains("could not be validated"));
        assert!(!screen.contains("Required"));
    }

    #[test]
    fn test_placeholder_when_unfocused_and_empty() {
        let mut app = App::default();
        app.open_login();
        app.login.as_mut().unwrap().move_focus(LoginFocus::Docs);
        assert!(screen_text(&app).contains("The 40 characters token generated on GitHub"));
    }

    #[test]
    fn test_token_masked_until_toggled() {
        let mut app = app_with_token();
        let screen = screen_text(&app);
        assert!(!screen.contains(&token()));
        assert!(screen.contains(&"•".repeat(40)));

        app.login.as_mut().unwrap().show_token = true;
        assert!(screen_text(&app).contains(&token()));
    }

    #[test]
    fn test_field_error_after_touch() {
        let mut app = App::default();
        app.open_login();
        let state = app.login.as_mut().unwrap();
        state.move_focus(LoginFocus::GeneratePat);
        assert!(screen_text(&app).contains("✗ Required"));
    }

    #[test]
    fn test_banner_after_rejection() {
        let mut app = app_with_token();
        let form = &mut app.login.as_mut().unwrap().form;
        form.begin_submit().unwrap();
        form.complete_submit(&Err(AuthError::Unauthorized(401)));
        assert!(screen_text(&app).contains("⚠ This token could not be validated with github.com."));
    }

    #[test]
    fn test_submitting_label() {
        let mut app = app_with_token();
        app.login.as_mut().unwrap().form.begin_submit().unwrap();
        let screen = screen_text(&app);
        assert!(screen.contains("[ Logging in... ]"));
        assert!(!screen.contains("[ Login ]"));
    }
}
