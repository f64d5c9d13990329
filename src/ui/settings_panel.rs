use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

const LABEL_WIDTH: usize = 15;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Settings ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1))
        .style(Theme::panel_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let running = state.timer.is_running();
    let button = if running {
        Span::styled("  Stop  ", Theme::button_stop())
    } else {
        Span::styled("  Start  ", Theme::button_start())
    };

    let mut lines = vec![
        field_line(
            "Work minutes",
            &state.work_field,
            state.focus == FocusPanel::WorkMinutes,
        ),
        field_line(
            "Pause minutes",
            &state.pause_field,
            state.focus == FocusPanel::PauseMinutes,
        ),
        Line::default(),
        Line::from(vec![button, Span::styled("  Enter", Theme::label())]),
    ];
    if running {
        lines.push(Line::from(Span::styled(
            "Changes apply on next start",
            Theme::idle(),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);

    // Cursor sits after the focused field text: label + "[ " prefix
    let (row, field) = match state.focus {
        FocusPanel::WorkMinutes => (0u16, &state.work_field),
        FocusPanel::PauseMinutes => (1u16, &state.pause_field),
    };
    let cursor_x = inner.x + LABEL_WIDTH as u16 + 2 + field.text.len() as u16;
    let cursor_y = inner.y + row;
    if inner.width > 0 && cursor_y < inner.bottom() {
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), cursor_y));
    }
}

fn field_line<'a>(label: &'a str, field: &'a MinutesField, focused: bool) -> Line<'a> {
    let style = if focused {
        Theme::field_focused()
    } else {
        Theme::field()
    };
    Line::from(vec![
        Span::styled(format!("{:<width$}", label, width = LABEL_WIDTH), Theme::label()),
        Span::styled("[ ", Theme::border()),
        Span::styled(format!("{:<2}", field.text), style),
        Span::styled(" ]", Theme::border()),
        Span::styled(if focused { "  ←/→ ±1" } else { "" }, Theme::label()),
    ])
}
