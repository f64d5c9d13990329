use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let bg = Theme::BG_ELEVATED;
    let mut parts = vec![
        Span::styled(
            " 🍅 pomotui ",
            Style::default()
                .fg(Theme::ACCENT_TOMATO)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Theme::BORDER_DIM).bg(bg)),
    ];

    if state.timer.is_running() {
        let phase = state.timer.phase();
        parts.push(Span::styled(
            format!("{} {}", phase, state.timer.format_remaining()),
            Style::default()
                .fg(Theme::phase_color(phase))
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ));
    } else {
        parts.push(Span::styled(
            format!(
                "{} min work / {} min pause",
                state.timer.work_minutes(),
                state.timer.pause_minutes()
            ),
            Style::default()
                .fg(Theme::TEXT_MUTED)
                .bg(bg)
                .add_modifier(Modifier::ITALIC),
        ));
    }

    let paragraph = Paragraph::new(Line::from(parts)).style(Theme::title_bar());
    frame.render_widget(paragraph, area);
}
