use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const KEY_HELP: &[(&str, &str)] = &[
    ("Enter", "start/stop"),
    ("Tab", "field"),
    ("←/→", "adjust"),
    ("q", "quit"),
];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    match state.status_line() {
        Some(text) => {
            if state.status_is_alert() {
                parts.push(Span::styled(" Time's up! ", Theme::alert()));
            }
            parts.push(Span::styled(format!(" {} ", text), Theme::status_bar()));
        }
        None => {
            for (key, what) in KEY_HELP {
                parts.push(Span::styled(format!(" {}", key), Theme::status_key()));
                parts.push(Span::styled(format!(" {} ", what), Theme::status_bar()));
            }
        }
    }

    let mut right = format!(" cycles: {} ", state.completed_cycles);
    if state.config.ui.show_clock {
        right.push_str(&format!("│ {} ", chrono::Local::now().format("%H:%M")));
    }

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.chars().count()).sum();
    let remaining = (area.width as usize).saturating_sub(used + right.chars().count());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(right, Theme::status_key()));

    let paragraph = Paragraph::new(Line::from(parts));
    frame.render_widget(paragraph, area);
}
