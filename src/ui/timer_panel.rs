use crate::app::state::*;
use crate::timer::format_mm_ss;
use crate::ui::theme::Theme;
use ratatui::layout::{Flex, Margin};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let timer = &state.timer;
    let running = timer.is_running();
    let phase = timer.phase();

    let border_style = if running {
        Style::default().fg(Theme::phase_color(phase))
    } else {
        Theme::border()
    };

    let block = Block::default()
        .title(" Timer ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(if running {
            Theme::border_type_focused()
        } else {
            Theme::border_type()
        })
        .border_style(border_style)
        .style(Theme::panel_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(1), // Phase
        Constraint::Length(1),
        Constraint::Length(1), // MM:SS
        Constraint::Length(1),
        Constraint::Length(1), // Progress
    ])
    .flex(Flex::Center)
    .split(inner);

    let phase_line = if running {
        Line::from(vec![
            Span::styled("● ", Theme::phase(phase)),
            Span::styled(phase.label(), Theme::phase(phase)),
        ])
    } else {
        Line::from(Span::styled("Idle · press Enter to start", Theme::idle()))
    };
    frame.render_widget(Paragraph::new(phase_line).alignment(Alignment::Center), rows[0]);

    let countdown = Paragraph::new(Span::styled(timer.format_remaining(), Theme::countdown()))
        .alignment(Alignment::Center);
    frame.render_widget(countdown, rows[2]);

    if running {
        let gauge_area = rows[4].inner(Margin::new(2, 0));
        let gauge = Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(Theme::phase_color(phase))
                    .bg(Theme::BG_ELEVATED),
            )
            .ratio(timer.progress())
            .label(format!(
                "{} / {}",
                elapsed_label(timer.interval_seconds(), timer.remaining_seconds()),
                format_mm_ss(timer.interval_seconds())
            ));
        frame.render_widget(gauge, gauge_area);
    }
}

fn elapsed_label(total: u64, remaining: u64) -> String {
    format_mm_ss(total.saturating_sub(remaining))
}
