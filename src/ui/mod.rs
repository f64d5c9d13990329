mod layout;
mod settings_panel;
mod status_bar;
mod theme;
mod timer_panel;
mod title_bar;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    title_bar::render(frame, app_layout.title_bar, state);
    timer_panel::render(frame, app_layout.timer_panel, state);
    settings_panel::render(frame, app_layout.settings_panel, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;
    use std::time::{Duration, Instant};

    fn screen_text(state: &AppState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_render_idle() {
        let state = AppState::new(AppConfig::default());
        let text = screen_text(&state);
        assert!(text.contains("00:00"));
        assert!(text.contains("Idle"));
        assert!(text.contains("Start"));
        assert!(text.contains("Work minutes"));
        assert!(text.contains("25"));
    }

    #[test]
    fn test_render_running() {
        let mut state = AppState::new(AppConfig::default());
        state.timer.start(Instant::now());
        let text = screen_text(&state);
        assert!(text.contains("Working"));
        assert!(text.contains("25:00"));
        assert!(text.contains("Stop"));
        assert!(text.contains("cycles: 0"));
    }

    #[test]
    fn test_render_expiry_shows_times_up() {
        let mut cfg = AppConfig::default();
        cfg.timer.work_minutes = 1;
        let mut state = AppState::new(cfg);
        let t0 = Instant::now();
        state.timer.start(t0);
        crate::app::handler::handle_event(
            &mut state,
            crate::app::event::AppEvent::Tick(t0 + Duration::from_secs(60)),
        );
        let text = screen_text(&state);
        assert!(text.contains("Time's up!"));
        assert!(text.contains("Work finished, take a pause"));

        state.set_status("Stopped", t0);
        assert!(!screen_text(&state).contains("Time's up!"));
    }
}
