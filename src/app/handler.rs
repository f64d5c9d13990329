use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::timer::{Phase, Tick};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;
use tracing::{debug, info};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick(now) => {
            handle_tick(state, now);
            vec![]
        }
    }
}

/// Execute an intent against the timer.
pub fn apply_action(state: &mut AppState, action: Action, now: Instant) {
    match action {
        Action::Start => {
            state.commit_fields();
            state.timer.start(now);
            info!(
                work_minutes = state.timer.work_minutes(),
                pause_minutes = state.timer.pause_minutes(),
                "timer started"
            );
            state.set_status(
                format!(
                    "Started: {} min work / {} min pause",
                    state.timer.work_minutes(),
                    state.timer.pause_minutes()
                ),
                now,
            );
        }
        Action::Stop => {
            state.timer.stop();
            info!(phase = %state.timer.phase(), "timer stopped");
            state.set_status("Stopped", now);
        }
        Action::Quit => {
            info!("quit requested");
            state.should_quit = true;
        }
    }
    state.dirty = true;
}

fn handle_tick(state: &mut AppState, now: Instant) {
    match state.timer.update(now) {
        Tick::Idle | Tick::Pending => {}
        Tick::Counted { seconds } => {
            if seconds > 1 {
                debug!(seconds, "countdown caught up after a late tick");
            }
            state.dirty = true;
        }
        Tick::Expired { next } => {
            let text = match next {
                Phase::Paused => {
                    state.completed_cycles += 1;
                    "Work finished, take a pause"
                }
                Phase::Working => "Pause over, back to work",
            };
            info!(phase = %next, cycles = state.completed_cycles, "interval expired");
            state.set_alert(text, now);
        }
    }
    state.expire_status(now);
    state.schedule_idle_redraw(now);
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    state.dirty = true;

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => vec![Action::Quit],
            _ => vec![],
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        KeyCode::Enter | KeyCode::Char(' ') => {
            if state.timer.is_running() {
                vec![Action::Stop]
            } else {
                vec![Action::Start]
            }
        }
        KeyCode::Char('s') => vec![Action::Start],
        KeyCode::Char('x') => vec![Action::Stop],
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            let next = state.focus.toggle();
            state.set_focus(next);
            vec![]
        }
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
            edit_focused(state, |f| f.step(1));
            vec![]
        }
        KeyCode::Char('-') | KeyCode::Left => {
            edit_focused(state, |f| f.step(-1));
            vec![]
        }
        KeyCode::Char(c) if c.is_ascii_digit() => {
            edit_focused(state, |f| f.insert_digit(c));
            vec![]
        }
        KeyCode::Backspace | KeyCode::Delete => {
            edit_focused(state, |f| f.delete_back());
            vec![]
        }
        _ => vec![],
    }
}

/// Apply an edit to the focused field and commit the clamped value.
fn edit_focused(state: &mut AppState, edit: impl FnOnce(&mut MinutesField)) {
    edit(state.focused_field_mut());
    state.commit_fields();
    if state.timer.is_running() {
        debug!("duration edited while running; applies on next start");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use std::time::Duration;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn press(state: &mut AppState, code: KeyCode, now: Instant) -> Vec<Action> {
        let actions = handle_event(state, key(code));
        for action in &actions {
            apply_action(state, *action, now);
        }
        actions
    }

    fn new_state(work: u32, pause: u32) -> AppState {
        let mut cfg = AppConfig::default();
        cfg.timer.work_minutes = work;
        cfg.timer.pause_minutes = pause;
        AppState::new(cfg)
    }

    #[test]
    fn test_enter_toggles_start_stop() {
        let t0 = Instant::now();
        let mut state = new_state(25, 5);

        assert_eq!(press(&mut state, KeyCode::Enter, t0), vec![Action::Start]);
        assert!(state.timer.is_running());
        assert_eq!(state.timer.remaining_seconds(), 25 * 60);

        assert!(!state.status_is_alert());

        assert_eq!(press(&mut state, KeyCode::Char(' '), t0), vec![Action::Stop]);
        assert!(!state.timer.is_running());
        assert_eq!(state.timer.remaining_seconds(), 0);
    }

    #[test]
    fn test_s_restarts_running_timer() {
        let t0 = Instant::now();
        let mut state = new_state(1, 1);
        press(&mut state, KeyCode::Char('s'), t0);
        handle_event(&mut state, AppEvent::Tick(t0 + Duration::from_secs(20)));
        assert_eq!(state.timer.remaining_seconds(), 40);

        press(&mut state, KeyCode::Char('s'), t0 + Duration::from_secs(20));
        assert_eq!(state.timer.remaining_seconds(), 60);
    }

    #[test]
    fn test_quit_keys() {
        let t0 = Instant::now();
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut state = new_state(25, 5);
            assert_eq!(press(&mut state, code, t0), vec![Action::Quit]);
            assert!(state.should_quit);
        }

        let mut state = new_state(25, 5);
        let ctrl_c = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut state, ctrl_c), vec![Action::Quit]);
    }

    #[test]
    fn test_digit_edits_commit_clamped_value() {
        let t0 = Instant::now();
        let mut state = new_state(25, 5);
        press(&mut state, KeyCode::Backspace, t0);
        press(&mut state, KeyCode::Backspace, t0);
        assert_eq!(state.work_field.text, "");
        assert_eq!(state.timer.work_minutes(), 1);

        press(&mut state, KeyCode::Char('4'), t0);
        press(&mut state, KeyCode::Char('0'), t0);
        assert_eq!(state.timer.work_minutes(), 40);

        press(&mut state, KeyCode::Enter, t0);
        assert_eq!(state.timer.remaining_seconds(), 40 * 60);
    }

    #[test]
    fn test_focus_switch_normalizes_field() {
        let t0 = Instant::now();
        let mut state = new_state(25, 5);
        press(&mut state, KeyCode::Backspace, t0);
        press(&mut state, KeyCode::Backspace, t0);
        press(&mut state, KeyCode::Tab, t0);
        assert_eq!(state.focus, FocusPanel::PauseMinutes);
        assert_eq!(state.work_field.text, "1");

        press(&mut state, KeyCode::Char('+'), t0);
        assert_eq!(state.timer.pause_minutes(), 6);
        press(&mut state, KeyCode::Left, t0);
        press(&mut state, KeyCode::Left, t0);
        assert_eq!(state.timer.pause_minutes(), 4);

        press(&mut state, KeyCode::Up, t0);
        assert_eq!(state.focus, FocusPanel::WorkMinutes);
    }

    #[test]
    fn test_edit_while_running_applies_on_next_start() {
        let t0 = Instant::now();
        let mut state = new_state(25, 5);
        press(&mut state, KeyCode::Enter, t0);
        press(&mut state, KeyCode::Right, t0);
        assert_eq!(state.timer.work_minutes(), 26);
        assert_eq!(state.timer.remaining_seconds(), 25 * 60);

        press(&mut state, KeyCode::Enter, t0);
        press(&mut state, KeyCode::Enter, t0);
        assert_eq!(state.timer.remaining_seconds(), 26 * 60);
    }

    #[test]
    fn test_tick_expiry_counts_cycles_and_sets_status() {
        let t0 = Instant::now();
        let mut state = new_state(1, 1);
        press(&mut state, KeyCode::Enter, t0);

        handle_event(&mut state, AppEvent::Tick(t0 + Duration::from_secs(60)));
        assert_eq!(state.timer.phase(), Phase::Paused);
        assert_eq!(state.completed_cycles, 1);
        assert_eq!(state.status_line(), Some("Work finished, take a pause"));
        assert!(state.status_is_alert());

        handle_event(&mut state, AppEvent::Tick(t0 + Duration::from_secs(120)));
        assert_eq!(state.timer.phase(), Phase::Working);
        assert_eq!(state.completed_cycles, 1);
        assert_eq!(state.status_line(), Some("Pause over, back to work"));
    }

    #[test]
    fn test_tick_marks_dirty_only_on_change() {
        let t0 = Instant::now();
        let mut state = new_state(25, 5);
        press(&mut state, KeyCode::Enter, t0);
        state.status_message = None;
        state.mark_drawn(t0);

        handle_event(&mut state, AppEvent::Tick(t0 + Duration::from_millis(300)));
        assert!(!state.dirty);

        handle_event(&mut state, AppEvent::Tick(t0 + Duration::from_millis(1100)));
        assert!(state.dirty);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut state = new_state(25, 5);
        let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        let actions = handle_event(&mut state, AppEvent::Terminal(CEvent::Key(release)));
        assert!(actions.is_empty());
    }
}
