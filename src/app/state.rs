use crate::config::AppConfig;
use crate::timer::{clamp_minutes, TimerEngine, MAX_MINUTES};
use std::time::{Duration, Instant};

/// How long a status message stays in the status bar.
pub const STATUS_TTL: Duration = Duration::from_secs(4);

/// Redraw at least this often so the wall clock keeps moving while idle.
const IDLE_REDRAW: Duration = Duration::from_secs(1);

/// Editable minute count for one interval length.
///
/// Holds the raw text so the user can clear and retype it; `value()` is
/// always clamped into the accepted range.
#[derive(Debug, Clone, PartialEq)]
pub struct MinutesField {
    pub text: String,
}

impl MinutesField {
    const MAX_DIGITS: usize = 2;

    pub fn new(minutes: u32) -> Self {
        Self {
            text: clamp_minutes(minutes).to_string(),
        }
    }

    pub fn value(&self) -> u32 {
        clamp_minutes(self.text.parse().unwrap_or(0))
    }

    pub fn insert_digit(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }
        if self.text == "0" {
            self.text.clear();
        }
        if self.text.len() < Self::MAX_DIGITS {
            self.text.push(c);
        }
    }

    pub fn delete_back(&mut self) {
        self.text.pop();
    }

    pub fn step(&mut self, delta: i32) {
        let next = (i64::from(self.value()) + i64::from(delta)).clamp(1, i64::from(MAX_MINUTES));
        self.text = next.to_string();
    }

    /// Replace the text with the clamped value, e.g. `""` becomes `"1"`.
    pub fn normalize(&mut self) {
        self.text = self.value().to_string();
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    WorkMinutes,
    PauseMinutes,
}

impl FocusPanel {
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::WorkMinutes => FocusPanel::PauseMinutes,
            FocusPanel::PauseMinutes => FocusPanel::WorkMinutes,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub expires_at: Instant,
    /// Interval expiry; rendered with the "Time's up!" marker.
    pub alert: bool,
}

pub struct AppState {
    pub config: AppConfig,
    pub timer: TimerEngine,
    pub work_field: MinutesField,
    pub pause_field: MinutesField,
    pub focus: FocusPanel,
    pub status_message: Option<StatusMessage>,
    /// Work intervals that ran to expiry since launch.
    pub completed_cycles: u32,
    pub last_redraw: Option<Instant>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let work = config.timer.work_minutes;
        let pause = config.timer.pause_minutes;
        Self {
            config,
            timer: TimerEngine::new(work, pause),
            work_field: MinutesField::new(work),
            pause_field: MinutesField::new(pause),
            focus: FocusPanel::WorkMinutes,
            status_message: None,
            completed_cycles: 0,
            last_redraw: None,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn focused_field_mut(&mut self) -> &mut MinutesField {
        match self.focus {
            FocusPanel::WorkMinutes => &mut self.work_field,
            FocusPanel::PauseMinutes => &mut self.pause_field,
        }
    }

    /// Push both field values into the engine.
    pub fn commit_fields(&mut self) {
        self.timer.set_work_minutes(self.work_field.value());
        self.timer.set_pause_minutes(self.pause_field.value());
    }

    pub fn set_focus(&mut self, focus: FocusPanel) {
        self.focused_field_mut().normalize();
        self.focus = focus;
        self.dirty = true;
    }

    pub fn set_status(&mut self, text: impl Into<String>, now: Instant) {
        self.push_status(text.into(), now, false);
    }

    pub fn set_alert(&mut self, text: impl Into<String>, now: Instant) {
        self.push_status(text.into(), now, true);
    }

    fn push_status(&mut self, text: String, now: Instant, alert: bool) {
        self.status_message = Some(StatusMessage {
            text,
            expires_at: now + STATUS_TTL,
            alert,
        });
        self.dirty = true;
    }

    pub fn status_is_alert(&self) -> bool {
        self.status_message.as_ref().is_some_and(|m| m.alert)
    }

    pub fn status_line(&self) -> Option<&str> {
        self.status_message.as_ref().map(|m| m.text.as_str())
    }

    /// Drop an expired status message.
    pub fn expire_status(&mut self, now: Instant) {
        if let Some(msg) = &self.status_message {
            if now >= msg.expires_at {
                self.status_message = None;
                self.dirty = true;
            }
        }
    }

    /// Mark the screen dirty if nothing has redrawn it for a while.
    pub fn schedule_idle_redraw(&mut self, now: Instant) {
        let due = match self.last_redraw {
            Some(at) => now.saturating_duration_since(at) >= IDLE_REDRAW,
            None => true,
        };
        if due {
            self.dirty = true;
        }
    }

    pub fn mark_drawn(&mut self, now: Instant) {
        self.dirty = false;
        self.last_redraw = Some(now);
    }
}
