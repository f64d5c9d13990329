use std::fmt;
use std::time::Instant;

use super::{DEFAULT_PAUSE_MINUTES, DEFAULT_WORK_MINUTES, MIN_MINUTES};

/// Kind of interval currently counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Working,
    Paused,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Working => "Working",
            Phase::Paused => "Paused",
        }
    }

    /// The phase entered when this one expires.
    pub fn next(&self) -> Phase {
        match self {
            Phase::Working => Phase::Paused,
            Phase::Paused => Phase::Working,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a single [`TimerEngine::update`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The timer is stopped.
    Idle,
    /// Less than a whole second since the last countdown step.
    Pending,
    /// Whole seconds were taken off the current interval.
    Counted { seconds: u64 },
    /// The current interval ran out and `next` has started.
    Expired { next: Phase },
}

/// Interval lengths in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    pub work_minutes: u32,
    pub pause_minutes: u32,
}

impl Durations {
    pub fn seconds_for(&self, phase: Phase) -> u64 {
        let minutes = match phase {
            Phase::Working => self.work_minutes,
            Phase::Paused => self.pause_minutes,
        };
        u64::from(minutes) * 60
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            work_minutes: DEFAULT_WORK_MINUTES,
            pause_minutes: DEFAULT_PAUSE_MINUTES,
        }
    }
}

/// Work/pause countdown.
///
/// The engine never reads the clock itself: `start` and `update` take the
/// current `Instant` from the caller, which drives `update` once per frame.
///
/// Duration edits go to `configured` and are snapshotted into `active` by
/// `start`, so changing the minutes while the timer runs does not disturb the
/// cycle in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerEngine {
    configured: Durations,
    active: Durations,
    phase: Phase,
    remaining_seconds: u64,
    running: bool,
    last_tick: Option<Instant>,
}

impl TimerEngine {
    pub fn new(work_minutes: u32, pause_minutes: u32) -> Self {
        let durations = Durations {
            work_minutes: work_minutes.max(MIN_MINUTES),
            pause_minutes: pause_minutes.max(MIN_MINUTES),
        };
        Self {
            configured: durations,
            active: durations,
            phase: Phase::Working,
            remaining_seconds: 0,
            running: false,
            last_tick: None,
        }
    }

    /// Begin a fresh Working interval. Restarts the countdown when already
    /// running.
    pub fn start(&mut self, now: Instant) {
        self.active = self.configured;
        self.running = true;
        self.phase = Phase::Working;
        self.remaining_seconds = self.active.seconds_for(Phase::Working);
        self.last_tick = Some(now);
    }

    /// Stop counting and clear the remaining time. The phase is left as is.
    pub fn stop(&mut self) {
        self.running = false;
        self.remaining_seconds = 0;
    }

    /// Advance the countdown to `now`.
    ///
    /// Only whole seconds are consumed. After a countdown step the reference
    /// instant resynchronizes to `now`, so a sub-second remainder is dropped.
    /// At most one phase transition happens per call: time past the first
    /// expiry is dropped and the next interval starts full.
    pub fn update(&mut self, now: Instant) -> Tick {
        if !self.running {
            return Tick::Idle;
        }
        let Some(last) = self.last_tick else {
            return Tick::Idle;
        };

        let elapsed = now.saturating_duration_since(last).as_secs();
        if elapsed < 1 {
            return Tick::Pending;
        }

        self.last_tick = Some(now);
        self.remaining_seconds = self.remaining_seconds.saturating_sub(elapsed);

        if self.remaining_seconds > 0 {
            return Tick::Counted { seconds: elapsed };
        }

        let next = self.phase.next();
        self.phase = next;
        self.remaining_seconds = self.active.seconds_for(next);
        Tick::Expired { next }
    }

    /// Remaining time as `MM:SS`. Minutes wider than two digits are printed
    /// in full.
    pub fn format_remaining(&self) -> String {
        format_mm_ss(self.remaining_seconds)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn work_minutes(&self) -> u32 {
        self.configured.work_minutes
    }

    pub fn pause_minutes(&self) -> u32 {
        self.configured.pause_minutes
    }

    /// Takes effect on the next `start`.
    pub fn set_work_minutes(&mut self, minutes: u32) {
        self.configured.work_minutes = minutes.max(MIN_MINUTES);
    }

    /// Takes effect on the next `start`.
    pub fn set_pause_minutes(&mut self, minutes: u32) {
        self.configured.pause_minutes = minutes.max(MIN_MINUTES);
    }

    /// Full length of the interval currently counting down.
    pub fn interval_seconds(&self) -> u64 {
        self.active.seconds_for(self.phase)
    }

    /// Fraction of the current interval already elapsed, `0.0` when idle.
    pub fn progress(&self) -> f64 {
        let total = self.interval_seconds();
        if !self.running || total == 0 {
            return 0.0;
        }
        let done = total.saturating_sub(self.remaining_seconds);
        (done as f64 / total as f64).clamp(0.0, 1.0)
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(DEFAULT_WORK_MINUTES, DEFAULT_PAUSE_MINUTES)
    }
}

pub fn format_mm_ss(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
