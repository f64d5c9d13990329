//! Pomodoro countdown: the work/pause state machine driven by caller-supplied
//! instants. Nothing in here reads the clock or touches the terminal.

pub mod engine;

pub use engine::{format_mm_ss, Phase, Tick, TimerEngine};

pub const DEFAULT_WORK_MINUTES: u32 = 25;
pub const DEFAULT_PAUSE_MINUTES: u32 = 5;

/// Smallest interval length accepted anywhere.
pub const MIN_MINUTES: u32 = 1;
/// Largest interval length the settings form and config accept; keeps the
/// minutes field of `MM:SS` two digits wide.
pub const MAX_MINUTES: u32 = 99;

/// Clamp a user-supplied minute count into `MIN_MINUTES..=MAX_MINUTES`.
pub fn clamp_minutes(minutes: u32) -> u32 {
    minutes.clamp(MIN_MINUTES, MAX_MINUTES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_minutes() {
        assert_eq!(clamp_minutes(0), 1);
        assert_eq!(clamp_minutes(1), 1);
        assert_eq!(clamp_minutes(25), 25);
        assert_eq!(clamp_minutes(99), 99);
        assert_eq!(clamp_minutes(500), 99);
    }
}
