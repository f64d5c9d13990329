use crossterm::event::Event as CrosstermEvent;
use std::time::Instant;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Frame tick, stamped with the monotonic time it was produced
    Tick(Instant),
}
