/// Intents produced by input handling and executed by the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Stop,
    Quit,
}
