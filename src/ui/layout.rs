use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// Widest the content column grows on large terminals.
const MAX_CONTENT_WIDTH: u16 = 64;

pub struct AppLayout {
    pub title_bar: Rect,
    pub timer_panel: Rect,
    pub settings_panel: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: title | content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(8),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let title_bar = main_chunks[0];
    let content = main_chunks[1];
    let status_bar = main_chunks[2];

    // Centered content column
    let column = Layout::horizontal([Constraint::Max(MAX_CONTENT_WIDTH)])
        .flex(Flex::Center)
        .split(content)[0];

    // Column: timer panel | settings panel
    let column_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(7),    // Timer
            Constraint::Length(7), // Settings
        ])
        .split(column);

    AppLayout {
        title_bar,
        timer_panel: column_chunks[0],
        settings_panel: column_chunks[1],
        status_bar,
    }
}
