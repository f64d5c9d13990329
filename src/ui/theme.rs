use crate::timer::Phase;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_PANEL: Color = Color::Rgb(24, 26, 33);
    pub const BG_ELEVATED: Color = Color::Rgb(38, 41, 52);
    pub const BORDER_DIM: Color = Color::Rgb(70, 74, 88);
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 223, 228);
    pub const TEXT_MUTED: Color = Color::Rgb(128, 133, 148);
    pub const ACCENT_TEAL: Color = Color::Rgb(86, 182, 194);
    pub const ACCENT_TOMATO: Color = Color::Rgb(235, 94, 72);
    pub const ACCENT_GREEN: Color = Color::Rgb(130, 196, 120);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Self::BG_PANEL)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn field() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn field_focused() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    /// Accent colour for a phase.
    pub fn phase_color(phase: Phase) -> Color {
        match phase {
            Phase::Working => Self::ACCENT_TOMATO,
            Phase::Paused => Self::ACCENT_GREEN,
        }
    }

    pub fn phase(phase: Phase) -> Style {
        Style::default()
            .fg(Self::phase_color(phase))
            .add_modifier(Modifier::BOLD)
    }

    pub fn idle() -> Style {
        Style::default()
            .fg(Self::TEXT_MUTED)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn countdown() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_start() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_stop() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT_TOMATO)
            .add_modifier(Modifier::BOLD)
    }

    pub fn alert() -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    pub fn status_key() -> Style {
        Style::default().fg(Self::ACCENT_TEAL).bg(Self::BG_ELEVATED)
    }

    pub fn title_bar() -> Style {
        Style::default().fg(Self::ACCENT_TEAL).bg(Self::BG_ELEVATED)
    }
}
