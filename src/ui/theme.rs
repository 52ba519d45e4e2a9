use crate::exam::progress::QuestionStatus;
use crate::exam::reveal::OptionStyle;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(22, 24, 30);
    pub const BG_SURFACE: Color = Color::Rgb(30, 33, 41);
    pub const BG_ELEVATED: Color = Color::Rgb(40, 44, 54);
    pub const BORDER_DIM: Color = Color::Rgb(70, 76, 90);
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 224, 232);
    pub const TEXT_SECONDARY: Color = Color::Rgb(160, 166, 180);
    pub const TEXT_MUTED: Color = Color::Rgb(105, 112, 128);
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 210);
    pub const ACCENT_AMBER: Color = Color::Rgb(230, 180, 80);
    pub const ACCENT_GREEN: Color = Color::Rgb(90, 210, 130);
    pub const ACCENT_RED: Color = Color::Rgb(230, 95, 95);
    pub const ACCENT_LAVENDER: Color = Color::Rgb(175, 140, 220);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Self::BG_DARK)
    }

    pub fn panel_bg_focused() -> Style {
        Style::default().bg(Self::BG_SURFACE)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }

    /// Navigator cell colors, one per status.
    pub fn question_cell(status: QuestionStatus) -> Style {
        match status {
            QuestionStatus::Answered => Style::default().fg(Self::BG_DARK).bg(Self::ACCENT_GREEN),
            QuestionStatus::Flagged => Style::default().fg(Self::BG_DARK).bg(Self::ACCENT_AMBER),
            QuestionStatus::Current => Style::default()
                .fg(Self::BG_DARK)
                .bg(Self::ACCENT_TEAL)
                .add_modifier(Modifier::BOLD),
            QuestionStatus::Unanswered => Style::default()
                .fg(Self::TEXT_SECONDARY)
                .bg(Self::BG_ELEVATED),
        }
    }

    pub fn option(style: OptionStyle) -> Style {
        match style {
            OptionStyle::Default => Style::default().fg(Self::TEXT_PRIMARY),
            OptionStyle::Selected => Style::default()
                .fg(Self::ACCENT_TEAL)
                .add_modifier(Modifier::BOLD),
            OptionStyle::Correct => Style::default()
                .fg(Self::ACCENT_GREEN)
                .add_modifier(Modifier::BOLD),
            OptionStyle::IncorrectSelected => Style::default()
                .fg(Self::ACCENT_RED)
                .add_modifier(Modifier::CROSSED_OUT),
        }
    }
}
