use ratatui::style::{Color, Modifier, Style};

pub mod root {
    use super::*;

    pub const TITLE_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);
    pub const VERSION_STYLE: Style = Style::new()
        .add_modifier(Modifier::ITALIC)
        .fg(Color::DarkGray);
}

pub mod input_line {
    use super::*;

    pub const INPUT_LINE_STYLE: Style = Style::new().bg(Color::Blue).fg(Color::Reset);
    pub const HEADER_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Yellow);
    pub const TEXT_CURSOR_STYLE: Style = Style::new().fg(Color::Black).bg(Color::White);
}

pub mod status {
    use super::*;

    pub const NORMAL_STYLE: Style = Style::new().fg(Color::Green);
    pub const WARNING_STYLE: Style = Style::new().fg(Color::Yellow);
    pub const HINT_STYLE: Style = Style::new().fg(Color::Gray);
}

pub mod wave_viewer {
    use super::*;

    pub const SIGNAL_COLOR: Color = Color::White;
    pub const DIVISION_COLOR: Color = Color::DarkGray;
    pub const TITLE_STYLE: Style = Style::new()
        .fg(Color::LightYellow)
        .add_modifier(Modifier::BOLD);
}
