use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use linecode_rs::{BitString, Visualization};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{
    component::{Component, HandleResult},
    styles::{root, status},
    widgets::{InputLine, InputLineState},
};

use super::{models::InputStatus, WaveViewer};

#[derive(Default)]
pub struct Root {
    input_line_state: InputLineState,
    wave_viewer: WaveViewer,
    input_status: InputStatus,
}

impl Root {
    pub fn visualization(&self) -> &Visualization {
        self.wave_viewer.visualization()
    }

    pub fn input_status(&self) -> &InputStatus {
        &self.input_status
    }

    fn visualize(&mut self) {
        let bits = BitString::parse(self.input_line_state.text());
        self.input_status = InputStatus::new(&bits);
        self.wave_viewer.set_visualization(Visualization::new(&bits));
    }

    fn render_title(f: &mut Frame, rect: Rect) {
        let title = Line::from(vec![
            Span::styled(" Digital Signal Encoder ", root::TITLE_STYLE),
            Span::styled(
                format!("v{}", env!("CARGO_PKG_VERSION")),
                root::VERSION_STYLE,
            ),
        ]);
        f.render_widget(title, rect);
    }

    fn render_status(&self, f: &mut Frame, rect: Rect) {
        let style = match self.input_status {
            InputStatus::Empty => status::HINT_STYLE,
            InputStatus::Binary(_) => status::NORMAL_STYLE,
            InputStatus::Permissive { .. } => status::WARNING_STYLE,
        };
        f.render_widget(Paragraph::new(self.input_status.message()).style(style), rect);
    }
}

impl Component for Root {
    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::vertical(vec![
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(rect);
        Self::render_title(f, chunks[0]);
        self.wave_viewer.render(f, chunks[1]);
        self.render_status(f, chunks[2]);
        f.render_stateful_widget(InputLine::default(), chunks[3], &mut self.input_line_state);
    }

    fn handle_key_event(&mut self, key_event: &KeyEvent) -> HandleResult {
        match key_event.code {
            KeyCode::Esc => return HandleResult::Quit,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                return HandleResult::Quit
            }
            KeyCode::Char('u') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input_line_state.clear()
            }
            KeyCode::Enter => self.visualize(),
            KeyCode::Char(c) => self.input_line_state.put(c),
            KeyCode::Backspace => self.input_line_state.backspace(),
            KeyCode::Left => self.input_line_state.move_cursor_left(),
            KeyCode::Right => self.input_line_state.move_cursor_right(),
            _ => return self.wave_viewer.handle_key_event(key_event),
        }
        HandleResult::Handled
    }
}
