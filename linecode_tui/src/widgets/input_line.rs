use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

use crate::styles::input_line::{HEADER_STYLE, INPUT_LINE_STYLE, TEXT_CURSOR_STYLE};

#[derive(Default)]
pub struct InputLine {}

#[derive(Default)]
pub struct InputLineState {
    text: String,
    cursor_position: usize,
}

impl StatefulWidget for InputLine {
    type State = InputLineState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let highlight_idx =
            get_utf8_index(&state.text, state.cursor_position).unwrap_or(state.text.len());
        let (before_highlight, rest) = state.text.split_at(highlight_idx);
        let mut rest = rest.chars();
        let highlight = rest.next().map(String::from).unwrap_or(" ".to_string());
        let after_highlight = rest.as_str();

        let input_line = Line::from(vec![
            Span::styled(Self::HEADER, HEADER_STYLE),
            Span::from(" "),
            Span::from(before_highlight),
            Span::styled(highlight, TEXT_CURSOR_STYLE),
            Span::from(after_highlight),
        ]);
        input_line.style(INPUT_LINE_STYLE).render(area, buf);
    }
}

impl InputLine {
    const HEADER: &'static str = " bits> ";
}

impl InputLineState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor_position = 0;
    }

    pub fn put(&mut self, ch: char) {
        let idx = get_utf8_index(&self.text, self.cursor_position).unwrap_or(self.text.len());
        self.text.insert(idx, ch);
        self.cursor_position += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor_position >= 1 {
            if let Some(idx) = get_utf8_index(&self.text, self.cursor_position - 1) {
                self.text.remove(idx);
            }
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.text.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }
}

fn get_utf8_index(s: &str, ch_idx: usize) -> Option<usize> {
    s.char_indices().nth(ch_idx).map(|(i, _)| i)
}
