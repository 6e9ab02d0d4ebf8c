use crossterm::event::{KeyCode, KeyEvent};
use linecode_rs::{Scheme, Visualization};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    symbols::Marker,
    text::Span,
    widgets::{Block, Borders},
    Frame,
};

use crate::{
    component::{Component, HandleResult},
    styles::wave_viewer::TITLE_STYLE,
    widgets::Waveform,
};

const ROW_HEIGHT: u16 = 5;

pub struct WaveViewer {
    visualization: Visualization,
    marker: Marker,
}

impl Default for WaveViewer {
    fn default() -> Self {
        Self {
            visualization: Visualization::default(),
            marker: Marker::Braille,
        }
    }
}

impl WaveViewer {
    pub fn set_visualization(&mut self, visualization: Visualization) {
        self.visualization = visualization;
    }

    pub fn visualization(&self) -> &Visualization {
        &self.visualization
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    fn toggle_marker(&mut self) {
        self.marker = match self.marker {
            Marker::Braille => Marker::Block,
            _ => Marker::Braille,
        };
    }
}

impl Component for WaveViewer {
    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let rows = Layout::vertical(vec![Constraint::Length(ROW_HEIGHT); Scheme::ALL.len()])
            .split(rect);
        for (scheme, row) in Scheme::ALL.iter().zip(rows.iter()) {
            let block = Block::new()
                .borders(Borders::ALL)
                .title(Span::styled(scheme.title(), TITLE_STYLE));
            let primitives = self.visualization.get(*scheme).unwrap_or_default();
            let waveform = Waveform::new(primitives)
                .width(self.visualization.width())
                .marker(self.marker)
                .block(block);
            f.render_widget(waveform, *row);
        }
    }

    fn handle_key_event(&mut self, key_event: &KeyEvent) -> HandleResult {
        match key_event.code {
            KeyCode::Tab => {
                self.toggle_marker();
                HandleResult::Handled
            }
            _ => HandleResult::NotHandled,
        }
    }
}
