use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::{layout::Rect, widgets::Block, Frame};

pub trait Component {
    fn render(&mut self, f: &mut Frame, rect: Rect);

    fn handle_key_event(&mut self, key_event: &KeyEvent) -> HandleResult;

    fn render_with_block(&mut self, f: &mut Frame, rect: Rect, block: Block) {
        let inner = block.inner(rect);
        self.render(f, inner);
        f.render_widget(block, rect);
    }

    fn handle_event(&mut self, event: &Event) -> HandleResult {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => HandleResult::NotHandled,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum HandleResult {
    Handled,
    NotHandled,
    Quit,
}
