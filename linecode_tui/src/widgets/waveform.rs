use linecode_rs::{
    render::{Primitive, PrimitiveKind},
    segment::{Time, VIEWPORT_HEIGHT, VIEWPORT_WIDTH},
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    symbols::Marker,
    widgets::{
        canvas::{self, Canvas},
        Block, Widget,
    },
};

use crate::styles::wave_viewer::{DIVISION_COLOR, SIGNAL_COLOR};

/// Draws one scheme's primitives on a canvas sized to the signal viewport.
pub struct Waveform<'a> {
    primitives: &'a [Primitive],
    width: Time,
    marker: Marker,
    block: Option<Block<'a>>,
}

impl<'a> Waveform<'a> {
    pub fn new(primitives: &'a [Primitive]) -> Self {
        Self {
            primitives,
            width: VIEWPORT_WIDTH,
            marker: Marker::Braille,
            block: None,
        }
    }

    pub fn width(mut self, width: Time) -> Self {
        self.width = width;
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    fn canvas_lines(&self) -> Vec<canvas::Line> {
        self.primitives.iter().map(canvas_line).collect()
    }
}

impl Widget for Waveform<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.canvas_lines();
        let mut canvas = Canvas::default()
            .marker(self.marker)
            .x_bounds([0.0, self.width as f64])
            .y_bounds([0.0, VIEWPORT_HEIGHT as f64])
            .paint(move |ctx| {
                for line in &lines {
                    ctx.draw(line);
                }
            });
        if let Some(block) = self.block {
            canvas = canvas.block(block);
        }
        canvas.render(area, buf);
    }
}

// Viewport y grows downward, canvas y grows upward.
fn canvas_line(primitive: &Primitive) -> canvas::Line {
    let flip = |y: Time| (VIEWPORT_HEIGHT - y) as f64;
    let color = match primitive.kind {
        PrimitiveKind::Division => DIVISION_COLOR,
        PrimitiveKind::Transition | PrimitiveKind::Signal => SIGNAL_COLOR,
    };
    let line = &primitive.line;
    canvas::Line {
        x1: line.x1 as f64,
        y1: flip(line.y1),
        x2: line.x2 as f64,
        y2: flip(line.y2),
        color,
    }
}

#[cfg(test)]
mod test {
    use linecode_rs::{level::Level, render, segment::Segment};
    use ratatui::{buffer::Buffer, layout::Rect, symbols::Marker, widgets::Widget};

    use super::{canvas_line, Waveform};
    use crate::styles::wave_viewer::{DIVISION_COLOR, SIGNAL_COLOR};

    #[test]
    fn test_canvas_line_is_mirrored() {
        let primitives = render(&[Segment::flat(0, 20, Level(10))]);

        let division = canvas_line(&primitives[0]);
        assert_eq!((division.x1, division.y1), (0.0, 50.0));
        assert_eq!((division.x2, division.y2), (0.0, 0.0));
        assert_eq!(division.color, DIVISION_COLOR);

        let signal = canvas_line(&primitives[2]);
        assert_eq!((signal.x1, signal.y1), (0.0, 40.0));
        assert_eq!((signal.x2, signal.y2), (20.0, 40.0));
        assert_eq!(signal.color, SIGNAL_COLOR);
    }

    #[test]
    fn test_render_draws_something() {
        let primitives = render(&[Segment::flat(0, 220, Level(10))]);
        let mut buf = Buffer::empty(Rect::new(0, 0, 22, 5));

        Waveform::new(&primitives)
            .marker(Marker::Block)
            .render(buf.area, &mut buf);

        assert!(buf.content.iter().any(|c| c.symbol() != " "));
    }

    #[test]
    fn test_render_empty() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 22, 5));

        Waveform::new(&[]).render(buf.area, &mut buf);

        assert!(buf.content.iter().all(|c| c.symbol() == " "));
    }
}
