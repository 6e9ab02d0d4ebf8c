//! Level segments to stroke geometry.
//!
//! Output order is fixed: every division mark first, then the signal lines in
//! segment order, each transition placed right before the horizontal of the
//! segment it leaves.

use crate::segment::{Segment, Time, VIEWPORT_HEIGHT};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub x1: Time,
    pub y1: Time,
    pub x2: Time,
    pub y2: Time,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Stroke {
    pub color: &'static str,
    pub width: u8,
    pub dash: Option<u8>,
}

pub const SIGNAL_STROKE: Stroke = Stroke {
    color: "black",
    width: 2,
    dash: None,
};

pub const DIVISION_STROKE: Stroke = Stroke {
    color: "#ddd",
    width: 1,
    dash: Some(4),
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PrimitiveKind {
    Division,
    Transition,
    Signal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Primitive {
    pub kind: PrimitiveKind,
    pub line: Line,
    pub stroke: Stroke,
}

impl Primitive {
    fn signal(segment: &Segment) -> Self {
        Self {
            kind: PrimitiveKind::Signal,
            line: Line {
                x1: segment.start_time,
                y1: segment.start_level.y(),
                x2: segment.end_time,
                y2: segment.end_level.y(),
            },
            stroke: SIGNAL_STROKE,
        }
    }

    fn transition(from: &Segment, to: &Segment) -> Self {
        Self {
            kind: PrimitiveKind::Transition,
            line: Line {
                x1: from.end_time,
                y1: from.end_level.y(),
                x2: from.end_time,
                y2: to.start_level.y(),
            },
            stroke: SIGNAL_STROKE,
        }
    }

    fn division(x: Time) -> Self {
        Self {
            kind: PrimitiveKind::Division,
            line: Line {
                x1: x,
                y1: 0,
                x2: x,
                y2: VIEWPORT_HEIGHT,
            },
            stroke: DIVISION_STROKE,
        }
    }
}

pub fn render(segments: &[Segment]) -> Vec<Primitive> {
    let Some(last) = segments.last() else {
        return vec![];
    };

    let mut primitives: Vec<Primitive> = segments
        .iter()
        .map(|s| s.start_time)
        .chain(std::iter::once(last.end_time))
        .map(Primitive::division)
        .collect();

    for (i, segment) in segments.iter().enumerate() {
        if let Some(next) = segments.get(i + 1) {
            if segment.end_level != next.start_level {
                primitives.push(Primitive::transition(segment, next));
            }
        }
        primitives.push(Primitive::signal(segment));
    }
    primitives
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub divisions: usize,
    pub transitions: usize,
    pub signals: usize,
}

impl RenderSummary {
    pub fn of(primitives: &[Primitive]) -> Self {
        primitives
            .iter()
            .fold(Self::default(), |mut summary, p| {
                match p.kind {
                    PrimitiveKind::Division => summary.divisions += 1,
                    PrimitiveKind::Transition => summary.transitions += 1,
                    PrimitiveKind::Signal => summary.signals += 1,
                }
                summary
            })
    }
}
