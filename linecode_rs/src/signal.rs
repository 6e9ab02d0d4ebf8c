use crate::{
    bits::BitString,
    encode::Scheme,
    render::{render, Primitive, RenderSummary},
    segment::{slot_start, Segment, Time, VIEWPORT_WIDTH},
};

/// Segments for every scheme, in [`Scheme::ALL`] order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Signal {
    encodings: Vec<(Scheme, Vec<Segment>)>,
}

impl Signal {
    pub fn encode(bits: &BitString) -> Self {
        let encodings = Scheme::ALL
            .into_iter()
            .map(|scheme| (scheme, scheme.encode(bits)))
            .collect();
        Self { encodings }
    }

    pub fn get(&self, scheme: Scheme) -> Option<&[Segment]> {
        self.encodings
            .iter()
            .find(|(s, _)| *s == scheme)
            .map(|(_, segments)| segments.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Scheme, &[Segment])> {
        self.encodings
            .iter()
            .map(|(scheme, segments)| (*scheme, segments.as_slice()))
    }
}

/// Drawable primitives for every scheme, in [`Scheme::ALL`] order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Visualization {
    bit_count: usize,
    drawings: Vec<(Scheme, Vec<Primitive>)>,
}

impl Visualization {
    pub fn new(bits: &BitString) -> Self {
        let drawings = Signal::encode(bits)
            .iter()
            .map(|(scheme, segments)| {
                let primitives = render(segments);
                let summary = RenderSummary::of(&primitives);
                log::debug!(
                    "{scheme}: {} segments, {} divisions, {} transitions",
                    segments.len(),
                    summary.divisions,
                    summary.transitions
                );
                (scheme, primitives)
            })
            .collect();
        Self {
            bit_count: bits.len(),
            drawings,
        }
    }

    pub fn get(&self, scheme: Scheme) -> Option<&[Primitive]> {
        self.drawings
            .iter()
            .find(|(s, _)| *s == scheme)
            .map(|(_, primitives)| primitives.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Scheme, &[Primitive])> {
        self.drawings
            .iter()
            .map(|(scheme, primitives)| (*scheme, primitives.as_slice()))
    }

    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Horizontal extent needed to draw every slot, never below the viewport.
    pub fn width(&self) -> Time {
        VIEWPORT_WIDTH.max(slot_start(self.bit_count))
    }

    pub fn is_empty(&self) -> bool {
        self.bit_count == 0
    }
}

pub fn visualize(text: &str) -> Visualization {
    Visualization::new(&BitString::parse(text))
}
