use crate::{
    bits::BitString,
    level::nrz::{HIGH, LOW, RAILS},
    segment::Segment,
};

use super::fold_slots;

pub fn nrzl(bits: &BitString) -> Vec<Segment> {
    fold_slots(bits, (), |(), slot, symbol| {
        let level = if symbol.is_one() { HIGH } else { LOW };
        ((), [Segment::slot(slot, level)])
    })
}

/// Inverts on every `1`, holds on anything else. Starts from `LOW`.
pub fn nrzi(bits: &BitString) -> Vec<Segment> {
    fold_slots(bits, LOW, |previous, slot, symbol| {
        let level = if symbol.is_one() {
            RAILS.toggle(previous)
        } else {
            previous
        };
        (level, [Segment::slot(slot, level)])
    })
}
