use crate::{
    bits::BitString,
    level::manchester::{HIGH, LOW, RAILS},
    segment::Segment,
};

use super::fold_slots;

/// `1` is high then low, `0` is low then high.
pub fn manchester(bits: &BitString) -> Vec<Segment> {
    fold_slots(bits, (), |(), slot, symbol| {
        let halves = if symbol.is_one() {
            Segment::halves(slot, HIGH, LOW)
        } else {
            Segment::halves(slot, LOW, HIGH)
        };
        ((), halves)
    })
}

/// Always inverts at mid-bit. A `0` also inverts at the start of its slot,
/// anything else continues the previous level. Starts from `LOW`.
pub fn differential_manchester(bits: &BitString) -> Vec<Segment> {
    fold_slots(bits, LOW, |previous, slot, symbol| {
        let first = if symbol.is_zero() {
            RAILS.toggle(previous)
        } else {
            previous
        };
        let second = RAILS.toggle(first);
        (second, Segment::halves(slot, first, second))
    })
}
