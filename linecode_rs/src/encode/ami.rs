use crate::{
    bits::{BitString, Symbol},
    level::ternary::{alternate, NEGATIVE, ZERO},
    segment::Segment,
};

use super::fold_slots;

pub fn bipolar_ami(bits: &BitString) -> Vec<Segment> {
    alternate_mark_inversion(bits, Symbol::is_one)
}

pub fn pseudoternary(bits: &BitString) -> Vec<Segment> {
    alternate_mark_inversion(bits, Symbol::is_zero)
}

/// Marks alternate polarity, everything else sits on `ZERO`. The last mark
/// starts at `NEGATIVE` so the first mark comes out `POSITIVE`.
fn alternate_mark_inversion(bits: &BitString, is_mark: fn(&Symbol) -> bool) -> Vec<Segment> {
    fold_slots(bits, NEGATIVE, |last_mark, slot, symbol| {
        if is_mark(&symbol) {
            let mark = alternate(last_mark);
            (mark, [Segment::slot(slot, mark)])
        } else {
            (last_mark, [Segment::slot(slot, ZERO)])
        }
    })
}

#[cfg(test)]
mod test {
    use super::{bipolar_ami, pseudoternary};
    use crate::{
        bits::BitString,
        level::{
            ternary::{NEGATIVE, POSITIVE, ZERO},
            Level,
        },
        segment::Segment,
    };

    fn levels(segments: &[Segment]) -> Vec<Level> {
        segments.iter().map(Segment::level).collect()
    }

    #[test]
    fn test_bipolar_ami_alternates_marks() {
        assert_eq!(
            levels(&bipolar_ami(&BitString::parse("11"))),
            vec![POSITIVE, NEGATIVE]
        );
        assert_eq!(
            levels(&bipolar_ami(&BitString::parse("101"))),
            vec![POSITIVE, ZERO, NEGATIVE]
        );
    }

    #[test]
    fn test_bipolar_ami_zeros_keep_last_mark() {
        assert_eq!(
            levels(&bipolar_ami(&BitString::parse("0110001"))),
            vec![ZERO, POSITIVE, NEGATIVE, ZERO, ZERO, ZERO, POSITIVE]
        );
    }

    #[test]
    fn test_pseudoternary_alternates_marks() {
        assert_eq!(
            levels(&pseudoternary(&BitString::parse("00"))),
            vec![POSITIVE, NEGATIVE]
        );
        assert_eq!(
            levels(&pseudoternary(&BitString::parse("010"))),
            vec![POSITIVE, ZERO, NEGATIVE]
        );
    }

    #[test]
    fn test_pseudoternary_mirrors_ami() {
        let ami = levels(&bipolar_ami(&BitString::parse("1101")));
        let pseudo = levels(&pseudoternary(&BitString::parse("0010")));
        assert_eq!(ami, pseudo);
    }

    #[test]
    fn test_other_symbols() {
        assert_eq!(levels(&bipolar_ami(&BitString::parse("?"))), vec![ZERO]);
        assert_eq!(levels(&pseudoternary(&BitString::parse("?"))), vec![ZERO]);
    }
}
