//! Bit string to level segments, one function per line-coding scheme.
//!
//! Every encoder is a left fold over the input symbols. The per-scheme
//! accumulator (previous level, last mark) is threaded through the fold and
//! dropped at the end, so no state survives between calls.

mod ami;
mod manchester;
mod nrz;

use std::{fmt, str::FromStr};

use crate::{
    bits::{BitString, Symbol},
    error::LinecodeError,
    segment::Segment,
};

pub use ami::{bipolar_ami, pseudoternary};
pub use manchester::{differential_manchester, manchester};
pub use nrz::{nrzi, nrzl};

pub type Encoder = fn(&BitString) -> Vec<Segment>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scheme {
    Nrzl,
    Nrzi,
    BipolarAmi,
    Pseudoternary,
    Manchester,
    DifferentialManchester,
}

impl Scheme {
    pub const ALL: [Scheme; 6] = [
        Scheme::Nrzl,
        Scheme::Nrzi,
        Scheme::BipolarAmi,
        Scheme::Pseudoternary,
        Scheme::Manchester,
        Scheme::DifferentialManchester,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Nrzl => "NRZL",
            Scheme::Nrzi => "NRZI",
            Scheme::BipolarAmi => "BipolarAMI",
            Scheme::Pseudoternary => "Pseudoternary",
            Scheme::Manchester => "Manchester",
            Scheme::DifferentialManchester => "DifferentialManchester",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Scheme::Nrzl => "NRZ-L",
            Scheme::Nrzi => "NRZ-I",
            Scheme::BipolarAmi => "Bipolar AMI",
            Scheme::Pseudoternary => "Pseudoternary",
            Scheme::Manchester => "Manchester",
            Scheme::DifferentialManchester => "Differential Manchester",
        }
    }

    pub fn encoder(&self) -> Encoder {
        match self {
            Scheme::Nrzl => nrzl,
            Scheme::Nrzi => nrzi,
            Scheme::BipolarAmi => bipolar_ami,
            Scheme::Pseudoternary => pseudoternary,
            Scheme::Manchester => manchester,
            Scheme::DifferentialManchester => differential_manchester,
        }
    }

    pub fn encode(&self, bits: &BitString) -> Vec<Segment> {
        (self.encoder())(bits)
    }

    /// Segments emitted per input symbol.
    pub fn segments_per_bit(&self) -> usize {
        match self {
            Scheme::Manchester | Scheme::DifferentialManchester => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = LinecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scheme::ALL
            .into_iter()
            .find(|scheme| scheme.name() == s)
            .ok_or_else(|| LinecodeError::UnknownScheme(s.to_string()))
    }
}

/// Runs `step` once per symbol with the symbol's slot index, carrying `init`
/// through as the accumulator.
fn fold_slots<S, I, F>(bits: &BitString, init: S, mut step: F) -> Vec<Segment>
where
    F: FnMut(S, usize, Symbol) -> (S, I),
    I: IntoIterator<Item = Segment>,
{
    let (_, segments) = bits.symbols().iter().enumerate().fold(
        (init, Vec::with_capacity(bits.len())),
        |(state, mut segments), (slot, symbol)| {
            let (state, emitted) = step(state, slot, *symbol);
            segments.extend(emitted);
            (state, segments)
        },
    );
    segments
}

#[cfg(test)]
mod test {
    use super::Scheme;
    use crate::{bits::BitString, error::LinecodeError, segment::is_gapless};

    #[test]
    fn test_names_round_trip() {
        for scheme in Scheme::ALL {
            assert_eq!(scheme.name().parse::<Scheme>().unwrap(), scheme);
        }
    }

    #[test]
    fn test_unknown_scheme() {
        let e = "4B5B".parse::<Scheme>().unwrap_err();
        assert_eq!(e, LinecodeError::UnknownScheme("4B5B".to_string()));
        assert_eq!(&e.to_string(), "linecode_rs: unknown scheme '4B5B'");
    }

    #[test]
    fn test_segment_counts() {
        let bits = BitString::parse("1101001");
        for scheme in Scheme::ALL {
            let segments = scheme.encode(&bits);
            assert_eq!(segments.len(), bits.len() * scheme.segments_per_bit());
            assert!(is_gapless(&segments), "{scheme} has a gap");
        }
    }

    #[test]
    fn test_empty_input() {
        for scheme in Scheme::ALL {
            assert!(scheme.encode(&BitString::parse("")).is_empty());
        }
    }

    #[test]
    fn test_encoding_is_repeatable() {
        let bits = BitString::parse("0110111");
        for scheme in Scheme::ALL {
            assert_eq!(scheme.encode(&bits), scheme.encode(&bits));
        }
    }
}
