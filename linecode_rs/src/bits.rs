use bitvec::{order::Lsb0, slice::BitSlice, vec::BitVec};

use crate::error::{LinecodeError, LinecodeResult};

/// One input character as seen by the encoders.
///
/// `Other` keeps whatever was typed that is neither `0` nor `1`. Encoders keyed
/// on `1` see it as "not one", encoders keyed on `0` see it as "not zero".
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Symbol {
    Zero,
    One,
    Other(char),
}

impl Symbol {
    pub fn is_one(&self) -> bool {
        matches!(self, Symbol::One)
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Symbol::Zero)
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        match c {
            '0' => Symbol::Zero,
            '1' => Symbol::One,
            c => Symbol::Other(c),
        }
    }
}

impl From<bool> for Symbol {
    fn from(bit: bool) -> Self {
        if bit {
            Symbol::One
        } else {
            Symbol::Zero
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitString {
    symbols: Vec<Symbol>,
}

impl BitString {
    /// Accepts any text. Nothing is rejected, see [`Symbol::Other`]. Each
    /// `char` is one slot, including characters outside the BMP.
    pub fn parse(text: &str) -> Self {
        Self {
            symbols: text.chars().map(Symbol::from).collect(),
        }
    }

    pub fn parse_strict(text: &str) -> LinecodeResult<Self> {
        let bit_string = Self::parse(text);
        match bit_string.first_invalid() {
            Some((position, symbol)) => {
                log::trace!("rejected '{symbol}' at position {position}");
                Err(LinecodeError::InvalidSymbol { symbol, position })
            }
            None => Ok(bit_string),
        }
    }

    /// Bits are taken in index order, index 0 becomes the first slot.
    pub fn from_bits(bits: &BitSlice<u32>) -> Self {
        Self {
            symbols: bits.iter().map(|b| Symbol::from(*b)).collect(),
        }
    }

    pub fn to_bitvec(&self) -> LinecodeResult<BitVec<u32>> {
        let mut result = bitvec::bitvec![u32, Lsb0;];
        for (position, symbol) in self.symbols.iter().enumerate() {
            match symbol {
                Symbol::Zero => result.push(false),
                Symbol::One => result.push(true),
                Symbol::Other(c) => {
                    return Err(LinecodeError::InvalidSymbol {
                        symbol: *c,
                        position,
                    })
                }
            }
        }
        Ok(result)
    }

    pub fn first_invalid(&self) -> Option<(usize, char)> {
        self.symbols
            .iter()
            .enumerate()
            .find_map(|(i, s)| match s {
                Symbol::Other(c) => Some((i, *c)),
                _ => None,
            })
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl From<&str> for BitString {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

#[cfg(test)]
mod test {
    use bitvec::order::Lsb0;

    use super::{BitString, Symbol};
    use crate::error::LinecodeError;

    #[test]
    fn test_parse_is_permissive() {
        let bits = BitString::parse("10x");
        assert_eq!(
            bits.symbols(),
            &[Symbol::One, Symbol::Zero, Symbol::Other('x')]
        );
        assert_eq!(bits.first_invalid(), Some((2, 'x')));
    }

    #[test]
    fn test_one_slot_per_char() {
        let bits = BitString::parse("1\u{1f600}0");
        assert_eq!(bits.len(), 3);
        assert_eq!(bits.first_invalid(), Some((1, '\u{1f600}')));
    }

    #[test]
    fn test_other_is_neither_one_nor_zero() {
        let other = Symbol::Other('2');
        assert!(!other.is_one());
        assert!(!other.is_zero());
    }

    #[test]
    fn test_parse_empty() {
        let bits = BitString::parse("");
        assert!(bits.is_empty());
        assert_eq!(bits.first_invalid(), None);
    }

    #[test]
    fn test_parse_strict() {
        assert_eq!(BitString::parse_strict("0110").unwrap().len(), 4);
        let e = BitString::parse_strict("01a1").unwrap_err();
        assert_eq!(
            e,
            LinecodeError::InvalidSymbol {
                symbol: 'a',
                position: 2
            }
        );
        assert_eq!(
            &e.to_string(),
            "linecode_rs: invalid symbol 'a' at position 2"
        );
    }

    #[test]
    fn test_bitvec_bridge() {
        let bits = bitvec::bitvec![u32, Lsb0; 1, 0, 1, 1];
        let bit_string = BitString::from_bits(&bits);
        assert_eq!(bit_string, BitString::parse("1011"));
        assert_eq!(bit_string.to_bitvec().unwrap(), bits);
    }

    #[test]
    fn test_to_bitvec_rejects_other() {
        let e = BitString::parse("1 0").to_bitvec().unwrap_err();
        assert_eq!(
            e,
            LinecodeError::InvalidSymbol {
                symbol: ' ',
                position: 1
            }
        );
    }
}
