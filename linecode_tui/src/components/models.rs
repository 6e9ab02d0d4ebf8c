use bitvec::vec::BitVec;
use linecode_rs::BitString;

/// What the status line reports about the last visualized input.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum InputStatus {
    #[default]
    Empty,
    Binary(BitVec<u32>),
    Permissive {
        position: usize,
        symbol: char,
    },
}

impl InputStatus {
    pub fn new(bits: &BitString) -> Self {
        if let Some((position, symbol)) = bits.first_invalid() {
            return Self::Permissive { position, symbol };
        }
        match bits.to_bitvec() {
            Ok(bits) if !bits.is_empty() => Self::Binary(bits),
            _ => Self::Empty,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Empty => "type a bit string and press Enter to visualize".to_string(),
            Self::Binary(bits) => format!("{} bits, {} ones", bits.len(), bits.count_ones()),
            Self::Permissive { position, symbol } => {
                format!("warning: '{symbol}' at position {position} is not a bit")
            }
        }
    }
}

#[cfg(test)]
mod test {
    use linecode_rs::BitString;

    use super::InputStatus;

    #[test]
    fn test_status() {
        assert_eq!(InputStatus::new(&BitString::parse("")), InputStatus::Empty);
        assert_eq!(
            InputStatus::new(&BitString::parse("11010")).message(),
            "5 bits, 3 ones"
        );
        assert_eq!(
            InputStatus::new(&BitString::parse("1a0")),
            InputStatus::Permissive {
                position: 1,
                symbol: 'a'
            }
        );
    }
}
