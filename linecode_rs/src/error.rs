use thiserror::Error;

pub type LinecodeResult<T> = Result<T, LinecodeError>;

#[derive(Debug, Error, PartialEq)]
pub enum LinecodeError {
    #[error("linecode_rs: invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
    #[error("linecode_rs: unknown scheme '{}'", _0)]
    UnknownScheme(String),
}
