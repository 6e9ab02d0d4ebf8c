use thiserror::Error;

pub type LinecodeTuiResult<T> = Result<T, LinecodeTuiError>;

#[derive(Error, Debug)]
pub enum LinecodeTuiError {
    #[error("linecode_tui: IO error: {}", _0)]
    IoError(std::io::Error),
}

impl From<std::io::Error> for LinecodeTuiError {
    fn from(error: std::io::Error) -> Self {
        Self::IoError(error)
    }
}
