mod input_line;
mod waveform;

pub use input_line::InputLine;
pub use input_line::InputLineState;
pub use waveform::Waveform;
