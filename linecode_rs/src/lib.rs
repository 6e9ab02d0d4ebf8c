pub mod bits;
pub mod encode;
pub mod error;
pub mod level;
pub mod render;
pub mod segment;
pub mod signal;
pub mod svg;

pub use bits::{BitString, Symbol};
pub use encode::{Encoder, Scheme};
pub use error::{LinecodeError, LinecodeResult};
pub use level::Level;
pub use render::{render, Primitive, PrimitiveKind};
pub use segment::Segment;
pub use signal::{visualize, Signal, Visualization};
