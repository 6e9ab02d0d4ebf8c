pub mod models;
mod root;
mod wave_viewer;

pub use root::Root;
pub use wave_viewer::WaveViewer;
