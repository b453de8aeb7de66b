pub mod config;
pub mod errors;
pub mod render;

pub use config::{ImageFormat, PlotCfg};
pub use errors::PlotError;
pub use render::render;
