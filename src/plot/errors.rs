//! Plot export error types.
//!
//! ┌ Output path   : missing or unsupported extension
//! ├ Configuration : invalid image size or fill opacity
//! └ Rendering     : any failure reported by the drawing backend

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("unsupported image format `{ext}`: expected png, bmp, jpg, jpeg or svg")]
    UnsupportedFormat { ext: String },

    #[error("output path `{path}` has no file extension")]
    MissingExtension { path: String },

    #[error("invalid image dimensions: width and height must be > 0. got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid fill opacity: must be finite and within [0, 1]. got {got}")]
    InvalidOpacity { got: f64 },

    #[error("failed to render plot: {0}")]
    Render(String),
}
