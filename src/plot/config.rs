//! Plot export configuration.
//!
//! [`ImageFormat`] picks the drawing backend from the output file's
//! extension. [`PlotCfg`] carries image size, title and fill opacity.

use std::path::Path;

use crate::plot::errors::PlotError;

/// Output image format, chosen by file extension.
/// - [`ImageFormat::Png`], [`ImageFormat::Bmp`], [`ImageFormat::Jpeg`] : bitmap backend
/// - [`ImageFormat::Svg`] : vector backend
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Bmp,
    Jpeg,
    Svg,
}

impl ImageFormat {
    pub fn from_path(path: &Path) -> Result<Self, PlotError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| PlotError::MissingExtension { path: path.display().to_string() })?;

        match ext.to_ascii_lowercase().as_str() {
            "png"          => Ok(ImageFormat::Png),
            "bmp"          => Ok(ImageFormat::Bmp),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "svg"          => Ok(ImageFormat::Svg),
            _ => Err(PlotError::UnsupportedFormat { ext: ext.to_string() }),
        }
    }

    pub const fn is_bitmap(self) -> bool {
        !matches!(self, ImageFormat::Svg)
    }
}

/// Plot Configuration
///
/// # Defaults
///
/// ┌ DEFAULT_WIDTH        - image width in pixels
/// ├ DEFAULT_HEIGHT       - image height in pixels
/// ├ DEFAULT_TITLE        - chart caption
/// └ DEFAULT_FILL_OPACITY - alpha of the filled shapes
///
/// # Validation:
/// └ Performed in [`crate::plot::render`] via [`PlotCfg::validate()`].
///    ├ `width`, `height` > 0
///    └ `fill_opacity` finite and within [0, 1]
#[derive(Debug, Clone, Default)]
pub struct PlotCfg {
    width:        Option<u32>,
    height:       Option<u32>,
    title:        Option<String>,
    fill_opacity: Option<f64>,
}

impl PlotCfg {
    pub const DEFAULT_WIDTH:        u32  = 1024;
    pub const DEFAULT_HEIGHT:       u32  = 768;
    pub const DEFAULT_TITLE:        &str = "Graph of f(x)";
    pub const DEFAULT_FILL_OPACITY: f64  = 0.3;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn with_width (mut self, v: u32) -> Self { self.width  = Some(v); self }
    pub fn with_height(mut self, v: u32) -> Self { self.height = Some(v); self }
    pub fn with_title(mut self, v: impl Into<String>) -> Self { self.title = Some(v.into()); self }
    pub fn with_fill_opacity(mut self, v: f64) -> Self { self.fill_opacity = Some(v); self }

    #[inline] #[must_use] pub fn width (&self) -> u32 { self.width .unwrap_or(Self::DEFAULT_WIDTH)  }
    #[inline] #[must_use] pub fn height(&self) -> u32 { self.height.unwrap_or(Self::DEFAULT_HEIGHT) }
    #[inline] #[must_use] pub fn title(&self) -> &str { self.title.as_deref().unwrap_or(Self::DEFAULT_TITLE) }
    #[inline] #[must_use] pub fn fill_opacity(&self) -> f64 { self.fill_opacity.unwrap_or(Self::DEFAULT_FILL_OPACITY) }

    pub fn validate(&self) -> Result<(), PlotError> {
        let (width, height) = (self.width(), self.height());
        if width == 0 || height == 0 {
            return Err(PlotError::InvalidDimensions { width, height });
        }

        let alpha = self.fill_opacity();
        if !alpha.is_finite() || !(0.0..=1.0).contains(&alpha) {
            return Err(PlotError::InvalidOpacity { got: alpha });
        }
        Ok(())
    }
}
