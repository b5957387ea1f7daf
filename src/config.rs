//! Display configuration and construction-time validation.

use core::fmt;

/// Geometry and tuning parameters for a page-organized display.
///
/// Only width and height are required; everything else has the
/// controller-family default and can be overridden with the builder
/// methods. Validation happens once, when the configuration is handed
/// to [`crate::Display::new`] or [`crate::FrameBuffer::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Display width in pixels (columns).
    pub width: u32,
    /// Display height in pixels (rows). Must be a multiple of 8.
    pub height: u32,
    /// Constant added to logical columns when addressing device RAM.
    /// Aligns a panel narrower than the controller RAM.
    pub column_offset: u8,
    /// Multiplex ratio argument for the init sequence.
    pub multiplex_ratio: u8,
    /// Common pads hardware configuration argument.
    pub common_pads: u8,
    /// Blank rows inserted between text lines.
    pub line_spacing: i32,
    /// Blank columns inserted between glyphs.
    pub letter_spacing: i32,
}

impl DisplayConfig {
    /// A configuration with the family defaults for everything but
    /// geometry.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            column_offset: 0,
            multiplex_ratio: 0x3F,
            common_pads: 0x12,
            line_spacing: 1,
            letter_spacing: 1,
        }
    }

    pub fn column_offset(mut self, offset: u8) -> Self {
        self.column_offset = offset;
        self
    }

    pub fn multiplex_ratio(mut self, ratio: u8) -> Self {
        self.multiplex_ratio = ratio;
        self
    }

    pub fn common_pads(mut self, pads: u8) -> Self {
        self.common_pads = pads;
        self
    }

    pub fn line_spacing(mut self, rows: i32) -> Self {
        self.line_spacing = rows;
        self
    }

    pub fn letter_spacing(mut self, columns: i32) -> Self {
        self.letter_spacing = columns;
        self
    }

    /// Number of 8-row pages covering the configured height.
    pub fn total_pages(&self) -> usize {
        (self.height / 8) as usize
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.height % 8 != 0 {
            return Err(ConfigError::HeightNotPageAligned(self.height));
        }
        Ok(())
    }
}

/// Rejected configuration. Construction fails outright; no partially
/// built display is ever returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroWidth,
    ZeroHeight,
    /// Height must be a multiple of 8 so rows map exactly onto pages.
    HeightNotPageAligned(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWidth => write!(f, "display width must be nonzero"),
            Self::ZeroHeight => write!(f, "display height must be nonzero"),
            Self::HeightNotPageAligned(h) => {
                write!(f, "display height {} is not a multiple of 8", h)
            }
        }
    }
}
