//! Renderer configuration.

use crate::error::RenderError;
use crate::style::parse_hex_color;

/// Layout for the abstract-art grid.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use hypnos_render::ArtConfig;
///
/// let config = ArtConfig::new().with_cols(24).with_jitter(0.05);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct ArtConfig {
    cols: usize,
    cell_px: u32,
    pad: f64,
    jitter: f64,
    background: String,
}

impl ArtConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: 12 columns (one hour of 5-minute epochs per row), 64 px
    /// cells, pad 0.12, jitter 0.10, near-black background.
    pub fn new() -> Self {
        Self {
            cols: 12,
            cell_px: 64,
            pad: 0.12,
            jitter: 0.10,
            background: "#0F0F10".to_string(),
        }
    }

    /// Sets the number of epochs per grid row.
    pub fn with_cols(mut self, cols: usize) -> Self {
        self.cols = cols;
        self
    }

    /// Sets the grid cell size in pixels.
    pub fn with_cell_px(mut self, cell_px: u32) -> Self {
        self.cell_px = cell_px;
        self
    }

    /// Sets the margin inside each cell, as a fraction of the cell size.
    pub fn with_pad(mut self, pad: f64) -> Self {
        self.pad = pad;
        self
    }

    /// Sets the random mark displacement, as a fraction of the cell size.
    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter;
        self
    }

    /// Sets the background color as a `#RRGGBB` hex string.
    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    // --- Accessors ---

    /// Returns the number of epochs per grid row.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the grid cell size in pixels.
    pub fn cell_px(&self) -> u32 {
        self.cell_px
    }

    /// Returns the in-cell margin fraction.
    pub fn pad(&self) -> f64 {
        self.pad
    }

    /// Returns the jitter fraction.
    pub fn jitter(&self) -> f64 {
        self.jitter
    }

    /// Returns the background color hex string.
    pub fn background(&self) -> &str {
        &self.background
    }

    /// Validates this configuration.
    ///
    /// Checks that the grid has at least one column, cells are at least
    /// 8 px, pad leaves a visible mark (`0 <= pad < 0.5`), jitter is within
    /// `[0, 0.5]`, and the background color parses.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.cols == 0 {
            return Err(RenderError::InvalidLayout {
                reason: "cols must be at least 1".to_string(),
            });
        }
        if self.cell_px < 8 {
            return Err(RenderError::InvalidLayout {
                reason: format!("cell_px must be at least 8, got {}", self.cell_px),
            });
        }
        if !self.pad.is_finite() || !(0.0..0.5).contains(&self.pad) {
            return Err(RenderError::InvalidLayout {
                reason: format!("pad must be in [0, 0.5), got {}", self.pad),
            });
        }
        if !self.jitter.is_finite() || !(0.0..=0.5).contains(&self.jitter) {
            return Err(RenderError::InvalidLayout {
                reason: format!("jitter must be in [0, 0.5], got {}", self.jitter),
            });
        }
        parse_hex_color(&self.background)?;
        Ok(())
    }
}

impl Default for ArtConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Layout for the hypnogram step chart.
#[derive(Clone, Debug)]
pub struct HypnogramConfig {
    width_px: u32,
    height_px: u32,
    caption: String,
}

impl HypnogramConfig {
    /// Creates a new configuration with defaults (1000x400 px).
    pub fn new() -> Self {
        Self {
            width_px: 1000,
            height_px: 400,
            caption: "Simulated Sleep Hypnogram".to_string(),
        }
    }

    /// Sets the chart width in pixels.
    pub fn with_width_px(mut self, width_px: u32) -> Self {
        self.width_px = width_px;
        self
    }

    /// Sets the chart height in pixels.
    pub fn with_height_px(mut self, height_px: u32) -> Self {
        self.height_px = height_px;
        self
    }

    /// Sets the chart caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    // --- Accessors ---

    /// Returns the chart width in pixels.
    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    /// Returns the chart height in pixels.
    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    /// Returns the chart caption.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width_px < 100 || self.height_px < 100 {
            return Err(RenderError::InvalidLayout {
                reason: format!(
                    "chart must be at least 100x100 px, got {}x{}",
                    self.width_px, self.height_px
                ),
            });
        }
        Ok(())
    }
}

impl Default for HypnogramConfig {
    fn default() -> Self {
        Self::new()
    }
}
