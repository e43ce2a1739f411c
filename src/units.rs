//! Size units and the display metrics that resolve them to pixels.

/// Unit in which a label size is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeUnit {
    /// Raw surface pixels.
    Pixels,
    /// Density-independent pixels.
    Dp,
    /// Scale-independent pixels (density times the user's font scale).
    #[default]
    Sp,
}

/// Conversion factors supplied by the host display.
///
/// # Example
///
/// ```
/// use swipe_decor::{DisplayMetrics, SizeUnit};
///
/// let metrics = DisplayMetrics::new(3.0).with_font_scale(1.5);
/// assert_eq!(metrics.to_pixels(16.0, SizeUnit::Dp), 48.0);
/// assert_eq!(metrics.to_pixels(14.0, SizeUnit::Sp), 63.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    /// Pixels per density-independent pixel.
    pub density: f32,
    /// Pixels per scale-independent pixel.
    pub scaled_density: f32,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl DisplayMetrics {
    /// Creates metrics for the given density with a font scale of 1.0.
    pub fn new(density: f32) -> Self {
        Self {
            density,
            scaled_density: density,
        }
    }

    /// Applies the user's font scale to scale-independent units.
    pub fn with_font_scale(mut self, font_scale: f32) -> Self {
        self.scaled_density = self.density * font_scale;
        self
    }

    /// Converts a value in the given unit to surface pixels.
    pub fn to_pixels(&self, value: f32, unit: SizeUnit) -> f32 {
        match unit {
            SizeUnit::Pixels => value,
            SizeUnit::Dp => value * self.density,
            SizeUnit::Sp => value * self.scaled_density,
        }
    }
}
