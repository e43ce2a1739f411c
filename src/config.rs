//! Decoration configuration and its fluent builder.

use crate::color::Argb;
use crate::style::{ActionIcon, DirectionalStyle, IconRef, Label, SwipeDirection, Typeface};
use crate::units::{DisplayMetrics, SizeUnit};

/// Gap between an icon and the edge of the row, in density-independent pixels.
pub const ICON_MARGIN_DP: f32 = 16.0;

// ============================================================================
// DecorationConfig
// ============================================================================

/// Frozen decoration settings for both swipe directions.
///
/// Created once per drag session through [`DecorationBuilder`] and reused
/// for every frame of that session.
#[derive(Debug, Clone, PartialEq)]
pub struct DecorationConfig {
    left: DirectionalStyle,
    right: DirectionalStyle,
    metrics: DisplayMetrics,
    icon_margin: f32,
}

impl DecorationConfig {
    /// Starts a new builder with nothing configured.
    pub fn builder() -> DecorationBuilder {
        DecorationBuilder::new()
    }

    /// Returns the style for the given direction.
    pub fn style(&self, direction: SwipeDirection) -> &DirectionalStyle {
        match direction {
            SwipeDirection::Left => &self.left,
            SwipeDirection::Right => &self.right,
        }
    }

    /// Returns the display metrics captured at build time.
    pub fn metrics(&self) -> &DisplayMetrics {
        &self.metrics
    }

    /// Returns the icon margin in whole surface pixels.
    pub fn icon_margin(&self) -> f32 {
        self.icon_margin
    }
}

// ============================================================================
// DecorationBuilder
// ============================================================================

/// Fluent accumulator for a [`DecorationConfig`].
///
/// Shared setters write both directions; per-direction setters write one.
/// For any single field the most recent call wins.
///
/// # Example
///
/// ```
/// use swipe_decor::{Argb, DecorationBuilder, DisplayMetrics, SwipeDirection};
///
/// let config = DecorationBuilder::new()
///     .with_shared_background_color(Argb::new(0xFFF44336))
///     .with_shared_action_icon("ic_delete", None)
///     .with_background_color(SwipeDirection::Right, Argb::new(0xFF4CAF50))
///     .with_label_text(SwipeDirection::Left, "Delete")
///     .build(&DisplayMetrics::new(3.0));
///
/// assert_eq!(config.icon_margin(), 48.0);
/// assert_eq!(
///     config.style(SwipeDirection::Right).background,
///     Some(Argb::new(0xFF4CAF50)),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct DecorationBuilder {
    pub(crate) left: DirectionalStyle,
    pub(crate) right: DirectionalStyle,
}

impl DecorationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn style_mut(&mut self, direction: SwipeDirection) -> &mut DirectionalStyle {
        match direction {
            SwipeDirection::Left => &mut self.left,
            SwipeDirection::Right => &mut self.right,
        }
    }

    /// Sets the background colour for both directions.
    pub fn with_shared_background_color(mut self, color: Argb) -> Self {
        for direction in SwipeDirection::ALL {
            self.style_mut(direction).background = Some(color);
        }
        self
    }

    /// Sets the action icon for both directions.
    pub fn with_shared_action_icon(
        mut self,
        image: impl Into<IconRef>,
        tint: Option<Argb>,
    ) -> Self {
        let icon = ActionIcon::new(image, tint);
        self.left.icon = Some(icon.clone());
        self.right.icon = Some(icon);
        self
    }

    /// Sets the same label for both directions.
    pub fn with_shared_label(mut self, label: Label) -> Self {
        self.left.label = Some(label.clone());
        self.right.label = Some(label);
        self
    }

    /// Sets the background colour for one direction.
    pub fn with_background_color(mut self, direction: SwipeDirection, color: Argb) -> Self {
        self.style_mut(direction).background = Some(color);
        self
    }

    /// Sets the action icon for one direction.
    pub fn with_action_icon(
        mut self,
        direction: SwipeDirection,
        image: impl Into<IconRef>,
        tint: Option<Argb>,
    ) -> Self {
        self.style_mut(direction).icon = Some(ActionIcon::new(image, tint));
        self
    }

    /// Sets a fully specified label for one direction.
    pub fn with_label(
        mut self,
        direction: SwipeDirection,
        text: impl Into<String>,
        size: f32,
        unit: SizeUnit,
        color: Argb,
        typeface: Typeface,
    ) -> Self {
        self.style_mut(direction).label = Some(Label {
            text: text.into(),
            size,
            unit,
            color,
            typeface,
        });
        self
    }

    /// Sets a label for one direction using the default size, colour and typeface.
    pub fn with_label_text(mut self, direction: SwipeDirection, text: impl Into<String>) -> Self {
        self.style_mut(direction).label = Some(Label::new(text));
        self
    }

    /// Freezes the accumulated styles.
    ///
    /// The metrics are kept for resolving label sizes and fix the icon margin.
    pub fn build(&self, metrics: &DisplayMetrics) -> DecorationConfig {
        DecorationConfig {
            left: self.left.clone(),
            right: self.right.clone(),
            metrics: *metrics,
            icon_margin: metrics.to_pixels(ICON_MARGIN_DP, SizeUnit::Dp).trunc(),
        }
    }
}
