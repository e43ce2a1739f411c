//! Per-direction decoration styles.

use crate::color::Argb;
use crate::units::{DisplayMetrics, SizeUnit};

// ============================================================================
// SwipeDirection
// ============================================================================

/// Direction in which a row is being swiped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// The row moves left, revealing a strip at its right edge.
    Left,
    /// The row moves right, revealing a strip at its left edge.
    Right,
}

impl SwipeDirection {
    /// Both directions, left first.
    pub const ALL: [SwipeDirection; 2] = [SwipeDirection::Left, SwipeDirection::Right];

    /// Derives the direction from a horizontal displacement.
    ///
    /// Returns `None` when nothing has been revealed (`dx == 0`) or the
    /// displacement is not a number.
    pub fn from_displacement(dx: f32) -> Option<Self> {
        if dx > 0.0 {
            Some(Self::Right)
        } else if dx < 0.0 {
            Some(Self::Left)
        } else {
            None
        }
    }
}

// ============================================================================
// Icon
// ============================================================================

/// Opaque reference to an icon held by the host's resource layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconRef(pub String);

impl IconRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IconRef {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for IconRef {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// An action icon with an optional tint applied as a colour overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionIcon {
    pub image: IconRef,
    pub tint: Option<Argb>,
}

impl ActionIcon {
    pub fn new(image: impl Into<IconRef>, tint: Option<Argb>) -> Self {
        Self {
            image: image.into(),
            tint,
        }
    }
}

// ============================================================================
// Label
// ============================================================================

/// Font family used for a label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Typeface {
    /// Whatever the surface considers its default face.
    Default,
    #[default]
    SansSerif,
    Serif,
    Monospace,
    /// A family the surface resolves by name.
    Named(String),
}

impl Typeface {
    /// Returns the generic or named family this typeface maps to.
    pub fn family(&self) -> &str {
        match self {
            Self::Default | Self::SansSerif => "sans-serif",
            Self::Serif => "serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// Label text drawn next to the action icon.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub size: f32,
    pub unit: SizeUnit,
    pub color: Argb,
    pub typeface: Typeface,
}

impl Label {
    /// Default label size, in [`SizeUnit::Sp`].
    pub const DEFAULT_SIZE: f32 = 14.0;

    /// Creates a label with the default size, colour and typeface.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: Self::DEFAULT_SIZE,
            unit: SizeUnit::Sp,
            color: Argb::DARK_GRAY,
            typeface: Typeface::SansSerif,
        }
    }

    /// Returns true if there is nothing visible to draw.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Resolves the label into a concrete text style for a surface.
    pub fn text_style(&self, metrics: &DisplayMetrics) -> TextStyle {
        TextStyle {
            size_px: metrics.to_pixels(self.size, self.unit),
            color: self.color,
            typeface: self.typeface.clone(),
        }
    }
}

/// A label resolved to pixels, as handed to a surface.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub size_px: f32,
    pub color: Argb,
    pub typeface: Typeface,
}

// ============================================================================
// DirectionalStyle
// ============================================================================

/// Everything drawn behind a row for one swipe direction.
///
/// Every field is optional; an empty style draws nothing but the clip.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DirectionalStyle {
    pub background: Option<Argb>,
    pub icon: Option<ActionIcon>,
    pub label: Option<Label>,
}

impl DirectionalStyle {
    /// Returns true if no element is configured.
    pub fn is_empty(&self) -> bool {
        self.background.is_none() && self.icon.is_none() && self.label.is_none()
    }
}
