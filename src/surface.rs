//! The drawing capability a host hands to the renderer.

use crate::color::Argb;
use crate::error::SurfaceError;
use crate::geometry::{Rect, Size};
use crate::style::{IconRef, TextStyle};

/// Measured extent of a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    /// Advance width of the text, from the pen origin.
    pub width: f32,
    /// Height used to center the baseline vertically.
    pub height: f32,
}

/// A 2D drawing target.
///
/// The renderer issues calls in a fixed order each frame: `save`, one clip,
/// at most one fill, one image and one text draw, then `restore`. The clip
/// applies to the calls between `save` and the matching `restore` only, so
/// the surface is left as the host handed it over.
pub trait Surface {
    /// Remembers the current clip.
    fn save(&mut self);

    /// Brings back the clip remembered by the matching [`save`](Self::save).
    fn restore(&mut self);

    /// Restricts subsequent drawing to `rect`.
    fn clip_rect(&mut self, rect: Rect) -> Result<(), SurfaceError>;

    /// Fills `rect` with a solid colour.
    fn fill_rect(&mut self, rect: Rect, color: Argb) -> Result<(), SurfaceError>;

    /// Resolves an icon to its intrinsic size.
    ///
    /// `None` means the icon cannot be drawn; the renderer skips it.
    fn resolve_icon(&mut self, icon: &IconRef) -> Option<Size>;

    /// Draws an icon into `dest`, replacing its colour with `tint` if set.
    fn draw_image(
        &mut self,
        icon: &IconRef,
        dest: Rect,
        tint: Option<Argb>,
    ) -> Result<(), SurfaceError>;

    /// Measures `text` as it would be drawn with `style`.
    fn measure_text(&mut self, text: &str, style: &TextStyle) -> Result<TextMetrics, SurfaceError>;

    /// Draws `text` with its baseline starting at (`x`, `y`).
    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        style: &TextStyle,
    ) -> Result<(), SurfaceError>;
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn save(&mut self) {
        (**self).save()
    }

    fn restore(&mut self) {
        (**self).restore()
    }

    fn clip_rect(&mut self, rect: Rect) -> Result<(), SurfaceError> {
        (**self).clip_rect(rect)
    }

    fn fill_rect(&mut self, rect: Rect, color: Argb) -> Result<(), SurfaceError> {
        (**self).fill_rect(rect, color)
    }

    fn resolve_icon(&mut self, icon: &IconRef) -> Option<Size> {
        (**self).resolve_icon(icon)
    }

    fn draw_image(
        &mut self,
        icon: &IconRef,
        dest: Rect,
        tint: Option<Argb>,
    ) -> Result<(), SurfaceError> {
        (**self).draw_image(icon, dest, tint)
    }

    fn measure_text(&mut self, text: &str, style: &TextStyle) -> Result<TextMetrics, SurfaceError> {
        (**self).measure_text(text, style)
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        style: &TextStyle,
    ) -> Result<(), SurfaceError> {
        (**self).draw_text(text, x, y, style)
    }
}
