//! Per-frame swipe decoration.
//!
//! [`DecorationRenderer::decorate`] is called once per frame while a row is
//! being swiped. It reveals, in order, a background fill, the action icon and
//! the label, each element appearing only once the row has moved far enough
//! to make room for it:
//!
//! ```text
//!  |dx| <= margin                 background
//!  margin < |dx|                  background + icon
//!  margin + icon height < |dx|    background + icon + label
//! ```
//!
//! Left and right swipes share one code path. Positions are measured inward
//! from the edge the row is moving away from and mapped back to surface
//! coordinates by [`Reveal::span`].

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use crate::config::DecorationConfig;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::{DecorateError, DecorateResult};
use crate::geometry::Rect;
use crate::style::SwipeDirection;
use crate::surface::Surface;

// ============================================================================
// GestureSnapshot
// ============================================================================

/// Interaction state reported by the host's gesture tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionState {
    #[default]
    Idle,
    Drag,
    Swipe,
}

/// One frame of a row interaction, supplied fresh by the host.
///
/// `dy` and `is_active` mirror the host's callback shape and do not affect
/// what gets drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSnapshot {
    /// Bounds of the row at rest, in surface coordinates.
    pub item_bounds: Rect,
    /// Horizontal displacement since the drag started.
    pub dx: f32,
    /// Vertical displacement since the drag started.
    pub dy: f32,
    pub action_state: ActionState,
    /// True while the user controls the row, false while it settles.
    pub is_active: bool,
}

impl GestureSnapshot {
    pub fn new(
        item_bounds: Rect,
        dx: f32,
        dy: f32,
        action_state: ActionState,
        is_active: bool,
    ) -> Self {
        Self {
            item_bounds,
            dx,
            dy,
            action_state,
            is_active,
        }
    }

    /// An actively controlled horizontal swipe.
    pub fn swipe(item_bounds: Rect, dx: f32) -> Self {
        Self::new(item_bounds, dx, 0.0, ActionState::Swipe, true)
    }
}

// ============================================================================
// Reveal
// ============================================================================

/// The strip uncovered behind a row during one frame.
#[derive(Debug, Clone, Copy)]
struct Reveal {
    direction: SwipeDirection,
    bounds: Rect,
    distance: f32,
}

impl Reveal {
    fn new(direction: SwipeDirection, bounds: Rect, dx: f32) -> Self {
        Self {
            direction,
            bounds,
            distance: dx.abs(),
        }
    }

    /// The uncovered region, full item height.
    fn strip(&self) -> Rect {
        let (left, right) = self.span(0.0, self.distance);
        Rect::new(left, self.bounds.top, right, self.bounds.bottom)
    }

    /// Clips to the strip and draws the background, icon and label the
    /// current distance has room for.
    fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        config: &DecorationConfig,
    ) -> DecorateResult<()> {
        let style = config.style(self.direction);
        let strip = self.strip();

        surface.clip_rect(strip)?;

        if let Some(color) = style.background {
            surface.fill_rect(strip, color)?;
        }

        let margin = config.icon_margin();
        let bounds = self.bounds;

        let mut icon_rect = None;
        if let Some(icon) = &style.icon {
            if self.distance > margin {
                match surface.resolve_icon(&icon.image) {
                    Some(size) => {
                        let (left, right) = self.span(margin, size.width);
                        let top = bounds.top + (bounds.height() - size.height) / 2.0;
                        let dest = Rect::new(left, top, right, top + size.height);
                        surface.draw_image(&icon.image, dest, icon.tint)?;
                        icon_rect = Some(dest);
                    }
                    None => {
                        tracing::debug!(
                            icon = icon.image.as_str(),
                            "Icon did not resolve, skipping"
                        );
                    }
                }
            }
        }

        let icon_height = icon_rect.map_or(0.0, |r| r.height());
        if let Some(label) = style.label.as_ref().filter(|l| !l.is_empty()) {
            if self.distance > margin + icon_height {
                let text_style = label.text_style(config.metrics());
                let measured = surface.measure_text(&label.text, &text_style)?;

                let offset = match icon_rect {
                    Some(r) => margin + r.width() + margin / 2.0,
                    None => margin,
                };
                let (x, _) = self.span(offset, measured.width);
                let baseline = bounds.center_y() + measured.height / 2.0;

                surface.draw_text(&label.text, x, baseline, &text_style)?;
            }
        }

        Ok(())
    }

    /// Maps a run of `length` pixels starting `offset` pixels in from the
    /// origin edge to surface x coordinates `(left, right)`.
    ///
    /// The origin edge is the item's left edge for right swipes and its right
    /// edge for left swipes.
    fn span(&self, offset: f32, length: f32) -> (f32, f32) {
        match self.direction {
            SwipeDirection::Right => {
                let start = self.bounds.left + offset;
                (start, start + length)
            }
            SwipeDirection::Left => {
                let end = self.bounds.right - offset;
                (end - length, end)
            }
        }
    }
}

// ============================================================================
// DecorationRenderer
// ============================================================================

/// Draws swipe decorations behind a row.
///
/// The renderer holds no per-frame state; one instance can serve every row.
///
/// # Example
///
/// ```
/// use swipe_decor::{
///     Argb, DecorationBuilder, DecorationRenderer, DisplayMetrics, GestureSnapshot, Rect,
///     RasterSurface,
/// };
///
/// let config = DecorationBuilder::new()
///     .with_shared_background_color(Argb::new(0xFFF44336))
///     .build(&DisplayMetrics::new(1.0));
///
/// let mut surface = RasterSurface::new(300, 100);
/// let snapshot = GestureSnapshot::swipe(Rect::new(0.0, 0.0, 300.0, 100.0), 40.0);
///
/// DecorationRenderer::new().decorate(&mut surface, &snapshot, &config);
///
/// assert_eq!(surface.image().get_pixel(10, 50).0, [0xF4, 0x43, 0x36, 0xFF]);
/// assert_eq!(surface.image().get_pixel(60, 50).0, [0, 0, 0, 0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DecorationRenderer<D = TracingSink> {
    sink: D,
}

impl DecorationRenderer<TracingSink> {
    /// Creates a renderer that reports failures through `tracing`.
    pub fn new() -> Self {
        Self { sink: TracingSink }
    }
}

impl<D: DiagnosticSink> DecorationRenderer<D> {
    /// Creates a renderer that reports failures to `sink`.
    pub fn with_sink(sink: D) -> Self {
        Self { sink }
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    /// Decorates one frame. Never fails.
    ///
    /// Any error raised while drawing ends the frame early and is handed to
    /// the diagnostic sink. A panicking surface is caught here too and
    /// reported as [`DecorateError::Panicked`]; such a surface is left in
    /// whatever state the panic found it, unrestored.
    pub fn decorate<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        snapshot: &GestureSnapshot,
        config: &DecorationConfig,
    ) {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.try_decorate(surface, snapshot, config)
        }));
        let result = match outcome {
            Ok(result) => result,
            Err(payload) => Err(DecorateError::Panicked(panic_message(&*payload))),
        };
        if let Err(err) = result {
            self.sink.decoration_failed(&err);
        }
    }

    /// Decorates one frame, returning the first error instead of reporting it.
    ///
    /// The surface clip is saved before the frame and restored afterwards,
    /// on failure as well.
    pub fn try_decorate<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        snapshot: &GestureSnapshot,
        config: &DecorationConfig,
    ) -> DecorateResult<()> {
        if snapshot.action_state != ActionState::Swipe {
            tracing::trace!(state = ?snapshot.action_state, "Not swiping, nothing to decorate");
            return Ok(());
        }

        let dx = snapshot.dx;
        if !dx.is_finite() {
            return Err(DecorateError::InvalidGeometry(format!(
                "horizontal displacement is {dx}"
            )));
        }
        if !snapshot.item_bounds.is_valid() {
            return Err(DecorateError::InvalidGeometry(format!(
                "item bounds {:?}",
                snapshot.item_bounds
            )));
        }

        let Some(direction) = SwipeDirection::from_displacement(dx) else {
            return Ok(());
        };

        let reveal = Reveal::new(direction, snapshot.item_bounds, dx);
        surface.save();
        let drawn = reveal.draw(surface, config);
        surface.restore();
        drawn
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
