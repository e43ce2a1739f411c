//! swipe-decor: Backgrounds, icons and labels behind swiped list rows
//!
//! While a list row is dragged sideways, this crate draws what the row
//! uncovers: a background fill, an action icon and a label, configured
//! separately for left and right swipes and revealed progressively as the
//! row moves further.
//!
//! # Example
//!
//! ```
//! use swipe_decor::{
//!     Argb, DecorationBuilder, DecorationRenderer, DisplayMetrics, GestureSnapshot,
//!     IconRegistry, RasterSurface, Rect, Size, SwipeDirection,
//! };
//!
//! // Once per drag session
//! let config = DecorationBuilder::new()
//!     .with_shared_background_color(Argb::new(0xFFF44336))
//!     .with_shared_action_icon("ic_delete", Some(Argb::WHITE))
//!     .with_label_text(SwipeDirection::Left, "Delete")
//!     .build(&DisplayMetrics::new(3.0));
//!
//! let icons = IconRegistry::new().with_icon(
//!     "ic_delete",
//!     r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24"><rect width="24" height="24"/></svg>"#,
//!     Size::new(32.0, 32.0),
//! );
//! let mut surface = RasterSurface::new(300, 100).with_icons(icons);
//! let renderer = DecorationRenderer::new();
//!
//! // Once per frame
//! let snapshot = GestureSnapshot::swipe(Rect::new(0.0, 0.0, 300.0, 100.0), 60.0);
//! renderer.decorate(&mut surface, &snapshot, &config);
//!
//! assert_eq!(surface.image().get_pixel(55, 50).0, [255, 255, 255, 255]);
//! assert_eq!(surface.image().get_pixel(65, 50).0, [0, 0, 0, 0]);
//! ```
//!
//! # Custom Surfaces
//!
//! [`RasterSurface`] draws into an `image::RgbaImage`. Hosts with their own
//! rendering backend implement [`Surface`] instead. Per frame the renderer
//! saves the clip, clips, fills, draws one image and one run of text, then
//! restores the clip.
//!
//! # Profiles
//!
//! Decorations can also be described as JSON through [`DecorationProfile`]
//! and applied with the [`Configurable`] trait.

mod color;
mod config;
mod diagnostics;
mod error;
mod geometry;
mod profile;
mod raster;
mod renderer;
mod style;
mod surface;
mod units;

#[cfg(test)]
mod testing;

pub use color::Argb;
pub use config::{DecorationBuilder, DecorationConfig, ICON_MARGIN_DP};
pub use diagnostics::{DiagnosticSink, TracingSink};
pub use error::{DecorateError, DecorateResult, ProfileError, SurfaceError};
pub use geometry::{Rect, Size};
pub use profile::{
    Configurable, DecorationProfile, IconSettings, LabelSettings, SerializableUnit,
    SwipeSettings,
};
pub use raster::{IconAsset, IconRegistry, RasterSurface, SvgSource, TextRenderer};
pub use renderer::{ActionState, DecorationRenderer, GestureSnapshot};
pub use style::{
    ActionIcon, DirectionalStyle, IconRef, Label, SwipeDirection, TextStyle, Typeface,
};
pub use surface::{Surface, TextMetrics};
pub use units::{DisplayMetrics, SizeUnit};
