//! A software [`Surface`] backed by an `image::RgbaImage`.
//!
//! Icons are SVG documents registered in an [`IconRegistry`] and rasterised
//! with resvg at the size the renderer asks for. Rasterised icons are cached
//! per (icon, size, tint) so steady swiping does not re-render them every
//! frame.

pub mod svg;
pub mod text;

pub use svg::SvgSource;
pub use text::TextRenderer;

use std::collections::HashMap;

use image::{Rgba, RgbaImage};

use crate::color::Argb;
use crate::error::SurfaceError;
use crate::geometry::{Rect, Size};
use crate::style::{IconRef, TextStyle};
use crate::surface::{Surface, TextMetrics};
use svg::{PixelRect, composite_over, fill_region, render_source, tint_src_in};

// ============================================================================
// IconRegistry
// ============================================================================

/// An icon the raster surface knows how to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct IconAsset {
    pub source: SvgSource,
    /// Size the icon is drawn at, in surface pixels.
    pub intrinsic_size: Size,
}

/// Maps host icon references to SVG assets.
#[derive(Debug, Clone, Default)]
pub struct IconRegistry {
    icons: HashMap<IconRef, IconAsset>,
}

impl IconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an icon, replacing any previous asset with the same id.
    pub fn register(&mut self, id: impl Into<IconRef>, source: impl Into<SvgSource>, size: Size) {
        self.icons.insert(
            id.into(),
            IconAsset {
                source: source.into(),
                intrinsic_size: size,
            },
        );
    }

    /// Builder-style [`register`](Self::register).
    pub fn with_icon(
        mut self,
        id: impl Into<IconRef>,
        source: impl Into<SvgSource>,
        size: Size,
    ) -> Self {
        self.register(id, source, size);
        self
    }

    pub fn get(&self, id: &IconRef) -> Option<&IconAsset> {
        self.icons.get(id)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

// ============================================================================
// IconCacheKey
// ============================================================================

/// Key for rasterised icons.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct IconCacheKey {
    icon: IconRef,
    width: u32,
    height: u32,
    tint: Option<Argb>,
}

// ============================================================================
// RasterSurface
// ============================================================================

/// Draws decorations into an in-memory RGBA image.
///
/// The clip starts as the whole image and every [`clip_rect`](Surface::clip_rect)
/// narrows it further. [`save`](Surface::save) and [`restore`](Surface::restore)
/// bracket a narrowed clip; [`reset_clip`](Self::reset_clip) drops it outright.
///
/// # Example
///
/// ```
/// use swipe_decor::{Argb, IconRegistry, RasterSurface, Rect, Size, Surface};
///
/// let icons = IconRegistry::new().with_icon(
///     "ic_delete",
///     r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24"><rect width="24" height="24"/></svg>"#,
///     Size::new(24.0, 24.0),
/// );
/// let mut surface = RasterSurface::new(100, 40).with_icons(icons);
///
/// surface.clip_rect(Rect::new(0.0, 0.0, 50.0, 40.0)).unwrap();
/// surface.fill_rect(Rect::new(0.0, 0.0, 100.0, 40.0), Argb::new(0xFF0000FF)).unwrap();
///
/// assert_eq!(surface.image().get_pixel(49, 0).0, [0, 0, 255, 255]);
/// assert_eq!(surface.image().get_pixel(50, 0).0, [0, 0, 0, 0]);
/// ```
#[derive(Debug)]
pub struct RasterSurface {
    image: RgbaImage,
    clip: Rect,
    saved_clips: Vec<Rect>,
    icons: IconRegistry,
    icon_cache: HashMap<IconCacheKey, RgbaImage>,
    text: TextRenderer,
}

impl RasterSurface {
    /// Creates a transparent surface of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_image(RgbaImage::new(width, height))
    }

    /// Wraps an existing image, for example a frame that already shows the list.
    pub fn from_image(image: RgbaImage) -> Self {
        let clip = full_bounds(&image);
        Self {
            image,
            clip,
            saved_clips: Vec::new(),
            icons: IconRegistry::new(),
            icon_cache: HashMap::new(),
            text: TextRenderer::default(),
        }
    }

    pub fn with_icons(mut self, icons: IconRegistry) -> Self {
        self.icons = icons;
        self.icon_cache.clear();
        self
    }

    pub fn with_text_renderer(mut self, text: TextRenderer) -> Self {
        self.text = text;
        self
    }

    pub fn icons(&self) -> &IconRegistry {
        &self.icons
    }

    /// Mutable access to the registry. Clears the raster cache.
    pub fn icons_mut(&mut self) -> &mut IconRegistry {
        self.icon_cache.clear();
        &mut self.icons
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Returns the current clip.
    pub fn clip(&self) -> Rect {
        self.clip
    }

    /// Restores the clip to the whole image and forgets saved clips.
    pub fn reset_clip(&mut self) {
        self.clip = full_bounds(&self.image);
        self.saved_clips.clear();
    }

    /// Resets every pixel to `color` and restores the clip.
    pub fn clear(&mut self, color: Argb) {
        let pixel = Rgba(color.to_rgba_array());
        for p in self.image.pixels_mut() {
            *p = pixel;
        }
        self.reset_clip();
    }

    /// Number of rasterised icons held in the cache.
    pub fn cached_icons(&self) -> usize {
        self.icon_cache.len()
    }

    fn clip_pixels(&self) -> PixelRect {
        PixelRect::from_rect(&self.clip, self.image.width(), self.image.height())
    }

    /// Renders and caches the icon for `key` unless it is already cached.
    fn ensure_icon(&mut self, key: &IconCacheKey) -> Result<(), SurfaceError> {
        if self.icon_cache.contains_key(key) {
            return Ok(());
        }

        let image_error = |reason: &str| SurfaceError::Image {
            icon: key.icon.as_str().to_string(),
            reason: reason.to_string(),
        };
        let asset = self
            .icons
            .get(&key.icon)
            .ok_or_else(|| image_error("not registered"))?;
        let mut raster = render_source(&asset.source, key.width, key.height)
            .ok_or_else(|| image_error("SVG could not be rendered"))?;
        if let Some(tint) = key.tint {
            tint_src_in(&mut raster, tint);
        }

        self.icon_cache.insert(key.clone(), raster);
        Ok(())
    }
}

fn full_bounds(image: &RgbaImage) -> Rect {
    Rect::new(0.0, 0.0, image.width() as f32, image.height() as f32)
}

impl Surface for RasterSurface {
    fn save(&mut self) {
        self.saved_clips.push(self.clip);
    }

    fn restore(&mut self) {
        match self.saved_clips.pop() {
            Some(clip) => self.clip = clip,
            None => tracing::debug!("restore without a saved clip, ignoring"),
        }
    }

    fn clip_rect(&mut self, rect: Rect) -> Result<(), SurfaceError> {
        if !rect.is_valid() {
            return Err(SurfaceError::Clip(format!("invalid clip {rect:?}")));
        }
        self.clip = self.clip.intersect(&rect).unwrap_or_default();
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Argb) -> Result<(), SurfaceError> {
        let Some(area) = self.clip.intersect(&rect) else {
            return Ok(());
        };
        let region = PixelRect::from_rect(&area, self.image.width(), self.image.height());
        fill_region(&mut self.image, region, color);
        Ok(())
    }

    fn resolve_icon(&mut self, icon: &IconRef) -> Option<Size> {
        let asset = self.icons.get(icon)?;
        asset.source.resolve()?;
        Some(asset.intrinsic_size)
    }

    fn draw_image(
        &mut self,
        icon: &IconRef,
        dest: Rect,
        tint: Option<Argb>,
    ) -> Result<(), SurfaceError> {
        let width = dest.width().round();
        let height = dest.height().round();
        if width < 1.0 || height < 1.0 {
            return Ok(());
        }

        let key = IconCacheKey {
            icon: icon.clone(),
            width: width as u32,
            height: height as u32,
            tint,
        };
        let clip = self.clip_pixels();
        let x = dest.left.round() as i64;
        let y = dest.top.round() as i64;

        self.ensure_icon(&key)?;
        if let Some(raster) = self.icon_cache.get(&key) {
            composite_over(&mut self.image, raster, x, y, clip);
        }
        Ok(())
    }

    fn measure_text(&mut self, text: &str, style: &TextStyle) -> Result<TextMetrics, SurfaceError> {
        self.text.measure(text, style)
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        style: &TextStyle,
    ) -> Result<(), SurfaceError> {
        let clip = self.clip_pixels();
        if clip.is_empty() {
            return Ok(());
        }
        // Render only the clipped region, offset to its origin.
        let (ox, oy) = (clip.x0 as f32, clip.y0 as f32);
        let layer = self.text.render(text, x - ox, y - oy, style, clip.width(), clip.height())?;
        composite_over(&mut self.image, &layer, clip.x0 as i64, clip.y0 as i64, clip);
        Ok(())
    }
}
