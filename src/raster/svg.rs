//! SVG rasterisation and pixel compositing using resvg/usvg.
//!
//! Shared by icon and text drawing in [`RasterSurface`](super::RasterSurface).

use image::{Rgba, RgbaImage};
use palette::Srgba;
use palette::blend::Compose;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::color::Argb;
use crate::geometry::Rect;

// ============================================================================
// SvgSource
// ============================================================================

/// Where an [`IconAsset`](super::IconAsset) gets its SVG markup.
///
/// ```
/// use swipe_decor::SvgSource;
///
/// let trash = SvgSource::from_svg(r#"<svg xmlns="http://www.w3.org/2000/svg"/>"#);
/// assert!(trash.is_raw());
/// assert!(trash.resolve().is_some());
///
/// #[cfg(feature = "twemoji")]
/// assert!(SvgSource::from_emoji("🦆").is_some_and(|icon| icon.is_emoji()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SvgSource {
    /// Markup registered by the host.
    Raw(String),
    /// An emoji drawn from the bundled twemoji set. Resolves to nothing
    /// without the `twemoji` feature, so the renderer skips the icon.
    Emoji(String),
}

impl SvgSource {
    pub fn from_svg(svg: impl Into<String>) -> Self {
        Self::Raw(svg.into())
    }

    /// Wraps `emoji` if twemoji ships artwork for it.
    #[cfg(feature = "twemoji")]
    pub fn from_emoji(emoji: &str) -> Option<Self> {
        twemoji_markup(emoji).map(|_| Self::Emoji(emoji.to_string()))
    }

    /// The markup to rasterise, or `None` if this icon cannot be drawn.
    pub fn resolve(&self) -> Option<&str> {
        match self {
            Self::Raw(svg) => Some(svg),
            Self::Emoji(emoji) => twemoji_markup(emoji),
        }
    }

    pub fn is_emoji(&self) -> bool {
        matches!(self, Self::Emoji(_))
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }
}

#[cfg(feature = "twemoji")]
fn twemoji_markup(emoji: &str) -> Option<&'static str> {
    twemoji_assets::svg::SvgTwemojiAsset::from_emoji(emoji).map(|asset| asset.as_ref())
}

#[cfg(not(feature = "twemoji"))]
fn twemoji_markup(_emoji: &str) -> Option<&'static str> {
    None
}

impl<S: Into<String>> From<S> for SvgSource {
    fn from(s: S) -> Self {
        Self::Raw(s.into())
    }
}

// ============================================================================
// Pixel Regions
// ============================================================================

/// A half-open pixel region `[x0, x1) x [y0, y1)`, clamped to an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PixelRect {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl PixelRect {
    /// Snaps `rect` to whole pixels and clamps it to a `width` x `height` image.
    pub fn from_rect(rect: &Rect, width: u32, height: u32) -> Self {
        let snap = |v: f32, max: u32| v.round().clamp(0.0, max as f32) as u32;
        let x0 = snap(rect.left, width);
        let y0 = snap(rect.top, height);
        Self {
            x0,
            y0,
            x1: snap(rect.right, width).max(x0),
            y1: snap(rect.bottom, height).max(y0),
        }
    }

    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }

    pub fn is_empty(&self) -> bool {
        self.x0 == self.x1 || self.y0 == self.y1
    }
}

// ============================================================================
// SVG Rendering
// ============================================================================

/// Renders SVG markup stretched to exactly `width` x `height` pixels.
///
/// Returns `None` if the SVG cannot be parsed or the size is zero.
pub fn render_svg(svg_data: &str, width: u32, height: u32) -> Option<RgbaImage> {
    let tree = Tree::from_str(svg_data, &Options::default()).ok()?;

    let svg_size = tree.size();
    let scale_x = width as f32 / svg_size.width();
    let scale_y = height as f32 / svg_size.height();

    let mut pixmap = Pixmap::new(width, height)?;
    resvg::render(&tree, Transform::from_scale(scale_x, scale_y), &mut pixmap.as_mut());

    Some(pixmap_to_rgba_image(&pixmap))
}

/// Renders an [`SvgSource`] at the given pixel size.
pub fn render_source(source: &SvgSource, width: u32, height: u32) -> Option<RgbaImage> {
    let svg_data = source.resolve()?;
    render_svg(svg_data, width, height)
}

/// Renders an already-parsed tree onto a transparent `width` x `height` image.
pub(crate) fn render_tree(tree: &Tree, width: u32, height: u32) -> Option<RgbaImage> {
    let mut pixmap = Pixmap::new(width, height)?;
    resvg::render(tree, Transform::identity(), &mut pixmap.as_mut());
    Some(pixmap_to_rgba_image(&pixmap))
}

/// Copies a premultiplied pixmap into a straight-alpha image.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let straight: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let c = pixel.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    // The buffer length always matches the pixmap's dimensions.
    RgbaImage::from_raw(pixmap.width(), pixmap.height(), straight)
        .unwrap_or_else(|| RgbaImage::new(pixmap.width(), pixmap.height()))
}

// ============================================================================
// Tinting & Compositing
// ============================================================================

/// Replaces every pixel's colour with `tint`, keeping the icon's shape.
///
/// Equivalent to a SRC_IN colour filter: the result alpha is the product of
/// the pixel alpha and the tint alpha.
pub fn tint_src_in(img: &mut RgbaImage, tint: Argb) {
    let [r, g, b, ta] = tint.to_rgba_array();
    for pixel in img.pixels_mut() {
        let a = (pixel[3] as u32 * ta as u32 + 127) / 255;
        pixel.0 = [r, g, b, a as u8];
    }
}

/// Fills `region` with `color`, blending source-over.
pub(crate) fn fill_region(dest: &mut RgbaImage, region: PixelRect, color: Argb) {
    let src = Rgba(color.to_rgba_array());
    for y in region.y0..region.y1 {
        for x in region.x0..region.x1 {
            let pixel = dest.get_pixel_mut(x, y);
            *pixel = alpha_blend(src, *pixel);
        }
    }
}

/// Composites `src` onto `dest` with its top-left corner at (`x`, `y`).
///
/// Only the part of `src` that lands inside `clip` is visited; `clip` must lie
/// within `dest`.
pub(crate) fn composite_over(
    dest: &mut RgbaImage,
    src: &RgbaImage,
    x: i64,
    y: i64,
    clip: PixelRect,
) {
    let left = x.max(clip.x0 as i64);
    let top = y.max(clip.y0 as i64);
    let right = (x + src.width() as i64).min(clip.x1 as i64);
    let bottom = (y + src.height() as i64).min(clip.y1 as i64);

    for dy in top..bottom {
        for dx in left..right {
            let over = *src.get_pixel((dx - x) as u32, (dy - y) as u32);
            let pixel = dest.get_pixel_mut(dx as u32, dy as u32);
            *pixel = alpha_blend(over, *pixel);
        }
    }
}

/// Porter-Duff source-over of straight-alpha sRGB pixels.
fn alpha_blend(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    match src[3] {
        255 => src,
        0 => dst,
        _ => {
            let [r, g, b, a] = src.0;
            let src = Srgba::new(r, g, b, a).into_format::<f32, f32>();
            let [r, g, b, a] = dst.0;
            let dst = Srgba::new(r, g, b, a).into_format::<f32, f32>();
            let out: Srgba<u8> = src.over(dst).into_format();
            Rgba([out.red, out.green, out.blue, out.alpha])
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24"><rect width="24" height="24" fill="#ff0000"/></svg>"##;

    fn full(img: &RgbaImage) -> PixelRect {
        PixelRect::from_rect(
            &Rect::new(0.0, 0.0, img.width() as f32, img.height() as f32),
            img.width(),
            img.height(),
        )
    }

    #[test]
    fn render_stretches_to_requested_size() {
        let img = render_svg(SQUARE_SVG, 32, 16).unwrap();
        assert_eq!(img.dimensions(), (32, 16));
        assert_eq!(img.get_pixel(16, 8).0, [255, 0, 0, 255]);
    }

    #[test]
    fn render_rejects_garbage() {
        assert!(render_svg("not svg", 16, 16).is_none());
        assert!(render_svg(SQUARE_SVG, 0, 16).is_none());
    }

    #[test]
    fn tint_keeps_shape() {
        let mut img = RgbaImage::from_pixel(2, 1, Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, Rgba([0, 0, 0, 0]));

        tint_src_in(&mut img, Argb::new(0x80FF_FFFF));

        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 128]);
        assert_eq!(img.get_pixel(1, 0).0[3], 0);
    }

    #[test]
    fn blend_keeps_straight_alpha() {
        let translucent = Rgba([0, 0, 255, 128]);
        assert_eq!(alpha_blend(translucent, Rgba([0, 0, 0, 0])).0, [0, 0, 255, 128]);
        assert_eq!(alpha_blend(Rgba([9, 9, 9, 0]), Rgba([1, 2, 3, 4])).0, [1, 2, 3, 4]);

        let over_white = alpha_blend(translucent, Rgba([255, 255, 255, 255]));
        assert_eq!(over_white.0[3], 255);
        assert!((126..=128).contains(&over_white.0[0]));
        assert_eq!(over_white.0[2], 255);
    }

    #[test]
    fn pixel_rect_snaps_and_clamps() {
        let r = PixelRect::from_rect(&Rect::new(-5.0, 2.4, 10.6, 200.0), 8, 50);
        let expected = PixelRect {
            x0: 0,
            y0: 2,
            x1: 8,
            y1: 50,
        };
        assert_eq!(r, expected);
        assert_eq!((r.width(), r.height()), (8, 48));

        let inverted = PixelRect::from_rect(&Rect::new(6.0, 0.0, 2.0, 4.0), 8, 8);
        assert!(inverted.is_empty());
    }

    #[test]
    fn composite_respects_clip() {
        let mut dest = RgbaImage::from_pixel(10, 10, Rgba([255, 0, 0, 255]));
        let src = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]));
        let clip = PixelRect {
            x0: 0,
            y0: 0,
            x1: 5,
            y1: 10,
        };

        composite_over(&mut dest, &src, 3, 3, clip);

        assert_eq!(dest.get_pixel(4, 4).0, [0, 0, 255, 255]);
        assert_eq!(dest.get_pixel(5, 4).0, [255, 0, 0, 255]);
        assert_eq!(dest.get_pixel(0, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn composite_off_canvas_is_ignored() {
        let mut dest = RgbaImage::new(4, 4);
        let src = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]));
        let clip = full(&dest);

        composite_over(&mut dest, &src, -2, -2, clip);

        assert_eq!(dest.get_pixel(1, 1).0, [0, 0, 255, 255]);
        assert_eq!(dest.get_pixel(2, 2).0, [0, 0, 0, 0]);
    }

    #[test]
    fn fill_blends_translucent_color() {
        let mut dest = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
        let region = full(&dest);

        fill_region(&mut dest, region, Argb::new(0x800000FF));

        let pixel = dest.get_pixel(0, 0);
        assert!(pixel[0] > 0, "Should have some red");
        assert!(pixel[2] > 0, "Should have some blue");
        assert_eq!(pixel[3], 255);
    }

    #[test]
    fn svg_source_from_raw() {
        let source: SvgSource = "<svg></svg>".into();
        assert!(source.is_raw());
        assert!(!source.is_emoji());
        assert_eq!(source.resolve(), Some("<svg></svg>"));
    }

    #[cfg(not(feature = "twemoji"))]
    #[test]
    fn emoji_does_not_resolve_without_feature() {
        assert_eq!(SvgSource::Emoji("🗑".into()).resolve(), None);
    }

    #[cfg(feature = "twemoji")]
    #[test]
    fn render_emoji_source() {
        let source = SvgSource::from_emoji("🦆").expect("Duck emoji should be supported");
        let img = render_source(&source, 24, 24).expect("Should render emoji to image");
        assert_eq!(img.dimensions(), (24, 24));
    }
}
