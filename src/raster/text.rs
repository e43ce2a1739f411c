//! Label text rendered as an SVG `<text>` element.
//!
//! Text goes through usvg's own shaping, so it needs a font database. The
//! default renderer loads the system fonts once; a surface without any usable
//! font reports a [`SurfaceError::Text`] instead of drawing.

use std::fmt::Write as _;
use std::sync::{Arc, OnceLock};

use image::RgbaImage;
use resvg::usvg::fontdb::Database;
use resvg::usvg::{Node, Options, Tree};

use super::svg::render_tree;
use crate::error::SurfaceError;
use crate::style::TextStyle;
use crate::surface::TextMetrics;

/// Shapes and rasterises label text.
#[derive(Clone)]
pub struct TextRenderer {
    fontdb: Arc<Database>,
}

impl std::fmt::Debug for TextRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextRenderer")
            .field("faces", &self.fontdb.len())
            .finish()
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::system()
    }
}

impl TextRenderer {
    /// Creates a renderer backed by the fonts installed on this machine.
    ///
    /// The system fonts are scanned once per process and shared.
    pub fn system() -> Self {
        static SYSTEM_FONTS: OnceLock<Arc<Database>> = OnceLock::new();
        let fontdb = SYSTEM_FONTS.get_or_init(|| {
            let mut db = Database::new();
            db.load_system_fonts();
            tracing::debug!(faces = db.len(), "Loaded system fonts for label text");
            Arc::new(db)
        });
        Self {
            fontdb: Arc::clone(fontdb),
        }
    }

    /// Creates a renderer backed by an explicit font database.
    pub fn with_database(db: Database) -> Self {
        Self {
            fontdb: Arc::new(db),
        }
    }

    /// Number of font faces available for shaping.
    pub fn face_count(&self) -> usize {
        self.fontdb.len()
    }

    fn parse(&self, svg: &str) -> Result<Tree, SurfaceError> {
        let opts = Options {
            fontdb: Arc::clone(&self.fontdb),
            ..Options::default()
        };
        Tree::from_str(svg, &opts).map_err(|e| SurfaceError::Text(e.to_string()))
    }

    /// Measures `text` drawn at `style`'s size.
    ///
    /// The width is the advance from the pen origin, taken from the layout
    /// box usvg builds out of font metrics rather than glyph outlines, so
    /// side bearings and spaces count. The height is the font size, which
    /// centres the baseline the same way for every string.
    ///
    /// Text with no visible glyph is not laid out by usvg and fails like
    /// text no installed font can shape.
    pub fn measure(&self, text: &str, style: &TextStyle) -> Result<TextMetrics, SurfaceError> {
        let size = style.size_px.max(1.0);
        let width = (size * (text.chars().count() as f32 + 2.0)).ceil();
        let height = (size * 2.0).ceil();
        let svg = text_svg(text, 0.0, size, style, width as u32, height as u32);

        let tree = self.parse(&svg)?;
        let advance = tree.root().children().iter().find_map(|node| match node {
            Node::Text(shaped) => Some(shaped.bounding_box().right()),
            _ => None,
        });
        let Some(width) = advance else {
            return Err(SurfaceError::Text(format!(
                "no font could shape `{text}` in family {}",
                style.typeface.family()
            )));
        };

        Ok(TextMetrics {
            width,
            height: style.size_px,
        })
    }

    /// Rasterises `text` onto a transparent `width` x `height` canvas with its
    /// baseline starting at (`x`, `y`).
    pub fn render(
        &self,
        text: &str,
        x: f32,
        y: f32,
        style: &TextStyle,
        width: u32,
        height: u32,
    ) -> Result<RgbaImage, SurfaceError> {
        let tree = self.parse(&text_svg(text, x, y, style, width, height))?;
        render_tree(&tree, width, height)
            .ok_or_else(|| SurfaceError::Text(format!("cannot allocate {width}x{height} canvas")))
    }
}

/// Builds a standalone SVG document containing one line of text.
fn text_svg(text: &str, x: f32, y: f32, style: &TextStyle, width: u32, height: u32) -> String {
    let color = style.color;
    let mut svg = String::with_capacity(text.len() + 256);
    let _ = write!(
        svg,
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}"><text x="{x}" y="{y}" font-family="{family}" font-size="{size}" fill="#{r:02x}{g:02x}{b:02x}" fill-opacity="{opacity}">{body}</text></svg>"##,
        family = escape_xml(style.typeface.family()),
        size = style.size_px,
        r = color.red(),
        g = color.green(),
        b = color.blue(),
        opacity = color.alpha() as f32 / 255.0,
        body = escape_xml(text),
    );
    svg
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
