//! Recording doubles for renderer tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::color::Argb;
use crate::diagnostics::DiagnosticSink;
use crate::error::{DecorateError, SurfaceError};
use crate::geometry::{Rect, Size};
use crate::style::{IconRef, TextStyle};
use crate::surface::{Surface, TextMetrics};

/// One call issued to a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Clip(Rect),
    Fill(Rect, Argb),
    Image {
        icon: IconRef,
        dest: Rect,
        tint: Option<Argb>,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        style: TextStyle,
    },
}

impl Call {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Call::Clip(_) => "clip",
            Call::Fill(..) => "fill",
            Call::Image { .. } => "image",
            Call::Text { .. } => "text",
        }
    }
}

/// Which surface operation should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailOn {
    Clip,
    Fill,
    Image,
    Text,
}

/// A surface that records calls instead of drawing.
///
/// Text measures `char_width` per character and is as tall as its pixel size.
/// `save`/`restore` are counted separately from `calls` so call-order
/// assertions only see drawing.
#[derive(Debug)]
pub(crate) struct RecordingSurface {
    pub calls: Vec<Call>,
    pub saves: usize,
    pub restores: usize,
    icons: HashMap<IconRef, Size>,
    char_width: f32,
    fail_on: Option<FailOn>,
    panic_on: Option<FailOn>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            saves: 0,
            restores: 0,
            icons: HashMap::new(),
            char_width: 10.0,
            fail_on: None,
            panic_on: None,
        }
    }
}

impl RecordingSurface {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_icon(mut self, id: &str, size: Size) -> Self {
        self.icons.insert(IconRef::new(id), size);
        self
    }

    pub(crate) fn failing_on(mut self, op: FailOn) -> Self {
        self.fail_on = Some(op);
        self
    }

    pub(crate) fn panicking_on(mut self, op: FailOn) -> Self {
        self.panic_on = Some(op);
        self
    }

    /// Saves not yet matched by a restore.
    pub(crate) fn open_saves(&self) -> usize {
        self.saves - self.restores
    }

    pub(crate) fn kinds(&self) -> Vec<&'static str> {
        self.calls.iter().map(Call::kind).collect()
    }

    pub(crate) fn clear(&mut self) {
        self.calls.clear();
        self.saves = 0;
        self.restores = 0;
    }

    fn check(&self, op: FailOn) -> Result<(), SurfaceError> {
        if self.panic_on == Some(op) {
            panic!("injected {op:?} panic");
        }
        if self.fail_on != Some(op) {
            return Ok(());
        }
        Err(match op {
            FailOn::Clip => SurfaceError::Clip("injected".into()),
            FailOn::Fill => SurfaceError::Fill("injected".into()),
            FailOn::Image => SurfaceError::Image {
                icon: "injected".into(),
                reason: "injected".into(),
            },
            FailOn::Text => SurfaceError::Text("injected".into()),
        })
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.saves += 1;
    }

    fn restore(&mut self) {
        assert!(self.restores < self.saves, "restore without a matching save");
        self.restores += 1;
    }

    fn clip_rect(&mut self, rect: Rect) -> Result<(), SurfaceError> {
        self.check(FailOn::Clip)?;
        self.calls.push(Call::Clip(rect));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Argb) -> Result<(), SurfaceError> {
        self.check(FailOn::Fill)?;
        self.calls.push(Call::Fill(rect, color));
        Ok(())
    }

    fn resolve_icon(&mut self, icon: &IconRef) -> Option<Size> {
        self.icons.get(icon).copied()
    }

    fn draw_image(
        &mut self,
        icon: &IconRef,
        dest: Rect,
        tint: Option<Argb>,
    ) -> Result<(), SurfaceError> {
        self.check(FailOn::Image)?;
        self.calls.push(Call::Image {
            icon: icon.clone(),
            dest,
            tint,
        });
        Ok(())
    }

    fn measure_text(&mut self, text: &str, style: &TextStyle) -> Result<TextMetrics, SurfaceError> {
        Ok(TextMetrics {
            width: text.chars().count() as f32 * self.char_width,
            height: style.size_px,
        })
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        style: &TextStyle,
    ) -> Result<(), SurfaceError> {
        self.check(FailOn::Text)?;
        self.calls.push(Call::Text {
            text: text.to_string(),
            x,
            y,
            style: style.clone(),
        });
        Ok(())
    }
}

/// A diagnostic sink that keeps every reported message.
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    pub messages: RefCell<Vec<String>>,
}

impl DiagnosticSink for RecordingSink {
    fn decoration_failed(&self, error: &DecorateError) {
        self.messages.borrow_mut().push(error.to_string());
    }
}
