//! Geometry types for item bounds, reveal strips and icon footprints.
//!
//! All coordinates are in surface pixels with the origin at the top-left
//! corner of the drawing surface.

/// An axis-aligned rectangle defined by its four edges.
///
/// Used for the bounds of the row being dragged, the reveal strip behind it
/// and the destination of icons.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X coordinate of the left edge
    pub left: f32,
    /// Y coordinate of the top edge
    pub top: f32,
    /// X coordinate of the right edge
    pub right: f32,
    /// Y coordinate of the bottom edge
    pub bottom: f32,
}

impl Rect {
    /// Creates a new rectangle from its edges.
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a rectangle from an origin and dimensions.
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Returns the vertical center line of the rectangle.
    pub fn center_y(&self) -> f32 {
        self.top + self.height() / 2.0
    }

    /// Returns true if every edge is finite and the edges are not inverted.
    pub fn is_valid(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
            && self.left <= self.right
            && self.top <= self.bottom
    }

    /// Returns the overlapping region of two rectangles, if any.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right.min(other.right);
        let bottom = self.bottom.min(other.bottom);
        if left < right && top < bottom {
            Some(Rect::new(left, top, right, bottom))
        } else {
            None
        }
    }
}

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_dimensions() {
        let rect = Rect::new(10.0, 20.0, 110.0, 220.0);
        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.height(), 200.0);
        assert_eq!(rect.center_y(), 120.0);
        assert_eq!(Rect::from_xywh(10.0, 20.0, 100.0, 200.0), rect);
    }

    #[test]
    fn rect_validity() {
        assert!(Rect::new(0.0, 0.0, 300.0, 100.0).is_valid());
        assert!(Rect::new(0.0, 0.0, 0.0, 0.0).is_valid());
        assert!(!Rect::new(300.0, 0.0, 0.0, 100.0).is_valid());
        assert!(!Rect::new(f32::NAN, 0.0, 10.0, 10.0).is_valid());
    }

    #[test]
    fn rect_intersection() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(25.0, 10.0, 100.0, 40.0);
        assert_eq!(a.intersect(&b), Some(Rect::new(25.0, 10.0, 50.0, 40.0)));

        let far = Rect::new(60.0, 0.0, 70.0, 10.0);
        assert_eq!(a.intersect(&far), None);
    }
}
