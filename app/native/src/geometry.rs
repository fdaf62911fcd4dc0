//! Geometry types shared by topology discovery and compositing.
//!
//! All coordinates live in the OS virtual-screen space, where monitors left of
//! or above the primary display may have negative origins.

use serde::Serialize;

/// An axis-aligned rectangle described by its edges.
///
/// `right` and `bottom` are exclusive, so `width = right - left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rect {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl Rect {
    /// Creates a rectangle from raw edges.
    ///
    /// Returns `None` when `right < left` or `bottom < top`.
    #[must_use]
    pub const fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Option<Self> {
        if right < left || bottom < top {
            return None;
        }
        Some(Self { left, top, right, bottom })
    }

    /// Creates a rectangle from its top-left corner and size.
    ///
    /// Sizes that would overflow the coordinate space are clamped to `i32::MAX`.
    #[must_use]
    pub const fn from_origin_size(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            left: x,
            top: y,
            right: x.saturating_add_unsigned(width),
            bottom: y.saturating_add_unsigned(height),
        }
    }

    #[must_use]
    pub const fn left(&self) -> i32 { self.left }

    #[must_use]
    pub const fn top(&self) -> i32 { self.top }

    #[must_use]
    pub const fn right(&self) -> i32 { self.right }

    #[must_use]
    pub const fn bottom(&self) -> i32 { self.bottom }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 { self.right.abs_diff(self.left) }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 { self.bottom.abs_diff(self.top) }

    /// Returns `true` when the rectangle covers no pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool { self.width() == 0 || self.height() == 0 }

    /// Orientation derived from the aspect of this rectangle.
    #[must_use]
    pub const fn orientation(&self) -> Orientation { Orientation::classify(self.width(), self.height()) }
}

/// Whether a monitor is wider than it is tall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Width greater than or equal to height. Square monitors land here.
    Landscape,
    /// Height strictly greater than width.
    Portrait,
}

impl Orientation {
    /// Classifies a `width x height` area.
    #[must_use]
    pub const fn classify(width: u32, height: u32) -> Self {
        if width < height { Self::Portrait } else { Self::Landscape }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Landscape => write!(f, "landscape"),
            Self::Portrait => write!(f, "portrait"),
        }
    }
}

/// The minimal bounding box around every monitor.
///
/// The composed wallpaper has exactly `width x height` pixels and its pixel
/// `(0, 0)` corresponds to `(origin_x, origin_y)` in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualCanvas {
    pub origin_x: i32,
    pub origin_y: i32,
    pub width: u32,
    pub height: u32,
}

impl VirtualCanvas {
    /// Computes the bounding canvas of a set of rectangles.
    ///
    /// Returns `None` for an empty set.
    #[must_use]
    pub fn bounding<'a, I>(rects: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Rect>,
    {
        let mut iter = rects.into_iter();
        let first = iter.next()?;

        let (left, top, right, bottom) = iter.fold(
            (first.left, first.top, first.right, first.bottom),
            |(l, t, r, b), rect| (l.min(rect.left), t.min(rect.top), r.max(rect.right), b.max(rect.bottom)),
        );

        Some(Self {
            origin_x: left,
            origin_y: top,
            width: right.abs_diff(left),
            height: bottom.abs_diff(top),
        })
    }

    /// Returns `true` if `rect` lies entirely within the canvas.
    #[must_use]
    pub fn contains(&self, rect: &Rect) -> bool {
        let right = self.origin_x.saturating_add_unsigned(self.width);
        let bottom = self.origin_y.saturating_add_unsigned(self.height);
        rect.left >= self.origin_x
            && rect.top >= self.origin_y
            && rect.right <= right
            && rect.bottom <= bottom
    }

    /// Canvas-relative pixel offset of a rectangle's top-left corner.
    ///
    /// Rectangles left of or above the origin clamp to zero.
    #[must_use]
    pub fn offset_of(&self, rect: &Rect) -> (u32, u32) {
        let x = if rect.left < self.origin_x { 0 } else { rect.left.abs_diff(self.origin_x) };
        let y = if rect.top < self.origin_y { 0 } else { rect.top.abs_diff(self.origin_y) };
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_edges_rejects_inverted_rect() {
        assert!(Rect::from_edges(10, 0, 0, 10).is_none());
        assert!(Rect::from_edges(0, 10, 10, 0).is_none());
        assert!(Rect::from_edges(0, 0, 0, 0).is_some());
    }

    #[test]
    fn test_from_origin_size_dimensions() {
        let rect = Rect::from_origin_size(-1080, 0, 1080, 1920);
        assert_eq!(rect.left(), -1080);
        assert_eq!(rect.right(), 0);
        assert_eq!(rect.width(), 1080);
        assert_eq!(rect.height(), 1920);
    }

    #[test]
    fn test_empty_rect() {
        assert!(Rect::from_origin_size(0, 0, 0, 1080).is_empty());
        assert!(!Rect::from_origin_size(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn test_orientation_landscape() {
        assert_eq!(Orientation::classify(1920, 1080), Orientation::Landscape);
    }

    #[test]
    fn test_orientation_portrait() {
        assert_eq!(Orientation::classify(1080, 1920), Orientation::Portrait);
    }

    #[test]
    fn test_orientation_square_is_landscape() {
        assert_eq!(Orientation::classify(1000, 1000), Orientation::Landscape);
        assert_eq!(Rect::from_origin_size(5, 5, 1000, 1000).orientation(), Orientation::Landscape);
    }

    #[test]
    fn test_orientation_display() {
        assert_eq!(Orientation::Landscape.to_string(), "landscape");
        assert_eq!(Orientation::Portrait.to_string(), "portrait");
    }

    #[test]
    fn test_canvas_side_by_side() {
        let rects = [
            Rect::from_origin_size(0, 0, 1920, 1080),
            Rect::from_origin_size(1920, 0, 1080, 1920),
        ];
        let canvas = VirtualCanvas::bounding(&rects).unwrap();
        assert_eq!(canvas.origin_x, 0);
        assert_eq!(canvas.origin_y, 0);
        assert_eq!(canvas.width, 3000);
        assert_eq!(canvas.height, 1920);
    }

    #[test]
    fn test_canvas_negative_origin() {
        let rects = [
            Rect::from_origin_size(-1080, 0, 1080, 1920),
            Rect::from_origin_size(0, 0, 1920, 1080),
        ];
        let canvas = VirtualCanvas::bounding(&rects).unwrap();
        assert_eq!(canvas.origin_x, -1080);
        assert_eq!(canvas.origin_y, 0);
        assert_eq!(canvas.width, 3000);
        assert_eq!(canvas.height, 1920);
        assert_eq!(canvas.offset_of(&rects[0]), (0, 0));
        assert_eq!(canvas.offset_of(&rects[1]), (1080, 0));
    }

    #[test]
    fn test_canvas_monitor_above_primary() {
        let rects = [
            Rect::from_origin_size(0, 0, 1920, 1080),
            Rect::from_origin_size(200, -1440, 2560, 1440),
        ];
        let canvas = VirtualCanvas::bounding(&rects).unwrap();
        assert_eq!((canvas.origin_x, canvas.origin_y), (0, -1440));
        assert_eq!((canvas.width, canvas.height), (2760, 2520));
        assert_eq!(canvas.offset_of(&rects[0]), (0, 1440));
        assert_eq!(canvas.offset_of(&rects[1]), (200, 0));
    }

    #[test]
    fn test_canvas_contains_every_rect() {
        let rects = [
            Rect::from_origin_size(-1080, -200, 1080, 1920),
            Rect::from_origin_size(0, 0, 1920, 1080),
            Rect::from_origin_size(1920, 300, 1280, 1024),
        ];
        let canvas = VirtualCanvas::bounding(&rects).unwrap();
        for rect in &rects {
            assert!(canvas.contains(rect), "{rect:?} outside {canvas:?}");
        }
        assert!(!canvas.contains(&Rect::from_origin_size(-2000, 0, 10, 10)));
    }

    #[test]
    fn test_canvas_empty_set() {
        assert!(VirtualCanvas::bounding(&[]).is_none());
    }
}
