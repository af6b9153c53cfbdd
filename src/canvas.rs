//! Drawing surface abstraction. The simulation never draws on its own; it
//! hands geometry to whatever [`Canvas`] the sketch supplies. [`Recorder`] is
//! the bundled headless implementation used by tests and terminal demos.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity token for a drawing surface, used to route mouse events when a
/// sketch runs several canvases side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SurfaceId(u64);

static NEXT_SURFACE: AtomicU64 = AtomicU64::new(1);

impl SurfaceId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Hands out a process-unique surface token.
    pub fn next() -> Self {
        Self(NEXT_SURFACE.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn raw(&self) -> u64 {
        self.0
    }
}

/// Surface the simulation draws onto and measures text against.
///
/// Coordinates are pixels with the origin in the top-left corner and `y`
/// growing downward. All shapes are addressed by their center.
pub trait Canvas {
    /// Identity of this surface, stable across frames.
    fn surface(&self) -> SurfaceId;

    /// Current width and height in pixels.
    fn size(&self) -> Vec2;

    /// Draws an ellipse of `size` (width, height) centered at `center`,
    /// rotated by `angle` radians.
    fn ellipse(&mut self, center: Vec2, size: Vec2, angle: f32);

    /// Draws a rectangle of `size` centered at `center`, rotated by `angle`.
    fn rect(&mut self, center: Vec2, size: Vec2, angle: f32);

    fn line(&mut self, from: Vec2, to: Vec2);

    /// Draws `text` centered at `center`, rotated by `angle`.
    fn text(&mut self, text: &str, center: Vec2, angle: f32);

    /// Rendered width of `text` at the current text size.
    fn text_width(&self, text: &str) -> f32;

    /// Current text size in pixels.
    fn text_size(&self) -> f32;
}

/// One recorded drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Ellipse { center: Vec2, size: Vec2, angle: f32 },
    Rect { center: Vec2, size: Vec2, angle: f32 },
    Line { from: Vec2, to: Vec2 },
    Text { text: String, center: Vec2, angle: f32 },
}

/// Headless canvas that records draw calls instead of rasterizing them.
pub struct Recorder {
    surface: SurfaceId,
    size: Vec2,
    text_size: f32,
    ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            surface: SurfaceId::next(),
            size: Vec2::new(width, height),
            text_size: 12.0,
            ops: Vec::new(),
        }
    }

    pub fn with_text_size(mut self, text_size: f32) -> Self {
        self.text_size = text_size;
        self
    }

    /// Draw calls recorded since the last [`clear`](Recorder::clear).
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Canvas for Recorder {
    fn surface(&self) -> SurfaceId {
        self.surface
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn ellipse(&mut self, center: Vec2, size: Vec2, angle: f32) {
        self.ops.push(DrawOp::Ellipse {
            center,
            size,
            angle,
        });
    }

    fn rect(&mut self, center: Vec2, size: Vec2, angle: f32) {
        self.ops.push(DrawOp::Rect {
            center,
            size,
            angle,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2) {
        self.ops.push(DrawOp::Line { from, to });
    }

    fn text(&mut self, text: &str, center: Vec2, angle: f32) {
        self.ops.push(DrawOp::Text {
            text: text.to_owned(),
            center,
            angle,
        });
    }

    fn text_width(&self, text: &str) -> f32 {
        // Monospace-style estimate, good enough for sizing sign bodies.
        text.chars().count() as f32 * self.text_size * 0.6
    }

    fn text_size(&self) -> f32 {
        self.text_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_surfaces_are_unique() {
        let a = Recorder::new(100.0, 100.0);
        let b = Recorder::new(100.0, 100.0);
        assert_ne!(a.surface(), b.surface());
    }

    #[test]
    fn recorder_keeps_ops_in_draw_order() {
        let mut canvas = Recorder::new(200.0, 100.0);
        canvas.ellipse(Vec2::new(10.0, 10.0), Vec2::splat(4.0), 0.0);
        canvas.line(Vec2::ZERO, Vec2::new(5.0, 5.0));
        assert_eq!(canvas.ops().len(), 2);
        assert!(matches!(canvas.ops()[0], DrawOp::Ellipse { .. }));
        assert!(matches!(canvas.ops()[1], DrawOp::Line { .. }));
        canvas.clear();
        assert!(canvas.ops().is_empty());
    }

    #[test]
    fn text_width_scales_with_text_size() {
        let canvas = Recorder::new(100.0, 100.0).with_text_size(20.0);
        assert!(canvas.text_width("abcd") > canvas.text_width("ab"));
        let small = Recorder::new(100.0, 100.0).with_text_size(10.0);
        assert!(canvas.text_width("abcd") > small.text_width("abcd"));
    }
}
