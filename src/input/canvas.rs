use glam::Vec2;

use crate::picking::Viewport;

/// Placement of the render surface within the client area.
///
/// Input arrives in client coordinates (relative to the page or window),
/// while picks work in canvas coordinates (relative to the surface's
/// upper-left corner).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    /// Client x of the canvas's left edge.
    pub left: f32,
    /// Client y of the canvas's top edge.
    pub top: f32,
    /// Canvas width in pixels.
    pub width: f32,
    /// Canvas height in pixels.
    pub height: f32,
}

impl CanvasRect {
    /// Create a canvas rectangle.
    #[must_use]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Convert a client position into canvas coordinates. Points outside
    /// the canvas convert too; picking reports nothing for them.
    #[must_use]
    pub fn canvas_coordinates(&self, client: Vec2) -> Vec2 {
        client - Vec2::new(self.left, self.top)
    }

    /// The viewport the canvas draws into.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}

impl Default for CanvasRect {
    fn default() -> Self {
        let viewport = Viewport::default();
        Self::new(0.0, 0.0, viewport.width, viewport.height)
    }
}

#[cfg(feature = "web")]
impl CanvasRect {
    /// Read the canvas element's current placement on the page.
    #[must_use]
    pub fn from_canvas(canvas: &web_sys::HtmlCanvasElement) -> Self {
        let rect = canvas.get_bounding_client_rect();
        Self::new(
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_to_canvas_subtracts_origin() {
        let canvas = CanvasRect::new(20.0, 100.0, 800.0, 400.0);
        assert_eq!(
            canvas.canvas_coordinates(Vec2::new(25.0, 130.0)),
            Vec2::new(5.0, 30.0)
        );
        // Above-left of the canvas goes negative rather than clamping
        assert_eq!(
            canvas.canvas_coordinates(Vec2::new(0.0, 0.0)),
            Vec2::new(-20.0, -100.0)
        );
        assert_eq!(canvas.viewport(), Viewport::new(800.0, 400.0));
    }
}
