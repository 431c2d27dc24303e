use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::CanvasRect;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Canvas", inline)]
#[serde(default)]
/// Placement and size of the render surface in client coordinates.
pub struct CanvasOptions {
    /// Client x of the canvas's left edge.
    #[schemars(skip)]
    pub left: f32,
    /// Client y of the canvas's top edge.
    #[schemars(skip)]
    pub top: f32,
    /// Canvas width in pixels.
    #[schemars(title = "Width", range(min = 64.0, max = 8192.0))]
    pub width: f32,
    /// Canvas height in pixels.
    #[schemars(title = "Height", range(min = 64.0, max = 8192.0))]
    pub height: f32,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        let rect = CanvasRect::default();
        Self {
            left: rect.left,
            top: rect.top,
            width: rect.width,
            height: rect.height,
        }
    }
}

impl CanvasOptions {
    /// The canvas rectangle these options describe.
    #[must_use]
    pub const fn rect(&self) -> CanvasRect {
        CanvasRect::new(self.left, self.top, self.width, self.height)
    }
}
