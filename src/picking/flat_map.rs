//! Screen-space picking over a flat longitude/latitude viewport.
//!
//! The viewport shows the whole globe as a plate carrée: longitude -180..180
//! spans the width, latitude 90..-90 spans the height. A placemark is hit
//! when the point falls inside its image rectangle. When the scene draws a
//! globe, every pick inside the viewport also hits the terrain, which is
//! reported last.

use glam::Vec2;

use super::{PickResult, PickTarget, PickingService};
use crate::geo::Position;
use crate::scene::{Placemark, RenderableId, Scene};

/// Size of the render surface in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 512.0,
        }
    }
}

impl Viewport {
    /// Create a viewport of the given size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether `point` lies on the surface. Non-finite points never do.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0
            && point.y >= 0.0
            && point.x < self.width
            && point.y < self.height
    }

    /// Screen position of a geographic position.
    #[must_use]
    pub fn project(&self, position: &Position) -> Vec2 {
        Vec2::new(
            ((position.longitude + 180.0) * f64::from(self.width) / 360.0)
                as f32,
            ((90.0 - position.latitude) * f64::from(self.height) / 180.0)
                as f32,
        )
    }

    /// Geographic position under a screen point.
    #[must_use]
    pub fn unproject(&self, point: Vec2) -> Position {
        Position::surface(
            90.0 - f64::from(point.y) * 180.0 / f64::from(self.height),
            f64::from(point.x) * 360.0 / f64::from(self.width) - 180.0,
        )
    }

    /// Screen rectangle covered by a placemark's image.
    ///
    /// Uses the normal attributes so that highlighting never changes what
    /// a later pick returns.
    #[must_use]
    pub fn footprint(&self, placemark: &Placemark) -> Footprint {
        let attributes = &placemark.attributes;
        let size = attributes.scaled_image_size();
        let anchor = attributes.image_offset.resolve(size);
        let screen = self.project(&placemark.position);

        // Offsets are measured from the image's lower-left corner while
        // screen y grows downward.
        let left = screen.x - anchor.x;
        let bottom = screen.y + anchor.y;
        Footprint {
            min: Vec2::new(left, bottom - size.y),
            max: Vec2::new(left + size.x, bottom),
        }
    }
}

/// Axis-aligned screen rectangle, edges inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    /// Top-left corner.
    pub min: Vec2,
    /// Bottom-right corner.
    pub max: Vec2,
}

impl Footprint {
    /// Whether `point` is inside the rectangle.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

impl PickingService for Scene {
    fn pick(&self, point: Vec2) -> PickResult {
        let viewport = self.viewport();
        if !viewport.contains(point) {
            return PickResult::empty();
        }

        let mut result = PickResult::empty();
        // Later layers and later renderables are drawn on top.
        for (layer_id, layer) in self.renderable_layers().rev() {
            if !layer.enabled {
                continue;
            }
            for (index, placemark) in
                layer.renderables().iter().enumerate().rev()
            {
                if placemark.enabled
                    && viewport.footprint(placemark).contains(point)
                {
                    result.push(
                        PickTarget::Renderable(RenderableId::new(
                            layer_id,
                            index as u32,
                        )),
                        Some(placemark.label.clone()),
                    );
                }
            }
        }
        if self.has_globe() {
            result.push(PickTarget::Terrain(viewport.unproject(point)), None);
        }
        result
    }
}
