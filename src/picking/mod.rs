//! Pick queries: mapping a viewport point to the scene objects under it.
//!
//! [`PickingService`] is the seam to whatever resolves hits. The crate's
//! own implementation for [`Scene`](crate::scene::Scene) lives in
//! [`flat_map`] and works on a flat longitude/latitude viewport.

pub mod flat_map;

use glam::Vec2;

pub use flat_map::Viewport;

use crate::geo::Position;
use crate::scene::RenderableId;

/// What a picked object refers to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickTarget {
    /// A registered placemark.
    Renderable(RenderableId),
    /// The globe surface, with the position under the cursor.
    Terrain(Position),
}

impl PickTarget {
    /// The renderable handle, if this target is one.
    #[must_use]
    pub const fn renderable(&self) -> Option<RenderableId> {
        match *self {
            Self::Renderable(id) => Some(id),
            Self::Terrain(_) => None,
        }
    }

    /// Returns `true` for the terrain entry.
    #[must_use]
    pub const fn is_terrain(&self) -> bool {
        matches!(self, Self::Terrain(_))
    }
}

/// One entry of a [`PickResult`].
#[derive(Debug, Clone, PartialEq)]
pub struct PickedObject {
    /// The user object that was hit.
    pub target: PickTarget,
    /// Position in the result's front-to-back order (0 = frontmost).
    pub z_order: usize,
    /// Whether nothing else was drawn over this object at the pick point.
    pub is_on_top: bool,
    /// Label of the hit placemark, carried for UI captions.
    pub label: Option<String>,
}

/// Ordered objects returned by a single pick query, front to back.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PickResult {
    objects: Vec<PickedObject>,
}

impl PickResult {
    /// A result with no objects.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append the next object behind those already present.
    pub fn push(&mut self, target: PickTarget, label: Option<String>) {
        let z_order = self.objects.len();
        self.objects.push(PickedObject {
            target,
            z_order,
            is_on_top: z_order == 0,
            label,
        });
    }

    /// Picked objects, front to back.
    #[must_use]
    pub fn objects(&self) -> &[PickedObject] {
        &self.objects
    }

    /// Number of picked objects, terrain included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether nothing was picked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Handles of the picked renderables, front to back.
    pub fn renderables(&self) -> impl Iterator<Item = RenderableId> + '_ {
        self.objects.iter().filter_map(|o| o.target.renderable())
    }

    /// The terrain position under the pick point, if the globe was hit.
    #[must_use]
    pub fn terrain(&self) -> Option<Position> {
        self.objects.iter().find_map(|o| match o.target {
            PickTarget::Terrain(position) => Some(position),
            PickTarget::Renderable(_) => None,
        })
    }

    /// The frontmost object.
    #[must_use]
    pub fn top(&self) -> Option<&PickedObject> {
        self.objects.first()
    }
}

impl FromIterator<PickTarget> for PickResult {
    fn from_iter<I: IntoIterator<Item = PickTarget>>(iter: I) -> Self {
        let mut result = Self::empty();
        for target in iter {
            result.push(target, None);
        }
        result
    }
}

/// Resolves a point in the render surface's local coordinates to the
/// objects drawn there.
///
/// Implementations must not fail: a point that resolves to nothing,
/// including one outside the surface, yields an empty [`PickResult`].
pub trait PickingService {
    /// Pick at `point` (canvas pixels, origin top-left).
    fn pick(&self, point: Vec2) -> PickResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::LayerId;

    #[test]
    fn push_assigns_front_to_back_order() {
        let a = RenderableId::new(LayerId(1), 0);
        let b = RenderableId::new(LayerId(1), 1);
        let mut result = PickResult::empty();
        result.push(PickTarget::Renderable(b), Some("b".into()));
        result.push(PickTarget::Renderable(a), None);
        result.push(PickTarget::Terrain(Position::surface(3.0, 4.0)), None);

        assert_eq!(result.len(), 3);
        assert!(result.top().unwrap().is_on_top);
        assert!(!result.objects()[1].is_on_top);
        assert_eq!(result.objects()[2].z_order, 2);
        assert_eq!(result.renderables().collect::<Vec<_>>(), vec![b, a]);
        assert_eq!(result.terrain(), Some(Position::surface(3.0, 4.0)));
    }

    #[test]
    fn empty_result_has_no_terrain() {
        let result: PickResult = std::iter::empty::<PickTarget>().collect();
        assert!(result.is_empty());
        assert!(result.terrain().is_none());
        assert!(result.top().is_none());
    }
}
