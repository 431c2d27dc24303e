//! Scene composition: the ordered layer list and the placemarks it owns.
//!
//! Renderables are addressed by [`RenderableId`] handles. The scene is the
//! crate's [`HighlightTarget`]: selection trackers flip highlight state
//! through it, never by holding references into the layers.

mod layer;
mod placemark;

use std::fmt;

pub use layer::{BaseLayerKind, Layer, RenderableLayer};
pub use placemark::Placemark;

use crate::picking::Viewport;

/// Index of a layer in the scene's layer list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(pub u32);

/// Handle to a placemark registered with the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RenderableId {
    /// Owning layer.
    pub layer: LayerId,
    /// Index within the layer.
    pub index: u32,
}

impl RenderableId {
    /// Build a handle from its parts.
    #[must_use]
    pub const fn new(layer: LayerId, index: u32) -> Self {
        Self { layer, index }
    }
}

impl fmt::Display for RenderableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.layer.0, self.index)
    }
}

/// Anything whose renderables can be highlighted by handle.
///
/// `set_highlighted(id, true)` takes one highlight hold on the renderable
/// and `set_highlighted(id, false)` releases one. Unknown handles are
/// ignored.
pub trait HighlightTarget {
    /// Take or release a highlight hold on `id`.
    fn set_highlighted(&mut self, id: RenderableId, highlighted: bool);

    /// Whether `id` is currently drawn highlighted.
    fn is_highlighted(&self, id: RenderableId) -> bool;
}

/// Layer list plus the viewport the scene is drawn into.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    layers: Vec<Layer>,
    viewport: Viewport,
    redraws: u64,
}

impl Scene {
    /// Create an empty scene drawn into `viewport`.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            layers: Vec::new(),
            viewport,
            redraws: 0,
        }
    }

    /// The viewport picks are resolved against.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Replace the viewport, e.g. after the canvas is resized.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Append an imagery or overlay layer.
    pub fn add_base_layer(
        &mut self,
        kind: BaseLayerKind,
        enabled: bool,
    ) -> LayerId {
        self.push_layer(Layer::Base { kind, enabled })
    }

    /// Append a placemark layer. Handles for its placemarks are
    /// `RenderableId::new(returned_id, index)`.
    pub fn add_renderable_layer(&mut self, layer: RenderableLayer) -> LayerId {
        self.push_layer(Layer::Renderable(layer))
    }

    fn push_layer(&mut self, layer: Layer) -> LayerId {
        self.layers.push(layer);
        LayerId((self.layers.len() - 1) as u32)
    }

    /// Add a placemark to an existing placemark layer. Returns `None` if
    /// `layer` is not a placemark layer of this scene.
    pub fn add_renderable(
        &mut self,
        layer: LayerId,
        placemark: Placemark,
    ) -> Option<RenderableId> {
        match self.layers.get_mut(layer.0 as usize)? {
            Layer::Renderable(renderables) => Some(RenderableId::new(
                layer,
                renderables.add_renderable(placemark),
            )),
            Layer::Base { .. } => None,
        }
    }

    /// All layers in draw order.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Mutable access to one layer (e.g. to toggle it).
    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.get_mut(id.0 as usize)
    }

    /// Whether a globe surface is drawn, i.e. at least one imagery layer
    /// is enabled. Picks only hit terrain when it is.
    #[must_use]
    pub fn has_globe(&self) -> bool {
        self.layers.iter().any(|layer| match layer {
            Layer::Base { kind, enabled } => *enabled && kind.is_imagery(),
            Layer::Renderable(_) => false,
        })
    }

    /// Placemark layers with their ids, in draw order.
    pub fn renderable_layers(
        &self,
    ) -> impl DoubleEndedIterator<Item = (LayerId, &RenderableLayer)> {
        self.layers.iter().enumerate().filter_map(|(i, layer)| {
            match layer {
                Layer::Renderable(renderables) => {
                    Some((LayerId(i as u32), renderables))
                }
                Layer::Base { .. } => None,
            }
        })
    }

    /// Look up a placemark.
    #[must_use]
    pub fn renderable(&self, id: RenderableId) -> Option<&Placemark> {
        match self.layers.get(id.layer.0 as usize)? {
            Layer::Renderable(layer) => layer.get(id.index),
            Layer::Base { .. } => None,
        }
    }

    fn renderable_mut(&mut self, id: RenderableId) -> Option<&mut Placemark> {
        match self.layers.get_mut(id.layer.0 as usize)? {
            Layer::Renderable(layer) => layer.get_mut(id.index),
            Layer::Base { .. } => None,
        }
    }

    /// Every placemark handle in draw order.
    #[must_use]
    pub fn renderable_ids(&self) -> Vec<RenderableId> {
        self.renderable_layers()
            .flat_map(|(layer_id, layer)| {
                (0..layer.len() as u32)
                    .map(move |index| RenderableId::new(layer_id, index))
            })
            .collect()
    }

    /// Handles of placemarks currently drawn highlighted.
    #[must_use]
    pub fn highlighted_ids(&self) -> Vec<RenderableId> {
        self.renderable_ids()
            .into_iter()
            .filter(|&id| self.is_highlighted(id))
            .collect()
    }

    /// Ask the renderer for a new frame.
    pub fn request_redraw(&mut self) {
        self.redraws += 1;
        log::trace!("redraw requested ({} total)", self.redraws);
    }

    /// Number of redraws requested so far.
    #[must_use]
    pub fn redraw_count(&self) -> u64 {
        self.redraws
    }
}

impl HighlightTarget for Scene {
    fn set_highlighted(&mut self, id: RenderableId, highlighted: bool) {
        if let Some(placemark) = self.renderable_mut(id) {
            placemark.set_highlighted(highlighted);
        } else {
            log::warn!("highlight change for unknown renderable {id}");
        }
    }

    fn is_highlighted(&self, id: RenderableId) -> bool {
        self.renderable(id).is_some_and(Placemark::is_highlighted)
    }
}
