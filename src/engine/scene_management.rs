//! Layer visibility for [`PlacemarkEngine`].

use super::PlacemarkEngine;
use crate::scene::LayerId;

/// One row of the layer list, as a layer manager would show it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerEntry {
    /// Position in the draw order.
    pub id: LayerId,
    /// Display name.
    pub name: String,
    /// Whether the layer is drawn (and, for placemark layers, picked).
    pub enabled: bool,
}

impl PlacemarkEngine {
    /// Every layer in draw order with its visibility.
    #[must_use]
    pub fn layer_list(&self) -> Vec<LayerEntry> {
        self.scene
            .layers()
            .iter()
            .enumerate()
            .map(|(i, layer)| LayerEntry {
                id: LayerId(i as u32),
                name: layer.name().to_owned(),
                enabled: layer.enabled(),
            })
            .collect()
    }

    /// Show or hide a layer. Returns `true` if a redraw was requested;
    /// unknown layers and unchanged visibility request nothing.
    ///
    /// Highlights held on a hidden placemark layer are released by the
    /// next pick of the stream that holds them.
    pub fn set_layer_enabled(&mut self, id: LayerId, enabled: bool) -> bool {
        let Some(layer) = self.scene.layer_mut(id) else {
            log::warn!("no layer {}", id.0);
            return false;
        };
        if layer.enabled() == enabled {
            return false;
        }
        layer.set_enabled(enabled);
        log::info!(
            "layer {} '{}' {}",
            id.0,
            layer.name(),
            if enabled { "shown" } else { "hidden" }
        );
        self.scene.request_redraw();
        true
    }

    /// Flip a layer's visibility. Returns `true` if a redraw was requested.
    pub fn toggle_layer(&mut self, id: LayerId) -> bool {
        match self.scene.layers().get(id.0 as usize) {
            Some(layer) => {
                let enabled = !layer.enabled();
                self.set_layer_enabled(id, enabled)
            }
            None => {
                log::warn!("no layer {}", id.0);
                false
            }
        }
    }
}
