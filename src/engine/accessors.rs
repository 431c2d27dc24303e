//! Read-only views into the engine's state.

use super::PlacemarkEngine;
use crate::input::{CanvasRect, PickStream};
use crate::options::Options;
use crate::panel::InfoPanel;
use crate::scene::{RenderableId, Scene};
use crate::selection::SelectionTracker;

impl PlacemarkEngine {
    /// The options the engine was built from.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The composed scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable scene access, e.g. to toggle layers.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// The info panel.
    #[must_use]
    pub fn panel(&self) -> &InfoPanel {
        &self.panel
    }

    /// The tracker serving `stream`.
    #[must_use]
    pub fn tracker(&self, stream: PickStream) -> &SelectionTracker {
        match stream {
            PickStream::Click => &self.click,
            PickStream::Hover => &self.hover,
        }
    }

    /// Placemark handles per configured site, in site order.
    #[must_use]
    pub fn sites(&self) -> &[Vec<RenderableId>] {
        &self.sites
    }

    /// Current canvas placement.
    #[must_use]
    pub fn canvas(&self) -> CanvasRect {
        self.canvas
    }

    /// Redraws requested since construction.
    #[must_use]
    pub fn redraw_count(&self) -> u64 {
        self.scene.redraw_count()
    }
}
