//! The composed placemark scene and its interaction loop.
//!
//! [`PlacemarkEngine`] builds the scene from [`Options`], owns one
//! [`SelectionTracker`] per pick stream and the [`InfoPanel`], and turns
//! input events into highlight changes and redraw requests.

mod accessors;
mod command;
mod construction;
mod input;
mod scene_management;

pub use command::EngineCommand;
pub use scene_management::LayerEntry;

use crate::input::{CanvasRect, InputRouter, PickStream};
use crate::options::Options;
use crate::panel::InfoPanel;
use crate::scene::{RenderableId, Scene};
use crate::selection::SelectionTracker;

/// Placemark scene with click and hover selection.
///
/// # Example
///
/// ```
/// use pickmark::engine::PlacemarkEngine;
/// use pickmark::input::InputEvent;
/// use pickmark::options::Options;
///
/// let mut engine = PlacemarkEngine::new(Options::default());
/// let redraw = engine.handle_input(InputEvent::Click { x: 5.0, y: 5.0 });
/// assert!(redraw); // hit the terrain
/// assert!(engine.tracker(pickmark::input::PickStream::Click).is_idle());
/// ```
pub struct PlacemarkEngine {
    options: Options,
    scene: Scene,
    canvas: CanvasRect,
    router: InputRouter,
    click: SelectionTracker,
    hover: SelectionTracker,
    panel: InfoPanel,
    /// Placemark handles per site, in site order.
    sites: Vec<Vec<RenderableId>>,
}

impl PlacemarkEngine {
    /// Build the scene and trackers described by `options`.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let canvas = options.canvas.rect();
        let (scene, sites) =
            construction::build_scene(&options, canvas.viewport());
        let click = SelectionTracker::new(
            PickStream::Click.name(),
            options.selection.click_threshold,
        );
        let hover = SelectionTracker::new(
            PickStream::Hover.name(),
            options.selection.hover_threshold,
        );
        let panel = InfoPanel::new(options.selection.fallback_caption.clone());

        log::info!(
            "scene ready: {} layers, {} placemarks",
            scene.layers().len(),
            sites.iter().map(Vec::len).sum::<usize>()
        );

        Self {
            router: options.input.clone(),
            options,
            scene,
            canvas,
            click,
            hover,
            panel,
            sites,
        }
    }

    /// Release every highlight and hide the panel, as on teardown.
    /// Returns `true` if a redraw was requested.
    pub fn reset(&mut self) -> bool {
        let cleared = self.click.clear(&mut self.scene)
            | self.hover.clear(&mut self.scene);
        self.panel.close();
        if cleared {
            self.scene.request_redraw();
        }
        cleared
    }
}

impl Default for PlacemarkEngine {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
