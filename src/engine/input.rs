//! Input dispatch for [`PlacemarkEngine`].

use super::PlacemarkEngine;
use crate::input::{CanvasRect, InputEvent, PickStream};

impl PlacemarkEngine {
    /// Process a platform-agnostic input event.
    ///
    /// The client position is converted to canvas coordinates, then every
    /// stream the router assigns to the event kind runs its tracker in
    /// turn. One redraw is requested if any stream needs it.
    ///
    /// Returns `true` if a redraw was requested.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        let point = self.canvas.canvas_coordinates(event.client_position());

        let mut redraw = false;
        for &stream in self.router.streams_for(event.kind()) {
            let tracker = match stream {
                PickStream::Click => &mut self.click,
                PickStream::Hover => &mut self.hover,
            };
            redraw |=
                tracker.handle_pick(&mut self.scene, point, &mut self.panel);
        }

        if redraw {
            self.scene.request_redraw();
        }
        redraw
    }

    /// Clear one stream's highlights (e.g. on Escape). Returns `true` if a
    /// redraw was requested.
    pub fn clear_stream(&mut self, stream: PickStream) -> bool {
        let tracker = match stream {
            PickStream::Click => &mut self.click,
            PickStream::Hover => &mut self.hover,
        };
        let cleared = tracker.clear(&mut self.scene);
        if cleared {
            self.scene.request_redraw();
        }
        cleared
    }

    /// Move or resize the canvas. Existing highlights are kept; the next
    /// pick resolves against the new viewport.
    pub fn resize(&mut self, canvas: CanvasRect) {
        self.canvas = canvas;
        self.scene.set_viewport(canvas.viewport());
        self.scene.request_redraw();
    }
}
