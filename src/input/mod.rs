//! Input handling: event types, client-to-canvas conversion, and routing
//! of events to selection streams.

/// Client-to-canvas coordinate conversion.
mod canvas;
/// Platform-agnostic input events.
pub mod event;
/// Maps event kinds to selection streams.
mod router;

pub use canvas::CanvasRect;
pub use event::{InputEvent, InputKind};
pub use router::{InputRouter, PickStream};
