/// Platform-agnostic pointer input.
///
/// Coordinates are client (page/window) coordinates; convert them with
/// [`CanvasRect::canvas_coordinates`](super::CanvasRect::canvas_coordinates)
/// before picking.
///
/// # Example
///
/// ```
/// use pickmark::input::{InputEvent, InputKind};
///
/// let event = InputEvent::Tap { x: 40.0, y: 12.0 };
/// assert_eq!(event.kind(), InputKind::Tap);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer click.
    Click {
        /// Horizontal client position in pixels.
        x: f32,
        /// Vertical client position in pixels.
        y: f32,
    },
    /// Pointer moved over the surface.
    Hover {
        /// Horizontal client position in pixels.
        x: f32,
        /// Vertical client position in pixels.
        y: f32,
    },
    /// Touch tap.
    Tap {
        /// Horizontal client position in pixels.
        x: f32,
        /// Vertical client position in pixels.
        y: f32,
    },
}

/// The kind of an [`InputEvent`], without its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Pointer click.
    Click,
    /// Pointer hover.
    Hover,
    /// Touch tap.
    Tap,
}

impl InputEvent {
    /// Build an event of `kind` at client position (`x`, `y`).
    #[must_use]
    pub const fn new(kind: InputKind, x: f32, y: f32) -> Self {
        match kind {
            InputKind::Click => Self::Click { x, y },
            InputKind::Hover => Self::Hover { x, y },
            InputKind::Tap => Self::Tap { x, y },
        }
    }

    /// Which kind of event this is.
    #[must_use]
    pub const fn kind(&self) -> InputKind {
        match self {
            Self::Click { .. } => InputKind::Click,
            Self::Hover { .. } => InputKind::Hover,
            Self::Tap { .. } => InputKind::Tap,
        }
    }

    /// Client position of the event.
    #[must_use]
    pub fn client_position(&self) -> glam::Vec2 {
        match *self {
            Self::Click { x, y } | Self::Hover { x, y } | Self::Tap { x, y } => {
                glam::Vec2::new(x, y)
            }
        }
    }
}

#[cfg(feature = "web")]
impl InputEvent {
    /// Convert a DOM mouse event (click, mousemove/mouseover, or a tap
    /// delivered as a mouse event) into an input event of `kind`.
    #[must_use]
    pub fn from_mouse_event(kind: InputKind, event: &web_sys::MouseEvent) -> Self {
        Self::new(kind, event.client_x() as f32, event.client_y() as f32)
    }
}
