//! Pick-and-highlight selection management.
//!
//! A [`SelectionTracker`] owns the highlight set for one interaction
//! stream (clicks, hovers, ...). Each pick event clears the previous
//! highlights, queries the [`PickingService`](crate::picking::PickingService),
//! and re-highlights the result if it is large enough.

mod tracker;

pub use tracker::{SelectionTracker, TrackerState};

use crate::picking::PickedObject;

/// A pick that crossed a tracker's threshold.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    /// Name of the stream that produced the pick.
    pub stream: &'a str,
    /// Every picked object, front to back.
    pub objects: &'a [PickedObject],
}

impl Selection<'_> {
    /// First label line of each picked renderable, front to back.
    pub fn titles(&self) -> impl Iterator<Item = &str> + '_ {
        self.objects.iter().filter_map(|o| {
            o.label
                .as_deref()
                .and_then(|label| label.lines().next())
                .map(str::trim_end)
        })
    }
}

/// Receives qualifying selections, once per pick event.
///
/// This is where UI side effects (info panels, dialogs, status text) hook
/// in without the tracker knowing about any toolkit.
pub trait SelectionNotifier {
    /// Called after the picked objects have been highlighted.
    fn on_qualifying_selection(&mut self, selection: &Selection<'_>);
}

/// Notifier that ignores every selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl SelectionNotifier for NoopNotifier {
    fn on_qualifying_selection(&mut self, _selection: &Selection<'_>) {}
}
