//! Auxiliary info panel opened by qualifying selections.
//!
//! Stands in for the modal dialog of a web page: a visibility toggle and a
//! caption line. Any UI can mirror its state after each input event.

use crate::selection::{Selection, SelectionNotifier};

/// Modal info panel state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InfoPanel {
    visible: bool,
    caption: String,
    fallback_caption: String,
    opened: u64,
}

impl InfoPanel {
    /// Create a hidden panel. `fallback_caption` is shown when a selection
    /// carries no labels.
    #[must_use]
    pub fn new(fallback_caption: impl Into<String>) -> Self {
        Self {
            fallback_caption: fallback_caption.into(),
            ..Self::default()
        }
    }

    /// Whether the panel is showing.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current caption text.
    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// How many times a selection has opened (or refreshed) the panel.
    #[must_use]
    pub fn open_count(&self) -> u64 {
        self.opened
    }

    /// Hide the panel (the close button). The caption is kept.
    pub fn close(&mut self) {
        self.visible = false;
    }
}

impl SelectionNotifier for InfoPanel {
    fn on_qualifying_selection(&mut self, selection: &Selection<'_>) {
        let titles = selection.titles().collect::<Vec<_>>();
        self.caption = if titles.is_empty() {
            self.fallback_caption.clone()
        } else {
            titles.join(", ")
        };
        self.visible = true;
        self.opened += 1;
        log::info!("[{}] info panel: {}", selection.stream, self.caption);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Position;
    use crate::picking::{PickResult, PickTarget};
    use crate::scene::{LayerId, RenderableId};

    #[test]
    fn selection_opens_panel_with_titles() {
        let mut result = PickResult::empty();
        result.push(
            PickTarget::Renderable(RenderableId::new(LayerId(0), 0)),
            Some("Placemark \nLat 1.000\nLon 2.0000".into()),
        );
        result.push(
            PickTarget::Renderable(RenderableId::new(LayerId(0), 1)),
            Some("Depot".into()),
        );
        result.push(PickTarget::Terrain(Position::default()), None);

        let mut panel = InfoPanel::new("Selection");
        panel.on_qualifying_selection(&Selection {
            stream: "click",
            objects: result.objects(),
        });

        assert!(panel.is_visible());
        assert_eq!(panel.caption(), "Placemark, Depot");
        assert_eq!(panel.open_count(), 1);

        panel.close();
        assert!(!panel.is_visible());
        assert_eq!(panel.caption(), "Placemark, Depot");
    }

    #[test]
    fn unlabeled_selection_uses_fallback() {
        let result: PickResult =
            [PickTarget::Terrain(Position::default())].into_iter().collect();
        let mut panel = InfoPanel::new("Selection");
        panel.on_qualifying_selection(&Selection {
            stream: "hover",
            objects: result.objects(),
        });
        assert_eq!(panel.caption(), "Selection");
    }
}
