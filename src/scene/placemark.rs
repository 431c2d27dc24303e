use crate::geo::{placemark_label, AltitudeMode, Position};
use crate::style::PlacemarkAttributes;

/// A labeled point at a geographic position.
///
/// The highlighted state is a hold count rather than a plain flag: each
/// selection stream that highlights the placemark takes one hold, and the
/// placemark reads as highlighted while any hold remains.
#[derive(Debug, Clone, PartialEq)]
pub struct Placemark {
    /// Geographic anchor.
    pub position: Position,
    /// Label text (may span several lines).
    pub label: String,
    /// How `position.altitude` is interpreted.
    pub altitude_mode: AltitudeMode,
    /// Attributes used while not highlighted.
    pub attributes: PlacemarkAttributes,
    /// Attributes used while highlighted; falls back to `attributes`.
    pub highlight_attributes: Option<PlacemarkAttributes>,
    /// Disabled placemarks are neither drawn nor picked.
    pub enabled: bool,
    highlight_holds: u32,
}

impl Placemark {
    /// Create an enabled placemark with default attributes and the
    /// standard coordinate label.
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self {
            label: placemark_label(&position),
            position,
            altitude_mode: AltitudeMode::default(),
            attributes: PlacemarkAttributes::default(),
            highlight_attributes: None,
            enabled: true,
            highlight_holds: 0,
        }
    }

    /// Replace the normal attributes.
    #[must_use]
    pub fn with_attributes(mut self, attributes: PlacemarkAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Set the highlight attributes.
    #[must_use]
    pub fn with_highlight_attributes(
        mut self,
        attributes: PlacemarkAttributes,
    ) -> Self {
        self.highlight_attributes = Some(attributes);
        self
    }

    /// Set the altitude mode.
    #[must_use]
    pub fn with_altitude_mode(mut self, mode: AltitudeMode) -> Self {
        self.altitude_mode = mode;
        self
    }

    /// Whether any stream currently highlights this placemark.
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.highlight_holds > 0
    }

    /// Attributes the renderer should draw with right now.
    #[must_use]
    pub fn active_attributes(&self) -> &PlacemarkAttributes {
        match &self.highlight_attributes {
            Some(highlight) if self.is_highlighted() => highlight,
            _ => &self.attributes,
        }
    }

    /// First line of the label, used for captions.
    #[must_use]
    pub fn title(&self) -> &str {
        self.label.lines().next().unwrap_or_default().trim_end()
    }

    /// Take (`true`) or release (`false`) one highlight hold. Releasing
    /// with no holds outstanding is a no-op.
    pub(crate) fn set_highlighted(&mut self, highlighted: bool) {
        if highlighted {
            self.highlight_holds += 1;
        } else {
            self.highlight_holds = self.highlight_holds.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_holds_stack() {
        let mut placemark = Placemark::new(Position::surface(1.0, 2.0));
        placemark.set_highlighted(true);
        placemark.set_highlighted(true);
        placemark.set_highlighted(false);
        assert!(placemark.is_highlighted());

        placemark.set_highlighted(false);
        placemark.set_highlighted(false);
        assert!(!placemark.is_highlighted());
    }

    #[test]
    fn active_attributes_follow_highlight() {
        let normal = PlacemarkAttributes::default();
        let highlight =
            PlacemarkAttributes::derived_from(&normal).with_image_scale(1.2);
        let mut placemark = Placemark::new(Position::surface(0.0, 0.0))
            .with_attributes(normal)
            .with_highlight_attributes(highlight);

        assert_eq!(placemark.active_attributes().image_scale, 1.0);
        placemark.set_highlighted(true);
        assert_eq!(placemark.active_attributes().image_scale, 1.2);
    }

    #[test]
    fn title_is_first_label_line() {
        let placemark = Placemark::new(Position::surface(38.9072, -77.0369));
        assert_eq!(placemark.title(), "Placemark");
    }
}
