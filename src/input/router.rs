use serde::{Deserialize, Serialize};

use super::event::InputKind;

/// A selection stream that input can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickStream {
    /// Click-driven selection.
    Click,
    /// Hover-driven selection.
    Hover,
}

impl PickStream {
    /// Stream name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Hover => "hover",
        }
    }
}

/// Decides which selection streams see each kind of input.
///
/// Clicks feed the click stream and hovers the hover stream. Taps have no
/// hover equivalent on touch screens, so by default they feed both,
/// click stream first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputRouter {
    /// Streams receiving clicks.
    pub click: Vec<PickStream>,
    /// Streams receiving hovers.
    pub hover: Vec<PickStream>,
    /// Streams receiving taps.
    pub tap: Vec<PickStream>,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self {
            click: vec![PickStream::Click],
            hover: vec![PickStream::Hover],
            tap: vec![PickStream::Click, PickStream::Hover],
        }
    }
}

impl InputRouter {
    /// Streams that handle `kind`, in dispatch order.
    #[must_use]
    pub fn streams_for(&self, kind: InputKind) -> &[PickStream] {
        match kind {
            InputKind::Click => &self.click,
            InputKind::Hover => &self.hover,
            InputKind::Tap => &self.tap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taps_reach_both_streams() {
        let router = InputRouter::default();
        assert_eq!(router.streams_for(InputKind::Click), &[PickStream::Click]);
        assert_eq!(router.streams_for(InputKind::Hover), &[PickStream::Hover]);
        assert_eq!(
            router.streams_for(InputKind::Tap),
            &[PickStream::Click, PickStream::Hover]
        );
    }

    #[test]
    fn routes_deserialize_from_toml() {
        let router: InputRouter = toml::from_str("tap = [\"hover\"]").unwrap();
        assert_eq!(router.streams_for(InputKind::Tap), &[PickStream::Hover]);
        assert_eq!(router.streams_for(InputKind::Click), &[PickStream::Click]);
    }
}
