use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::scene::BaseLayerKind;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Layers", inline)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
/// Which imagery and overlay layers start enabled.
pub struct LayerOptions {
    /// Blue Marble imagery.
    #[schemars(title = "Blue Marble")]
    pub blue_marble: bool,
    /// Blue Marble with Landsat detail.
    #[schemars(title = "Landsat")]
    pub landsat: bool,
    /// Bing aerial imagery with labels.
    #[schemars(title = "Bing Aerial")]
    pub bing_aerial: bool,
    /// Atmosphere shading.
    #[schemars(title = "Atmosphere")]
    pub atmosphere: bool,
    /// Compass overlay.
    #[schemars(title = "Compass")]
    pub compass: bool,
    /// Coordinate readout overlay.
    #[schemars(title = "Coordinates")]
    pub coordinates: bool,
    /// View control overlay.
    #[schemars(title = "View Controls")]
    pub view_controls: bool,
}

impl Default for LayerOptions {
    fn default() -> Self {
        Self {
            blue_marble: true,
            landsat: false,
            bing_aerial: true,
            atmosphere: true,
            compass: true,
            coordinates: true,
            view_controls: true,
        }
    }
}

impl LayerOptions {
    /// Base layers in draw order with their enabled flags. Atmosphere sits
    /// above the imagery, overlays above everything.
    #[must_use]
    pub fn base_layers(&self) -> [(BaseLayerKind, bool); 7] {
        [
            (BaseLayerKind::BlueMarble, self.blue_marble),
            (BaseLayerKind::BlueMarbleLandsat, self.landsat),
            (BaseLayerKind::BingAerialWithLabels, self.bing_aerial),
            (BaseLayerKind::Atmosphere, self.atmosphere),
            (BaseLayerKind::Compass, self.compass),
            (BaseLayerKind::CoordinatesDisplay, self.coordinates),
            (BaseLayerKind::ViewControls, self.view_controls),
        ]
    }
}
