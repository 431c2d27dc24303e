use super::placemark::Placemark;

/// Non-interactive layers drawn beneath or above the placemarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseLayerKind {
    /// Blue Marble global imagery.
    BlueMarble,
    /// Blue Marble with Landsat detail.
    BlueMarbleLandsat,
    /// Bing aerial imagery with place labels.
    BingAerialWithLabels,
    /// Atmosphere and day/night shading.
    Atmosphere,
    /// Compass rose overlay.
    Compass,
    /// Cursor coordinate readout overlay.
    CoordinatesDisplay,
    /// Pan/zoom/tilt control overlay.
    ViewControls,
}

impl BaseLayerKind {
    /// Human-readable layer name, as shown in a layer list.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::BlueMarble => "Blue Marble",
            Self::BlueMarbleLandsat => "Blue Marble & Landsat",
            Self::BingAerialWithLabels => "Bing Aerial with Labels",
            Self::Atmosphere => "Atmosphere",
            Self::Compass => "Compass",
            Self::CoordinatesDisplay => "Coordinates",
            Self::ViewControls => "View Controls",
        }
    }

    /// Whether the layer draws globe imagery (as opposed to shading or a
    /// screen overlay).
    #[must_use]
    pub const fn is_imagery(self) -> bool {
        matches!(
            self,
            Self::BlueMarble
                | Self::BlueMarbleLandsat
                | Self::BingAerialWithLabels
        )
    }
}

/// A named, mutable collection of placemarks.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderableLayer {
    /// Display name.
    pub name: String,
    /// Disabled layers are neither drawn nor picked.
    pub enabled: bool,
    renderables: Vec<Placemark>,
}

impl RenderableLayer {
    /// Create an empty, enabled layer.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            renderables: Vec::new(),
        }
    }

    /// Append a placemark and return its index within this layer.
    pub fn add_renderable(&mut self, placemark: Placemark) -> u32 {
        self.renderables.push(placemark);
        (self.renderables.len() - 1) as u32
    }

    /// Placemarks in draw order (later entries draw on top).
    #[must_use]
    pub fn renderables(&self) -> &[Placemark] {
        &self.renderables
    }

    /// Number of placemarks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.renderables.len()
    }

    /// Whether the layer holds no placemarks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.renderables.is_empty()
    }

    pub(crate) fn get(&self, index: u32) -> Option<&Placemark> {
        self.renderables.get(index as usize)
    }

    pub(crate) fn get_mut(&mut self, index: u32) -> Option<&mut Placemark> {
        self.renderables.get_mut(index as usize)
    }
}

/// One entry in the scene's layer list.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    /// Imagery or UI overlay.
    Base {
        /// Which layer.
        kind: BaseLayerKind,
        /// Whether it is drawn.
        enabled: bool,
    },
    /// Placemark layer.
    Renderable(RenderableLayer),
}

impl Layer {
    /// Display name of the layer.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Base { kind, .. } => kind.display_name(),
            Self::Renderable(layer) => &layer.name,
        }
    }

    /// Whether the layer is drawn.
    #[must_use]
    pub fn enabled(&self) -> bool {
        match self {
            Self::Base { enabled, .. } => *enabled,
            Self::Renderable(layer) => layer.enabled,
        }
    }

    /// Enable or disable the layer.
    pub fn set_enabled(&mut self, on: bool) {
        match self {
            Self::Base { enabled, .. } => *enabled = on,
            Self::Renderable(layer) => layer.enabled = on,
        }
    }
}
