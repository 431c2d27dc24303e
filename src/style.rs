//! Visual attributes for placemarks, their labels and leader lines.
//!
//! Highlight variants are built by deriving from a base style and
//! overriding explicit fields:
//!
//! ```
//! use pickmark::style::PlacemarkAttributes;
//!
//! let normal = PlacemarkAttributes::default()
//!     .with_image_source("images/pushpins/plain-black.png");
//! let highlight =
//!     PlacemarkAttributes::derived_from(&normal).with_image_scale(1.2);
//!
//! assert_eq!(normal.image_scale, 1.0);
//! assert_eq!(highlight.image_source, normal.image_source);
//! ```

use glam::Vec2;

/// Default pixel size of a pushpin image.
pub const DEFAULT_IMAGE_SIZE: Vec2 = Vec2::new(64.0, 64.0);

/// RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component.
    pub a: f32,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque red.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0, 1.0);

    /// Create a color from its components.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Units an [`Offset`] component is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OffsetUnits {
    /// Fraction of the image dimension.
    #[default]
    Fraction,
    /// Absolute pixels from the lower-left corner.
    Pixels,
    /// Pixels inset from the upper-right corner.
    InsetPixels,
}

/// Anchor offset of an image or label, measured from its lower-left
/// corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    /// Horizontal offset value.
    pub x: f32,
    /// Units of `x`.
    pub x_units: OffsetUnits,
    /// Vertical offset value.
    pub y: f32,
    /// Units of `y`.
    pub y_units: OffsetUnits,
}

impl Offset {
    /// Offset with both components given as fractions of the image size.
    #[must_use]
    pub const fn fraction(x: f32, y: f32) -> Self {
        Self {
            x,
            x_units: OffsetUnits::Fraction,
            y,
            y_units: OffsetUnits::Fraction,
        }
    }

    /// Resolve to pixels (from the lower-left corner) for an image of
    /// `size`.
    #[must_use]
    pub fn resolve(&self, size: Vec2) -> Vec2 {
        Vec2::new(
            resolve_component(self.x, self.x_units, size.x),
            resolve_component(self.y, self.y_units, size.y),
        )
    }
}

impl Default for Offset {
    fn default() -> Self {
        Self::fraction(0.5, 0.5)
    }
}

fn resolve_component(value: f32, units: OffsetUnits, extent: f32) -> f32 {
    match units {
        OffsetUnits::Fraction => value * extent,
        OffsetUnits::Pixels => value,
        OffsetUnits::InsetPixels => extent - value,
    }
}

/// Label text styling.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAttributes {
    /// Text color.
    pub color: Color,
    /// Text anchor relative to the placemark image.
    pub offset: Offset,
}

impl Default for TextAttributes {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            offset: Offset::fraction(0.0, 0.5),
        }
    }
}

/// Line styling (used for leader lines).
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeAttributes {
    /// Outline color.
    pub outline_color: Color,
    /// Outline width in pixels.
    pub outline_width: f32,
}

impl Default for ShapeAttributes {
    fn default() -> Self {
        Self {
            outline_color: Color::WHITE,
            outline_width: 1.0,
        }
    }
}

/// Full visual description of a placemark.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacemarkAttributes {
    /// Multiplier applied to the image size.
    pub image_scale: f32,
    /// Image anchor placed at the placemark's screen position.
    pub image_offset: Offset,
    /// Tint applied to the image.
    pub image_color: Color,
    /// Image URL or path, if any.
    pub image_source: Option<String>,
    /// Unscaled image size in pixels.
    pub image_size: Vec2,
    /// Label styling.
    pub label_attributes: TextAttributes,
    /// Whether a line is drawn from the terrain to the placemark.
    pub draw_leader_line: bool,
    /// Leader-line styling.
    pub leader_line_attributes: ShapeAttributes,
}

impl Default for PlacemarkAttributes {
    fn default() -> Self {
        Self {
            image_scale: 1.0,
            image_offset: Offset::default(),
            image_color: Color::WHITE,
            image_source: None,
            image_size: DEFAULT_IMAGE_SIZE,
            label_attributes: TextAttributes::default(),
            draw_leader_line: false,
            leader_line_attributes: ShapeAttributes::default(),
        }
    }
}

impl PlacemarkAttributes {
    /// Start a new attribute set as an independent copy of `base`.
    #[must_use]
    pub fn derived_from(base: &Self) -> Self {
        base.clone()
    }

    /// Override the image scale.
    #[must_use]
    pub fn with_image_scale(mut self, scale: f32) -> Self {
        self.image_scale = scale;
        self
    }

    /// Override the image anchor.
    #[must_use]
    pub fn with_image_offset(mut self, offset: Offset) -> Self {
        self.image_offset = offset;
        self
    }

    /// Override the image tint.
    #[must_use]
    pub fn with_image_color(mut self, color: Color) -> Self {
        self.image_color = color;
        self
    }

    /// Override the image source.
    #[must_use]
    pub fn with_image_source(mut self, source: impl Into<String>) -> Self {
        self.image_source = Some(source.into());
        self
    }

    /// Override the unscaled image size.
    #[must_use]
    pub fn with_image_size(mut self, size: Vec2) -> Self {
        self.image_size = size;
        self
    }

    /// Override the label color and anchor.
    #[must_use]
    pub fn with_label(mut self, color: Color, offset: Offset) -> Self {
        self.label_attributes = TextAttributes { color, offset };
        self
    }

    /// Enable the leader line with the given outline color.
    #[must_use]
    pub fn with_leader_line(mut self, outline_color: Color) -> Self {
        self.draw_leader_line = true;
        self.leader_line_attributes.outline_color = outline_color;
        self
    }

    /// On-screen image size after scaling.
    #[must_use]
    pub fn scaled_image_size(&self) -> Vec2 {
        self.image_size * self.image_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_attributes_do_not_touch_base() {
        let base = PlacemarkAttributes::default().with_image_source("a.png");
        let highlight =
            PlacemarkAttributes::derived_from(&base).with_image_scale(1.2);

        assert_eq!(base.image_scale, 1.0);
        assert_eq!(highlight.image_scale, 1.2);
        assert_eq!(highlight.image_source.as_deref(), Some("a.png"));
        assert_eq!(highlight.label_attributes, base.label_attributes);
    }

    #[test]
    fn offset_resolves_per_unit() {
        let size = Vec2::new(64.0, 32.0);
        assert_eq!(Offset::fraction(0.3, 0.0).resolve(size), Vec2::new(19.2, 0.0));

        let mixed = Offset {
            x: 4.0,
            x_units: OffsetUnits::Pixels,
            y: 2.0,
            y_units: OffsetUnits::InsetPixels,
        };
        assert_eq!(mixed.resolve(size), Vec2::new(4.0, 30.0));
    }

    #[test]
    fn leader_line_builder_enables_drawing() {
        let attrs = PlacemarkAttributes::default().with_leader_line(Color::RED);
        assert!(attrs.draw_leader_line);
        assert_eq!(attrs.leader_line_attributes.outline_color, Color::RED);
        assert_eq!(attrs.scaled_image_size(), DEFAULT_IMAGE_SIZE);
    }
}
