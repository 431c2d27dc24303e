use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::style::{Color, Offset, PlacemarkAttributes};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Placemarks", inline)]
#[serde(default)]
/// Pushpin images and the common placemark style.
pub struct PlacemarkOptions {
    /// Directory or URL prefix holding the pushpin images.
    #[schemars(skip)]
    pub pin_library: String,
    /// Pushpin image file names; sites refer to them by index.
    #[schemars(skip)]
    pub images: Vec<String>,
    /// Placemarks created per site.
    #[schemars(title = "Pins per Site", range(min = 1, max = 8))]
    pub pins_per_site: usize,
    /// Unscaled pushpin image size in pixels.
    #[schemars(skip)]
    pub image_size: [f32; 2],
    /// Normal image scale.
    #[schemars(title = "Image Scale", range(min = 0.25, max = 4.0), extend("step" = 0.05))]
    pub image_scale: f32,
    /// Image scale while highlighted.
    #[schemars(title = "Highlight Scale", range(min = 0.25, max = 4.0), extend("step" = 0.05))]
    pub highlight_image_scale: f32,
    /// Image anchor as fractions of the image size, from the lower left.
    #[schemars(skip)]
    pub image_offset: [f32; 2],
    /// Label anchor as fractions of the image size.
    #[schemars(skip)]
    pub label_offset: [f32; 2],
    /// Label color (RGBA).
    #[schemars(skip)]
    pub label_color: [f32; 4],
    /// Whether to draw a leader line to the ground.
    #[schemars(title = "Leader Line")]
    pub draw_leader_line: bool,
    /// Leader line color (RGBA).
    #[schemars(skip)]
    pub leader_line_color: [f32; 4],
}

impl Default for PlacemarkOptions {
    fn default() -> Self {
        Self {
            pin_library: "images/pushpins/".to_owned(),
            images: vec!["plain-black.png".to_owned(), "plain-white.png".to_owned()],
            pins_per_site: 2,
            image_size: [64.0, 64.0],
            image_scale: 1.0,
            highlight_image_scale: 1.2,
            image_offset: [0.3, 0.0],
            label_offset: [0.5, 1.0],
            label_color: [1.0, 1.0, 0.0, 1.0],
            draw_leader_line: true,
            leader_line_color: [1.0, 0.0, 0.0, 1.0],
        }
    }
}

impl PlacemarkOptions {
    /// Full source path of image `index`, or `None` if there is no such
    /// image.
    #[must_use]
    pub fn image_source(&self, index: usize) -> Option<String> {
        self.images
            .get(index)
            .map(|name| format!("{}{name}", self.pin_library))
    }

    /// The style every placemark starts from, before its image is set.
    #[must_use]
    pub fn base_attributes(&self) -> PlacemarkAttributes {
        let base = PlacemarkAttributes::default()
            .with_image_scale(self.image_scale)
            .with_image_size(Vec2::from_array(self.image_size))
            .with_image_offset(Offset::fraction(
                self.image_offset[0],
                self.image_offset[1],
            ))
            .with_image_color(Color::WHITE)
            .with_label(
                Color::from(self.label_color),
                Offset::fraction(self.label_offset[0], self.label_offset[1]),
            );
        if self.draw_leader_line {
            base.with_leader_line(Color::from(self.leader_line_color))
        } else {
            base
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One placemark site: a layer of identical pins at a fixed position.
pub struct SiteOptions {
    /// Name of the layer holding this site's pins.
    pub layer_name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Index into [`PlacemarkOptions::images`].
    pub image: usize,
}

/// Washington, D.C. with black pins and Moscow with white pins.
#[must_use]
pub fn default_sites() -> Vec<SiteOptions> {
    vec![
        SiteOptions {
            layer_name: "Placemarks".to_owned(),
            latitude: 38.9072,
            longitude: -77.0369,
            image: 0,
        },
        SiteOptions {
            layer_name: "Placemarks".to_owned(),
            latitude: 55.7558,
            longitude: 37.6173,
            image: 1,
        },
    ]
}
