//! Free functions for building the scene from options.

use crate::geo::Position;
use crate::options::{Options, SiteOptions};
use crate::picking::Viewport;
use crate::scene::{Placemark, RenderableId, RenderableLayer, Scene};
use crate::style::PlacemarkAttributes;

/// Build the layer list: base layers in draw order, then one placemark
/// layer per site. Returns the scene and the placemark handles of each
/// site.
pub(super) fn build_scene(
    options: &Options,
    viewport: Viewport,
) -> (Scene, Vec<Vec<RenderableId>>) {
    let mut scene = Scene::new(viewport);
    for (kind, enabled) in options.layers.base_layers() {
        let _ = scene.add_base_layer(kind, enabled);
    }

    let base = options.placemarks.base_attributes();
    let sites: Vec<Vec<RenderableId>> = options
        .sites
        .iter()
        .map(|site| {
            let layer = site_layer(options, &base, site);
            let count = layer.len() as u32;
            let layer_id = scene.add_renderable_layer(layer);
            (0..count)
                .map(|index| RenderableId::new(layer_id, index))
                .collect::<Vec<_>>()
        })
        .collect();

    (scene, sites)
}

/// One layer holding `pins_per_site` identical placemarks for `site`.
fn site_layer(
    options: &Options,
    base: &PlacemarkAttributes,
    site: &SiteOptions,
) -> RenderableLayer {
    let placemarks = &options.placemarks;
    let mut attributes = PlacemarkAttributes::derived_from(base);
    if let Some(source) = placemarks.image_source(site.image) {
        attributes = attributes.with_image_source(source);
    } else {
        log::warn!(
            "site '{}' refers to missing image {}; drawing without one",
            site.layer_name,
            site.image
        );
    }
    let highlight = PlacemarkAttributes::derived_from(&attributes)
        .with_image_scale(placemarks.highlight_image_scale);

    let mut layer = RenderableLayer::new(site.layer_name.clone());
    let position = Position::surface(site.latitude, site.longitude);
    for _ in 0..placemarks.pins_per_site {
        let _ = layer.add_renderable(
            Placemark::new(position)
                .with_attributes(attributes.clone())
                .with_highlight_attributes(highlight.clone()),
        );
    }
    log::debug!(
        "site '{}' at ({}, {}): {} placemark(s)",
        site.layer_name,
        site.latitude,
        site.longitude,
        layer.len()
    );
    layer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Layer, LayerId};

    #[test]
    fn default_scene_layout() {
        let options = Options::default();
        let (scene, sites) = build_scene(&options, Viewport::default());

        // Seven base layers, then the two placemark layers
        assert_eq!(scene.layers().len(), 9);
        assert!(!scene.layers()[1].enabled(), "Landsat starts disabled");
        assert!(matches!(scene.layers()[7], Layer::Renderable(_)));

        assert_eq!(
            sites,
            vec![
                vec![
                    RenderableId::new(LayerId(7), 0),
                    RenderableId::new(LayerId(7), 1),
                ],
                vec![
                    RenderableId::new(LayerId(8), 0),
                    RenderableId::new(LayerId(8), 1),
                ],
            ]
        );
    }

    #[test]
    fn site_placemarks_carry_images_and_highlight_scale() {
        let options = Options::default();
        let (scene, sites) = build_scene(&options, Viewport::default());

        let washington = scene.renderable(sites[0][0]).unwrap();
        assert_eq!(washington.label, "Placemark \nLat 38.91\nLon -77.037");
        assert_eq!(
            washington.attributes.image_source.as_deref(),
            Some("images/pushpins/plain-black.png")
        );
        let highlight = washington.highlight_attributes.as_ref().unwrap();
        assert_eq!(highlight.image_scale, 1.2);
        assert_eq!(washington.attributes.image_scale, 1.0);

        let moscow = scene.renderable(sites[1][1]).unwrap();
        assert_eq!(
            moscow.attributes.image_source.as_deref(),
            Some("images/pushpins/plain-white.png")
        );
        assert_eq!(moscow.label, "Placemark \nLat 55.76\nLon 37.617");
    }

    #[test]
    fn missing_image_leaves_source_empty() {
        let mut options = Options::default();
        options.sites[0].image = 9;
        let (scene, sites) = build_scene(&options, Viewport::default());
        let placemark = scene.renderable(sites[0][0]).unwrap();
        assert!(placemark.attributes.image_source.is_none());
    }
}
