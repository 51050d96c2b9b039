use crate::error::Result;
use crate::models::{BoundingBox, GeoPoint, PointOfInterest};
use crate::render::{MapDocument, Marker};
use crate::settings::RenderSettings;
use crate::utils::constants::{
    CENTER_MARKER_COLOR, CENTER_MARKER_RADIUS, MARKER_FILL_OPACITY, POINT_MARKER_COLOR,
    POINT_MARKER_RADIUS,
};
use tera::{Context, Tera};

const MAP_TEMPLATE_NAME: &str = "map.html";
const MAP_TEMPLATE: &str = include_str!("../../templates/map.html.tera");

/// Builds map documents and turns them into Leaflet markup.
pub struct MapRenderer {
    tera: Tera,
    tile_url: String,
    tile_attribution: String,
    point_label: String,
}

impl MapRenderer {
    pub fn new(settings: &RenderSettings) -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(MAP_TEMPLATE_NAME, MAP_TEMPLATE)?;

        Ok(Self {
            tera,
            tile_url: settings.tile_url.clone(),
            tile_attribution: settings.tile_attribution.clone(),
            point_label: settings.point_label.clone(),
        })
    }

    pub fn build_document(
        &self,
        geoid: &str,
        center: GeoPoint,
        points: &[&PointOfInterest],
        bounds: BoundingBox,
    ) -> Result<MapDocument> {
        let center_marker = Marker::circle(
            center,
            CENTER_MARKER_RADIUS,
            CENTER_MARKER_COLOR,
            MARKER_FILL_OPACITY,
            format!("Centroid {}", geoid),
        );

        let point_markers = points
            .iter()
            .map(|point| -> Result<Marker> {
                Ok(Marker::circle(
                    point.location()?,
                    POINT_MARKER_RADIUS,
                    POINT_MARKER_COLOR,
                    MARKER_FILL_OPACITY,
                    format!("{}: {}", self.point_label, point.display_name()),
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(MapDocument {
            geoid: geoid.to_string(),
            center: center_marker,
            points: point_markers,
            bounds,
        })
    }

    pub fn render_html(&self, document: &MapDocument) -> Result<String> {
        let markers: Vec<&Marker> = document.markers().collect();

        let mut context = Context::new();
        context.insert("title", &format!("Map of {}", document.geoid));
        context.insert("tile_url", &self.tile_url);
        context.insert("tile_attribution", &self.tile_attribution);
        context.insert("markers_json", &script_safe_json(&markers)?);
        context.insert("bounds", &document.bounds);

        Ok(self.tera.render(MAP_TEMPLATE_NAME, &context)?)
    }
}

/// JSON that can sit inside a `<script>` element without closing it early.
fn script_safe_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}
