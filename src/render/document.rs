use crate::models::{BoundingBox, GeoPoint};
use serde::Serialize;

/// A filled circle marker with a hover label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub latitude: f64,
    pub longitude: f64,
    pub radius: u32,
    pub color: String,
    pub fill_opacity: f64,
    pub label: String,
}

impl Marker {
    pub fn circle(location: GeoPoint, radius: u32, color: &str, fill_opacity: f64, label: String) -> Self {
        Self {
            latitude: location.latitude,
            longitude: location.longitude,
            radius,
            color: color.to_string(),
            fill_opacity,
            label,
        }
    }
}

/// Everything drawn on one centroid's map, before it becomes markup.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDocument {
    pub geoid: String,
    pub center: Marker,
    pub points: Vec<Marker>,
    pub bounds: BoundingBox,
}

impl MapDocument {
    /// Center first so the point markers draw above it
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        std::iter::once(&self.center).chain(self.points.iter())
    }

    pub fn marker_count(&self) -> usize {
        self.points.len() + 1
    }
}
