use crate::error::Result;
use crate::models::{GeoPoint, PointOfInterest};
use crate::utils::coordinates::geodesic_distance_miles;

/// Keeps the points of interest within a geodesic radius of a center.
///
/// This is a linear scan per center. Fine for county-sized inputs; there is
/// no spatial index.
#[derive(Debug, Clone, Copy)]
pub struct RadiusFilter {
    radius_miles: f64,
}

impl RadiusFilter {
    pub fn new(radius_miles: f64) -> Self {
        Self { radius_miles }
    }

    pub fn radius_miles(&self) -> f64 {
        self.radius_miles
    }

    /// A point exactly on the radius is kept. Bad geometry is an error, never "outside".
    pub fn contains(&self, center: GeoPoint, point: &PointOfInterest) -> Result<bool> {
        let location = point.location()?;
        Ok(geodesic_distance_miles(center, location) <= self.radius_miles)
    }

    pub fn filter<'a>(
        &self,
        center: GeoPoint,
        candidates: &'a [PointOfInterest],
    ) -> Result<Vec<&'a PointOfInterest>> {
        let mut kept = Vec::new();
        for point in candidates {
            if self.contains(center, point)? {
                kept.push(point);
            }
        }
        Ok(kept)
    }
}
