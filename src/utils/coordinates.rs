use crate::models::{BoundingBox, GeoPoint};
use crate::utils::constants::{
    BBOX_PADDING_DEGREES, LAT_FUDGE_FACTOR, LON_FUDGE_FACTOR, METERS_PER_MILE, MILES_PER_DEGREE_LAT,
    MIN_COS_LAT,
};
use geo::GeodesicDistance;

/// Distance between two points along the WGS-84 ellipsoid, in statute miles
///
/// # Examples
/// ```
/// use centroid_maps::models::GeoPoint;
/// use centroid_maps::utils::coordinates::geodesic_distance_miles;
///
/// let a = GeoPoint::new(40.0, -90.0).unwrap();
/// let b = GeoPoint::new(41.0, -90.0).unwrap();
/// assert!((geodesic_distance_miles(a, b) - 69.0).abs() < 0.5);
/// ```
pub fn geodesic_distance_miles(from: GeoPoint, to: GeoPoint) -> f64 {
    from.to_geo().geodesic_distance(&to.to_geo()) / METERS_PER_MILE
}

/// Approximate the box that keeps a circle of `radius_miles` around `center` in view.
///
/// One degree of latitude is taken as 69.9 miles; a degree of longitude
/// shrinks with cos(latitude), which is clamped near the poles.
pub fn fit_bounds_by_radius(center: GeoPoint, radius_miles: f64) -> BoundingBox {
    let (lat_offset, lon_offset) = radius_offsets(center.latitude, radius_miles);

    BoundingBox {
        south: center.latitude - lat_offset - BBOX_PADDING_DEGREES,
        west: center.longitude - lon_offset - BBOX_PADDING_DEGREES,
        north: center.latitude + lat_offset + BBOX_PADDING_DEGREES,
        east: center.longitude + lon_offset + BBOX_PADDING_DEGREES,
    }
}

/// Latitude and longitude half-spans in degrees for a radius at the given latitude
pub fn radius_offsets(latitude: f64, radius_miles: f64) -> (f64, f64) {
    let lat_offset = radius_miles / MILES_PER_DEGREE_LAT;

    let mut cos_lat = latitude.to_radians().cos();
    if cos_lat.abs() < MIN_COS_LAT {
        cos_lat = MIN_COS_LAT;
    }
    let lon_offset = radius_miles / (MILES_PER_DEGREE_LAT * cos_lat);

    (lat_offset * LAT_FUDGE_FACTOR, lon_offset * LON_FUDGE_FACTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn test_geodesic_distance_same_point() {
        let p = point(40.0, -90.0);
        assert!(geodesic_distance_miles(p, p).abs() < 1e-9);
    }

    #[test]
    fn test_geodesic_distance_known_pairs() {
        // Nearby point used in the end-to-end scenario: ~8.6 miles
        let d = geodesic_distance_miles(point(40.0, -90.0), point(40.1, -90.1));
        assert!(d > 8.0 && d < 9.5, "distance was {}", d);

        // 15 degrees of latitude is far beyond 500 miles
        let d = geodesic_distance_miles(point(40.0, -90.0), point(55.0, -90.0));
        assert!(d > 1000.0 && d < 1050.0, "distance was {}", d);
    }

    #[test]
    fn test_geodesic_distance_is_symmetric() {
        let a = point(51.5074, -0.1278);
        let b = point(55.9533, -3.1883);
        let ab = geodesic_distance_miles(a, b);
        let ba = geodesic_distance_miles(b, a);
        assert!((ab - ba).abs() < 1e-6);
        // London to Edinburgh, ~332 miles
        assert!((ab - 332.0).abs() < 5.0);
    }

    #[test]
    fn test_offsets_equal_at_equator() {
        let (lat_offset, lon_offset) = radius_offsets(0.0, 415.0);
        assert!((lat_offset - lon_offset).abs() < 1e-12);
        assert!((lat_offset - 415.0 / 69.9).abs() < 1e-12);
    }

    #[test]
    fn test_offsets_clamped_at_pole() {
        let (lat_offset, lon_offset) = radius_offsets(90.0, 415.0);
        assert!(lon_offset.is_finite());
        assert!((lon_offset - 415.0 / (69.9 * MIN_COS_LAT)).abs() < 1e-3);
        assert!((lat_offset - 415.0 / 69.9).abs() < 1e-12);

        let (_, south_pole) = radius_offsets(-90.0, 415.0);
        assert!(south_pole.is_finite());
    }

    #[test]
    fn test_offsets_widen_with_latitude() {
        let (_, at_30) = radius_offsets(30.0, 415.0);
        let (_, at_60) = radius_offsets(60.0, 415.0);
        assert!(at_60 > at_30);
        // cos(60) = 0.5, so the longitude span doubles relative to latitude
        let (lat_offset, _) = radius_offsets(60.0, 415.0);
        assert!((at_60 - 2.0 * lat_offset).abs() < 1e-9);
    }

    #[test]
    fn test_fit_bounds_is_centered() {
        let center = point(40.0, -90.0);
        let bounds = fit_bounds_by_radius(center, 415.0);

        assert!(((bounds.north + bounds.south) / 2.0 - 40.0).abs() < 1e-9);
        assert!(((bounds.east + bounds.west) / 2.0 - -90.0).abs() < 1e-9);
        assert!((bounds.lat_span() - 2.0 * 415.0 / 69.9).abs() < 1e-9);
        assert!(bounds.lon_span() > bounds.lat_span());
    }
}
