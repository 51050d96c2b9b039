pub mod bounds;
pub mod centroid;
pub mod geo_point;
pub mod point_of_interest;

pub use bounds::BoundingBox;
pub use centroid::CentroidRecord;
pub use geo_point::GeoPoint;
pub use point_of_interest::PointOfInterest;
