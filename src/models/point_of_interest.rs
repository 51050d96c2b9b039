use crate::error::Result;
use crate::models::GeoPoint;
use crate::utils::constants::UNKNOWN_POINT_NAME;
use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct PointOfInterest {
    #[serde(default)]
    pub name: Option<String>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl PointOfInterest {
    pub fn new(name: Option<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            latitude,
            longitude,
        }
    }

    pub fn location(&self) -> Result<GeoPoint> {
        GeoPoint::new(self.latitude, self.longitude)
    }

    pub fn display_name(&self) -> &str {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => UNKNOWN_POINT_NAME,
        }
    }
}
