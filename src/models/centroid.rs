use crate::error::{ProcessingError, Result};
use crate::models::GeoPoint;
use serde::Deserialize;

/// One row of the centroid file. Extra columns are ignored.
///
/// Coordinates stay optional here: a blank cell loads fine and only fails
/// when the centroid is rendered.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CentroidRecord {
    #[serde(rename = "GEOID")]
    pub geoid: String,

    #[serde(rename = "centroid_lat")]
    pub latitude: Option<f64>,

    #[serde(rename = "centroid_lon")]
    pub longitude: Option<f64>,
}

impl CentroidRecord {
    pub fn new(geoid: impl Into<String>, latitude: Option<f64>, longitude: Option<f64>) -> Self {
        Self {
            geoid: geoid.into(),
            latitude,
            longitude,
        }
    }

    pub fn location(&self) -> Result<GeoPoint> {
        let latitude = self.latitude.ok_or_else(|| {
            ProcessingError::MissingData(format!("centroid {} has no latitude", self.geoid))
        })?;
        let longitude = self.longitude.ok_or_else(|| {
            ProcessingError::MissingData(format!("centroid {} has no longitude", self.geoid))
        })?;

        GeoPoint::new(latitude, longitude)
    }
}
