use crate::error::{ProcessingError, Result};
use crate::models::PointOfInterest;
use crate::readers::{open_csv, require_columns};
use crate::utils::constants::{COL_POI_LAT, COL_POI_LON};
use std::path::Path;
use tracing::debug;
use validator::Validate;

pub struct PointReader;

impl PointReader {
    pub fn new() -> Self {
        Self
    }

    /// Read and validate every point of interest. The `name` column is optional.
    pub fn read_points(&self, path: &Path) -> Result<Vec<PointOfInterest>> {
        let mut reader = open_csv(path)?;
        let headers = reader.headers()?.clone();
        require_columns(path, &headers, &[COL_POI_LAT, COL_POI_LON])?;

        let mut points = Vec::new();
        for (index, record) in reader.deserialize::<PointOfInterest>().enumerate() {
            let point = record?;
            // +2: one for the header, one for 1-based rows
            let row_error = |e: &dyn std::fmt::Display| {
                ProcessingError::InvalidCoordinate(format!(
                    "{} row {}: {}",
                    path.display(),
                    index + 2,
                    e
                ))
            };
            point.validate().map_err(|e| row_error(&e))?;
            // range checks let NaN through
            point.location().map_err(|e| row_error(&e))?;
            points.push(point);
        }

        debug!(path = %path.display(), count = points.len(), "loaded points of interest");
        Ok(points)
    }
}

impl Default for PointReader {
    fn default() -> Self {
        Self::new()
    }
}
