use crate::error::Result;
use crate::models::CentroidRecord;
use crate::readers::{open_csv, require_columns};
use crate::utils::constants::{COL_CENTROID_LAT, COL_CENTROID_LON, COL_GEOID};
use std::path::Path;
use tracing::debug;

pub struct CentroidReader;

impl CentroidReader {
    pub fn new() -> Self {
        Self
    }

    /// Read every centroid row in file order
    pub fn read_centroids(&self, path: &Path) -> Result<Vec<CentroidRecord>> {
        let mut reader = open_csv(path)?;
        let headers = reader.headers()?.clone();
        require_columns(path, &headers, &[COL_GEOID, COL_CENTROID_LAT, COL_CENTROID_LON])?;

        let mut centroids = Vec::new();
        for record in reader.deserialize::<CentroidRecord>() {
            centroids.push(record?);
        }

        debug!(path = %path.display(), count = centroids.len(), "loaded centroids");
        Ok(centroids)
    }
}

impl Default for CentroidReader {
    fn default() -> Self {
        Self::new()
    }
}
