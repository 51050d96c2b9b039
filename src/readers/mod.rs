pub mod centroid_reader;
pub mod point_reader;

pub use centroid_reader::CentroidReader;
pub use point_reader::PointReader;

use crate::error::{ProcessingError, Result};
use std::path::Path;

fn open_csv(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(false)
        .from_path(path)?;
    Ok(reader)
}

/// Fail with `MissingColumn` for the first required header that is absent.
fn require_columns(path: &Path, headers: &csv::StringRecord, required: &[&str]) -> Result<()> {
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(ProcessingError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}
