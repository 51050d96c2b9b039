use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Column '{column}' missing from {}", .path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Missing required data: {0}")]
    MissingData(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] ::config::ConfigError),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to launch browser '{binary}': {source}")]
    BrowserLaunch {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Browser exited with {status}: {stderr}")]
    BrowserFailed { status: String, stderr: String },

    #[error("Browser did not finish within {seconds}s")]
    BrowserTimeout { seconds: u64 },

    #[error("Screenshot error: {0}")]
    Screenshot(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Centroid {geoid} failed: {source}")]
    Centroid {
        geoid: String,
        #[source]
        source: Box<ProcessingError>,
    },
}

impl ProcessingError {
    pub fn for_centroid(geoid: &str, source: ProcessingError) -> Self {
        ProcessingError::Centroid {
            geoid: geoid.to_string(),
            source: Box::new(source),
        }
    }
}
