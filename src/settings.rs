use crate::error::{ProcessingError, Result};
use crate::utils::constants::*;
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use validator::{Validate, ValidationError};

/// Everything that shapes a render run.
///
/// Layering, lowest to highest: built-in defaults, `centroid-maps.toml` in
/// the working directory, an explicit settings file, `CENTROID_MAPS_*`
/// environment variables. CLI flags are applied on top by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_radii"))]
pub struct RenderSettings {
    /// Points farther than this from the centroid are not drawn
    #[validate(range(min = 0.0))]
    pub filter_radius_miles: f64,

    /// Radius the viewport is fitted to; independent of the filter radius
    #[validate(range(exclusive_min = 0.0))]
    pub display_radius_miles: f64,

    #[validate(range(min = 1, max = 16384))]
    pub width: u32,

    #[validate(range(min = 1, max = 16384))]
    pub height: u32,

    pub settle_delay_ms: u64,

    #[validate(length(min = 1))]
    pub browser_binary: String,

    pub browser_args: Vec<String>,

    #[validate(range(min = 1))]
    pub browser_timeout_secs: u64,

    pub output_dir: PathBuf,

    /// Where temporary markup and screenshots are written; defaults to `output_dir`
    pub scratch_dir: Option<PathBuf>,

    /// Render at most this many centroids
    pub limit: Option<usize>,

    pub continue_on_error: bool,

    pub show_progress: bool,

    #[validate(length(min = 1))]
    pub tile_url: String,

    pub tile_attribution: String,

    pub point_label: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            filter_radius_miles: DEFAULT_FILTER_RADIUS_MILES,
            display_radius_miles: DEFAULT_DISPLAY_RADIUS_MILES,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            browser_binary: DEFAULT_BROWSER_BINARY.to_string(),
            browser_args: Vec::new(),
            browser_timeout_secs: DEFAULT_BROWSER_TIMEOUT_SECS,
            output_dir: PathBuf::from("."),
            scratch_dir: None,
            limit: None,
            continue_on_error: false,
            show_progress: true,
            tile_url: DEFAULT_TILE_URL.to_string(),
            tile_attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
            point_label: DEFAULT_POINT_LABEL.to_string(),
        }
    }
}

impl RenderSettings {
    /// Load layered settings. `explicit` must exist when given.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .add_source(Config::try_from(&RenderSettings::default())?)
            .add_source(File::with_name(SETTINGS_FILE_STEM).required(false));

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ProcessingError::Config(format!(
                    "Settings file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings: RenderSettings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(" ")
                    .with_list_parse_key("browser_args"),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn scratch_dir(&self) -> &Path {
        self.scratch_dir.as_deref().unwrap_or(&self.output_dir)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn browser_timeout(&self) -> Duration {
        Duration::from_secs(self.browser_timeout_secs)
    }
}

/// Range checks pass NaN, so finiteness is checked separately
fn validate_radii(settings: &RenderSettings) -> std::result::Result<(), ValidationError> {
    if !settings.filter_radius_miles.is_finite() || !settings.display_radius_miles.is_finite() {
        return Err(ValidationError::new("non_finite_radius"));
    }
    Ok(())
}
