/// Input column names
pub const COL_GEOID: &str = "GEOID";
pub const COL_CENTROID_LAT: &str = "centroid_lat";
pub const COL_CENTROID_LON: &str = "centroid_lon";
pub const COL_POI_LAT: &str = "latitude";
pub const COL_POI_LON: &str = "longitude";
pub const COL_POI_NAME: &str = "name";

/// Radius defaults (miles). The filter and display radii are deliberately independent.
pub const DEFAULT_FILTER_RADIUS_MILES: f64 = 500.0;
pub const DEFAULT_DISPLAY_RADIUS_MILES: f64 = 415.0;

/// Distance conversion
pub const METERS_PER_MILE: f64 = 1609.344;

/// Bounding-box approximation
pub const MILES_PER_DEGREE_LAT: f64 = 69.9;
pub const MIN_COS_LAT: f64 = 1e-5;
/// Extra degrees added to every side of the fitted box. Zero: the box is the bare radius.
pub const BBOX_PADDING_DEGREES: f64 = 0.0;
/// Multipliers applied to the latitude/longitude offsets. Unity: no adjustment.
pub const LAT_FUDGE_FACTOR: f64 = 1.0;
pub const LON_FUDGE_FACTOR: f64 = 1.0;

/// Image defaults
pub const DEFAULT_WIDTH: u32 = 1200;
pub const DEFAULT_HEIGHT: u32 = 800;
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 1000;

/// Browser defaults
pub const DEFAULT_BROWSER_BINARY: &str = "google-chrome";
pub const DEFAULT_BROWSER_TIMEOUT_SECS: u64 = 60;

/// Marker styling
pub const CENTER_MARKER_COLOR: &str = "red";
pub const CENTER_MARKER_RADIUS: u32 = 5;
pub const POINT_MARKER_COLOR: &str = "blue";
pub const POINT_MARKER_RADIUS: u32 = 1;
pub const MARKER_FILL_OPACITY: f64 = 1.0;
pub const DEFAULT_POINT_LABEL: &str = "Point";
pub const UNKNOWN_POINT_NAME: &str = "Unknown";

/// Basemap
pub const DEFAULT_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// File names
pub const OUTPUT_PREFIX: &str = "map_of_";
pub const TEMP_MARKUP_PREFIX: &str = "temp_map";
pub const TEMP_SCREENSHOT_PREFIX: &str = "temp_screenshot";
pub const SETTINGS_FILE_STEM: &str = "centroid-maps";
pub const ENV_PREFIX: &str = "CENTROID_MAPS";
