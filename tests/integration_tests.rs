use async_trait::async_trait;
use centroid_maps::error::{ProcessingError, Result};
use centroid_maps::models::CentroidRecord;
use centroid_maps::processors::MapPipeline;
use centroid_maps::rasterizer::{HeadlessBrowser, Rasterizer, ScratchFiles};
use centroid_maps::readers::{CentroidReader, PointReader};
use centroid_maps::utils::ProgressReporter;
use centroid_maps::RenderSettings;
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

/// Stands in for the browser: keeps the markup in a scratch file while it
/// "renders", like the real backend does, and returns an oversized image.
struct RecordingRasterizer {
    scratch: ScratchFiles,
    markups: Mutex<Vec<String>>,
}

impl RecordingRasterizer {
    fn new(dir: &Path) -> Self {
        Self {
            scratch: ScratchFiles::new(dir).expect("scratch dir"),
            markups: Mutex::new(Vec::new()),
        }
    }

    fn markups(&self) -> Vec<String> {
        self.markups.lock().unwrap().clone()
    }
}

#[async_trait]
impl Rasterizer for RecordingRasterizer {
    async fn render_to_image(&self, markup: &str, width: u32, height: u32) -> Result<Vec<u8>> {
        let _markup_file = self.scratch.write_markup(markup)?;
        self.markups.lock().unwrap().push(markup.to_string());

        let image = RgbaImage::from_pixel(width + 37, height + 21, Rgba([240, 240, 240, 255]));
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}

fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write input");
    path
}

fn settings_for(dir: &TempDir) -> RenderSettings {
    RenderSettings {
        output_dir: dir.path().to_path_buf(),
        show_progress: false,
        ..RenderSettings::default()
    }
}

fn point_markers(markup: &str) -> usize {
    markup.matches("\"color\":\"blue\"").count()
}

fn center_markers(markup: &str) -> usize {
    markup.matches("\"color\":\"red\"").count()
}

#[tokio::test]
async fn test_end_to_end_single_centroid() {
    let dir = TempDir::new().unwrap();
    let centroids_csv = write_file(
        dir.path(),
        "centroids.csv",
        "GEOID,NAME,centroid_lat,centroid_lon\n001,Adams,40.0,-90.0\n",
    );
    let points_csv = write_file(
        dir.path(),
        "points.csv",
        "name,latitude,longitude\nNear Hospital,40.1,-90.1\nFar Hospital,55.0,-90.0\n",
    );

    let centroids = CentroidReader::new().read_centroids(&centroids_csv).unwrap();
    let points = PointReader::new().read_points(&points_csv).unwrap();

    let pipeline = MapPipeline::new(settings_for(&dir), RecordingRasterizer::new(dir.path())).unwrap();
    let summary = pipeline
        .run(&centroids, &points, &ProgressReporter::quiet())
        .await
        .unwrap();

    assert_eq!(summary.rendered.len(), 1);
    assert!(summary.failures.is_empty());
    assert_eq!(summary.rendered[0].point_count, 1);

    let output = dir.path().join("map_of_001.png");
    assert!(output.exists());
    let image = image::open(&output).unwrap();
    assert_eq!((image.width(), image.height()), (1200, 800));

    let markups = pipeline.rasterizer().markups();
    assert_eq!(markups.len(), 1);
    assert_eq!(center_markers(&markups[0]), 1);
    assert_eq!(point_markers(&markups[0]), 1);
    assert!(markups[0].contains("Near Hospital"));
    assert!(!markups[0].contains("Far Hospital"));

    // No intermediate markup left behind
    assert!(ScratchFiles::new(dir.path()).unwrap().leftovers().unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_points_still_renders_center() {
    let dir = TempDir::new().unwrap();
    let centroids = vec![CentroidRecord::new("001", Some(40.0), Some(-90.0))];

    let pipeline = MapPipeline::new(settings_for(&dir), RecordingRasterizer::new(dir.path())).unwrap();
    let summary = pipeline
        .run(&centroids, &[], &ProgressReporter::quiet())
        .await
        .unwrap();

    assert_eq!(summary.rendered.len(), 1);
    assert_eq!(summary.rendered[0].point_count, 0);
    assert!(dir.path().join("map_of_001.png").exists());

    let markups = pipeline.rasterizer().markups();
    assert_eq!(center_markers(&markups[0]), 1);
    assert_eq!(point_markers(&markups[0]), 0);
}

#[tokio::test]
async fn test_missing_latitude_aborts_run() {
    let dir = TempDir::new().unwrap();
    let centroids_csv = write_file(
        dir.path(),
        "centroids.csv",
        "GEOID,centroid_lat,centroid_lon\n001,40.0,-90.0\n002,,-91.0\n003,41.0,-92.0\n",
    );
    let centroids = CentroidReader::new().read_centroids(&centroids_csv).unwrap();

    let pipeline = MapPipeline::new(settings_for(&dir), RecordingRasterizer::new(dir.path())).unwrap();
    let result = pipeline
        .run(&centroids, &[], &ProgressReporter::quiet())
        .await;

    match result {
        Err(ProcessingError::Centroid { geoid, source }) => {
            assert_eq!(geoid, "002");
            assert!(matches!(*source, ProcessingError::MissingData(_)));
        }
        other => panic!("expected centroid failure, got {:?}", other),
    }

    // Earlier output survives, later centroids never ran
    assert!(dir.path().join("map_of_001.png").exists());
    assert!(!dir.path().join("map_of_003.png").exists());
    assert_eq!(pipeline.rasterizer().markups().len(), 1);
}

#[tokio::test]
async fn test_continue_on_error_records_failure() {
    let dir = TempDir::new().unwrap();
    let centroids = vec![
        CentroidRecord::new("001", Some(40.0), Some(-90.0)),
        CentroidRecord::new("002", None, Some(-91.0)),
        CentroidRecord::new("003", Some(41.0), Some(-92.0)),
    ];
    let settings = RenderSettings {
        continue_on_error: true,
        ..settings_for(&dir)
    };

    let pipeline = MapPipeline::new(settings, RecordingRasterizer::new(dir.path())).unwrap();
    let summary = pipeline
        .run(&centroids, &[], &ProgressReporter::quiet())
        .await
        .unwrap();

    assert_eq!(summary.rendered.len(), 2);
    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].geoid, "002");
    assert!(dir.path().join("map_of_003.png").exists());
}

#[tokio::test]
async fn test_rerender_overwrites_with_same_dimensions() {
    let dir = TempDir::new().unwrap();
    let centroids = vec![CentroidRecord::new("001", Some(40.0), Some(-90.0))];
    let settings = RenderSettings {
        width: 900,
        ..settings_for(&dir)
    };

    let pipeline = MapPipeline::new(settings, RecordingRasterizer::new(dir.path())).unwrap();
    for _ in 0..2 {
        pipeline
            .run(&centroids, &[], &ProgressReporter::quiet())
            .await
            .unwrap();
        let image = image::open(dir.path().join("map_of_001.png")).unwrap();
        assert_eq!((image.width(), image.height()), (900, 800));
    }

    let outputs: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().starts_with("map_of_"))
        .collect();
    assert_eq!(outputs.len(), 1);
}

#[test]
fn test_malformed_points_file_aborts_load() {
    let dir = TempDir::new().unwrap();
    let points_csv = write_file(dir.path(), "points.csv", "name,lat,lon\nx,40.1,-90.1\n");

    let result = PointReader::new().read_points(&points_csv);
    assert!(matches!(result, Err(ProcessingError::MissingColumn { .. })));
}

/// A stand-in browser: copies a prepared PNG to whatever `--screenshot=` names.
#[cfg(unix)]
fn write_screenshot_script(dir: &Path, png: &Path) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = format!(
        "#!/bin/sh\nfor arg in \"$@\"; do\n  case \"$arg\" in\n    --screenshot=*) cp '{}' \"${{arg#--screenshot=}}\" ;;\n  esac\ndone\n",
        png.display()
    );
    let path = write_file(dir, "fake-chrome.sh", &script);
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).expect("chmod");
    path
}

#[cfg(unix)]
#[tokio::test]
async fn test_headless_browser_run_saves_and_cleans_up() {
    let tools = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let screenshot = tools.path().join("screenshot.png");
    RgbaImage::from_pixel(1240, 830, Rgba([250, 250, 250, 255]))
        .save_with_format(&screenshot, ImageFormat::Png)
        .unwrap();
    let browser_binary = write_screenshot_script(tools.path(), &screenshot);

    let settings = RenderSettings {
        browser_binary: browser_binary.to_string_lossy().into_owned(),
        ..settings_for(&output)
    };
    let browser = HeadlessBrowser::from_settings(&settings).unwrap();
    let pipeline = MapPipeline::new(settings, browser).unwrap();

    let centroids = vec![CentroidRecord::new("001", Some(40.0), Some(-90.0))];
    let points = PointReader::new()
        .read_points(&write_file(
            tools.path(),
            "points.csv",
            "name,latitude,longitude\nNear Hospital,40.1,-90.1\n",
        ))
        .unwrap();

    let summary = pipeline
        .run(&centroids, &points, &ProgressReporter::quiet())
        .await
        .unwrap();

    assert_eq!(summary.rendered.len(), 1);
    assert_eq!(summary.rendered[0].point_count, 1);

    let image = image::open(output.path().join("map_of_001.png")).unwrap();
    assert_eq!((image.width(), image.height()), (1200, 800));

    assert!(pipeline.rasterizer().scratch().leftovers().unwrap().is_empty());
}
