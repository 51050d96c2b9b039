use crate::error::{ProcessingError, Result};
use crate::models::{BoundingBox, CentroidRecord, GeoPoint, PointOfInterest};
use crate::processors::RadiusFilter;
use crate::rasterizer::{fit_to_viewport, save_png, Rasterizer};
use crate::render::{MapDocument, MapRenderer};
use crate::settings::RenderSettings;
use crate::utils::coordinates::fit_bounds_by_radius;
use crate::utils::filename::output_path;
use crate::utils::progress::ProgressReporter;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// What one centroid's map will show, before anything is drawn.
#[derive(Debug, Clone)]
pub struct CentroidPlan<'a> {
    pub geoid: &'a str,
    pub center: GeoPoint,
    pub points: Vec<&'a PointOfInterest>,
    pub bounds: BoundingBox,
}

/// Filter the points for a centroid and fit its viewport.
pub fn plan_centroid<'a>(
    filter: &RadiusFilter,
    display_radius_miles: f64,
    centroid: &'a CentroidRecord,
    points: &'a [PointOfInterest],
) -> Result<CentroidPlan<'a>> {
    let center = centroid.location()?;
    Ok(CentroidPlan {
        geoid: &centroid.geoid,
        center,
        points: filter.filter(center, points)?,
        bounds: fit_bounds_by_radius(center, display_radius_miles),
    })
}

#[derive(Debug, Clone)]
pub struct RenderedMap {
    pub geoid: String,
    pub output_path: PathBuf,
    pub point_count: usize,
    pub elapsed: Duration,
}

impl RenderedMap {
    /// Progress line: `Saved map_of_<GEOID>.png (<n> points, <secs>s)`
    pub fn describe(&self) -> String {
        let file_name = self
            .output_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.output_path.display().to_string());
        format!(
            "Saved {} ({} points, {:.2}s)",
            file_name,
            self.point_count,
            self.elapsed.as_secs_f64()
        )
    }
}

#[derive(Debug, Clone)]
pub struct CentroidFailure {
    pub geoid: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub rendered: Vec<RenderedMap>,
    pub failures: Vec<CentroidFailure>,
    pub elapsed: Duration,
}

impl RunSummary {
    pub fn summary(&self) -> String {
        format!(
            "Rendered {} map(s), {} failure(s) in {:.1}s",
            self.rendered.len(),
            self.failures.len(),
            self.elapsed.as_secs_f64()
        )
    }
}

/// Load-once, render-sequentially driver for the per-centroid maps.
pub struct MapPipeline<R: Rasterizer> {
    settings: RenderSettings,
    filter: RadiusFilter,
    renderer: MapRenderer,
    rasterizer: R,
}

impl<R: Rasterizer> MapPipeline<R> {
    pub fn new(settings: RenderSettings, rasterizer: R) -> Result<Self> {
        let filter = RadiusFilter::new(settings.filter_radius_miles);
        let renderer = MapRenderer::new(&settings)?;
        Ok(Self {
            settings,
            filter,
            renderer,
            rasterizer,
        })
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    /// Filter, fit and build the map document for one centroid
    pub fn prepare(
        &self,
        centroid: &CentroidRecord,
        points: &[PointOfInterest],
    ) -> Result<MapDocument> {
        let plan = plan_centroid(
            &self.filter,
            self.settings.display_radius_miles,
            centroid,
            points,
        )?;
        debug!(
            geoid = plan.geoid,
            points = plan.points.len(),
            "filtered points of interest"
        );
        self.renderer
            .build_document(plan.geoid, plan.center, &plan.points, plan.bounds)
    }

    pub async fn render_centroid(
        &self,
        centroid: &CentroidRecord,
        points: &[PointOfInterest],
    ) -> Result<RenderedMap> {
        let started = Instant::now();
        let (width, height) = (self.settings.width, self.settings.height);

        let document = self.prepare(centroid, points)?;
        let markup = self.renderer.render_html(&document)?;

        let screenshot = self
            .rasterizer
            .render_to_image(&markup, width, height)
            .await?;
        let image = fit_to_viewport(&screenshot, width, height)?;

        let path = output_path(&self.settings.output_dir, &centroid.geoid);
        save_png(&image, &path)?;

        Ok(RenderedMap {
            geoid: centroid.geoid.clone(),
            output_path: path,
            point_count: document.points.len(),
            elapsed: started.elapsed(),
        })
    }

    /// Render every centroid in order, up to the configured limit.
    ///
    /// The first failure ends the run unless `continue_on_error` is set, in
    /// which case it is recorded and the next centroid is tried. Maps already
    /// written stay on disk either way.
    pub async fn run(
        &self,
        centroids: &[CentroidRecord],
        points: &[PointOfInterest],
        progress: &ProgressReporter,
    ) -> Result<RunSummary> {
        let started = Instant::now();
        let selected = match self.settings.limit {
            Some(limit) => &centroids[..limit.min(centroids.len())],
            None => centroids,
        };

        info!(
            centroids = selected.len(),
            points = points.len(),
            filter_radius = self.settings.filter_radius_miles,
            display_radius = self.settings.display_radius_miles,
            "starting render run"
        );

        let mut summary = RunSummary::default();
        for centroid in selected {
            progress.set_message(&format!("Rendering {}", centroid.geoid));

            match self.render_centroid(centroid, points).await {
                Ok(rendered) => {
                    progress.println(&rendered.describe());
                    info!(geoid = %rendered.geoid, path = %rendered.output_path.display(), "saved map");
                    summary.rendered.push(rendered);
                }
                Err(e) if self.settings.continue_on_error => {
                    warn!(geoid = %centroid.geoid, error = %e, "skipping centroid");
                    progress.println(&format!("Failed {}: {}", centroid.geoid, e));
                    summary.failures.push(CentroidFailure {
                        geoid: centroid.geoid.clone(),
                        error: e.to_string(),
                    });
                }
                Err(e) => return Err(ProcessingError::for_centroid(&centroid.geoid, e)),
            }

            progress.increment(1);
        }

        summary.elapsed = started.elapsed();
        Ok(summary)
    }
}
