use crate::cli::args::{Cli, Commands, InputArgs};
use crate::error::Result;
use crate::models::{CentroidRecord, PointOfInterest};
use crate::processors::{plan_centroid, MapPipeline, RadiusFilter};
use crate::rasterizer::HeadlessBrowser;
use crate::readers::{CentroidReader, PointReader};
use crate::settings::RenderSettings;
use crate::utils::progress::ProgressReporter;
use tracing::Level;
use validator::Validate;

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    let mut settings = RenderSettings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Render {
            inputs,
            output_dir,
            width,
            height,
            browser,
            continue_on_error,
            no_progress,
        } => {
            apply_input_overrides(&inputs, &mut settings);
            if let Some(dir) = output_dir {
                settings.output_dir = dir;
            }
            if let Some(width) = width {
                settings.width = width;
            }
            if let Some(height) = height {
                settings.height = height;
            }
            if let Some(browser) = browser {
                settings.browser_binary = browser;
            }
            settings.continue_on_error |= continue_on_error;
            settings.show_progress &= !no_progress;
            settings.validate()?;

            println!("Rendering centroid maps...");
            println!("Centroids: {}", inputs.centroids.display());
            println!("Points of interest: {}", inputs.points.display());
            println!("Output directory: {}", settings.output_dir.display());
            println!(
                "Image: {}x{}, filter radius: {} mi, display radius: {} mi",
                settings.width,
                settings.height,
                settings.filter_radius_miles,
                settings.display_radius_miles
            );

            let (centroids, points) = load_inputs(&inputs, settings.show_progress)?;

            let total = settings
                .limit
                .map_or(centroids.len(), |limit| limit.min(centroids.len()));
            let show_progress = settings.show_progress;
            let rasterizer = HeadlessBrowser::from_settings(&settings)?;
            let pipeline = MapPipeline::new(settings, rasterizer)?;

            let progress = ProgressReporter::new(total as u64, "Rendering maps...", show_progress);
            let summary = pipeline.run(&centroids, &points, &progress).await?;
            progress.finish_with_message(&summary.summary());

            if !summary.failures.is_empty() {
                println!("\nFailed centroids:");
                for failure in &summary.failures {
                    println!("  {}: {}", failure.geoid, failure.error);
                }
            }
        }

        Commands::Preview { inputs } => {
            apply_input_overrides(&inputs, &mut settings);
            settings.validate()?;

            let (centroids, points) = load_inputs(&inputs, false)?;
            let filter = RadiusFilter::new(settings.filter_radius_miles);
            let selected = match settings.limit {
                Some(limit) => &centroids[..limit.min(centroids.len())],
                None => &centroids[..],
            };

            println!(
                "Previewing {} centroid(s) against {} point(s) of interest",
                selected.len(),
                points.len()
            );
            for centroid in selected {
                match plan_centroid(&filter, settings.display_radius_miles, centroid, &points) {
                    Ok(plan) => println!(
                        "{}: {} point(s) within {} mi, SW ({:.4}, {:.4}) NE ({:.4}, {:.4})",
                        plan.geoid,
                        plan.points.len(),
                        settings.filter_radius_miles,
                        plan.bounds.south,
                        plan.bounds.west,
                        plan.bounds.north,
                        plan.bounds.east
                    ),
                    Err(e) => println!("{}: {}", centroid.geoid, e),
                }
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    // A subscriber may already be installed when embedded or under test
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

fn apply_input_overrides(inputs: &InputArgs, settings: &mut RenderSettings) {
    if let Some(radius) = inputs.filter_radius {
        settings.filter_radius_miles = radius;
    }
    if let Some(radius) = inputs.display_radius {
        settings.display_radius_miles = radius;
    }
    if inputs.limit.is_some() {
        settings.limit = inputs.limit;
    }
}

fn load_inputs(
    inputs: &InputArgs,
    show_progress: bool,
) -> Result<(Vec<CentroidRecord>, Vec<PointOfInterest>)> {
    let spinner = ProgressReporter::new_spinner("Loading input files...", show_progress);

    let points = PointReader::new().read_points(&inputs.points)?;
    let centroids = CentroidReader::new().read_centroids(&inputs.centroids)?;

    spinner.finish_with_message(&format!(
        "Loaded {} centroid(s) and {} point(s) of interest",
        centroids.len(),
        points.len()
    ));
    Ok((centroids, points))
}
