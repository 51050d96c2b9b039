use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "centroid-maps")]
#[command(about = "Render a map of nearby points of interest for every centroid")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Settings file (TOML, YAML or JSON)")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render one PNG per centroid through a headless browser
    Render {
        #[command(flatten)]
        inputs: InputArgs,

        #[arg(short, long, help = "Directory for map_of_<GEOID>.png files")]
        output_dir: Option<PathBuf>,

        #[arg(long, help = "Image width in pixels [default: 1200]")]
        width: Option<u32>,

        #[arg(long, help = "Image height in pixels [default: 800]")]
        height: Option<u32>,

        #[arg(long, help = "Headless Chrome/Chromium binary [default: google-chrome]")]
        browser: Option<String>,

        #[arg(long, help = "Keep going after a centroid fails")]
        continue_on_error: bool,

        #[arg(long, help = "Print plain lines instead of a progress bar")]
        no_progress: bool,
    },

    /// Show what each map would contain without launching a browser
    Preview {
        #[command(flatten)]
        inputs: InputArgs,
    },
}

#[derive(Args)]
pub struct InputArgs {
    #[arg(short, long, help = "Centroid CSV (GEOID, centroid_lat, centroid_lon)")]
    pub centroids: PathBuf,

    #[arg(short, long, help = "Points of interest CSV (latitude, longitude, name)")]
    pub points: PathBuf,

    #[arg(long, help = "Keep points within this many miles [default: 500]")]
    pub filter_radius: Option<f64>,

    #[arg(long, help = "Fit the viewport to this many miles [default: 415]")]
    pub display_radius: Option<f64>,

    #[arg(short, long, help = "Only process the first N centroids")]
    pub limit: Option<usize>,
}
