use centroid_maps::cli::{run, Cli};
use centroid_maps::error::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
