//! keelson — render hull profile descriptions to MagicaVoxel models.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "keelson")]
#[command(about = "Render hull profile descriptions to .vox voxel models", long_about = None)]
struct Cli {
    /// Hull description files (JSON).
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    for file in &cli.files {
        render_file(file)?;
    }

    Ok(())
}

fn render_file(file: &PathBuf) -> Result<()> {
    let hull_file = keelson_hull::HullFile::from_file(file)
        .with_context(|| format!("reading {}", file.display()))?;

    keelson_raster::write_hull_file(&hull_file)
        .with_context(|| format!("rendering {}", file.display()))?;

    println!(
        "{}: {} hull(s) -> {}",
        file.display(),
        hull_file.hulls.len(),
        hull_file.file_name
    );
    Ok(())
}
