use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use simatrix_core::io::image_io::load_image;
use simatrix_core::metric::compare_with_metric;

use crate::commands::MetricArg;

#[derive(Args)]
pub struct CompareArgs {
    /// First image
    pub image_a: PathBuf,

    /// Second image
    pub image_b: PathBuf,

    /// Similarity metric to use
    #[arg(long, value_enum, default_value = "ssim")]
    pub metric: MetricArg,
}

pub fn run(args: &CompareArgs) -> Result<()> {
    let a = load_image(&args.image_a)
        .with_context(|| format!("Failed to load {}", args.image_a.display()))?;
    let b = load_image(&args.image_b)
        .with_context(|| format!("Failed to load {}", args.image_b.display()))?;

    let score = compare_with_metric(&a, &b, args.metric.into())?;

    println!(
        "{} vs {}",
        args.image_a.display(),
        args.image_b.display()
    );
    println!("Similarity: {:.6}", score);

    Ok(())
}
