use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use simatrix_core::config::MatrixConfig;
use simatrix_core::io::image_io::{load_image, scan_directory};
use simatrix_core::io::matrix_io::write_matrix;
use simatrix_core::matrix::fill::{compute_matrix_with_progress, pair_count};
use simatrix_core::metric::Metric;

use crate::commands::MetricArg;

#[derive(Args)]
pub struct ComputeArgs {
    /// Directory of input images
    pub input: Option<PathBuf>,

    /// Output matrix file
    pub output: Option<PathBuf>,

    /// Similarity metric to use
    #[arg(long, value_enum, default_value = "ssim")]
    pub metric: MetricArg,

    /// Read input/output/metric from a TOML config instead
    #[arg(long, conflicts_with_all = ["input", "output"])]
    pub config: Option<PathBuf>,
}

fn resolve_config(args: &ComputeArgs) -> Result<MatrixConfig> {
    if let Some(ref path) = args.config {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: MatrixConfig = toml::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        return Ok(config);
    }

    match (&args.input, &args.output) {
        (Some(input), Some(output)) => Ok(MatrixConfig {
            input: input.clone(),
            output: output.clone(),
            metric: args.metric.into(),
        }),
        _ => bail!("provide <INPUT> and <OUTPUT>, or --config <FILE>"),
    }
}

pub fn run(args: &ComputeArgs) -> Result<()> {
    let config = resolve_config(args)?;

    let paths = scan_directory(&config.input)?;
    println!("Found {} image files in {}", paths.len(), config.input.display());

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Loading images");

    let mut frames = Vec::with_capacity(paths.len());
    for path in &paths {
        match load_image(path) {
            Ok(frame) => frames.push(frame),
            Err(err) => warn!(path = %path.display(), %err, "skipping unreadable image"),
        }
        pb.inc(1);
    }
    pb.finish_with_message(format!("Loaded {}/{} images", frames.len(), paths.len()));

    if frames.is_empty() {
        bail!(
            "could not load any image from {}",
            config.input.display()
        );
    }

    let pairs = pair_count(frames.len());
    let pb = ProgressBar::new(pairs as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Scoring pairs");

    let matrix = compute_matrix_with_progress(&frames, config.metric, |done| {
        pb.set_position(done as u64);
    })?;
    pb.finish_with_message("Scoring complete");

    write_matrix(&matrix, &config.output)
        .with_context(|| format!("Failed to write matrix to {}", config.output.display()))?;

    print_summary(&config, frames.len(), pairs);
    Ok(())
}

fn print_summary(config: &MatrixConfig, n_images: usize, pairs: usize) {
    let header = Style::new().cyan().bold();
    let label = Style::new().dim();
    let value = Style::new().bold().white();
    let path = Style::new().underlined();

    let metric_name = match config.metric {
        Metric::Ssim => "ssim",
        Metric::PixelDiff => "pixel-diff",
    };

    println!();
    println!("  {}", header.apply_to("Similarity Matrix"));
    println!(
        "  {:<10}{}",
        label.apply_to("Images"),
        value.apply_to(n_images)
    );
    println!("  {:<10}{}", label.apply_to("Pairs"), value.apply_to(pairs));
    println!(
        "  {:<10}{}",
        label.apply_to("Metric"),
        value.apply_to(metric_name)
    );
    println!(
        "  {:<10}{}",
        label.apply_to("Output"),
        path.apply_to(config.output.display())
    );
}
