pub mod compare;
pub mod compute;
pub mod config;

use clap::ValueEnum;
use simatrix_core::metric::Metric;

#[derive(Clone, Copy, ValueEnum)]
pub enum MetricArg {
    Ssim,
    PixelDiff,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Ssim => Metric::Ssim,
            MetricArg::PixelDiff => Metric::PixelDiff,
        }
    }
}
