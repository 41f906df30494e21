use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::metric::Metric;

/// Configuration for one matrix run, TOML-round-trippable.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatrixConfig {
    /// Directory of input images.
    pub input: PathBuf,
    /// Destination for the serialized matrix.
    pub output: PathBuf,
    #[serde(default)]
    pub metric: Metric,
}
