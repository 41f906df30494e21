use std::path::PathBuf;

use simatrix_core::config::MatrixConfig;
use simatrix_core::metric::Metric;

#[test]
fn test_config_toml_roundtrip() {
    let config = MatrixConfig {
        input: PathBuf::from("shots"),
        output: PathBuf::from("out/matrix.csv"),
        metric: Metric::PixelDiff,
    };

    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: MatrixConfig = toml::from_str(&text).unwrap();

    assert_eq!(parsed.input, config.input);
    assert_eq!(parsed.output, config.output);
    assert_eq!(parsed.metric, Metric::PixelDiff);
}

#[test]
fn test_metric_defaults_to_ssim() {
    let parsed: MatrixConfig = toml::from_str(
        r#"
input = "images"
output = "similarity.csv"
"#,
    )
    .unwrap();

    assert_eq!(parsed.metric, Metric::Ssim);
}
