//! Config parsing and persistence

use littime::config::{Config, EstimatorConfig, OutputConfig};
use littime::{HyphenPolicy, ReadabilityFormula};
use std::fs;
use tempfile::TempDir;

#[test]
fn default_values() {
    let config = Config::default();
    assert_eq!(config.estimator.default_reading_speed, 180);
    assert_eq!(config.estimator.default_workers, 4);
    assert!(!config.estimator.has_visuals);
    assert_eq!(config.estimator.hyphenated_words, HyphenPolicy::Join);
    assert_eq!(config.estimator.formula, ReadabilityFormula::Russian);
    assert_eq!(config.output.file, "littime_results.json");
}

#[test]
fn empty_toml_gives_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let toml_str = r#"
[estimator]
default_reading_speed = 250
hyphenated_words = "split"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.estimator.default_reading_speed, 250);
    assert_eq!(config.estimator.hyphenated_words, HyphenPolicy::Split);
    assert_eq!(config.estimator.default_workers, 4);
    assert_eq!(config.output, OutputConfig::default());
}

#[test]
fn full_toml_parses() {
    let toml_str = r#"
[estimator]
default_reading_speed = 150
default_workers = 2
has_visuals = true
hyphenated_words = "join"
formula = "flesch"

[output]
file = "reports/result.json"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(
        config.estimator,
        EstimatorConfig {
            default_reading_speed: 150,
            default_workers: 2,
            has_visuals: true,
            hyphenated_words: HyphenPolicy::Join,
            formula: ReadabilityFormula::Flesch,
        }
    );
    assert_eq!(config.output.file, "reports/result.json");
}

#[test]
fn unknown_formula_fails_to_parse() {
    let result: Result<Config, _> = toml::from_str("[estimator]\nformula = \"gunning\"\n");
    assert!(result.is_err());
}

#[test]
fn serialized_config_uses_lowercase_enums() {
    let toml_str = toml::to_string_pretty(&Config::default()).unwrap();
    assert!(toml_str.contains("[estimator]"));
    assert!(toml_str.contains("hyphenated_words = \"join\""));
    assert!(toml_str.contains("formula = \"russian\""));
    assert!(toml_str.contains("[output]"));
}

#[test]
fn load_from_missing_file_fails_with_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nope.toml");
    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("nope.toml"));
}

#[test]
fn load_from_malformed_file_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("littime.toml");
    fs::write(&path, "[estimator\n").unwrap();
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn load_from_rejects_zero_speed() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("littime.toml");
    fs::write(&path, "[estimator]\ndefault_reading_speed = 0\n").unwrap();
    assert!(Config::load_from(&path).is_err());
}
