// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_ANNOTATOR, DEFAULT_TAGRAM_ORDER, FALLBACK_MAX_CONCURRENCY};
use crate::errors::FailureStrategy;
use crate::observability::messages::config::ConfigLoaded;
use crate::observability::messages::StructuredLog;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Configuration for a feature extraction run.
///
/// Every field is optional; an empty file selects every feature with the
/// rule-based annotator and a tag-gram order of 3.
///
/// # Fields
/// * `tagram_order` - Largest tag-gram size emitted (at least 1)
/// * `annotator` - Local annotator implementation name
/// * `failure_strategy` - How batch runs treat samples with failed features
/// * `executor_options` - Batch worker options
/// * `features` - Optional subset of feature names, in output order
///
/// # Example
/// ```yaml
/// tagram_order: 3
/// annotator: rule_based
/// failure_strategy: continue_on_error
/// executor_options:
///   max_concurrency: 4
/// features: [entropy, vowel_count, noun_density]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "default_tagram_order")]
    pub tagram_order: usize,
    #[serde(default = "default_annotator")]
    pub annotator: String,
    #[serde(default)]
    pub failure_strategy: FailureStrategy,
    #[serde(default)]
    pub executor_options: ExecutorOptions,
    #[serde(default)]
    pub features: Option<Vec<String>>,
}

fn default_tagram_order() -> usize {
    DEFAULT_TAGRAM_ORDER
}

fn default_annotator() -> String {
    DEFAULT_ANNOTATOR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tagram_order: DEFAULT_TAGRAM_ORDER,
            annotator: default_annotator(),
            failure_strategy: FailureStrategy::default(),
            executor_options: ExecutorOptions::default(),
            features: None,
        }
    }
}

/// Batch executor options.
///
/// # Fields
/// * `max_concurrency` - Samples extracted at once (defaults to available parallelism)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExecutorOptions {
    pub max_concurrency: Option<usize>,
}

impl ExecutorOptions {
    /// The configured concurrency, or the machine's available parallelism.
    pub fn resolved_max_concurrency(&self) -> usize {
        self.max_concurrency
            .filter(|count| *count > 0)
            .unwrap_or_else(|| {
                std::thread::available_parallelism()
                    .map(|count| count.get())
                    .unwrap_or(FALLBACK_MAX_CONCURRENCY)
            })
    }
}

/// On-disk config format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some(extension) if extension.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }

    pub fn parse(&self, content: &str) -> Result<Config, Box<dyn std::error::Error>> {
        let cfg = match self {
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };
        Ok(cfg)
    }

    fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Toml => "toml",
        }
    }
}

/// Load a config from a YAML file, or TOML when the extension is `.toml`
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, Box<dyn std::error::Error>> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path);
    let content = fs::read_to_string(path)?;
    let cfg = format.parse(&content)?;

    ConfigLoaded {
        path: &path.display().to_string(),
        format: format.as_str(),
        feature_count: cfg.features.as_ref().map(Vec::len),
    }
    .log();
    Ok(cfg)
}

/// Load and validate a config file
///
/// Validation covers the tag-gram order, the annotator name, the feature
/// selection and the acyclicity of the feature catalog. All errors found are
/// reported together.
pub fn load_and_validate_config<P: AsRef<Path>>(
    path: P,
) -> Result<Config, Box<dyn std::error::Error>> {
    let cfg = load_config(path)?;

    if let Err(validation_errors) = crate::config::validate_config(&cfg) {
        let error_messages: Vec<String> = validation_errors.iter().map(|e| e.to_string()).collect();
        let combined_error = format!(
            "Configuration validation failed:\n{}",
            error_messages.join("\n")
        );
        return Err(combined_error.into());
    }

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_full_config() {
        let yaml = r#"
tagram_order: 2
annotator: rule_based
failure_strategy: best_effort
executor_options:
  max_concurrency: 8
features: [entropy, vowel_count]
"#;

        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.tagram_order, 2);
        assert_eq!(cfg.failure_strategy, FailureStrategy::BestEffort);
        assert_eq!(cfg.executor_options.resolved_max_concurrency(), 8);
        assert_eq!(
            cfg.features,
            Some(vec!["entropy".to_string(), "vowel_count".to_string()])
        );
    }

    #[test]
    fn parse_empty_config_uses_defaults() {
        let cfg: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.tagram_order, 3);
        assert_eq!(cfg.annotator, "rule_based");
        assert_eq!(cfg.failure_strategy, FailureStrategy::ContinueOnError);
        assert!(cfg.executor_options.resolved_max_concurrency() >= 1);
    }

    #[test]
    fn test_load_toml_config() {
        let file = write_config(
            ".toml",
            r#"
tagram_order = 4
failure_strategy = "fail_fast"
features = ["tags_4gram"]

[executor_options]
max_concurrency = 2
"#,
        );

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.tagram_order, 4);
        assert_eq!(cfg.failure_strategy, FailureStrategy::FailFast);
        assert_eq!(cfg.executor_options.max_concurrency, Some(2));
    }

    #[test]
    fn test_load_and_validate_valid_config() {
        let file = write_config(".yaml", "features: [entropy, noun_density]\n");
        let result = load_and_validate_config(file.path());
        assert!(result.is_ok());
    }

    #[test]
    fn test_load_and_validate_reports_every_error() {
        let file = write_config(
            ".yaml",
            r#"
tagram_order: 0
annotator: spacy
features: [entropy, syllable_count, entropy]
"#,
        );

        let error_msg = load_and_validate_config(file.path()).unwrap_err().to_string();
        assert!(error_msg.contains("Tag-gram order must be at least 1"));
        assert!(error_msg.contains("Unknown annotator: 'spacy'"));
        assert!(error_msg.contains("Unknown feature: 'syllable_count'"));
        assert!(error_msg.contains("Duplicate feature in selection: 'entropy'"));
    }

    #[test]
    fn test_load_config_rejects_unknown_strategy() {
        let file = write_config(".yaml", "failure_strategy: retry_forever\n");
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_load_config_missing_file() {
        assert!(load_config("/nonexistent/lexigraph.yaml").is_err());
    }
}
