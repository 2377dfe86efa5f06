use config::{Config, ConfigError, File};
use extractors::AnalysisOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub analysis: AnalysisOptions,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    #[default]
    Markdown,
    Text,
    Csv,
}

const DEFAULT_CONFIG: &str = r#"
[analysis]
# Documents with fewer characters of text are reported as too short
min_text_length = 50
# Characters of extracted text kept in the result preview
preview_chars = 3000

[output]
# json, markdown, text or csv
format = "markdown"
"#;

impl AnalyzerConfig {
    /// Load the configuration from `path`, or from the per-user config file,
    /// which is created with defaults on first run.
    pub fn load(path: Option<&Path>) -> Result<(Self, PathBuf), ConfigError> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let config_path = get_config_path();
                ensure_default_config(&config_path)?;
                config_path
            }
        };

        let builder = Config::builder()
            .add_source(File::from(config_path.clone()))
            .build()?;

        let config: AnalyzerConfig = builder.try_deserialize()?;

        Ok((config, config_path))
    }
}

fn ensure_default_config(config_path: &Path) -> Result<(), ConfigError> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::Message(format!("Failed to create config directory: {e}"))
        })?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| ConfigError::Message(format!("Failed to write default config: {e}")))
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("cvtheque").join("analyzer.toml")
    } else {
        PathBuf::from("analyzer.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_defaults() {
        let parsed: AnalyzerConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(parsed, AnalyzerConfig::default());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analyzer.toml");
        std::fs::write(&path, "[analysis]\nmin_text_length = 10\n\n[output]\nformat = \"csv\"\n")
            .unwrap();

        let (config, loaded_from) = AnalyzerConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded_from, path);
        assert_eq!(config.analysis.min_text_length, 10);
        assert_eq!(config.analysis.preview_chars, 3000);
        assert_eq!(config.output.format, OutputFormat::Csv);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        std::fs::write(&path, "").unwrap();

        let (config, _) = AnalyzerConfig::load(Some(&path)).unwrap();
        assert_eq!(config, AnalyzerConfig::default());
    }

    #[test]
    fn test_default_file_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cvtheque").join("analyzer.toml");

        ensure_default_config(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        assert!(AnalyzerConfig::load(Some(Path::new("/nonexistent/analyzer.toml"))).is_err());
    }
}
