use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::lexicon::LexiconConfig;
use self::output::OutputConfig;

pub mod lexicon;
pub mod output;

pub use self::output::View;

fn default_language() -> String {
    "slovene".to_string()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language pack to resolve, e.g. "slovene"
    #[serde(default = "default_language")]
    pub language: String,
    pub lexicon: LexiconConfig,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            lexicon: LexiconConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Defaults overridden by `TTA_*` environment variables
    pub fn new() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Load a JSON settings file. Missing fields take their defaults.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply overrides from a key lookup (normally the process environment).
    /// Values that fail to parse are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(language) = lookup("TTA_LANGUAGE").filter(|v| !v.trim().is_empty()) {
            self.language = language.trim().to_string();
        }

        if let Some(filtering) = lookup("TTA_EXCLUSION_FILTERING").and_then(|v| v.parse().ok()) {
            self.lexicon.exclusion_list_filtering = filtering;
        }

        if let Some(dir) = lookup("TTA_LANGUAGE_PACKS_DIR").filter(|v| !v.is_empty()) {
            self.lexicon.language_packs_dir = PathBuf::from(dir);
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_enable_filtering_for_slovene() {
        let config = Config::default();
        assert_eq!(config.language, "slovene");
        assert!(config.lexicon.exclusion_list_filtering);
        assert_eq!(config.lexicon.language_packs_dir, PathBuf::from("languages"));
        assert_eq!(config.output.view, View::Lemmas);
        assert!(config.output.show_counts);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"lexicon": {"exclusion_list_filtering": false}}"#).unwrap();
        assert_eq!(config.language, "slovene");
        assert!(!config.lexicon.exclusion_list_filtering);
        assert_eq!(config.lexicon.language_packs_dir, PathBuf::from("languages"));
    }

    #[test]
    fn overrides_apply_and_bad_values_are_ignored() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("TTA_LANGUAGE", "pali"),
            ("TTA_EXCLUSION_FILTERING", "maybe"),
            ("TTA_LANGUAGE_PACKS_DIR", "/srv/packs"),
        ]);

        let config = Config::default().with_overrides(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.language, "pali");
        assert!(config.lexicon.exclusion_list_filtering);
        assert_eq!(config.lexicon.language_packs_dir, PathBuf::from("/srv/packs"));
    }

    #[test]
    fn load_from_file_reads_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"language": "pali", "output": {{"view": "forms", "show_counts": false}}}}"#
        )
        .unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.language, "pali");
        assert_eq!(config.output.view, View::Forms);
        assert!(!config.output.show_counts);
    }

    #[test]
    fn load_from_file_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
