use std::env;
use std::path::Path;

use anyhow::Context;
use tta_config::Config;

use crate::cli::Cli;

const REPO_DEFAULT_CONFIG: &str = "config.json";

/// Settings file, then `TTA_*` environment, then command-line flags
pub fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None if Path::new(REPO_DEFAULT_CONFIG).is_file() => {
            tracing::info!("Loading repo default config...");
            Config::load_from_file(Path::new(REPO_DEFAULT_CONFIG))?
        }
        None => Config::default(),
    };

    Ok(apply_cli(config.with_overrides(|key| env::var(key).ok()), cli))
}

fn apply_cli(mut config: Config, cli: &Cli) -> Config {
    if let Some(language) = &cli.language {
        config.language = language.clone();
    }
    if let Some(dir) = &cli.packs_dir {
        config.lexicon.language_packs_dir = dir.clone();
    }
    if cli.no_filter {
        config.lexicon.exclusion_list_filtering = false;
    }
    config
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use clap::Parser;

    use super::*;

    #[test]
    fn flags_override_settings_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"language": "slovene", "lexicon": {{"language_packs_dir": "data"}}}}"#)
            .unwrap();
        let path = file.path().to_str().unwrap();

        let cli = Cli::try_parse_from([
            "tta", "--config", path, "--packs-dir", "/tmp/packs", "--no-filter", "languages",
        ])
        .unwrap();
        let config = load_config(&cli).unwrap();

        assert_eq!(config.lexicon.language_packs_dir, PathBuf::from("/tmp/packs"));
        assert!(!config.lexicon.exclusion_list_filtering);
    }

    #[test]
    fn missing_settings_file_is_an_error() {
        let cli = Cli::try_parse_from(["tta", "--config", "/nonexistent/tta.json", "languages"])
            .unwrap();
        assert!(load_config(&cli).is_err());
    }
}
