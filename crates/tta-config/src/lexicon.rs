use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_exclusion_list_filtering() -> bool {
    true
}

fn default_language_packs_dir() -> PathBuf {
    PathBuf::from("languages")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Drop lemmas listed in the pack's exclusion list
    #[serde(default = "default_exclusion_list_filtering")]
    pub exclusion_list_filtering: bool,
    /// Directory holding one sub-directory per language pack
    #[serde(default = "default_language_packs_dir")]
    pub language_packs_dir: PathBuf,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            exclusion_list_filtering: default_exclusion_list_filtering(),
            language_packs_dir: default_language_packs_dir(),
        }
    }
}
