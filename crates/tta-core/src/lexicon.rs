use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use tta_config::lexicon::LexiconConfig;

use crate::error::LexiconError;
use crate::language_pack::{LanguagePack, ResourceKind};
use crate::loader::PackLoader;
use crate::mapping::{ExclusionSet, ReverseMapping};

/// Prefix for words missing from the reverse map
pub const UNKNOWN_MARKER: &str = "*";

/// True for entries synthesized for out-of-vocabulary words
pub fn is_unknown_marker(lemma: &str) -> bool {
    lemma.starts_with(UNKNOWN_MARKER)
}

/// Form -> lemma lookup used by the analyzer
pub trait LemmaLookup: Send + Sync {
    /// Lemmas to study for an already normalized word. Empty means the word
    /// is known; an unknown word yields a single marked entry.
    fn find_lemmas(&self, word: &str) -> BTreeSet<String>;
}

/// How a word resolved against the lexicon
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// In the dictionary with at least one lemma left after filtering
    Study(BTreeSet<String>),
    /// In the dictionary, every lemma excluded
    Known,
    /// Not in the dictionary
    Unknown,
}

impl Resolution {
    pub fn into_lemmas(self, word: &str) -> BTreeSet<String> {
        match self {
            Resolution::Study(lemmas) => lemmas,
            Resolution::Known => BTreeSet::new(),
            Resolution::Unknown => BTreeSet::from([format!("{UNKNOWN_MARKER}{word}")]),
        }
    }
}

/// Loaded reverse map plus known-word filter for one language
#[derive(Debug)]
pub struct Lexicon {
    language: String,
    forward_map: Option<PathBuf>,
    reverse: ReverseMapping,
    excluded: ExclusionSet,
}

impl Lexicon {
    /// Resolve `language` under the configured packs dir and load its tables.
    ///
    /// A broken exclusion list only disables filtering; a broken reverse map
    /// fails the load.
    pub fn load(language: &str, config: &LexiconConfig) -> Result<Self, LexiconError> {
        let pack = LanguagePack::resolve(language, &config.language_packs_dir)?;

        let reverse = match pack.resource(ResourceKind::ReverseMap).path() {
            Some(path) => PackLoader::load_reverse_map(path)?,
            None => {
                tracing::warn!(
                    "Language pack '{}' has no reverse map, every word will be unresolved",
                    pack.id()
                );
                ReverseMapping::new()
            }
        };

        let excluded = match pack.resource(ResourceKind::ExclusionList).path() {
            Some(path) if config.exclusion_list_filtering => {
                PackLoader::load_exclusion_list(path).unwrap_or_else(|e| {
                    tracing::warn!("{}; exclusion filtering disabled", e);
                    ExclusionSet::new()
                })
            }
            Some(_) => ExclusionSet::new(),
            None => {
                if config.exclusion_list_filtering {
                    tracing::info!(
                        "Language pack '{}' has no exclusion list, filtering disabled",
                        pack.id()
                    );
                }
                ExclusionSet::new()
            }
        };

        Ok(Self {
            language: pack.id().to_string(),
            forward_map: pack
                .resource(ResourceKind::ForwardMap)
                .path()
                .map(|p| p.to_path_buf()),
            reverse,
            excluded,
        })
    }

    /// Build a lexicon from tables already in memory
    pub fn from_mappings(
        language: impl Into<String>,
        reverse: ReverseMapping,
        excluded: ExclusionSet,
    ) -> Self {
        Self {
            language: language.into(),
            forward_map: None,
            reverse,
            excluded,
        }
    }

    /// Lemmas to study for `word`, see [`LemmaLookup::find_lemmas`].
    /// No normalization happens here.
    pub fn find_lemmas(&self, word: &str) -> BTreeSet<String> {
        self.resolve(word).into_lemmas(word)
    }

    pub fn resolve(&self, word: &str) -> Resolution {
        let Some(lemmas) = self.reverse.get(word) else {
            return Resolution::Unknown;
        };

        let unknown: BTreeSet<String> = lemmas
            .iter()
            .filter(|lemma| !self.excluded.contains(lemma))
            .cloned()
            .collect();

        if unknown.is_empty() {
            Resolution::Known
        } else {
            Resolution::Study(unknown)
        }
    }

    /// Known lemmas with the forms the forward map lists for them.
    /// Empty when the pack has no forward map or filtering is off.
    pub fn known_variants(&self) -> Result<BTreeMap<String, Vec<String>>, LexiconError> {
        let Some(path) = &self.forward_map else {
            return Ok(BTreeMap::new());
        };
        if self.excluded.is_empty() {
            return Ok(BTreeMap::new());
        }

        let forward = PackLoader::load_forward_map(path)?;
        Ok(self
            .excluded
            .iter()
            .map(|lemma| (lemma.to_string(), forward.forms(lemma).to_vec()))
            .collect())
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Number of word forms in the reverse map
    pub fn entry_count(&self) -> usize {
        self.reverse.len()
    }

    pub fn excluded_count(&self) -> usize {
        self.excluded.len()
    }

    pub fn filtering_active(&self) -> bool {
        !self.excluded.is_empty()
    }
}

impl LemmaLookup for Lexicon {
    fn find_lemmas(&self, word: &str) -> BTreeSet<String> {
        Lexicon::find_lemmas(self, word)
    }
}
