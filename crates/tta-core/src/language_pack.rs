use std::fmt;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::LexiconError;

/// Lemma -> forms. Only read for diagnostics.
pub const FORWARD_MAP_FILE: &str = "lexicon.json";
/// Form -> lemmas, the table every lookup goes through
pub const REVERSE_MAP_FILE: &str = "reverse.json";
/// Lemmas the learner already knows, one per line
pub const EXCLUSION_LIST_FILE: &str = "known.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    ForwardMap,
    ReverseMap,
    ExclusionList,
}

impl ResourceKind {
    pub fn file_name(self) -> &'static str {
        match self {
            ResourceKind::ForwardMap => FORWARD_MAP_FILE,
            ResourceKind::ReverseMap => REVERSE_MAP_FILE,
            ResourceKind::ExclusionList => EXCLUSION_LIST_FILE,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::ForwardMap => "forward map",
            ResourceKind::ReverseMap => "reverse map",
            ResourceKind::ExclusionList => "exclusion list",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Absence {
    NotFound,
    NotAFile,
    Inaccessible(io::ErrorKind),
}

/// Result of probing a pack directory for one resource file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Present(PathBuf),
    Absent { path: PathBuf, reason: Absence },
}

impl Resource {
    fn probe(path: PathBuf) -> Self {
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => Resource::Present(path),
            Ok(_) => Resource::Absent {
                path,
                reason: Absence::NotAFile,
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Resource::Absent {
                path,
                reason: Absence::NotFound,
            },
            Err(e) => Resource::Absent {
                path,
                reason: Absence::Inaccessible(e.kind()),
            },
        }
    }

    /// Path of the file if it exists
    pub fn path(&self) -> Option<&Path> {
        match self {
            Resource::Present(path) => Some(path),
            Resource::Absent { .. } => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Resource::Present(_))
    }
}

/// File-backed resources for one language, resolved once and never changed
#[derive(Debug, Clone)]
pub struct LanguagePack {
    id: String,
    dir: PathBuf,
    forward_map: Resource,
    reverse_map: Resource,
    exclusion_list: Resource,
}

impl LanguagePack {
    /// Locate `base_dir/<language>` and probe it for the three resource files.
    ///
    /// Missing files are recorded, not fatal, with one exception: a forward map
    /// without a reverse map is a [`LexiconError::MissingCapability`].
    pub fn resolve(language: &str, base_dir: &Path) -> Result<Self, LexiconError> {
        validate_id(language)?;

        let dir = base_dir.join(language);
        if !dir.is_dir() {
            return Err(LexiconError::UnsupportedLanguage {
                language: language.to_string(),
                reason: format!("no pack directory at {}", dir.display()),
            });
        }

        let pack = Self {
            id: language.to_string(),
            forward_map: Resource::probe(dir.join(FORWARD_MAP_FILE)),
            reverse_map: Resource::probe(dir.join(REVERSE_MAP_FILE)),
            exclusion_list: Resource::probe(dir.join(EXCLUSION_LIST_FILE)),
            dir,
        };

        if pack.forward_map.is_present() && !pack.reverse_map.is_present() {
            return Err(LexiconError::MissingCapability {
                language: pack.id,
            });
        }

        tracing::debug!(
            language = %pack.id,
            forward = pack.forward_map.is_present(),
            reverse = pack.reverse_map.is_present(),
            exclusion = pack.exclusion_list.is_present(),
            "Resolved language pack"
        );

        Ok(pack)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn resource(&self, kind: ResourceKind) -> &Resource {
        match kind {
            ResourceKind::ForwardMap => &self.forward_map,
            ResourceKind::ReverseMap => &self.reverse_map,
            ResourceKind::ExclusionList => &self.exclusion_list,
        }
    }

    /// No mapping tables at all; every word will come back unresolved
    pub fn is_empty(&self) -> bool {
        !self.forward_map.is_present() && !self.reverse_map.is_present()
    }
}

/// Shorthand for [`LanguagePack::resolve`]
pub fn resolve(language: &str, base_dir: &Path) -> Result<LanguagePack, LexiconError> {
    LanguagePack::resolve(language, base_dir)
}

/// Names of the pack directories under `base_dir`, sorted.
/// An unreadable or missing `base_dir` yields no languages.
pub fn list_languages(base_dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(base_dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Cannot list language packs in {}: {}", base_dir.display(), e);
            return Vec::new();
        }
    };

    let mut languages: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();

    languages.sort();
    languages
}

/// A language id must name exactly one directory below the base dir
fn validate_id(language: &str) -> Result<(), LexiconError> {
    let mut components = Path::new(language).components();
    let single_dir = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );

    if single_dir && !language.contains(['/', '\\']) {
        Ok(())
    } else {
        Err(LexiconError::UnsupportedLanguage {
            language: language.to_string(),
            reason: "not a valid language identifier".to_string(),
        })
    }
}
