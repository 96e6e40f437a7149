use std::fs;
use std::path::Path;

use crate::error::LexiconError;
use crate::language_pack::ResourceKind;
use crate::mapping::{ExclusionSet, ForwardMapping, ReverseMapping};

/// Reads language pack resources from disk
pub struct PackLoader;

impl PackLoader {
    /// Load the form -> lemmas table
    pub fn load_reverse_map(path: &Path) -> Result<ReverseMapping, LexiconError> {
        tracing::info!("Loading reverse map from: {}", path.display());
        let json = read(ResourceKind::ReverseMap, path)?;
        let mapping = ReverseMapping::from_json(&json)
            .map_err(|e| not_found(ResourceKind::ReverseMap, path, e))?;
        tracing::info!("Loaded {} word forms", mapping.len());
        Ok(mapping)
    }

    /// Load the lemma -> forms table
    pub fn load_forward_map(path: &Path) -> Result<ForwardMapping, LexiconError> {
        tracing::info!("Loading forward map from: {}", path.display());
        let json = read(ResourceKind::ForwardMap, path)?;
        let mapping = ForwardMapping::from_json(&json)
            .map_err(|e| not_found(ResourceKind::ForwardMap, path, e))?;
        tracing::info!("Loaded {} lemmas", mapping.len());
        Ok(mapping)
    }

    /// Load the known-word list
    pub fn load_exclusion_list(path: &Path) -> Result<ExclusionSet, LexiconError> {
        tracing::info!("Loading exclusion list from: {}", path.display());
        let content = read(ResourceKind::ExclusionList, path)?;
        let set = ExclusionSet::parse(&content);
        tracing::info!("Loaded {} known lemmas", set.len());
        Ok(set)
    }
}

fn read(resource: ResourceKind, path: &Path) -> Result<String, LexiconError> {
    fs::read_to_string(path).map_err(|e| not_found(resource, path, e))
}

fn not_found(resource: ResourceKind, path: &Path, reason: impl ToString) -> LexiconError {
    LexiconError::ResourceNotFound {
        resource,
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
