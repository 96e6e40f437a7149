use std::path::PathBuf;

use crate::language_pack::ResourceKind;

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// The pack ships a forward map without the reverse map lookups need.
    /// Reverse maps are produced offline, never at runtime.
    #[error("Language pack '{language}' has a forward map but no reverse map")]
    MissingCapability { language: String },

    #[error("Cannot load {resource} from {}: {reason}", path.display())]
    ResourceNotFound {
        resource: ResourceKind,
        path: PathBuf,
        reason: String,
    },

    #[error("Unsupported language '{language}': {reason}")]
    UnsupportedLanguage { language: String, reason: String },
}
