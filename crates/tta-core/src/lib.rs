pub mod analyzer;
pub mod error;
pub mod frequency;
pub mod language_pack;
pub mod lexicon;
pub mod loader;
pub mod mapping;
pub mod preprocess;
pub mod tokenizer;

#[cfg(test)]
mod tests;

pub use analyzer::{Analysis, Analyzer, analyze};
pub use error::LexiconError;
pub use frequency::FrequencyTable;
pub use language_pack::{LanguagePack, Resource, ResourceKind, list_languages, resolve};
pub use lexicon::{LemmaLookup, Lexicon, Resolution, UNKNOWN_MARKER, is_unknown_marker};
pub use tokenizer::{Tokenizer, tokenize};
