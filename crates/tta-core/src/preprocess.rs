use unicode_normalization::{UnicodeNormalization, is_nfc};

/// Canonically composed form of `text`, reusing the allocation when it already is
pub fn nfc(text: String) -> String {
    if is_nfc(&text) {
        text
    } else {
        text.nfc().collect()
    }
}

pub trait Preprocessor {
    // Default: canonical composition so decomposed accents match dictionary keys
    fn process(&self, text: &str) -> String {
        text.nfc().collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
