use unicode_segmentation::UnicodeSegmentation;

use crate::preprocess::{DefaultPreprocessor, Preprocessor};

/// Splits text into sentence-bounded word tokens
#[derive(Debug, Clone, Default)]
pub struct Tokenizer<P = DefaultPreprocessor> {
    preprocessor: P,
}

impl<P: Preprocessor> Tokenizer<P> {
    pub fn new(preprocessor: P) -> Self {
        Self { preprocessor }
    }

    /// Word tokens in document order.
    ///
    /// Only the first token of each sentence is lower-cased, so a capitalized
    /// word mid-sentence keeps its case.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let text = self.preprocessor.process(text);
        let mut tokens = Vec::new();

        for sentence in text.unicode_sentences() {
            let start = tokens.len();
            tokens.extend(words(sentence).map(str::to_string));
            if let Some(first) = tokens.get_mut(start) {
                *first = first.to_lowercase();
            }
        }

        tokens
    }
}

/// Tokenize with the default preprocessor
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::<DefaultPreprocessor>::default().tokenize(text)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Maximal runs of word characters
fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|word| !word.is_empty())
}
