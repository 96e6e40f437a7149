use tta_config::View;

use crate::frequency::FrequencyTable;
use crate::lexicon::LemmaLookup;
use crate::preprocess::{DefaultPreprocessor, Preprocessor};
use crate::tokenizer::Tokenizer;

/// Frequencies for one document
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    pub tokens: Vec<String>,
    /// Surface forms, case-normalized only at sentence starts
    pub token_frequencies: FrequencyTable,
    /// Resolved lemmas, including marked unknown words
    pub lemma_frequencies: FrequencyTable,
}

impl Analysis {
    pub fn table(&self, view: View) -> &FrequencyTable {
        match view {
            View::Lemmas => &self.lemma_frequencies,
            View::Forms => &self.token_frequencies,
        }
    }
}

/// Runs tokenization and lemma lookup against a borrowed lexicon
pub struct Analyzer<'a, L: ?Sized, P = DefaultPreprocessor> {
    lexicon: &'a L,
    tokenizer: Tokenizer<P>,
}

impl<'a, L: LemmaLookup + ?Sized> Analyzer<'a, L> {
    pub fn new(lexicon: &'a L) -> Self {
        Self::with_tokenizer(lexicon, Tokenizer::default())
    }
}

impl<'a, L: LemmaLookup + ?Sized, P: Preprocessor> Analyzer<'a, L, P> {
    pub fn with_tokenizer(lexicon: &'a L, tokenizer: Tokenizer<P>) -> Self {
        Self { lexicon, tokenizer }
    }

    pub fn analyze(&self, text: &str) -> Analysis {
        let tokens = self.tokenizer.tokenize(text);
        let token_frequencies: FrequencyTable = tokens.iter().collect();

        let mut lemma_frequencies = FrequencyTable::new();
        for token in &tokens {
            // tokens holding ASCII digits are never looked up
            if token.chars().any(|c| c.is_ascii_digit()) {
                continue;
            }
            lemma_frequencies.extend(self.lexicon.find_lemmas(&token.to_lowercase()));
        }

        tracing::debug!(
            tokens = tokens.len(),
            forms = token_frequencies.len(),
            lemmas = lemma_frequencies.len(),
            "Analyzed text"
        );

        Analysis {
            tokens,
            token_frequencies,
            lemma_frequencies,
        }
    }
}

pub fn analyze<L: LemmaLookup + ?Sized>(text: &str, lexicon: &L) -> Analysis {
    Analyzer::new(lexicon).analyze(text)
}
