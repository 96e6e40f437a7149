use std::collections::{BTreeSet, HashMap, HashSet};

use crate::preprocess::nfc;

/// Surface form -> set of lemmas
#[derive(Debug, Clone, Default)]
pub struct ReverseMapping {
    forms: HashMap<String, BTreeSet<String>>,
}

impl ReverseMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of form -> array of lemmas. Duplicate lemmas collapse.
    /// Forms and lemmas are stored in NFC, the same form tokenized text takes.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json)?;
        Ok(raw.into_iter().collect())
    }

    pub fn get(&self, form: &str) -> Option<&BTreeSet<String>> {
        self.forms.get(form)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

impl<F, L, I> FromIterator<(F, I)> for ReverseMapping
where
    F: Into<String>,
    L: Into<String>,
    I: IntoIterator<Item = L>,
{
    fn from_iter<T: IntoIterator<Item = (F, I)>>(iter: T) -> Self {
        let mut forms: HashMap<String, BTreeSet<String>> = HashMap::new();
        for (form, lemmas) in iter {
            forms
                .entry(nfc(form.into()))
                .or_default()
                .extend(lemmas.into_iter().map(|lemma| nfc(lemma.into())));
        }
        Self { forms }
    }
}

/// Lemma -> its inflected forms, as produced by data preparation
#[derive(Debug, Clone, Default)]
pub struct ForwardMapping {
    lemmas: HashMap<String, Vec<String>>,
}

impl ForwardMapping {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(json)?;
        let mut lemmas: HashMap<String, Vec<String>> = HashMap::new();
        for (lemma, forms) in raw {
            lemmas
                .entry(nfc(lemma))
                .or_default()
                .extend(forms.into_iter().map(nfc));
        }
        Ok(Self { lemmas })
    }

    pub fn forms(&self, lemma: &str) -> &[String] {
        self.lemmas.get(lemma).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

/// Lemmas the learner already knows
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    lemmas: HashSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// One record per line; the first comma-separated field is the lemma.
    /// Blank records are skipped.
    pub fn parse(content: &str) -> Self {
        content
            .trim_start_matches('\u{feff}')
            .lines()
            .filter_map(|line| line.split(',').next())
            .map(str::trim)
            .filter(|lemma| !lemma.is_empty())
            .collect()
    }

    pub fn contains(&self, lemma: &str) -> bool {
        self.lemmas.contains(lemma)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lemmas.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            lemmas: iter.into_iter().map(|lemma| nfc(lemma.into())).collect(),
        }
    }
}
