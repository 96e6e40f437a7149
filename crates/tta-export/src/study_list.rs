use tta_core::{FrequencyTable, is_unknown_marker};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyEntry {
    pub term: String,
    pub count: usize,
}

/// Frequency table entries in display order
#[derive(Debug, Clone, Default)]
pub struct StudyList {
    entries: Vec<StudyEntry>,
}

impl StudyList {
    pub fn from_table(table: &FrequencyTable) -> Self {
        let entries = table
            .sorted()
            .into_iter()
            .map(|(term, count)| StudyEntry {
                term: term.to_string(),
                count,
            })
            .collect();

        Self { entries }
    }

    /// Drop words the dictionary did not recognize
    pub fn without_unknown(mut self) -> Self {
        self.entries.retain(|e| !is_unknown_marker(&e.term));
        self
    }

    /// Keep entries seen at least `min` times
    pub fn min_count(mut self, min: usize) -> Self {
        self.entries.retain(|e| e.count >= min);
        self
    }

    pub fn entries(&self) -> &[StudyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render(&self, show_counts: bool) -> String {
        self.entries
            .iter()
            .map(|entry| {
                if show_counts {
                    format!("{}: {}\n", entry.term, entry.count)
                } else {
                    format!("{}\n", entry.term)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> FrequencyTable {
        ["teči", "*on", "teči", "hiša", "teči", "hiša"].into_iter().collect()
    }

    #[test]
    fn renders_with_and_without_counts() {
        let list = StudyList::from_table(&table());
        assert_eq!(list.render(true), "teči: 3\nhiša: 2\n*on: 1\n");
        assert_eq!(list.render(false), "teči\nhiša\n*on\n");
    }

    #[test]
    fn filters_unknown_and_rare_entries() {
        let list = StudyList::from_table(&table()).without_unknown();
        assert_eq!(list.len(), 2);

        let list = list.min_count(3);
        assert_eq!(
            list.entries(),
            [StudyEntry {
                term: "teči".to_string(),
                count: 3
            }]
        );
    }

    #[test]
    fn empty_table_renders_nothing() {
        let list = StudyList::from_table(&FrequencyTable::new());
        assert!(list.is_empty());
        assert_eq!(list.render(true), "");
    }
}
