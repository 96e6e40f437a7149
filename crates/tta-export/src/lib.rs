mod anki;
mod study_list;
mod template;

pub use anki::write_anki_tsv;
pub use study_list::{StudyEntry, StudyList};
pub use template::CardTemplate;

use tta_core::FrequencyTable;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// One line per entry, most frequent first: `term: count` or just `term`
pub fn render_list(table: &FrequencyTable, show_counts: bool) -> String {
    StudyList::from_table(table).render(show_counts)
}
