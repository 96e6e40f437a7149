use std::io::Write;

use crate::ExportError;
use crate::study_list::StudyList;
use crate::template::CardTemplate;

/// Write one `front<TAB>back` line per entry, the plain-text layout Anki
/// imports. Returns the number of cards written.
pub fn write_anki_tsv<W: Write>(
    mut writer: W,
    list: &StudyList,
    template: &CardTemplate,
) -> Result<usize, ExportError> {
    for entry in list.entries() {
        let front = sanitize(&template.format_front(&entry.term, entry.count));
        let back = sanitize(&template.format_back(&entry.term, entry.count));
        writeln!(writer, "{front}\t{back}")?;
    }
    writer.flush()?;

    tracing::info!("Exported {} cards", list.len());
    Ok(list.len())
}

/// Tabs and line breaks would split the record
fn sanitize(field: &str) -> String {
    field.replace(['\t', '\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use tta_core::FrequencyTable;

    use super::*;

    #[test]
    fn writes_one_line_per_entry() {
        let table: FrequencyTable = ["teči", "hiša", "teči"].into_iter().collect();
        let list = StudyList::from_table(&table);
        let template = CardTemplate::new("{term}".into(), "count:\t{count}\n".into());

        let mut out = Vec::new();
        let written = write_anki_tsv(&mut out, &list, &template).unwrap();

        assert_eq!(written, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "teči\tcount: 2 \nhiša\tcount: 1 \n"
        );
    }
}
