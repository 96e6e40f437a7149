use std::fs;
use std::path::Path;

use tta_config::lexicon::LexiconConfig;

mod language_pack_tests;

/// Write a language pack under `base/<language>` with the given files
fn write_pack(base: &Path, language: &str, files: &[(&str, &str)]) {
    let dir = base.join(language);
    fs::create_dir_all(&dir).unwrap();
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
}

fn config(base: &Path, filtering: bool) -> LexiconConfig {
    LexiconConfig {
        exclusion_list_filtering: filtering,
        language_packs_dir: base.to_path_buf(),
    }
}
