use std::fs::{self, File};
use std::io::{self, BufWriter};

use anyhow::Context;
use tta_config::{Config, View};
use tta_core::Analyzer;
use tta_export::{CardTemplate, StudyList, write_anki_tsv};

use crate::cli::AnalyzeArgs;

pub fn run(config: &Config, args: &AnalyzeArgs) -> anyhow::Result<()> {
    let text = match &args.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("Failed to read stdin")?,
    };

    let list = study_list(config, args, &text)?;

    let show_counts = config.output.show_counts && !args.no_counts;
    print!("{}", list.render(show_counts));

    if let Some(path) = &args.anki {
        let file =
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        write_anki_tsv(BufWriter::new(file), &list, &CardTemplate::vocabulary())?;
        tracing::info!("Wrote Anki import file: {}", path.display());
    }

    Ok(())
}

/// Analyze `text` and select the entries `args` ask for
fn study_list(config: &Config, args: &AnalyzeArgs, text: &str) -> anyhow::Result<StudyList> {
    let lexicon = super::load_lexicon(config)?;
    let analysis = Analyzer::new(&lexicon).analyze(text);

    let view = args.view.map(View::from).unwrap_or(config.output.view);
    let mut list = StudyList::from_table(analysis.table(view)).min_count(args.min_count);
    if args.skip_unknown {
        list = list.without_unknown();
    }

    Ok(list)
}
