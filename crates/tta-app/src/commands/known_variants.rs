use tta_config::Config;

pub fn run(config: &Config) -> anyhow::Result<()> {
    let lexicon = super::load_lexicon(config)?;
    if !lexicon.filtering_active() {
        tracing::warn!("Exclusion filtering is off or the pack has no known-word list");
    }

    for (lemma, forms) in lexicon.known_variants()? {
        println!("{lemma}");
        for form in forms {
            println!("  {form}");
        }
    }

    Ok(())
}
