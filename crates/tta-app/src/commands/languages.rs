use tta_config::Config;
use tta_core::list_languages;

pub fn run(config: &Config) -> anyhow::Result<()> {
    let languages = list_languages(&config.lexicon.language_packs_dir);
    if languages.is_empty() {
        tracing::warn!(
            "No language packs found in {}",
            config.lexicon.language_packs_dir.display()
        );
    }

    for language in languages {
        let marker = if language == config.language { " *" } else { "" };
        println!("{language}{marker}");
    }

    Ok(())
}
