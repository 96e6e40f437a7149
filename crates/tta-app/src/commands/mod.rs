use anyhow::Context;
use tta_config::Config;
use tta_core::Lexicon;

pub mod analyze;
pub mod known_variants;
pub mod languages;
pub mod lookup;

fn load_lexicon(config: &Config) -> anyhow::Result<Lexicon> {
    Lexicon::load(&config.language, &config.lexicon)
        .with_context(|| format!("Failed to load language pack '{}'", config.language))
}
