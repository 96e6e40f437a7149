use tta_config::Config;
use tta_core::Resolution;

pub fn run(config: &Config, words: &[String]) -> anyhow::Result<()> {
    let lexicon = super::load_lexicon(config)?;

    for word in words {
        let word = word.to_lowercase();
        let resolution = lexicon.resolve(&word);
        let line = if resolution == Resolution::Known {
            "(known)".to_string()
        } else {
            let lemmas: Vec<String> = resolution.into_lemmas(&word).into_iter().collect();
            lemmas.join(", ")
        };
        println!("{word}: {line}");
    }

    Ok(())
}
