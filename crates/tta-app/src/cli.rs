use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tta_config::View;

#[derive(Debug, Parser)]
#[command(name = "tta", version, about = "List the unfamiliar base words in a text")]
pub struct Cli {
    /// JSON settings file (defaults to ./config.json when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the language packs
    #[arg(long, global = true)]
    pub packs_dir: Option<PathBuf>,

    /// Language pack to use
    #[arg(long, short, global = true)]
    pub language: Option<String>,

    /// Do not drop words from the known-word list
    #[arg(long, global = true)]
    pub no_filter: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Count word forms and base words in a text
    Analyze(AnalyzeArgs),
    /// Show the base words a form resolves to
    Lookup {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// List available language packs
    Languages,
    /// Print every known word with its forms
    KnownVariants,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Text file to read; stdin when omitted
    pub file: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub view: Option<ViewArg>,

    /// Print words without their counts
    #[arg(long)]
    pub no_counts: bool,

    /// Leave out words missing from the dictionary
    #[arg(long)]
    pub skip_unknown: bool,

    #[arg(long, default_value_t = 1)]
    pub min_count: usize,

    /// Also write an Anki import file (tab separated)
    #[arg(long)]
    pub anki: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ViewArg {
    Lemmas,
    Forms,
}

impl From<ViewArg> for View {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Lemmas => View::Lemmas,
            ViewArg::Forms => View::Forms,
        }
    }
}
