use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// File containing the sentence (default: prompt for one)
    pub file: Option<PathBuf>,

    /// File containing the grammar (default: built-in English grammar)
    #[arg(short, long, value_name = "FILE")]
    pub grammar: Option<PathBuf>,

    /// Start symbol (default: first in the grammar)
    #[arg(short, long, value_name = "SYMBOL")]
    pub start: Option<String>,

    /// Phrase label to chunk on
    #[arg(short, long, value_name = "LABEL", default_value = "NP")]
    pub label: String,

    /// Print AMOUNT random sentences from the grammar instead of parsing
    #[arg(short = 'n', long, value_name = "AMOUNT")]
    pub sample: Option<u32>,

    /// Maximum tree height for sampled sentences
    #[arg(long, value_name = "DEPTH", default_value_t = 12)]
    pub max_depth: usize,
}
