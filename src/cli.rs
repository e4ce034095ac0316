use std::path::PathBuf;

use clap::Parser;

use crate::export::DEFAULT_OUTPUT;
use crate::lang::Lang;

pub const USAGE: &str = "usage: wordcard <words.txt>  or  wordcard <word1> [<word2> ...]";

/// Look up English example sentences, translate them, and export a CSV word list.
#[derive(Parser, Debug)]
#[command(name = "wordcard", version, about)]
pub struct Cli {
    /// A word-list file (one word per line), or one or more words
    #[arg(allow_hyphen_values = true)]
    pub words: Vec<String>,

    /// Target language code for translations
    #[arg(long = "to", value_name = "LANG", default_value = "ja")]
    pub target: Lang,

    /// Path of the CSV file to write (overwritten on every run)
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}
