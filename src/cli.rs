use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "prompter")]
#[command(about = "Display a text file word by word at a fixed pace.")]
pub struct Cli {
    /// Path to the UTF-8 text file to display
    pub file: PathBuf,

    /// Pacing rate in words per minute
    #[arg(long, default_value_t = 150, value_parser = clap::value_parser!(u32).range(1..))]
    pub wpm: u32,
}
