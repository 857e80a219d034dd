use std::process::ExitCode;

use clap::Parser;

use prompter::cli::Cli;
use prompter::{load_text, present};

fn main() -> ExitCode {
    env_logger::init();

    // Usage errors (missing file argument, non-integer or zero --wpm)
    // are reported by clap, which exits non-zero before any file access.
    let cli = Cli::parse();

    let text = match load_text(&cli.file) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = present(&text, cli.wpm) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
